use std::fmt;

use crate::{tables, ClassifierTable, Labels};

/// Kind of backend job being watched. Selects tables, labels and routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JobKind {
    #[default]
    ArticleExtraction,
    RequirementIdentification,
}

impl JobKind {
    pub fn table(self) -> &'static ClassifierTable {
        match self {
            JobKind::ArticleExtraction => &tables::ARTICLE_EXTRACTION,
            JobKind::RequirementIdentification => &tables::REQUIREMENT_IDENTIFICATION,
        }
    }

    /// Path of the backend resource that owns jobs of this kind, relative to the API root.
    pub fn api_resource(self) -> &'static str {
        match self {
            JobKind::ArticleExtraction => "articles/extraction",
            JobKind::RequirementIdentification => "requirements-identification",
        }
    }

    pub fn default_labels(self) -> Labels {
        match self {
            JobKind::ArticleExtraction => Labels {
                top: "Extracción de artículos".to_string(),
                complete_button: "Ver artículos".to_string(),
            },
            JobKind::RequirementIdentification => Labels {
                top: "Identificación de requerimientos".to_string(),
                complete_button: "Ver requerimientos".to_string(),
            },
        }
    }
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobKind::ArticleExtraction => write!(f, "article extraction"),
            JobKind::RequirementIdentification => write!(f, "requirement identification"),
        }
    }
}
