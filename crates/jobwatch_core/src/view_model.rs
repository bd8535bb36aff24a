use crate::{
    CancelState, ClassifierTable, ErrorCode, JobId, JobKind, JobStatusSnapshot, PollPhase,
    StatusCode,
};

/// Heading and completion-button text supplied by the enclosing view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Labels {
    pub top: String,
    pub complete_button: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayVariant {
    Cancelling,
    Cancelled,
    CancelError,
    Completed,
    Error,
    Processing,
    InProgress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Cancel,
    Retry,
    RetryCancel,
    Continue,
    Close,
    Complete,
}

impl Action {
    pub fn label<'a>(self, labels: &'a Labels) -> &'a str {
        match self {
            Action::Cancel => "Cancelar",
            Action::Retry => "Reintentar",
            Action::RetryCancel => "Reintentar cancelación",
            Action::Continue => "Continuar",
            Action::Close => "Cerrar",
            Action::Complete => labels.complete_button.as_str(),
        }
    }
}

impl From<Action> for crate::Msg {
    fn from(action: Action) -> Self {
        match action {
            Action::Cancel => crate::Msg::CancelClicked,
            Action::Retry => crate::Msg::RetryClicked,
            Action::RetryCancel => crate::Msg::RetryCancelClicked,
            Action::Continue => crate::Msg::ContinueClicked,
            Action::Close => crate::Msg::CloseClicked,
            Action::Complete => crate::Msg::CompleteClicked,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub variant: DisplayVariant,
    pub title: Option<String>,
    pub message: String,
    pub actions: Vec<Action>,
}

impl Presentation {
    pub fn offers(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchViewModel {
    pub job_id: Option<JobId>,
    pub kind: JobKind,
    pub label_top: String,
    pub label_button: String,
    pub phase: PollPhase,
    pub progress: Option<u8>,
    pub status: Option<StatusCode>,
    pub presentation: Presentation,
    pub dirty: bool,
}

/// Selects exactly one display variant. Cancellation states always win over job states.
pub fn present(
    snapshot: &JobStatusSnapshot,
    cancel: &CancelState,
    table: &ClassifierTable,
) -> Presentation {
    let texts = &table.display;

    if cancel.is_cancelling {
        return Presentation {
            variant: DisplayVariant::Cancelling,
            title: None,
            message: cancel
                .cancel_message
                .clone()
                .unwrap_or_else(|| texts.cancelling.to_string()),
            actions: Vec::new(),
        };
    }

    if cancel.is_cancelled {
        return Presentation {
            variant: DisplayVariant::Cancelled,
            title: None,
            message: cancel
                .cancel_message
                .clone()
                .unwrap_or_else(|| texts.cancelled.to_string()),
            actions: vec![Action::Close],
        };
    }

    if let Some(error) = &cancel.cancel_error {
        let actions = if cancel.cancel_error_status == Some(ErrorCode::NetworkError) {
            vec![Action::RetryCancel, Action::Continue]
        } else {
            vec![Action::Close]
        };
        return Presentation {
            variant: DisplayVariant::CancelError,
            title: Some(error.title.clone()),
            message: error.message.clone(),
            actions,
        };
    }

    if snapshot.status == Some(StatusCode::Completed) {
        return Presentation {
            variant: DisplayVariant::Completed,
            title: None,
            message: texts.completed.to_string(),
            actions: vec![Action::Complete],
        };
    }

    if let Some(error) = &snapshot.error {
        let actions = if snapshot.error_status == Some(ErrorCode::NetworkError) {
            vec![Action::Retry]
        } else {
            vec![Action::Close]
        };
        return Presentation {
            variant: DisplayVariant::Error,
            title: Some(error.title.clone()),
            message: error.message.clone(),
            actions,
        };
    }

    match (&snapshot.status, &snapshot.message) {
        (None, None) => Presentation {
            variant: DisplayVariant::Processing,
            title: None,
            message: texts.processing.to_string(),
            actions: Vec::new(),
        },
        (_, message) => Presentation {
            variant: DisplayVariant::InProgress,
            title: None,
            message: message.clone().unwrap_or_default(),
            actions: vec![Action::Cancel],
        },
    }
}
