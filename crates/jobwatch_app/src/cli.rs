use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};
use jobwatch_core::JobKind;

#[derive(Parser, Debug)]
#[command(
    name = "jobwatch",
    about = "Watch a backend job's progress and cancel it from the terminal"
)]
#[command(group(ArgGroup::new("target").required(true).args(["job_id", "legal_basis"])))]
pub struct Args {
    /// Kind of job being watched
    #[arg(long, value_enum)]
    pub kind: KindArg,

    /// Job to watch
    #[arg(long)]
    pub job_id: Option<String>,

    /// Look up the pending job of this legal basis and watch it
    #[arg(long)]
    pub legal_basis: Option<String>,

    /// RON configuration file (defaults to ./jobwatch.ron when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// API root, e.g. http://localhost:3000/api
    #[arg(long)]
    pub base_url: Option<String>,

    /// Bearer token sent with every request
    #[arg(long, env = "JOBWATCH_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[arg(long)]
    pub poll_interval_ms: Option<u64>,

    /// Pause before a cancel outcome is shown
    #[arg(long)]
    pub cancel_delay_ms: Option<u64>,

    /// Heading shown above the progress
    #[arg(long)]
    pub label_top: Option<String>,

    /// Text of the completion button
    #[arg(long)]
    pub label_button: Option<String>,

    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Articles,
    Requirements,
}

impl From<KindArg> for JobKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Articles => JobKind::ArticleExtraction,
            KindArg::Requirements => JobKind::RequirementIdentification,
        }
    }
}

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogDestination {
    /// Write to ./jobwatch.log in the current directory.
    File,
    /// Write to the terminal (stderr).
    Terminal,
    Both,
    Off,
}
