//! Jobwatch core: pure polling/cancellation state machine, classifier and view-model helpers.
mod classify;
mod effect;
mod kind;
mod msg;
mod state;
mod tables;
mod update;
mod view_model;

pub use classify::{ClassifierTable, DisplayTexts, ErrorCode, ErrorInfo, ErrorInput, StatusCode};
pub use effect::Effect;
pub use kind::JobKind;
pub use msg::Msg;
pub use state::{
    normalize_progress, CancelState, FetchFailure, JobId, JobStatusSnapshot, PollPhase,
    StatusReply, WatchState,
};
pub use tables::{ARTICLE_EXTRACTION, BACKEND_STATUS_MESSAGES, REQUIREMENT_IDENTIFICATION};
pub use update::update;
pub use view_model::{present, Action, DisplayVariant, Labels, Presentation, WatchViewModel};
