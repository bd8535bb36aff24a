//! Jobwatch engine: backend job API client and effect execution.
mod api;
mod engine;
mod ticker;
mod types;

pub use api::{ApiSettings, JobApi, ReqwestJobApi};
pub use engine::{ChannelEventSink, EngineConfig, EngineHandle, EventSink};
pub use types::{ApiError, EngineEvent, FailureKind, PendingJobResponse, StatusResponse};
