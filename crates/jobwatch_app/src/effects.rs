use std::sync::{mpsc, Arc};

use jobwatch_core::{normalize_progress, Effect, FetchFailure, Msg, StatusReply};
use jobwatch_engine::{
    ApiError, EngineConfig, EngineEvent, EngineHandle, EventSink, PendingJobResponse,
    StatusResponse,
};
use watch_logging::{set_watch_context, watch_info};

use crate::app::AppEvent;

/// Why the watch session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exit {
    Completed { job_id: String },
    Closed,
    NoPendingJob { owner_id: String },
}

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(config: EngineConfig, event_tx: mpsc::Sender<AppEvent>) -> Result<Self, ApiError> {
        let engine = EngineHandle::new(config, Arc::new(MsgSink { event_tx }))?;
        Ok(Self { engine })
    }

    /// Runs the effects in order. Returns the exit reason if one of them ends the session.
    pub fn run(&self, effects: Vec<Effect>) -> Option<Exit> {
        let mut exit = None;
        for effect in effects {
            match effect {
                Effect::StartPolling { job_id } => {
                    set_watch_context(Some(&job_id));
                    self.engine.start_polling(job_id);
                }
                Effect::StopPolling => self.engine.stop_polling(),
                Effect::FetchStatus { job_id, seq } => self.engine.fetch_status(job_id, seq),
                Effect::CancelJob { job_id } => {
                    watch_info!("cancel requested");
                    self.engine.cancel(job_id);
                }
                Effect::LookupPendingJob { owner_id } => {
                    watch_info!("looking up pending job for {}", owner_id);
                    self.engine.lookup_pending(owner_id);
                }
                Effect::Completed { job_id } => exit = Some(Exit::Completed { job_id }),
                Effect::Closed => exit = Some(Exit::Closed),
                Effect::NoPendingJob { owner_id } => exit = Some(Exit::NoPendingJob { owner_id }),
            }
        }
        exit
    }
}

/// Feeds engine results back into the update loop.
struct MsgSink {
    event_tx: mpsc::Sender<AppEvent>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(AppEvent::Engine(to_msg(event)));
    }
}

fn to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::PollTick { .. } => Msg::PollTick,
        EngineEvent::StatusFetched { seq, result, .. } => Msg::StatusReceived {
            seq,
            result: result.map(to_reply).map_err(|err| to_failure(&err)),
        },
        EngineEvent::CancelFinished { result, .. } => Msg::CancelResolved {
            result: result.map_err(|err| to_failure(&err)),
        },
        EngineEvent::PendingJobResolved { owner_id, result } => Msg::PendingJobResolved {
            owner_id,
            result: result
                .map(|pending: PendingJobResponse| pending.pending_job_id().map(ToOwned::to_owned))
                .map_err(|err| to_failure(&err)),
        },
    }
}

fn to_reply(status: StatusResponse) -> StatusReply {
    StatusReply {
        message: status.message,
        progress: status.job_progress.map(normalize_progress),
        error: status.error,
    }
}

fn to_failure(err: &ApiError) -> FetchFailure {
    FetchFailure {
        http_status: err.http_status(),
        server_message: err.server_message.clone(),
        client_message: Some(err.client_message()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobwatch_engine::FailureKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn status_progress_is_normalized() {
        let msg = to_msg(EngineEvent::StatusFetched {
            job_id: "1".to_string(),
            seq: 3,
            result: Ok(StatusResponse {
                message: Some("Job is still processing".to_string()),
                job_progress: Some(140.2),
                error: None,
            }),
        });

        assert_eq!(
            msg,
            Msg::StatusReceived {
                seq: 3,
                result: Ok(StatusReply {
                    message: Some("Job is still processing".to_string()),
                    progress: Some(100),
                    error: None,
                }),
            }
        );
    }

    #[test]
    fn nearly_finished_progress_does_not_complete_the_watch() {
        use jobwatch_core::{update, JobKind, PollPhase, WatchState};

        let (state, _) = update(
            WatchState::new(JobKind::ArticleExtraction),
            Msg::WatchRequested {
                job_id: "123".to_string(),
            },
        );
        let msg = to_msg(EngineEvent::StatusFetched {
            job_id: "123".to_string(),
            seq: 1,
            result: Ok(StatusResponse {
                message: Some("Job is still processing".to_string()),
                job_progress: Some(99.6),
                error: None,
            }),
        });
        let (state, effects) = update(state, msg);

        assert_eq!(effects, Vec::new());
        assert_eq!(state.phase(), PollPhase::Polling);
        assert_eq!(state.snapshot().progress, Some(99));
    }

    #[test]
    fn http_failure_keeps_status_and_server_message() {
        let err = ApiError {
            kind: FailureKind::HttpStatus(404),
            message: "Request failed with status code 404".to_string(),
            server_message: Some("Job not found".to_string()),
        };

        assert_eq!(
            to_failure(&err),
            FetchFailure {
                http_status: Some(404),
                server_message: Some("Job not found".to_string()),
                client_message: Some("Request failed with status code 404".to_string()),
            }
        );
    }

    #[test]
    fn timeout_reads_as_network_error() {
        let err = ApiError {
            kind: FailureKind::Timeout,
            message: "operation timed out".to_string(),
            server_message: None,
        };
        let failure = to_failure(&err);
        assert_eq!(failure.http_status, None);
        assert_eq!(failure.client_message.as_deref(), Some("Network Error"));
    }

    #[test]
    fn pending_lookup_without_job_resolves_to_none() {
        let msg = to_msg(EngineEvent::PendingJobResolved {
            owner_id: "42".to_string(),
            result: Ok(PendingJobResponse {
                has_pending_jobs: false,
                job_id: Some("9".to_string()),
            }),
        });
        assert_eq!(
            msg,
            Msg::PendingJobResolved {
                owner_id: "42".to_string(),
                result: Ok(None),
            }
        );
    }
}
