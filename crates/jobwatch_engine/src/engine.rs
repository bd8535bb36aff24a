use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use watch_logging::{watch_debug, watch_info, watch_warn};

use crate::api::{ApiSettings, JobApi, ReqwestJobApi};
use crate::ticker::run_ticker;
use crate::{ApiError, EngineEvent, FailureKind};

const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub api: ApiSettings,
    pub poll_interval: Duration,
    /// Cosmetic pause before a cancel outcome is reported.
    pub cancel_display_delay: Duration,
}

impl EngineConfig {
    pub fn new(api: ApiSettings) -> Self {
        Self {
            api,
            poll_interval: Duration::from_millis(5000),
            cancel_display_delay: Duration::from_millis(5000),
        }
    }
}

enum EngineCommand {
    StartPolling { job_id: String },
    StopPolling,
    Request(Request),
}

enum Request {
    FetchStatus { job_id: String, seq: u64 },
    Cancel { job_id: String },
    LookupPending { owner_id: String },
}

/// Owns a tokio runtime on a dedicated thread. Commands are fire-and-forget;
/// results come back through the [`EventSink`].
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig, sink: Arc<dyn EventSink>) -> Result<Self, ApiError> {
        let api = ReqwestJobApi::new(config.api.clone())?;
        Self::with_api(Arc::new(api), config, sink)
    }

    pub fn with_api(
        api: Arc<dyn JobApi>,
        config: EngineConfig,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, ApiError> {
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|err| ApiError::new(FailureKind::EngineStopped, err.to_string()))?;
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::spawn(move || {
            let mut ticker: Option<CancellationToken> = None;
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::StartPolling { job_id } => {
                        if let Some(previous) = ticker.take() {
                            previous.cancel();
                        }
                        let token = CancellationToken::new();
                        ticker = Some(token.clone());
                        let sink = sink.clone();
                        let period = config.poll_interval.max(MIN_POLL_INTERVAL);
                        watch_info!("polling every {:?}", period);
                        runtime.spawn(async move {
                            run_ticker(job_id, period, token, sink.as_ref()).await;
                        });
                    }
                    EngineCommand::StopPolling => {
                        if let Some(previous) = ticker.take() {
                            previous.cancel();
                        }
                    }
                    EngineCommand::Request(request) => {
                        let api = api.clone();
                        let sink = sink.clone();
                        let cancel_delay = config.cancel_display_delay;
                        runtime.spawn(async move {
                            handle_request(api.as_ref(), request, cancel_delay, sink.as_ref())
                                .await;
                        });
                    }
                }
            }
            if let Some(previous) = ticker.take() {
                previous.cancel();
            }
            // In-flight requests are abandoned; their results are no longer wanted.
            runtime.shutdown_background();
        });

        Ok(Self { cmd_tx })
    }

    pub fn start_polling(&self, job_id: impl Into<String>) {
        self.send(EngineCommand::StartPolling {
            job_id: job_id.into(),
        });
    }

    pub fn stop_polling(&self) {
        self.send(EngineCommand::StopPolling);
    }

    pub fn fetch_status(&self, job_id: impl Into<String>, seq: u64) {
        self.send(EngineCommand::Request(Request::FetchStatus {
            job_id: job_id.into(),
            seq,
        }));
    }

    pub fn cancel(&self, job_id: impl Into<String>) {
        self.send(EngineCommand::Request(Request::Cancel {
            job_id: job_id.into(),
        }));
    }

    pub fn lookup_pending(&self, owner_id: impl Into<String>) {
        self.send(EngineCommand::Request(Request::LookupPending {
            owner_id: owner_id.into(),
        }));
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            watch_warn!("engine thread is gone; command dropped");
        }
    }
}

async fn handle_request(
    api: &dyn JobApi,
    request: Request,
    cancel_delay: Duration,
    sink: &dyn EventSink,
) {
    match request {
        Request::FetchStatus { job_id, seq } => {
            let result = api.fetch_status(&job_id).await;
            match &result {
                Ok(status) => watch_debug!(
                    "status #{}: {:?} progress={:?}",
                    seq,
                    status.message,
                    status.job_progress
                ),
                Err(err) => watch_warn!("status #{} failed: {}", seq, err),
            }
            sink.emit(EngineEvent::StatusFetched {
                job_id,
                seq,
                result,
            });
        }
        Request::Cancel { job_id } => {
            let result = api.cancel(&job_id).await;
            match &result {
                Ok(()) => watch_info!("cancel accepted"),
                Err(err) => watch_warn!("cancel failed: {}", err),
            }
            tokio::time::sleep(cancel_delay).await;
            sink.emit(EngineEvent::CancelFinished { job_id, result });
        }
        Request::LookupPending { owner_id } => {
            let result = api.pending_job(&owner_id).await;
            if let Err(err) = &result {
                watch_warn!("pending job lookup for {} failed: {}", owner_id, err);
            }
            sink.emit(EngineEvent::PendingJobResolved { owner_id, result });
        }
    }
}
