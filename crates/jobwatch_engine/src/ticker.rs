use std::time::Duration;

use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use watch_logging::watch_debug;

use crate::engine::EventSink;
use crate::EngineEvent;

/// Emits `PollTick` every `period` until `token` is cancelled.
///
/// The first tick fires one period after start; the caller fetches immediately on its own.
/// Ticks do not wait for in-flight requests.
pub(crate) async fn run_ticker(
    job_id: String,
    period: Duration,
    token: CancellationToken,
    sink: &dyn EventSink,
) {
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = token.cancelled() => {
                watch_debug!("ticker stopped");
                break;
            }
            _ = interval.tick() => {
                sink.emit(EngineEvent::PollTick { job_id: job_id.clone() });
            }
        }
    }
}
