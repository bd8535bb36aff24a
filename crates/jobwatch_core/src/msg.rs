use crate::{FetchFailure, JobId, StatusReply};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Start watching a known job.
    WatchRequested { job_id: JobId },
    /// Look up the pending job of a legal basis, then watch it.
    PendingJobRequested { owner_id: String },
    /// Engine answered a pending-job lookup. `Ok(None)` means nothing is pending.
    PendingJobResolved {
        owner_id: String,
        result: Result<Option<JobId>, FetchFailure>,
    },
    /// Polling interval elapsed.
    PollTick,
    /// Engine answered a status fetch tagged with `seq`.
    StatusReceived {
        seq: u64,
        result: Result<StatusReply, FetchFailure>,
    },
    /// User asked to cancel the running job.
    CancelClicked,
    /// Engine finished a cancel request (after the display delay).
    CancelResolved { result: Result<(), FetchFailure> },
    /// User retried after a status error.
    RetryClicked,
    /// User retried a cancel that failed.
    RetryCancelClicked,
    /// User gave up on a failed cancel and resumes polling.
    ContinueClicked,
    /// Drop the current status error without touching polling.
    ClearError,
    /// Drop the snapshot and stop polling.
    ResetStatus,
    /// User dismissed the watch.
    CloseClicked,
    /// User acknowledged a completed job.
    CompleteClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}
