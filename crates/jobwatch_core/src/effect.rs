use crate::JobId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start (or restart) the interval ticker for `job_id`.
    StartPolling { job_id: JobId },
    /// Stop the interval ticker. In-flight requests are left to finish.
    StopPolling,
    FetchStatus { job_id: JobId, seq: u64 },
    CancelJob { job_id: JobId },
    LookupPendingJob { owner_id: String },
    /// The watched job finished and the user moved on.
    Completed { job_id: JobId },
    /// The user closed the watch.
    Closed,
    /// The legal basis has no job to watch.
    NoPendingJob { owner_id: String },
}
