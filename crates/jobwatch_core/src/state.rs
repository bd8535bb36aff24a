use crate::view_model::{present, Labels, WatchViewModel};
use crate::{ErrorCode, ErrorInfo, ErrorInput, JobKind, StatusCode};

pub type JobId = String;

/// Lifecycle of one polling session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollPhase {
    #[default]
    Idle,
    Polling,
    Completed,
    Failed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobStatusSnapshot {
    pub progress: Option<u8>,
    pub status: Option<StatusCode>,
    pub message: Option<String>,
    pub error: Option<ErrorInfo>,
    pub error_status: Option<ErrorCode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CancelState {
    pub is_cancelling: bool,
    pub cancel_error: Option<ErrorInfo>,
    pub cancel_error_status: Option<ErrorCode>,
    pub cancel_message: Option<String>,
    pub is_cancelled: bool,
}

impl CancelState {
    pub fn is_idle(&self) -> bool {
        !self.is_cancelling && !self.is_cancelled && self.cancel_error.is_none()
    }
}

/// In-band status reply from the backend.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusReply {
    pub message: Option<String>,
    pub progress: Option<u8>,
    pub error: Option<String>,
}

/// Out-of-band failure: transport error or non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FetchFailure {
    pub http_status: Option<u16>,
    pub server_message: Option<String>,
    pub client_message: Option<String>,
}

impl FetchFailure {
    pub fn as_input(&self) -> ErrorInput<'_> {
        ErrorInput {
            http_status: self.http_status,
            server_message: self.server_message.as_deref(),
            client_message: self.client_message.as_deref(),
        }
    }
}

/// Clamp a raw backend progress value into 0..=100.
/// Values below 100 never round up to 100.
pub fn normalize_progress(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    let rounded = raw.round().clamp(0.0, 100.0);
    if raw < 100.0 {
        rounded.min(99.0) as u8
    } else {
        rounded as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WatchState {
    kind: JobKind,
    labels: Labels,
    owner_id: Option<String>,
    job_id: Option<JobId>,
    phase: PollPhase,
    snapshot: JobStatusSnapshot,
    cancel: CancelState,
    last_seq: u64,
    session_floor: u64,
    last_applied: u64,
    dirty: bool,
}

impl WatchState {
    pub fn new(kind: JobKind) -> Self {
        Self::with_labels(kind, kind.default_labels())
    }

    pub fn with_labels(kind: JobKind, labels: Labels) -> Self {
        Self {
            kind,
            labels,
            ..Self::default()
        }
    }

    pub fn kind(&self) -> JobKind {
        self.kind
    }

    pub fn job_id(&self) -> Option<&str> {
        self.job_id.as_deref()
    }

    /// Legal basis whose pending job is being looked up, if the watch started that way.
    pub fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }

    pub fn phase(&self) -> PollPhase {
        self.phase
    }

    /// Ticks only produce fetches while this is true.
    pub fn is_active(&self) -> bool {
        self.phase == PollPhase::Polling
    }

    pub fn snapshot(&self) -> &JobStatusSnapshot {
        &self.snapshot
    }

    pub fn cancel_state(&self) -> &CancelState {
        &self.cancel
    }

    pub fn view(&self) -> WatchViewModel {
        let presentation = present(&self.snapshot, &self.cancel, self.kind.table());
        WatchViewModel {
            job_id: self.job_id.clone(),
            kind: self.kind,
            label_top: self.labels.top.clone(),
            label_button: self.labels.complete_button.clone(),
            phase: self.phase,
            progress: self.snapshot.progress,
            status: self.snapshot.status,
            presentation,
            dirty: self.dirty,
        }
    }

    /// Returns whether the state changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Starts a fresh polling session and returns the sequence of its first request.
    pub(crate) fn begin_session(&mut self, job_id: JobId) -> (JobId, u64) {
        self.job_id = Some(job_id.clone());
        self.phase = PollPhase::Polling;
        self.snapshot = JobStatusSnapshot::default();
        self.cancel = CancelState::default();
        self.session_floor = self.last_seq + 1;
        self.mark_dirty();
        let seq = self.issue_seq();
        (job_id, seq)
    }

    /// Allocates the next request sequence when polling is active.
    pub(crate) fn next_request(&mut self) -> Option<(JobId, u64)> {
        if !self.is_active() {
            return None;
        }
        let job_id = self.job_id.clone()?;
        Some((job_id, self.issue_seq()))
    }

    fn issue_seq(&mut self) -> u64 {
        self.last_seq += 1;
        self.last_seq
    }

    /// A response is applied only while polling, only for the current session,
    /// and only if it is newer than every response applied so far.
    pub(crate) fn accepts(&self, seq: u64) -> bool {
        self.is_active() && seq >= self.session_floor && seq > self.last_applied
    }

    pub(crate) fn apply_reply(&mut self, seq: u64, reply: StatusReply) {
        self.last_applied = seq;
        self.mark_dirty();
        let table = self.kind.table();

        let status = reply
            .message
            .as_deref()
            .map(|message| table.classify_status(message));
        self.snapshot.progress = reply.progress;
        self.snapshot.status = status;
        self.snapshot.message = status.map(|code| table.status_text(code).to_string());

        let in_band_error = reply.error.as_deref().filter(|error| !error.is_empty());
        if let Some(raw_error) = in_band_error {
            self.fail(ErrorInput {
                server_message: Some(raw_error),
                ..ErrorInput::default()
            });
            return;
        }

        if status == Some(StatusCode::Failed) {
            self.fail(ErrorInput {
                server_message: reply.message.as_deref(),
                ..ErrorInput::default()
            });
            return;
        }

        if reply.progress == Some(100) || status == Some(StatusCode::Completed) {
            self.snapshot.progress = Some(100);
            self.snapshot.status = Some(StatusCode::Completed);
            self.snapshot.message = Some(table.status_text(StatusCode::Completed).to_string());
            self.phase = PollPhase::Completed;
        }
    }

    pub(crate) fn apply_failure(&mut self, seq: u64, failure: &FetchFailure) {
        self.last_applied = seq;
        self.mark_dirty();
        self.fail(failure.as_input());
    }

    /// Starts a pending-job lookup. Returns whether a polling session was left behind.
    pub(crate) fn begin_lookup(&mut self, owner_id: String) -> bool {
        let was_active = self.is_active();
        self.owner_id = Some(owner_id);
        self.job_id = None;
        self.phase = PollPhase::Idle;
        self.snapshot = JobStatusSnapshot::default();
        self.cancel = CancelState::default();
        self.mark_dirty();
        was_active
    }

    /// Records a failed pending-job lookup as the session error.
    pub(crate) fn fail_lookup(&mut self, failure: &FetchFailure) {
        self.mark_dirty();
        self.fail(failure.as_input());
    }

    fn fail(&mut self, input: ErrorInput<'_>) {
        let (info, code) = self.kind.table().classify_error(input);
        self.snapshot.error = Some(info);
        self.snapshot.error_status = Some(code);
        self.phase = PollPhase::Failed;
    }

    /// Cancel is honoured only while polling and when no cancellation is underway.
    pub(crate) fn begin_cancel(&mut self) -> Option<JobId> {
        if !self.is_active() || !self.cancel.is_idle() {
            return None;
        }
        let job_id = self.job_id.clone()?;
        self.enter_cancelling();
        Some(job_id)
    }

    pub(crate) fn retry_cancel(&mut self) -> Option<JobId> {
        if !self.cancel_error_is_retryable() {
            return None;
        }
        let job_id = self.job_id.clone()?;
        self.enter_cancelling();
        Some(job_id)
    }

    fn enter_cancelling(&mut self) {
        self.phase = PollPhase::Cancelled;
        self.cancel = CancelState {
            is_cancelling: true,
            cancel_message: Some(self.kind.table().display.cancelling.to_string()),
            ..CancelState::default()
        };
        self.mark_dirty();
    }

    /// Returns false when no cancel was in flight and the result was ignored.
    pub(crate) fn finish_cancel(&mut self, result: Result<(), &FetchFailure>) -> bool {
        if !self.cancel.is_cancelling {
            return false;
        }
        self.cancel.is_cancelling = false;
        match result {
            Ok(()) => {
                self.cancel.is_cancelled = true;
                self.cancel.cancel_message =
                    Some(self.kind.table().display.cancelled.to_string());
            }
            Err(failure) => {
                let (info, code) = self.kind.table().classify_error(failure.as_input());
                self.cancel.cancel_error = Some(info);
                self.cancel.cancel_error_status = Some(code);
                self.cancel.cancel_message = None;
            }
        }
        self.mark_dirty();
        true
    }

    /// Drops a retryable cancel failure so polling can resume. Returns the job to resume.
    pub(crate) fn abandon_cancel(&self) -> Option<JobId> {
        if !self.cancel_error_is_retryable() {
            return None;
        }
        self.job_id.clone()
    }

    fn cancel_error_is_retryable(&self) -> bool {
        self.cancel.cancel_error.is_some()
            && self
                .cancel
                .cancel_error_status
                .is_some_and(ErrorCode::is_retryable)
    }

    pub(crate) fn clear_error(&mut self) {
        if self.snapshot.error.is_some() || self.snapshot.error_status.is_some() {
            self.snapshot.error = None;
            self.snapshot.error_status = None;
            self.mark_dirty();
        }
    }

    /// Clears the snapshot and deactivates polling. Returns whether polling was active.
    pub(crate) fn reset_status(&mut self) -> bool {
        let was_active = self.is_active();
        self.snapshot = JobStatusSnapshot::default();
        self.phase = PollPhase::Idle;
        self.mark_dirty();
        was_active
    }

    /// Retry is honoured only for a retryable error outside of any cancellation.
    pub(crate) fn retry_target(&self) -> Option<RetryTarget> {
        let retryable = self.snapshot.error.is_some()
            && self
                .snapshot
                .error_status
                .is_some_and(ErrorCode::is_retryable);
        if !retryable || !self.cancel.is_idle() {
            return None;
        }
        match (&self.job_id, &self.owner_id) {
            (Some(job_id), _) => Some(RetryTarget::Job(job_id.clone())),
            (None, Some(owner_id)) => Some(RetryTarget::Lookup(owner_id.clone())),
            (None, None) => None,
        }
    }
}

/// What a retry restarts: polling a known job, or the pending-job lookup that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RetryTarget {
    Job(JobId),
    Lookup(String),
}
