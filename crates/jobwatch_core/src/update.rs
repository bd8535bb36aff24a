use crate::state::RetryTarget;
use crate::{Effect, JobId, Msg, PollPhase, StatusCode, WatchState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: WatchState, msg: Msg) -> (WatchState, Vec<Effect>) {
    let effects = match msg {
        Msg::WatchRequested { job_id } => {
            let job_id = job_id.trim().to_string();
            if job_id.is_empty() {
                return (state, Vec::new());
            }
            start_session(&mut state, job_id)
        }
        Msg::PendingJobRequested { owner_id } => {
            let owner_id = owner_id.trim().to_string();
            if owner_id.is_empty() {
                return (state, Vec::new());
            }
            lookup(&mut state, owner_id)
        }
        Msg::PendingJobResolved { owner_id, result } => {
            // Only the lookup we are still waiting for may start a session.
            let awaiting = state.job_id().is_none()
                && state.phase() == PollPhase::Idle
                && state.owner_id() == Some(owner_id.as_str());
            if !awaiting {
                return (state, Vec::new());
            }
            match result {
                Ok(Some(job_id)) => start_session(&mut state, job_id),
                Ok(None) => vec![Effect::NoPendingJob { owner_id }],
                Err(failure) => {
                    state.fail_lookup(&failure);
                    Vec::new()
                }
            }
        }
        Msg::PollTick => match state.next_request() {
            Some((job_id, seq)) => vec![Effect::FetchStatus { job_id, seq }],
            None => Vec::new(),
        },
        Msg::StatusReceived { seq, result } => {
            if !state.accepts(seq) {
                return (state, Vec::new());
            }
            match result {
                Ok(reply) => state.apply_reply(seq, reply),
                Err(failure) => state.apply_failure(seq, &failure),
            }
            if state.is_active() {
                Vec::new()
            } else {
                vec![Effect::StopPolling]
            }
        }
        Msg::CancelClicked => match state.begin_cancel() {
            Some(job_id) => vec![Effect::StopPolling, Effect::CancelJob { job_id }],
            None => Vec::new(),
        },
        Msg::RetryCancelClicked => match state.retry_cancel() {
            Some(job_id) => vec![Effect::CancelJob { job_id }],
            None => Vec::new(),
        },
        Msg::CancelResolved { result } => {
            state.finish_cancel(result.as_ref().map(|_| ()));
            Vec::new()
        }
        Msg::ContinueClicked => match state.abandon_cancel() {
            Some(job_id) => start_session(&mut state, job_id),
            None => Vec::new(),
        },
        Msg::RetryClicked => match state.retry_target() {
            Some(RetryTarget::Job(job_id)) => start_session(&mut state, job_id),
            Some(RetryTarget::Lookup(owner_id)) => lookup(&mut state, owner_id),
            None => Vec::new(),
        },
        Msg::ClearError => {
            state.clear_error();
            Vec::new()
        }
        Msg::ResetStatus => {
            if state.reset_status() {
                vec![Effect::StopPolling]
            } else {
                Vec::new()
            }
        }
        Msg::CloseClicked => {
            let mut effects = Vec::with_capacity(2);
            if state.is_active() {
                effects.push(Effect::StopPolling);
            }
            effects.push(Effect::Closed);
            effects
        }
        Msg::CompleteClicked => {
            let completed = state.snapshot().status == Some(StatusCode::Completed);
            match state.job_id() {
                Some(job_id) if completed => vec![Effect::Completed {
                    job_id: job_id.to_string(),
                }],
                _ => Vec::new(),
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn start_session(state: &mut WatchState, job_id: JobId) -> Vec<Effect> {
    let (job_id, seq) = state.begin_session(job_id);
    vec![
        Effect::StartPolling {
            job_id: job_id.clone(),
        },
        Effect::FetchStatus { job_id, seq },
    ]
}

fn lookup(state: &mut WatchState, owner_id: String) -> Vec<Effect> {
    let mut effects = Vec::with_capacity(2);
    if state.begin_lookup(owner_id.clone()) {
        effects.push(Effect::StopPolling);
    }
    effects.push(Effect::LookupPendingJob { owner_id });
    effects
}
