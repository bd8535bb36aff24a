use jobwatch_core::{
    update, DisplayVariant, Effect, ErrorCode, FetchFailure, JobKind, Msg, PollPhase, WatchState,
};
use pretty_assertions::assert_eq;

fn looking_up(owner_id: &str) -> WatchState {
    let (state, effects) = update(
        WatchState::new(JobKind::RequirementIdentification),
        Msg::PendingJobRequested {
            owner_id: owner_id.to_string(),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::LookupPendingJob {
            owner_id: owner_id.to_string()
        }]
    );
    state
}

#[test]
fn pending_job_starts_a_watch() {
    watch_logging::initialize_for_tests();
    let (state, effects) = update(
        looking_up("42"),
        Msg::PendingJobResolved {
            owner_id: "42".to_string(),
            result: Ok(Some("job-9".to_string())),
        },
    );

    assert_eq!(
        effects,
        vec![
            Effect::StartPolling {
                job_id: "job-9".to_string()
            },
            Effect::FetchStatus {
                job_id: "job-9".to_string(),
                seq: 1,
            },
        ]
    );
    assert_eq!(state.job_id(), Some("job-9"));
    assert_eq!(state.owner_id(), Some("42"));
}

#[test]
fn no_pending_job_ends_the_session() {
    watch_logging::initialize_for_tests();
    let (state, effects) = update(
        looking_up("42"),
        Msg::PendingJobResolved {
            owner_id: "42".to_string(),
            result: Ok(None),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::NoPendingJob {
            owner_id: "42".to_string()
        }]
    );
    assert_eq!(state.phase(), PollPhase::Idle);
}

#[test]
fn lookup_for_another_owner_is_ignored() {
    watch_logging::initialize_for_tests();
    let (state, effects) = update(
        looking_up("42"),
        Msg::PendingJobResolved {
            owner_id: "7".to_string(),
            result: Ok(Some("job-1".to_string())),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.job_id(), None);
}

#[test]
fn failed_lookup_is_classified_and_retryable() {
    watch_logging::initialize_for_tests();
    let (state, effects) = update(
        looking_up("42"),
        Msg::PendingJobResolved {
            owner_id: "42".to_string(),
            result: Err(FetchFailure {
                client_message: Some("Network Error".to_string()),
                ..FetchFailure::default()
            }),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.snapshot().error_status, Some(ErrorCode::NetworkError));
    assert_eq!(state.view().presentation.variant, DisplayVariant::Error);

    let (state, effects) = update(state, Msg::RetryClicked);
    assert_eq!(
        effects,
        vec![Effect::LookupPendingJob {
            owner_id: "42".to_string()
        }]
    );
    assert_eq!(state.snapshot().error, None);
}

#[test]
fn unknown_legal_basis_is_terminal() {
    watch_logging::initialize_for_tests();
    let (state, _) = update(
        looking_up("42"),
        Msg::PendingJobResolved {
            owner_id: "42".to_string(),
            result: Err(FetchFailure {
                http_status: Some(404),
                server_message: Some("Legal Basis not found".to_string()),
                client_message: None,
            }),
        },
    );
    let view = state.view();
    assert_eq!(
        view.presentation.title.as_deref(),
        Some("Fundamento legal no encontrado")
    );
    let (_state, effects) = update(state, Msg::CloseClicked);
    assert_eq!(effects, vec![Effect::Closed]);
}

#[test]
fn lookup_during_active_watch_stops_the_ticker() {
    watch_logging::initialize_for_tests();
    let (state, _) = update(
        WatchState::new(JobKind::RequirementIdentification),
        Msg::WatchRequested {
            job_id: "123".to_string(),
        },
    );
    assert!(state.is_active());

    let (state, effects) = update(
        state,
        Msg::PendingJobRequested {
            owner_id: "42".to_string(),
        },
    );
    assert_eq!(
        effects,
        vec![
            Effect::StopPolling,
            Effect::LookupPendingJob {
                owner_id: "42".to_string()
            },
        ]
    );
    assert!(!state.is_active());
    assert_eq!(state.phase(), PollPhase::Idle);
}
