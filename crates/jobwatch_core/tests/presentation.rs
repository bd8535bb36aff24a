use jobwatch_core::{
    present, Action, CancelState, DisplayVariant, ErrorCode, ErrorInfo, JobKind,
    JobStatusSnapshot, Msg, StatusCode,
};
use pretty_assertions::assert_eq;

fn info(title: &str) -> ErrorInfo {
    ErrorInfo {
        title: title.to_string(),
        message: format!("{title} message"),
    }
}

fn snapshots() -> Vec<JobStatusSnapshot> {
    let statuses = [None, Some(StatusCode::Active), Some(StatusCode::Completed)];
    let errors = [
        (None, None),
        (Some(info("net")), Some(ErrorCode::NetworkError)),
        (Some(info("srv")), Some(ErrorCode::ServerError)),
    ];
    let mut out = Vec::new();
    for status in statuses {
        for (error, error_status) in errors.clone() {
            out.push(JobStatusSnapshot {
                progress: status.map(|_| 40),
                status,
                message: status.map(|_| "running".to_string()),
                error,
                error_status,
            });
        }
    }
    out
}

fn cancel_states() -> Vec<CancelState> {
    vec![
        CancelState::default(),
        CancelState {
            is_cancelling: true,
            ..CancelState::default()
        },
        CancelState {
            is_cancelled: true,
            ..CancelState::default()
        },
        CancelState {
            cancel_error: Some(info("cancel net")),
            cancel_error_status: Some(ErrorCode::NetworkError),
            ..CancelState::default()
        },
        CancelState {
            cancel_error: Some(info("cancel gone")),
            cancel_error_status: Some(ErrorCode::JobNotFound),
            ..CancelState::default()
        },
    ]
}

/// Reference ordering of the display rules, evaluated independently of `present`.
fn expected_variant(snapshot: &JobStatusSnapshot, cancel: &CancelState) -> DisplayVariant {
    if cancel.is_cancelling {
        DisplayVariant::Cancelling
    } else if cancel.is_cancelled {
        DisplayVariant::Cancelled
    } else if cancel.cancel_error.is_some() {
        DisplayVariant::CancelError
    } else if snapshot.status == Some(StatusCode::Completed) {
        DisplayVariant::Completed
    } else if snapshot.error.is_some() {
        DisplayVariant::Error
    } else if snapshot.status.is_none() && snapshot.message.is_none() {
        DisplayVariant::Processing
    } else {
        DisplayVariant::InProgress
    }
}

#[test]
fn priority_order_holds_for_every_combination() {
    let table = JobKind::ArticleExtraction.table();
    for snapshot in snapshots() {
        for cancel in cancel_states() {
            let presentation = present(&snapshot, &cancel, table);
            assert_eq!(
                presentation.variant,
                expected_variant(&snapshot, &cancel),
                "snapshot {snapshot:?} cancel {cancel:?}"
            );
        }
    }
}

#[test]
fn actions_follow_the_variant() {
    let table = JobKind::ArticleExtraction.table();
    let running = JobStatusSnapshot {
        progress: Some(10),
        status: Some(StatusCode::Active),
        message: Some("running".to_string()),
        ..JobStatusSnapshot::default()
    };

    let cases = [
        (
            running.clone(),
            CancelState::default(),
            vec![Action::Cancel],
        ),
        (
            JobStatusSnapshot {
                error: Some(info("net")),
                error_status: Some(ErrorCode::NetworkError),
                ..running.clone()
            },
            CancelState::default(),
            vec![Action::Retry],
        ),
        (
            JobStatusSnapshot {
                error: Some(info("auth")),
                error_status: Some(ErrorCode::Unauthorized),
                ..running.clone()
            },
            CancelState::default(),
            vec![Action::Close],
        ),
        (
            running.clone(),
            CancelState {
                cancel_error: Some(info("cancel net")),
                cancel_error_status: Some(ErrorCode::NetworkError),
                ..CancelState::default()
            },
            vec![Action::RetryCancel, Action::Continue],
        ),
        (
            JobStatusSnapshot::default(),
            CancelState::default(),
            Vec::new(),
        ),
    ];

    for (snapshot, cancel, actions) in cases {
        assert_eq!(present(&snapshot, &cancel, table).actions, actions);
    }
}

#[test]
fn processing_placeholder_is_never_blank() {
    let presentation = present(
        &JobStatusSnapshot::default(),
        &CancelState::default(),
        JobKind::RequirementIdentification.table(),
    );
    assert_eq!(presentation.variant, DisplayVariant::Processing);
    assert_eq!(
        presentation.message,
        "Procesando la identificación de requerimientos..."
    );
}

#[test]
fn actions_map_to_messages_and_labels() {
    let labels = JobKind::ArticleExtraction.default_labels();
    assert_eq!(Msg::from(Action::Cancel), Msg::CancelClicked);
    assert_eq!(Msg::from(Action::Continue), Msg::ContinueClicked);
    assert_eq!(Action::Complete.label(&labels), "Ver artículos");
    assert_eq!(Action::RetryCancel.label(&labels), "Reintentar cancelación");
}
