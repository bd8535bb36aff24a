use chrono::{DateTime, Local};
use jobwatch_core::{Action, DisplayVariant, Labels, WatchViewModel};

const BAR_WIDTH: usize = 30;

pub fn key_for(action: Action) -> char {
    match action {
        Action::Cancel => 'c',
        Action::Retry => 'r',
        Action::RetryCancel => 'x',
        Action::Continue => 's',
        Action::Close => 'q',
        Action::Complete => 'f',
    }
}

/// Maps a line typed on stdin to one of the currently offered actions.
pub fn action_for_input(input: &str, offered: &[Action]) -> Option<Action> {
    let mut chars = input.trim().chars();
    let key = chars.next()?.to_ascii_lowercase();
    if chars.next().is_some() {
        return None;
    }
    offered.iter().copied().find(|action| key_for(*action) == key)
}

/// Renders the view as terminal lines.
pub fn render(view: &WatchViewModel, now: DateTime<Local>) -> Vec<String> {
    let presentation = &view.presentation;
    let mut lines = vec![format!(
        "[{}] {}{}",
        now.format("%H:%M:%S"),
        view.label_top,
        view.job_id
            .as_deref()
            .map(|id| format!(" (job {id})"))
            .unwrap_or_default()
    )];

    if presentation.variant == DisplayVariant::InProgress
        || presentation.variant == DisplayVariant::Completed
    {
        let progress = view.progress.unwrap_or(0);
        lines.push(progress_bar(progress));
    }

    if let Some(title) = &presentation.title {
        lines.push(format!("{}: {}", variant_tag(presentation.variant), title));
        lines.push(format!("  {}", presentation.message));
    } else {
        lines.push(format!("{}: {}", variant_tag(presentation.variant), presentation.message));
    }

    if !presentation.actions.is_empty() {
        let labels = Labels {
            top: view.label_top.clone(),
            complete_button: view.label_button.clone(),
        };
        let actions = presentation
            .actions
            .iter()
            .map(|action| format!("[{}] {}", key_for(*action), action.label(&labels)))
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(actions);
    }
    lines
}

fn progress_bar(progress: u8) -> String {
    let filled = usize::from(progress) * BAR_WIDTH / 100;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        progress
    )
}

fn variant_tag(variant: DisplayVariant) -> &'static str {
    match variant {
        DisplayVariant::Cancelling => "cancelling",
        DisplayVariant::Cancelled => "cancelled",
        DisplayVariant::CancelError => "cancel error",
        DisplayVariant::Completed => "completed",
        DisplayVariant::Error => "error",
        DisplayVariant::Processing => "processing",
        DisplayVariant::InProgress => "in progress",
    }
}
