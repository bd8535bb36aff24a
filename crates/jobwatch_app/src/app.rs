use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::{bail, Context};
use chrono::Local;
use jobwatch_core::{update, JobKind, Labels, Msg, WatchState};
use watch_logging::{set_watch_context, watch_debug, watch_info};

use crate::cli::Args;
use crate::config::WatchConfig;
use crate::effects::{EffectRunner, Exit};
use crate::render;

/// Everything the run loop reacts to.
pub enum AppEvent {
    Engine(Msg),
    Line(String),
}

pub fn run(args: Args) -> anyhow::Result<Exit> {
    let kind = JobKind::from(args.kind);
    let mut config = WatchConfig::load(args.config.as_deref())?;
    config.apply_overrides(&args);
    let engine_config = config.engine_config(kind)?;

    let defaults = kind.default_labels();
    let labels = Labels {
        top: args.label_top.clone().unwrap_or(defaults.top),
        complete_button: args.label_button.clone().unwrap_or(defaults.complete_button),
    };

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(engine_config, event_tx.clone())
        .context("failed to start the polling engine")?;
    spawn_stdin_reader(event_tx);

    let first = match (args.job_id, args.legal_basis) {
        (Some(job_id), _) => Msg::WatchRequested { job_id },
        (None, Some(owner_id)) => Msg::PendingJobRequested { owner_id },
        (None, None) => bail!("either --job-id or --legal-basis is required"),
    };
    watch_info!("starting {} watch against {}", kind, config.base_url);

    let mut session = Session {
        state: WatchState::with_labels(kind, labels),
        runner,
    };
    if let Some(exit) = session.dispatch(first)? {
        return Ok(exit);
    }

    while let Ok(event) = event_rx.recv() {
        let msg = match event {
            AppEvent::Engine(msg) => msg,
            AppEvent::Line(line) => {
                let offered = session.state.view().presentation.actions;
                match render::action_for_input(&line, &offered) {
                    Some(action) => action.into(),
                    None => {
                        watch_debug!("ignored input {:?}", line.trim());
                        continue;
                    }
                }
            }
        };
        if let Some(exit) = session.dispatch(msg)? {
            set_watch_context(None);
            return Ok(exit);
        }
    }
    bail!("event channel closed unexpectedly")
}

struct Session {
    state: WatchState,
    runner: EffectRunner,
}

impl Session {
    fn dispatch(&mut self, msg: Msg) -> anyhow::Result<Option<Exit>> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            print_view(&state)?;
        }
        self.state = state;
        Ok(self.runner.run(effects))
    }
}

fn print_view(state: &WatchState) -> io::Result<()> {
    let mut out = io::stdout().lock();
    for line in render::render(&state.view(), Local::now()) {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    out.flush()
}

fn spawn_stdin_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if event_tx.send(AppEvent::Line(line)).is_err() {
                break;
            }
        }
    });
}
