#![deny(missing_docs)]
//! Shared logging utilities for the jobwatch workspace.
//!
//! This crate provides the `watch_*` logging macros used across the codebase,
//! a process-wide "watched job" context that prefixes every line, and a
//! minimal test initializer for the global logger.

use std::sync::RwLock;

#[doc(hidden)]
pub use log;

/// The job currently being watched by this process, if any.
static WATCH_CONTEXT: RwLock<Option<String>> = RwLock::new(None);

/// Sets the job id that prefixes subsequent log lines.
/// Passing `None` clears the prefix.
pub fn set_watch_context(job_id: Option<&str>) {
    if let Ok(mut guard) = WATCH_CONTEXT.write() {
        *guard = job_id.map(ToOwned::to_owned);
    }
}

/// Returns the prefix for the current watch context, e.g. `"[job 42] "`.
/// Returns an empty string when no job is being watched.
pub fn context_prefix() -> String {
    match WATCH_CONTEXT.read() {
        Ok(guard) => guard
            .as_deref()
            .map(|job_id| format!("[job {job_id}] "))
            .unwrap_or_default(),
        Err(_) => String::new(),
    }
}

/// Logs a trace-level message prefixed with the watch context.
#[macro_export]
macro_rules! watch_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!("{}{}", $crate::context_prefix(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message prefixed with the watch context.
#[macro_export]
macro_rules! watch_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!("{}{}", $crate::context_prefix(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message prefixed with the watch context.
#[macro_export]
macro_rules! watch_info {
    ($($arg:tt)*) => {{
        $crate::log::info!("{}{}", $crate::context_prefix(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message prefixed with the watch context.
#[macro_export]
macro_rules! watch_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!("{}{}", $crate::context_prefix(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message prefixed with the watch context.
#[macro_export]
macro_rules! watch_error {
    ($($arg:tt)*) => {{
        $crate::log::error!("{}{}", $crate::context_prefix(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
