use std::fmt;

/// Closed set of job states the backend can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    Waiting,
    Active,
    Completed,
    Failed,
    Delayed,
    Paused,
    Stuck,
    Unknown,
}

/// Closed set of error kinds, shared by every job kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    NetworkError,
    InvalidRequest,
    Unauthorized,
    JobNotFound,
    JobFailed,
    ServerError,
    Unexpected,
    LegalBasisNotFound,
    DocumentNotFound,
    JobNotCancelable,
    RequirementsNotFound,
}

impl ErrorCode {
    /// Only connectivity problems are worth retrying within the same session.
    pub fn is_retryable(self) -> bool {
        matches!(self, ErrorCode::NetworkError)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorCode::NetworkError => "NETWORK_ERROR",
            ErrorCode::InvalidRequest => "INVALID_REQUEST",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::JobNotFound => "JOB_NOT_FOUND",
            ErrorCode::JobFailed => "JOB_FAILED",
            ErrorCode::ServerError => "SERVER_ERROR",
            ErrorCode::Unexpected => "UNEXPECTED_ERROR",
            ErrorCode::LegalBasisNotFound => "LEGAL_BASIS_NOT_FOUND",
            ErrorCode::DocumentNotFound => "DOCUMENT_NOT_FOUND",
            ErrorCode::JobNotCancelable => "JOB_NOT_CANCELABLE",
            ErrorCode::RequirementsNotFound => "REQUIREMENTS_NOT_FOUND",
        };
        f.write_str(label)
    }
}

/// Localized, user-facing explanation of an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub title: String,
    pub message: String,
}

/// Raw inputs of an error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ErrorInput<'a> {
    pub http_status: Option<u16>,
    pub server_message: Option<&'a str>,
    pub client_message: Option<&'a str>,
}

/// Fixed texts used by the presentation adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayTexts {
    pub processing: &'static str,
    pub cancelling: &'static str,
    pub cancelled: &'static str,
    pub completed: &'static str,
}

/// Lookup tables for one job kind. The algorithm is shared; only the data differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierTable {
    pub statuses: &'static [(&'static str, StatusCode)],
    pub status_texts: &'static [(StatusCode, &'static str)],
    pub errors: &'static [(&'static str, ErrorCode)],
    pub error_texts: &'static [(ErrorCode, &'static str, &'static str)],
    pub display: DisplayTexts,
}

const FALLBACK_ERROR_TITLE: &str = "Error inesperado";
const FALLBACK_ERROR_MESSAGE: &str = "Ocurrió un error inesperado. Intente nuevamente.";

impl ClassifierTable {
    /// Exact lookup of a raw backend status message. Unmapped input is `Unknown`.
    pub fn classify_status(&self, raw: &str) -> StatusCode {
        self.statuses
            .iter()
            .find(|(message, _)| *message == raw)
            .map(|(_, code)| *code)
            .unwrap_or(StatusCode::Unknown)
    }

    /// Localized text for a status; never returns the raw backend message.
    pub fn status_text(&self, code: StatusCode) -> &'static str {
        self.status_texts
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .or_else(|| {
                self.status_texts
                    .iter()
                    .find(|(candidate, _)| *candidate == StatusCode::Unknown)
            })
            .map(|(_, text)| *text)
            .unwrap_or(self.display.processing)
    }

    /// Two-tier classification: exact message match first, HTTP status bucket second.
    ///
    /// The server message wins over the client message when it is present and non-empty.
    pub fn classify_error(&self, input: ErrorInput<'_>) -> (ErrorInfo, ErrorCode) {
        let raw = input
            .server_message
            .filter(|message| !message.is_empty())
            .or(input.client_message);

        let by_message = raw.and_then(|raw| {
            self.errors
                .iter()
                .find(|(message, _)| *message == raw)
                .map(|(_, code)| *code)
        });

        let code = by_message.unwrap_or(match input.http_status {
            Some(400) => ErrorCode::InvalidRequest,
            Some(401) | Some(403) => ErrorCode::Unauthorized,
            Some(500) => ErrorCode::ServerError,
            _ => ErrorCode::Unexpected,
        });

        (self.error_info(code), code)
    }

    pub fn error_info(&self, code: ErrorCode) -> ErrorInfo {
        let entry = self
            .error_texts
            .iter()
            .find(|(candidate, _, _)| *candidate == code)
            .or_else(|| {
                self.error_texts
                    .iter()
                    .find(|(candidate, _, _)| *candidate == ErrorCode::Unexpected)
            });
        let (title, message) = entry
            .map(|(_, title, message)| (*title, *message))
            .unwrap_or((FALLBACK_ERROR_TITLE, FALLBACK_ERROR_MESSAGE));
        ErrorInfo {
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}
