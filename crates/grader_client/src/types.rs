use std::fmt;

/// Identity attached to every authenticated backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub id_token: String,
    pub email: Option<String>,
}

/// One submission, already validated by the caller. The engine normalizes it
/// into plain text and runs the evaluation round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionInput {
    Text(String),
    Url(String),
    Document { file_name: String, bytes: Vec<u8> },
}

/// Parsed success body of the evaluation endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationRecord {
    pub message: String,
    pub trace_id: String,
    pub session_id: String,
}

/// Thumbs up/down as the scoring service expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackScore {
    Up,
    Down,
}

impl FeedbackScore {
    pub fn value(self) -> u8 {
        match self {
            FeedbackScore::Up => 1,
            FeedbackScore::Down => 0,
        }
    }
}

/// Events the engine reports back to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    EvaluationFinished(Result<EvaluationRecord, ApiError>),
    ShareTextReady(Result<String, ApiError>),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The payload was blank after trimming.
    InvalidInput,
    /// The extraction collaborator returned no usable text.
    EmptyExtraction,
    HttpStatus(u16),
    Timeout,
    /// The response body did not match the wire contract.
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidInput => write!(f, "invalid input"),
            FailureKind::EmptyExtraction => write!(f, "no usable text extracted"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Decode => write!(f, "malformed response body"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
