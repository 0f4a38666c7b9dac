//! Grader client engine: authenticated backend calls and effect execution.
mod api;
mod engine;
mod score;
mod settings;
mod types;

pub use api::{ApiClient, ContentApi};
pub use engine::{ClientCommand, ClientHandle};
pub use score::{ScoreClient, SCORE_NAME};
pub use settings::ClientSettings;
pub use types::{
    ApiError, Caller, ClientEvent, EvaluationRecord, FailureKind, FeedbackScore, SubmissionInput,
};
