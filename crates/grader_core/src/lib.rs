//! Grader core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    AppState, AuthState, DocumentDraft, Evaluation, EvaluationOutcome, FeedbackValue, Identity,
    InputMode, Operation, ProgressEstimate, ShareOutcome, SubmissionDraft, SubmissionPayload,
    MAX_DOCUMENT_BYTES, PROGRESS_HOLD_PERCENT,
};
pub use update::{
    update, MSG_DOCUMENT_TOO_LARGE, MSG_EMPTY_INPUT, MSG_EMPTY_URL, MSG_EVALUATION_FAILED,
    MSG_NOT_A_PDF, MSG_NO_DOCUMENT, MSG_SHARE_FAILED,
};
pub use view_model::AppViewModel;
