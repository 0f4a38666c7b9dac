use crate::{
    AppState, AuthState, Effect, EvaluationOutcome, Msg, Operation, ShareOutcome, SubmissionDraft,
    SubmissionPayload, MAX_DOCUMENT_BYTES,
};

pub const MSG_EMPTY_INPUT: &str = "Nothing to evaluate yet. Paste some text first.";
pub const MSG_EMPTY_URL: &str = "Enter the URL of the page to evaluate first.";
pub const MSG_NO_DOCUMENT: &str = "Choose a PDF file first.";
pub const MSG_NOT_A_PDF: &str = "That file does not look like a PDF.";
pub const MSG_DOCUMENT_TOO_LARGE: &str = "The PDF exceeds the 5 MiB upload limit.";
pub const MSG_EVALUATION_FAILED: &str =
    "Something went wrong. Restart the app and try again.";
pub const MSG_SHARE_FAILED: &str = "Could not generate a post. Please try again.";

const SHARE_INTENT_BASE: &str = "https://twitter.com/intent/tweet";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::AuthResolved(resolution) => {
            if *state.auth() == AuthState::Resolving {
                match resolution {
                    Ok(Some(identity)) => state.set_auth(AuthState::SignedIn(identity)),
                    Ok(None) => state.set_auth(AuthState::SignedOut),
                    Err(reason) => state.set_auth(AuthState::Failed(reason)),
                }
            }
            Vec::new()
        }
        Msg::SignInClicked => {
            if *state.auth() == AuthState::SignedOut {
                vec![Effect::BeginSignIn]
            } else {
                Vec::new()
            }
        }
        Msg::SignOutClicked => {
            if state.identity().is_none() {
                return (state, Vec::new());
            }
            // Outstanding requests cannot be aborted; stop their timers and
            // let any late completion be ignored by the busy guards.
            let mut effects = Vec::new();
            for operation in [Operation::Evaluation, Operation::Share] {
                if state.is_busy(operation) {
                    effects.push(Effect::StopProgress(operation));
                }
            }
            state.reset_session_view();
            state.set_auth(AuthState::SignedOut);
            effects.push(Effect::BeginSignOut);
            effects
        }
        Msg::ResetAuthClicked => {
            if matches!(state.auth(), AuthState::Failed(_)) {
                state.set_auth(AuthState::SignedOut);
                vec![Effect::ClearStoredSession]
            } else {
                Vec::new()
            }
        }
        Msg::ModeSelected(mode) => {
            if state.draft().mode() != mode {
                state.set_draft(SubmissionDraft::empty(mode));
            }
            Vec::new()
        }
        Msg::DraftEdited(text) => {
            match state.draft().mode() {
                crate::InputMode::Text => state.set_draft(SubmissionDraft::Text(text)),
                crate::InputMode::Url => state.set_draft(SubmissionDraft::Url(text)),
                crate::InputMode::Document => {}
            }
            Vec::new()
        }
        Msg::DocumentPicked { file_name, bytes } => {
            if state.draft().mode() == crate::InputMode::Document {
                state.set_draft(SubmissionDraft::Document(Some(crate::DocumentDraft {
                    file_name,
                    bytes,
                })));
            }
            Vec::new()
        }
        Msg::DocumentCleared => {
            if state.draft().mode() == crate::InputMode::Document {
                state.set_draft(SubmissionDraft::Document(None));
            }
            Vec::new()
        }
        Msg::SubmitClicked => {
            let Some(identity) = state.identity().cloned() else {
                return (state, Vec::new());
            };
            if state.any_busy() {
                return (state, Vec::new());
            }
            match validate_draft(state.draft()) {
                Ok(payload) => {
                    state.clear_error();
                    state.begin_operation(Operation::Evaluation);
                    vec![
                        Effect::StartProgress(Operation::Evaluation),
                        Effect::SubmitEvaluation { payload, identity },
                    ]
                }
                Err(message) => {
                    state.set_error(message);
                    Vec::new()
                }
            }
        }
        Msg::EvaluationFinished(outcome) => {
            if !state.is_busy(Operation::Evaluation) {
                return (state, Vec::new());
            }
            state.finish_operation(Operation::Evaluation);
            match outcome {
                EvaluationOutcome::Success(evaluation) => state.set_result(evaluation),
                EvaluationOutcome::Failed => state.set_error(MSG_EVALUATION_FAILED),
            }
            vec![Effect::StopProgress(Operation::Evaluation)]
        }
        Msg::ShareClicked => {
            let Some(identity) = state.identity().cloned() else {
                return (state, Vec::new());
            };
            let Some(evaluation) = state.result().cloned() else {
                return (state, Vec::new());
            };
            if state.any_busy() {
                return (state, Vec::new());
            }
            state.clear_error();
            state.begin_operation(Operation::Share);
            vec![
                Effect::StartProgress(Operation::Share),
                Effect::RequestShareText {
                    eval_result: evaluation.message,
                    session_id: evaluation.session_id,
                    identity,
                },
            ]
        }
        Msg::ShareTextFinished(outcome) => {
            if !state.is_busy(Operation::Share) {
                return (state, Vec::new());
            }
            state.finish_operation(Operation::Share);
            let mut effects = vec![Effect::StopProgress(Operation::Share)];
            match outcome {
                ShareOutcome::Success(text) => effects.push(Effect::OpenUrl {
                    url: share_intent_url(&text),
                }),
                ShareOutcome::Failed => state.set_error(MSG_SHARE_FAILED),
            }
            effects
        }
        Msg::FeedbackClicked(value) => {
            // Write-once per result: later clicks are no-ops.
            let trace_id = state.result().map(|evaluation| evaluation.trace_id.clone());
            let Some(trace_id) = trace_id else {
                return (state, Vec::new());
            };
            if state.feedback().is_some() {
                return (state, Vec::new());
            }
            state.record_feedback(value);
            vec![Effect::RecordFeedback { trace_id, value }]
        }
        Msg::ProgressTicked(operation) => {
            state.advance_progress(operation);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Turns the active draft into an evaluable payload, or a user-facing
/// validation message. No effects are emitted on failure.
fn validate_draft(draft: &SubmissionDraft) -> Result<SubmissionPayload, &'static str> {
    match draft {
        SubmissionDraft::Text(text) => {
            if text.trim().is_empty() {
                Err(MSG_EMPTY_INPUT)
            } else {
                Ok(SubmissionPayload::Text(text.clone()))
            }
        }
        SubmissionDraft::Url(url) => {
            let trimmed = url.trim();
            if trimmed.is_empty() {
                Err(MSG_EMPTY_URL)
            } else {
                Ok(SubmissionPayload::Url(trimmed.to_owned()))
            }
        }
        SubmissionDraft::Document(None) => Err(MSG_NO_DOCUMENT),
        SubmissionDraft::Document(Some(document)) => {
            if !document.looks_like_pdf() {
                Err(MSG_NOT_A_PDF)
            } else if document.bytes.len() > MAX_DOCUMENT_BYTES {
                Err(MSG_DOCUMENT_TOO_LARGE)
            } else {
                Ok(SubmissionPayload::Document {
                    file_name: document.file_name.clone(),
                    bytes: document.bytes.clone(),
                })
            }
        }
    }
}

fn share_intent_url(text: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(text.as_bytes()).collect();
    format!("{SHARE_INTENT_BASE}?text={encoded}")
}
