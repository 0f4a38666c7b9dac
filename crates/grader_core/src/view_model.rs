use crate::{AuthState, FeedbackValue, InputMode};

/// Plain render data derived from [`crate::AppState`] by `AppState::view`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub auth: AuthState,
    pub mode: InputMode,
    /// Contents of the text box for the text and URL modes.
    pub draft_text: String,
    pub document_name: Option<String>,
    pub evaluating: bool,
    pub sharing: bool,
    pub eval_percent: Option<u8>,
    pub share_percent: Option<u8>,
    /// The assessment, split on blank lines into render blocks.
    pub paragraphs: Vec<String>,
    pub has_result: bool,
    pub feedback: Option<FeedbackValue>,
    pub error: Option<String>,
    pub can_submit: bool,
    pub can_share: bool,
    pub can_give_feedback: bool,
}

impl Default for AppViewModel {
    fn default() -> Self {
        Self {
            auth: AuthState::default(),
            mode: InputMode::Text,
            draft_text: String::new(),
            document_name: None,
            evaluating: false,
            sharing: false,
            eval_percent: None,
            share_percent: None,
            paragraphs: Vec::new(),
            has_result: false,
            feedback: None,
            error: None,
            can_submit: false,
            can_share: false,
            can_give_feedback: false,
        }
    }
}
