use crate::view_model::AppViewModel;

/// Upload cap for document submissions, enforced before any network call.
pub const MAX_DOCUMENT_BYTES: usize = 5 * 1024 * 1024;

/// Simulated progress is held here until the real response arrives.
pub const PROGRESS_HOLD_PERCENT: u8 = 95;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Bearer identity handed to every authenticated backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id_token: String,
    pub email: Option<String>,
}

/// Auth context with an explicit lifecycle: resolved once at startup,
/// invalidated on sign-out.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Resolving,
    SignedOut,
    SignedIn(Identity),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Text,
    Url,
    Document,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentDraft {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl DocumentDraft {
    pub fn looks_like_pdf(&self) -> bool {
        self.bytes.starts_with(PDF_MAGIC)
    }
}

/// The active input. Exactly one payload exists at a time; switching mode
/// replaces the variant and discards the other mode's capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionDraft {
    Text(String),
    Url(String),
    Document(Option<DocumentDraft>),
}

impl SubmissionDraft {
    pub fn empty(mode: InputMode) -> Self {
        match mode {
            InputMode::Text => SubmissionDraft::Text(String::new()),
            InputMode::Url => SubmissionDraft::Url(String::new()),
            InputMode::Document => SubmissionDraft::Document(None),
        }
    }

    pub fn mode(&self) -> InputMode {
        match self {
            SubmissionDraft::Text(_) => InputMode::Text,
            SubmissionDraft::Url(_) => InputMode::Url,
            SubmissionDraft::Document(_) => InputMode::Document,
        }
    }
}

impl Default for SubmissionDraft {
    fn default() -> Self {
        SubmissionDraft::Text(String::new())
    }
}

/// Validated payload handed to the client engine for normalization and
/// evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionPayload {
    Text(String),
    Url(String),
    Document { file_name: String, bytes: Vec<u8> },
}

/// One completed evaluation. Immutable; replaced wholesale by the next
/// successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub message: String,
    pub trace_id: String,
    pub session_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationOutcome {
    Success(Evaluation),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Success(String),
    Failed,
}

/// Thumbs up/down, recorded at most once per evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackValue {
    Up,
    Down,
}

impl FeedbackValue {
    /// Wire value expected by the scoring service.
    pub fn score(self) -> u8 {
        match self {
            FeedbackValue::Up => 1,
            FeedbackValue::Down => 0,
        }
    }
}

/// The two operations that own a busy flag and a simulated-progress slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Evaluation,
    Share,
}

/// Cosmetic progress indication with no bearing on actual completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressEstimate {
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    auth: AuthState,
    draft: SubmissionDraft,
    evaluating: bool,
    sharing: bool,
    eval_progress: Option<ProgressEstimate>,
    share_progress: Option<ProgressEstimate>,
    result: Option<Evaluation>,
    feedback: Option<FeedbackValue>,
    error: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let idle = !self.evaluating && !self.sharing;
        AppViewModel {
            auth: self.auth.clone(),
            mode: self.draft.mode(),
            draft_text: match &self.draft {
                SubmissionDraft::Text(text) | SubmissionDraft::Url(text) => text.clone(),
                SubmissionDraft::Document(_) => String::new(),
            },
            document_name: match &self.draft {
                SubmissionDraft::Document(Some(doc)) => Some(doc.file_name.clone()),
                _ => None,
            },
            evaluating: self.evaluating,
            sharing: self.sharing,
            eval_percent: self.eval_progress.map(|p| p.percent),
            share_percent: self.share_progress.map(|p| p.percent),
            paragraphs: self
                .result
                .as_ref()
                .map(|evaluation| split_paragraphs(&evaluation.message))
                .unwrap_or_default(),
            has_result: self.result.is_some(),
            feedback: self.feedback,
            error: self.error.clone(),
            can_submit: matches!(self.auth, AuthState::SignedIn(_)) && idle,
            can_share: matches!(self.auth, AuthState::SignedIn(_)) && idle && self.result.is_some(),
            can_give_feedback: self.result.is_some() && self.feedback.is_none(),
        }
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn auth(&self) -> &AuthState {
        &self.auth
    }

    pub(crate) fn identity(&self) -> Option<&Identity> {
        match &self.auth {
            AuthState::SignedIn(identity) => Some(identity),
            _ => None,
        }
    }

    pub(crate) fn set_auth(&mut self, auth: AuthState) {
        self.auth = auth;
        self.mark_dirty();
    }

    pub(crate) fn draft(&self) -> &SubmissionDraft {
        &self.draft
    }

    pub(crate) fn set_draft(&mut self, draft: SubmissionDraft) {
        self.draft = draft;
        self.mark_dirty();
    }

    pub(crate) fn is_busy(&self, operation: Operation) -> bool {
        match operation {
            Operation::Evaluation => self.evaluating,
            Operation::Share => self.sharing,
        }
    }

    pub(crate) fn any_busy(&self) -> bool {
        self.evaluating || self.sharing
    }

    /// Marks the operation outstanding and rewinds its progress slot to zero.
    pub(crate) fn begin_operation(&mut self, operation: Operation) {
        match operation {
            Operation::Evaluation => {
                self.evaluating = true;
                self.eval_progress = Some(ProgressEstimate { percent: 0 });
            }
            Operation::Share => {
                self.sharing = true;
                self.share_progress = Some(ProgressEstimate { percent: 0 });
            }
        }
        self.mark_dirty();
    }

    /// Clears the busy flag and forces the progress slot to exactly 100.
    pub(crate) fn finish_operation(&mut self, operation: Operation) {
        match operation {
            Operation::Evaluation => {
                self.evaluating = false;
                self.eval_progress = Some(ProgressEstimate { percent: 100 });
            }
            Operation::Share => {
                self.sharing = false;
                self.share_progress = Some(ProgressEstimate { percent: 100 });
            }
        }
        self.mark_dirty();
    }

    /// Advances the slot by one tick, held below completion until the real
    /// response arrives. Ticks for an idle operation are ignored.
    pub(crate) fn advance_progress(&mut self, operation: Operation) {
        if !self.is_busy(operation) {
            return;
        }
        let slot = match operation {
            Operation::Evaluation => &mut self.eval_progress,
            Operation::Share => &mut self.share_progress,
        };
        if let Some(progress) = slot {
            if progress.percent < PROGRESS_HOLD_PERCENT {
                progress.percent += 1;
                self.dirty = true;
            }
        }
    }

    pub(crate) fn result(&self) -> Option<&Evaluation> {
        self.result.as_ref()
    }

    /// Installs a fresh result and re-arms the feedback capability.
    pub(crate) fn set_result(&mut self, evaluation: Evaluation) {
        self.result = Some(evaluation);
        self.feedback = None;
        self.error = None;
        self.mark_dirty();
    }

    pub(crate) fn feedback(&self) -> Option<FeedbackValue> {
        self.feedback
    }

    pub(crate) fn record_feedback(&mut self, value: FeedbackValue) {
        self.feedback = Some(value);
        self.mark_dirty();
    }

    pub(crate) fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.mark_dirty();
    }

    pub(crate) fn clear_error(&mut self) {
        if self.error.take().is_some() {
            self.mark_dirty();
        }
    }

    /// Drops everything tied to the signed-in session.
    pub(crate) fn reset_session_view(&mut self) {
        self.draft = SubmissionDraft::default();
        self.evaluating = false;
        self.sharing = false;
        self.eval_progress = None;
        self.share_progress = None;
        self.result = None;
        self.feedback = None;
        self.error = None;
        self.mark_dirty();
    }
}

fn split_paragraphs(message: &str) -> Vec<String> {
    message
        .split("\n\n")
        .filter(|paragraph| !paragraph.trim().is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
