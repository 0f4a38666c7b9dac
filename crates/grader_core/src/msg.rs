#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Startup resolution of the stored auth session. `Ok(None)` means no
    /// session is stored and the user starts signed out.
    AuthResolved(Result<Option<crate::Identity>, String>),
    /// User asked to start the provider-hosted sign-in flow.
    SignInClicked,
    /// User asked to sign out.
    SignOutClicked,
    /// User asked to clear local auth state after a failure and start over.
    ResetAuthClicked,
    /// User switched the input mode tab.
    ModeSelected(crate::InputMode),
    /// User edited the text or URL input box.
    DraftEdited(String),
    /// User picked a document from the file dialog.
    DocumentPicked { file_name: String, bytes: Vec<u8> },
    /// User removed the picked document.
    DocumentCleared,
    /// User submitted the current input for evaluation.
    SubmitClicked,
    /// Client engine finished (or failed) the evaluation request.
    EvaluationFinished(crate::EvaluationOutcome),
    /// User asked to share the displayed result.
    ShareClicked,
    /// Client engine finished (or failed) deriving the share text.
    ShareTextFinished(crate::ShareOutcome),
    /// User clicked thumbs up or down on the displayed result.
    FeedbackClicked(crate::FeedbackValue),
    /// Cosmetic progress tick from the owning operation's timer.
    ProgressTicked(crate::Operation),
    /// Fallback for placeholder wiring.
    NoOp,
}
