#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Normalize the payload and run one evaluation round-trip.
    SubmitEvaluation {
        payload: crate::SubmissionPayload,
        identity: crate::Identity,
    },
    /// Derive a shareable post from the displayed result.
    RequestShareText {
        eval_result: String,
        session_id: String,
        identity: crate::Identity,
    },
    /// Record a one-shot judgment with the external scoring service.
    RecordFeedback {
        trace_id: String,
        value: crate::FeedbackValue,
    },
    /// Start the cosmetic progress timer for an operation.
    StartProgress(crate::Operation),
    /// Cancel the cosmetic progress timer for an operation.
    StopProgress(crate::Operation),
    /// Hand a URL to the platform browser opener.
    OpenUrl { url: String },
    /// Open the provider-hosted sign-in page.
    BeginSignIn,
    /// Open the provider logout page and drop the stored session.
    BeginSignOut,
    /// Drop the stored session without the provider round-trip.
    ClearStoredSession,
}
