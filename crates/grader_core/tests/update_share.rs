use std::sync::Once;

use grader_core::{
    update, AppState, Effect, Evaluation, EvaluationOutcome, Identity, Msg, Operation,
    ShareOutcome, MSG_SHARE_FAILED,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

fn identity() -> Identity {
    Identity {
        id_token: "token".to_string(),
        email: Some("user@example.com".to_string()),
    }
}

fn state_with_result() -> AppState {
    let (state, _) = update(AppState::new(), Msg::AuthResolved(Ok(Some(identity()))));
    let (state, _) = update(state, Msg::DraftEdited("content".to_string()));
    let (state, _) = update(state, Msg::SubmitClicked);
    let (state, _) = update(
        state,
        Msg::EvaluationFinished(EvaluationOutcome::Success(Evaluation {
            message: "Level 300: deep dive".to_string(),
            trace_id: "trace-1".to_string(),
            session_id: "session-1".to_string(),
        })),
    );
    state
}

#[test]
fn share_sends_result_and_session_to_engine() {
    init_logging();
    let state = state_with_result();

    let (state, effects) = update(state, Msg::ShareClicked);

    assert_eq!(
        effects,
        vec![
            Effect::StartProgress(Operation::Share),
            Effect::RequestShareText {
                eval_result: "Level 300: deep dive".to_string(),
                session_id: "session-1".to_string(),
                identity: identity(),
            },
        ]
    );
    let view = state.view();
    assert!(view.sharing);
    assert_eq!(view.share_percent, Some(0));
    assert!(!view.can_submit);
}

#[test]
fn share_without_result_is_ignored() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::AuthResolved(Ok(Some(identity()))));

    let (_, effects) = update(state, Msg::ShareClicked);

    assert!(effects.is_empty());
}

#[test]
fn share_and_evaluation_are_mutually_exclusive() {
    init_logging();
    let state = state_with_result();
    let (state, _) = update(state, Msg::ShareClicked);

    // A fresh evaluation may not start while the share is outstanding.
    let (state, effects) = update(state, Msg::SubmitClicked);
    assert!(effects.is_empty());

    // Nor may a second share.
    let (_, effects) = update(state, Msg::ShareClicked);
    assert!(effects.is_empty());
}

#[test]
fn share_success_opens_encoded_intent_url() {
    init_logging();
    let state = state_with_result();
    let (state, _) = update(state, Msg::ShareClicked);

    let (state, effects) = update(
        state,
        Msg::ShareTextFinished(ShareOutcome::Success("Scored Level 300! #grader".to_string())),
    );

    assert_eq!(effects.len(), 2);
    assert_eq!(effects[0], Effect::StopProgress(Operation::Share));
    match &effects[1] {
        Effect::OpenUrl { url } => {
            assert!(url.starts_with("https://twitter.com/intent/tweet?text="));
            assert!(url.contains("Scored+Level+300%21+%23grader"));
        }
        other => panic!("expected OpenUrl effect, got {other:?}"),
    }
    let view = state.view();
    assert!(!view.sharing);
    assert_eq!(view.share_percent, Some(100));
    assert_eq!(view.error, None);
}

#[test]
fn share_failure_surfaces_message_and_skips_handoff() {
    init_logging();
    let state = state_with_result();
    let (state, _) = update(state, Msg::ShareClicked);

    let (state, effects) = update(state, Msg::ShareTextFinished(ShareOutcome::Failed));

    assert_eq!(effects, vec![Effect::StopProgress(Operation::Share)]);
    let view = state.view();
    assert!(!view.sharing);
    assert_eq!(view.error.as_deref(), Some(MSG_SHARE_FAILED));
}

#[test]
fn stray_share_completion_is_ignored() {
    init_logging();
    let state = state_with_result();

    let (next, effects) = update(
        state.clone(),
        Msg::ShareTextFinished(ShareOutcome::Success("late".to_string())),
    );

    assert_eq!(next, state);
    assert!(effects.is_empty());
}
