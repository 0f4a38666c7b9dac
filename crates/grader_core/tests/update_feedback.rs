use std::sync::Once;

use grader_core::{
    update, AppState, Effect, Evaluation, EvaluationOutcome, FeedbackValue, Identity, Msg,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

fn state_with_result(trace_id: &str) -> AppState {
    let identity = Identity {
        id_token: "token".to_string(),
        email: None,
    };
    let (state, _) = update(AppState::new(), Msg::AuthResolved(Ok(Some(identity))));
    let (state, _) = update(state, Msg::DraftEdited("content".to_string()));
    let (state, _) = update(state, Msg::SubmitClicked);
    let (state, _) = update(
        state,
        Msg::EvaluationFinished(EvaluationOutcome::Success(Evaluation {
            message: "Level 100".to_string(),
            trace_id: trace_id.to_string(),
            session_id: "session-1".to_string(),
        })),
    );
    state
}

#[test]
fn first_click_records_judgment_against_trace() {
    init_logging();
    let state = state_with_result("trace-42");

    let (state, effects) = update(state, Msg::FeedbackClicked(FeedbackValue::Up));

    assert_eq!(
        effects,
        vec![Effect::RecordFeedback {
            trace_id: "trace-42".to_string(),
            value: FeedbackValue::Up,
        }]
    );
    let view = state.view();
    assert_eq!(view.feedback, Some(FeedbackValue::Up));
    assert!(!view.can_give_feedback);
}

#[test]
fn second_click_is_a_no_op_and_value_never_changes() {
    init_logging();
    let state = state_with_result("trace-42");
    let (state, _) = update(state, Msg::FeedbackClicked(FeedbackValue::Down));

    let (state, effects) = update(state, Msg::FeedbackClicked(FeedbackValue::Up));

    assert!(effects.is_empty());
    assert_eq!(state.view().feedback, Some(FeedbackValue::Down));
}

#[test]
fn feedback_without_result_is_ignored() {
    init_logging();
    let state = AppState::new();

    let (_, effects) = update(state, Msg::FeedbackClicked(FeedbackValue::Up));

    assert!(effects.is_empty());
}

#[test]
fn replacement_result_rearms_feedback() {
    init_logging();
    let state = state_with_result("trace-1");
    let (state, _) = update(state, Msg::FeedbackClicked(FeedbackValue::Up));

    let (state, _) = update(state, Msg::DraftEdited("more".to_string()));
    let (state, _) = update(state, Msg::SubmitClicked);
    let (state, _) = update(
        state,
        Msg::EvaluationFinished(EvaluationOutcome::Success(Evaluation {
            message: "Level 400".to_string(),
            trace_id: "trace-2".to_string(),
            session_id: "session-2".to_string(),
        })),
    );

    let (state, effects) = update(state, Msg::FeedbackClicked(FeedbackValue::Down));

    assert_eq!(
        effects,
        vec![Effect::RecordFeedback {
            trace_id: "trace-2".to_string(),
            value: FeedbackValue::Down,
        }]
    );
    assert_eq!(state.view().feedback, Some(FeedbackValue::Down));
}

#[test]
fn score_values_match_wire_contract() {
    assert_eq!(FeedbackValue::Up.score(), 1);
    assert_eq!(FeedbackValue::Down.score(), 0);
}
