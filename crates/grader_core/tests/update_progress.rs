use std::sync::Once;

use grader_core::{
    update, AppState, Effect, Evaluation, EvaluationOutcome, Identity, Msg, Operation,
    PROGRESS_HOLD_PERCENT,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

fn evaluating_state() -> AppState {
    let identity = Identity {
        id_token: "token".to_string(),
        email: None,
    };
    let (state, _) = update(AppState::new(), Msg::AuthResolved(Ok(Some(identity))));
    let (state, _) = update(state, Msg::DraftEdited("content".to_string()));
    let (state, effects) = update(state, Msg::SubmitClicked);
    assert_eq!(effects.len(), 2);
    state
}

fn evaluation() -> Evaluation {
    Evaluation {
        message: "Level 300".to_string(),
        trace_id: "trace-1".to_string(),
        session_id: "session-1".to_string(),
    }
}

#[test]
fn ticks_advance_percent_one_per_tick() {
    init_logging();
    let mut state = evaluating_state();
    for expected in 1..=10 {
        let (next, effects) = update(state, Msg::ProgressTicked(Operation::Evaluation));
        assert!(effects.is_empty());
        assert_eq!(next.view().eval_percent, Some(expected));
        state = next;
    }
}

#[test]
fn percent_is_held_below_completion_until_resolution() {
    init_logging();
    let mut state = evaluating_state();
    // Far more ticks than the hold threshold.
    for _ in 0..(PROGRESS_HOLD_PERCENT as usize * 3) {
        let (next, _) = update(state, Msg::ProgressTicked(Operation::Evaluation));
        state = next;
    }
    assert_eq!(state.view().eval_percent, Some(PROGRESS_HOLD_PERCENT));
}

#[test]
fn resolution_forces_percent_to_exactly_100() {
    init_logging();
    let mut state = evaluating_state();
    for _ in 0..40 {
        let (next, _) = update(state, Msg::ProgressTicked(Operation::Evaluation));
        state = next;
    }

    let (state, effects) = update(
        state,
        Msg::EvaluationFinished(EvaluationOutcome::Success(evaluation())),
    );

    assert_eq!(state.view().eval_percent, Some(100));
    assert_eq!(effects, vec![Effect::StopProgress(Operation::Evaluation)]);
}

#[test]
fn failure_also_forces_percent_to_100_and_stops_timer() {
    init_logging();
    let state = evaluating_state();

    let (state, effects) = update(state, Msg::EvaluationFinished(EvaluationOutcome::Failed));

    assert_eq!(state.view().eval_percent, Some(100));
    assert!(!state.view().evaluating);
    assert_eq!(effects, vec![Effect::StopProgress(Operation::Evaluation)]);
}

#[test]
fn late_ticks_after_resolution_are_no_ops() {
    init_logging();
    let state = evaluating_state();
    let (state, _) = update(
        state,
        Msg::EvaluationFinished(EvaluationOutcome::Success(evaluation())),
    );

    // A tick already queued when the timer was cancelled must not move the bar.
    let (state, effects) = update(state, Msg::ProgressTicked(Operation::Evaluation));

    assert!(effects.is_empty());
    assert_eq!(state.view().eval_percent, Some(100));
}

#[test]
fn ticks_for_the_idle_operation_are_ignored() {
    init_logging();
    let state = evaluating_state();

    let (state, effects) = update(state, Msg::ProgressTicked(Operation::Share));

    assert!(effects.is_empty());
    assert_eq!(state.view().share_percent, None);
}
