use std::path::PathBuf;
use std::sync::Once;

use uplink_core::{
    update, Msg, SessionState, UploadReport, MAX_TICK_INCREMENT, PROGRESS_CAP_IN_FLIGHT,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(uplink_logging::initialize_for_tests);
}

fn in_flight_state() -> SessionState {
    let state = SessionState::new();
    let (state, _) = update(state, Msg::FileChosen(PathBuf::from("doc.md")));
    let (state, _) = update(state, Msg::SubmitClicked);
    state
}

#[test]
fn ticks_advance_monotonically_and_cap_at_ninety() {
    init_logging();
    let mut state = in_flight_state();
    let mut last = state.view().progress;

    for _ in 0..30 {
        let (next, effects) = update(state, Msg::ProgressTick { increment: 7 });
        assert!(effects.is_empty());
        let progress = next.view().progress;
        assert!(progress >= last);
        assert!(progress <= PROGRESS_CAP_IN_FLIGHT);
        last = progress;
        state = next;
    }

    assert_eq!(state.view().progress, PROGRESS_CAP_IN_FLIGHT);
}

#[test]
fn oversized_increment_is_clamped() {
    init_logging();
    let state = in_flight_state();

    let (state, _) = update(state, Msg::ProgressTick { increment: 250 });

    assert_eq!(state.view().progress, MAX_TICK_INCREMENT);
}

#[test]
fn zero_increment_is_a_no_op() {
    init_logging();
    let state = in_flight_state();
    let (state, _) = update(state, Msg::ProgressTick { increment: 5 });

    let (state, _) = update(state, Msg::ProgressTick { increment: 0 });

    assert_eq!(state.view().progress, 5);
}

#[test]
fn ticks_before_submission_are_ignored() {
    init_logging();
    let state = SessionState::new();

    let (state, _) = update(state, Msg::ProgressTick { increment: 9 });

    assert_eq!(state.view().progress, 0);
}

#[test]
fn settlement_forces_progress_to_one_hundred() {
    init_logging();
    let state = in_flight_state();
    let (state, _) = update(state, Msg::ProgressTick { increment: 4 });

    let (state, _) = update(
        state,
        Msg::UploadSettled {
            at: "12:00:00".to_string(),
            result: Ok(UploadReport {
                output_dir: None,
                entries: Vec::new(),
            }),
        },
    );

    assert_eq!(state.view().progress, 100);
}

#[test]
fn late_ticks_after_settlement_cannot_move_progress() {
    init_logging();
    let state = in_flight_state();
    let (state, _) = update(
        state,
        Msg::UploadSettled {
            at: "12:00:01".to_string(),
            result: Ok(UploadReport {
                output_dir: None,
                entries: Vec::new(),
            }),
        },
    );

    // The platform stops the ticker at settlement, but a racing tick that
    // was already queued must not drag progress back below 100.
    let (state, _) = update(state, Msg::ProgressTick { increment: 8 });

    assert_eq!(state.view().progress, 100);
}
