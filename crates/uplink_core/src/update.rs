use crate::state::check_extension;
use crate::{
    Effect, Msg, Region, SessionState, FAILURE_REVERT_DELAY_MS, SUCCESS_REVEAL_DELAY_MS,
};

/// Pure update function: applies a message to the session and returns any
/// effects for the platform to run.
pub fn update(mut state: SessionState, msg: Msg) -> (SessionState, Vec<Effect>) {
    let effects = match msg {
        Msg::FileChosen(file) => {
            state.choose_file(file);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // One request at a time: submission is only accepted from the
            // upload region with nothing outstanding.
            if state.region() != Region::Upload || state.in_flight() {
                return (state, Vec::new());
            }
            let Some(file) = state.selected_file() else {
                state.set_validation("please choose a file first");
                return (state, Vec::new());
            };
            if let Err(reason) = check_extension(&file) {
                state.set_validation(reason);
                return (state, Vec::new());
            }
            state.begin_submission();
            vec![Effect::BeginUpload { file }]
        }
        Msg::ProgressTick { increment } => {
            state.apply_tick(increment);
            Vec::new()
        }
        Msg::UploadSettled { at, result } => {
            // Ignore stale settlements; only one request is ever in flight.
            if !state.in_flight() {
                return (state, Vec::new());
            }
            match result {
                Ok(report) => {
                    state.settle_success(at, report);
                    vec![Effect::ScheduleTransition {
                        delay_ms: SUCCESS_REVEAL_DELAY_MS,
                    }]
                }
                Err(failure) => {
                    state.settle_failure(at, failure);
                    vec![Effect::ScheduleTransition {
                        delay_ms: FAILURE_REVERT_DELAY_MS,
                    }]
                }
            }
        }
        Msg::TransitionElapsed => {
            state.apply_pending_transition();
            Vec::new()
        }
        Msg::ViewRequested { index } => match state.entry_path(index) {
            Some(path) => vec![Effect::FetchEntry { path }],
            None => Vec::new(),
        },
        Msg::EntryLoaded { path, result } => {
            state.apply_entry(path, result);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
