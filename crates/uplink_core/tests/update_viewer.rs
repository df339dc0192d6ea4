use std::path::PathBuf;
use std::sync::Once;

use uplink_core::{
    update, ContentBody, Effect, EntryFailure, Msg, Region, SessionState, UploadReport,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(uplink_logging::initialize_for_tests);
}

fn results_state(entries: &[&str]) -> SessionState {
    let state = SessionState::new();
    let (state, _) = update(state, Msg::FileChosen(PathBuf::from("doc.txt")));
    let (state, _) = update(state, Msg::SubmitClicked);
    let (state, _) = update(
        state,
        Msg::UploadSettled {
            at: "09:30:00".to_string(),
            result: Ok(UploadReport {
                output_dir: Some("output/web_process_1".to_string()),
                entries: entries.iter().map(ToString::to_string).collect(),
            }),
        },
    );
    let (state, _) = update(state, Msg::TransitionElapsed);
    state
}

#[test]
fn view_request_fetches_the_listed_path() {
    init_logging();
    let state = results_state(&["output/web_process_1/a.json", "output/web_process_1/b.json"]);

    let (_state, effects) = update(state, Msg::ViewRequested { index: 1 });

    assert_eq!(
        effects,
        vec![Effect::FetchEntry {
            path: "output/web_process_1/b.json".to_string(),
        }]
    );
}

#[test]
fn out_of_range_view_request_is_refused() {
    init_logging();
    let state = results_state(&["output/web_process_1/a.json"]);

    let (_state, effects) = update(state, Msg::ViewRequested { index: 5 });

    assert!(effects.is_empty());
}

#[test]
fn view_request_outside_results_region_is_refused() {
    init_logging();
    let state = SessionState::new();

    let (_state, effects) = update(state, Msg::ViewRequested { index: 0 });

    assert!(effects.is_empty());
}

#[test]
fn loaded_entry_fills_the_content_pane() {
    init_logging();
    let state = results_state(&["output/web_process_1/a.json"]);

    let (state, effects) = update(
        state,
        Msg::EntryLoaded {
            path: "output/web_process_1/a.json".to_string(),
            result: Ok("{\n  \"x\": 1\n}".to_string()),
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.region, Region::Results);
    let pane = view.content.expect("content pane");
    assert_eq!(pane.title, "a.json");
    assert_eq!(pane.body, ContentBody::Json("{\n  \"x\": 1\n}".to_string()));
}

#[test]
fn rejected_entry_shows_inline_error_without_region_change() {
    init_logging();
    let state = results_state(&["output/web_process_1/a.json"]);

    let (state, _) = update(
        state,
        Msg::EntryLoaded {
            path: "output/web_process_1/a.json".to_string(),
            result: Err(EntryFailure::Rejected {
                message: "JSON file does not exist".to_string(),
            }),
        },
    );

    let view = state.view();
    assert_eq!(view.region, Region::Results);
    assert_eq!(
        view.content.unwrap().body,
        ContentBody::Error("unable to load file: JSON file does not exist".to_string())
    );
}

#[test]
fn transport_failure_on_entry_shows_inline_error() {
    init_logging();
    let state = results_state(&["output/web_process_1/a.json"]);

    let (state, _) = update(
        state,
        Msg::EntryLoaded {
            path: "output/web_process_1/a.json".to_string(),
            result: Err(EntryFailure::Transport {
                detail: "http status 500".to_string(),
            }),
        },
    );

    assert_eq!(
        state.view().content.unwrap().body,
        ContentBody::Error("request failed: http status 500".to_string())
    );
}

#[test]
fn second_view_replaces_the_content_pane() {
    init_logging();
    let state = results_state(&["out/a.json", "out/b.json"]);

    let (state, _) = update(
        state,
        Msg::EntryLoaded {
            path: "out/a.json".to_string(),
            result: Ok("{}".to_string()),
        },
    );
    let (state, _) = update(
        state,
        Msg::EntryLoaded {
            path: "out/b.json".to_string(),
            result: Ok("[]".to_string()),
        },
    );

    let pane = state.view().content.expect("content pane");
    assert_eq!(pane.title, "b.json");
    assert_eq!(pane.body, ContentBody::Json("[]".to_string()));
}
