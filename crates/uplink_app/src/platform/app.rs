use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::Result;
use uplink_core::{update, Msg, Region, SessionState};
use uplink_engine::{ApiSettings, ProcessOptions};
use uplink_logging::uplink_info;

use super::effects::EffectRunner;
use super::ui::{Renderer, ResultsCommand, UploadCommand};

pub struct RunConfig {
    pub server: String,
    pub file: Option<PathBuf>,
    pub options: ProcessOptions,
}

/// Drives one upload-review session: messages flow through the pure update
/// function, effects go to the runner, renders happen when the state is
/// dirty.
pub fn run(config: RunConfig) -> Result<()> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(
        ApiSettings::new(config.server.clone()),
        config.options,
        msg_tx,
    );
    let mut renderer = Renderer::new();
    let mut state = SessionState::new();

    uplink_info!("session start server={}", config.server);

    if let Some(file) = config.file {
        state = dispatch(state, Msg::FileChosen(file), &runner);
        state = dispatch(state, Msg::SubmitClicked, &runner);
    }

    loop {
        if state.consume_dirty() {
            renderer.render(&state.view())?;
        }
        match state.region() {
            Region::Upload => match renderer.prompt_upload()? {
                UploadCommand::Quit => break,
                UploadCommand::Submit(file) => {
                    if let Some(file) = file {
                        state = dispatch(state, Msg::FileChosen(file), &runner);
                    }
                    state = dispatch(state, Msg::SubmitClicked, &runner);
                }
            },
            Region::Processing => match msg_rx.recv() {
                Ok(msg) => state = dispatch(state, msg, &runner),
                Err(_) => break,
            },
            Region::Results => {
                // Apply anything that landed while the prompt was open, and
                // re-render before prompting again.
                let mut drained = false;
                while let Ok(msg) = msg_rx.try_recv() {
                    state = dispatch(state, msg, &runner);
                    drained = true;
                }
                if drained {
                    continue;
                }
                match renderer.prompt_results()? {
                    ResultsCommand::Quit => break,
                    ResultsCommand::View(number) => {
                        let (next, effects) =
                            update(state, Msg::ViewRequested { index: number - 1 });
                        state = next;
                        if effects.is_empty() {
                            renderer.warn("no such entry")?;
                            continue;
                        }
                        runner.run(effects);
                        // One request at a time: block until the content
                        // fetch settles, then fall through to render it.
                        while let Ok(msg) = msg_rx.recv() {
                            let settled = matches!(msg, Msg::EntryLoaded { .. });
                            state = dispatch(state, msg, &runner);
                            if settled {
                                break;
                            }
                        }
                    }
                }
            }
        }
    }

    uplink_info!("session end");
    Ok(())
}

fn dispatch(state: SessionState, msg: Msg, runner: &EffectRunner) -> SessionState {
    let (state, effects) = update(state, msg);
    runner.run(effects);
    state
}
