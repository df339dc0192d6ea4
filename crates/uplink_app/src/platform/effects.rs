use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, SystemTime};

use chrono::Local;
use uplink_core::{
    Effect, EntryFailure, Msg, UploadFailure, UploadReport, MAX_TICK_INCREMENT, TICK_INTERVAL_MS,
};
use uplink_engine::{render_entry, ApiSettings, EngineEvent, EngineHandle, ProcessOptions};
use uplink_logging::uplink_info;

/// Runs core effects against the engine and turns engine events back into
/// messages. Also owns the cosmetic progress ticker.
pub struct EffectRunner {
    engine: EngineHandle,
    options: ProcessOptions,
    msg_tx: mpsc::Sender<Msg>,
    ticker_running: Arc<AtomicBool>,
}

impl EffectRunner {
    pub fn new(
        settings: ApiSettings,
        options: ProcessOptions,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Self {
        let (engine, events) = uplink_engine::spawn(settings);
        let ticker_running = Arc::new(AtomicBool::new(false));
        spawn_event_loop(events, msg_tx.clone(), ticker_running.clone());
        Self {
            engine,
            options,
            msg_tx,
            ticker_running,
        }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::BeginUpload { file } => {
                    uplink_info!("BeginUpload file={:?}", file);
                    self.start_ticker();
                    self.engine.upload(file, self.options.clone());
                }
                Effect::FetchEntry { path } => {
                    uplink_info!("FetchEntry path={path}");
                    self.engine.fetch_entry(path);
                }
                Effect::ScheduleTransition { delay_ms } => {
                    let tx = self.msg_tx.clone();
                    thread::spawn(move || {
                        thread::sleep(Duration::from_millis(delay_ms));
                        let _ = tx.send(Msg::TransitionElapsed);
                    });
                }
            }
        }
    }

    /// Starts the cosmetic ticker for the upload now in flight. The event
    /// loop stops it when the upload settles; the core ignores any tick
    /// that races past the settlement.
    fn start_ticker(&self) {
        self.ticker_running.store(true, Ordering::SeqCst);
        let running = self.ticker_running.clone();
        let tx = self.msg_tx.clone();
        thread::spawn(move || {
            while running.load(Ordering::SeqCst) {
                thread::sleep(Duration::from_millis(TICK_INTERVAL_MS));
                if !running.load(Ordering::SeqCst) {
                    break;
                }
                let msg = Msg::ProgressTick {
                    increment: random_increment(),
                };
                if tx.send(msg).is_err() {
                    break;
                }
            }
        });
    }
}

fn spawn_event_loop(
    events: mpsc::Receiver<EngineEvent>,
    msg_tx: mpsc::Sender<Msg>,
    ticker_running: Arc<AtomicBool>,
) {
    thread::spawn(move || {
        while let Ok(event) = events.recv() {
            let msg = match event {
                EngineEvent::UploadCompleted { result } => {
                    ticker_running.store(false, Ordering::SeqCst);
                    let result = match result {
                        Ok(response) if response.success => Ok(UploadReport {
                            output_dir: response.output_dir,
                            entries: response.json_files,
                        }),
                        Ok(response) => Err(UploadFailure::Rejected {
                            message: response.message.unwrap_or_default(),
                            stderr: response.stderr.unwrap_or_default(),
                        }),
                        Err(err) => Err(UploadFailure::Transport {
                            detail: err.to_string(),
                        }),
                    };
                    Msg::UploadSettled {
                        at: timestamp(),
                        result,
                    }
                }
                EngineEvent::EntryLoaded { path, result } => {
                    let result = match result {
                        Ok(response) if response.success => Ok(render_entry(
                            &response.data.unwrap_or(serde_json::Value::Null),
                        )),
                        Ok(response) => Err(EntryFailure::Rejected {
                            message: response.message.unwrap_or_default(),
                        }),
                        Err(err) => Err(EntryFailure::Transport {
                            detail: err.to_string(),
                        }),
                    };
                    Msg::EntryLoaded { path, result }
                }
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        }
    });
}

fn timestamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

/// Clock-derived increment in 1..=MAX_TICK_INCREMENT. The progress is a
/// cosmetic approximation; the jitter only has to look plausible.
fn random_increment() -> u8 {
    let nanos = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    (nanos % u32::from(MAX_TICK_INCREMENT)) as u8 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_stays_in_tick_range() {
        for _ in 0..1000 {
            let inc = random_increment();
            assert!((1..=MAX_TICK_INCREMENT).contains(&inc));
        }
    }

    #[test]
    fn timestamp_is_clock_shaped() {
        let at = timestamp();
        assert_eq!(at.len(), 8);
        assert_eq!(at.as_bytes()[2], b':');
        assert_eq!(at.as_bytes()[5], b':');
    }
}
