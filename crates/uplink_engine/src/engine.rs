use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;

use uplink_logging::{uplink_info, uplink_warn};

use crate::client::{Api, ApiSettings, ReqwestApi};
use crate::{EngineEvent, ProcessOptions};

enum EngineCommand {
    Upload {
        file: PathBuf,
        options: ProcessOptions,
    },
    FetchEntry {
        path: String,
    },
}

/// Command side of the background engine. The event side is the receiver
/// returned by [`spawn`]; the caller keeps requests sequential.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn upload(&self, file: PathBuf, options: ProcessOptions) {
        let _ = self.cmd_tx.send(EngineCommand::Upload { file, options });
    }

    pub fn fetch_entry(&self, path: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::FetchEntry { path: path.into() });
    }
}

/// Starts the engine thread with its own tokio runtime. Commands run one
/// at a time in submission order; completions arrive on the returned
/// receiver.
pub fn spawn(settings: ApiSettings) -> (EngineHandle, mpsc::Receiver<EngineEvent>) {
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (event_tx, event_rx) = mpsc::channel();
    let api = Arc::new(ReqwestApi::new(settings));

    thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
        while let Ok(command) = cmd_rx.recv() {
            let api = api.clone();
            let event_tx = event_tx.clone();
            runtime.block_on(async move {
                handle_command(api.as_ref(), command, event_tx).await;
            });
        }
    });

    (EngineHandle { cmd_tx }, event_rx)
}

async fn handle_command(
    api: &dyn Api,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Upload { file, options } => {
            uplink_info!("upload start file={:?}", file);
            let result = api.upload(&file, &options).await;
            if let Err(err) = &result {
                uplink_warn!("upload failed: {err}");
            }
            let _ = event_tx.send(EngineEvent::UploadCompleted { result });
        }
        EngineCommand::FetchEntry { path } => {
            uplink_info!("fetch entry path={path}");
            let result = api.fetch_entry(&path).await;
            if let Err(err) = &result {
                uplink_warn!("entry fetch failed: {err}");
            }
            let _ = event_tx.send(EngineEvent::EntryLoaded { path, result });
        }
    }
}
