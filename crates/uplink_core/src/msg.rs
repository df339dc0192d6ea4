use std::path::PathBuf;

use crate::{EntryFailure, UploadFailure, UploadReport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User staged a file for submission.
    FileChosen(PathBuf),
    /// User submitted the staged file.
    SubmitClicked,
    /// Cosmetic progress tick while the upload is outstanding.
    ///
    /// The platform's ticker supplies the increment so the state machine
    /// stays deterministic under test.
    ProgressTick { increment: u8 },
    /// The upload request settled, one way or the other. `at` is the
    /// platform-stamped timestamp used for log lines.
    UploadSettled {
        at: String,
        result: Result<UploadReport, UploadFailure>,
    },
    /// A previously scheduled region transition is due.
    TransitionElapsed,
    /// User asked to view the content of a result entry by index.
    ViewRequested { index: usize },
    /// The content fetch for an entry settled. On success the payload is
    /// the pretty-printed JSON body.
    EntryLoaded {
        path: String,
        result: Result<String, EntryFailure>,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
