//! Uplink core: pure upload-session state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    base_name, ContentBody, ContentPane, EntryFailure, LogLine, Region, SessionState,
    UploadFailure, UploadReport, ACCEPTED_EXTENSIONS, FAILURE_REVERT_DELAY_MS,
    MAX_TICK_INCREMENT, PROGRESS_CAP_IN_FLIGHT, SUCCESS_REVEAL_DELAY_MS, TICK_INTERVAL_MS,
};
pub use update::update;
pub use view_model::{EntryRowView, ResultsSummary, SessionViewModel};
