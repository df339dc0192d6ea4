use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start the multipart upload for the staged file and the cosmetic
    /// progress ticker alongside it.
    BeginUpload { file: PathBuf },
    /// Fetch the JSON content of a result entry. The path always comes from
    /// the current upload's result list, never from free-form input.
    FetchEntry { path: String },
    /// Ask the platform to post `Msg::TransitionElapsed` after the delay.
    ScheduleTransition { delay_ms: u64 },
}
