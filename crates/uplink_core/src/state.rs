use std::path::{Path, PathBuf};

use crate::view_model::{EntryRowView, ResultsSummary, SessionViewModel};

/// File extensions the processing server accepts for upload.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["txt", "pdf", "md", "docx", "xlsx"];

/// Interval of the cosmetic progress ticker while an upload is outstanding.
pub const TICK_INTERVAL_MS: u64 = 500;
/// Largest progress increment a single tick may contribute.
pub const MAX_TICK_INCREMENT: u8 = 10;
/// Ceiling for ticked progress; only request completion reaches 100.
pub const PROGRESS_CAP_IN_FLIGHT: u8 = 90;
/// Delay before revealing the results region after a successful upload.
pub const SUCCESS_REVEAL_DELAY_MS: u64 = 1000;
/// Delay before reverting to the upload region after a failure.
pub const FAILURE_REVERT_DELAY_MS: u64 = 2000;

/// The mutually exclusive UI regions. Exactly one is visible at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    #[default]
    Upload,
    Processing,
    Results,
}

/// One timestamped line in the session log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub at: String,
    pub text: String,
}

/// Accepted upload outcome: where the server wrote its output and the
/// generated files, in server order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReport {
    pub output_dir: Option<String>,
    pub entries: Vec<String>,
}

/// Why an upload did not produce results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadFailure {
    /// The server answered but reported `success: false`.
    Rejected { message: String, stderr: String },
    /// The request itself failed (network, timeout, bad status, bad body).
    Transport { detail: String },
}

/// Why an entry's content could not be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryFailure {
    Rejected { message: String },
    Transport { detail: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBody {
    /// Pretty-printed JSON content of the entry.
    Json(String),
    /// Inline error text shown in place of content.
    Error(String),
}

/// The content pane: one entry's rendered content or an inline error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPane {
    pub title: String,
    pub body: ContentBody,
}

/// Returns the final path segment, the label entries are listed under.
pub fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// State of one upload-review session.
///
/// All mutation goes through `update`; the platform only ever reads the
/// view model and consumes the dirty flag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    region: Region,
    progress: u8,
    log: Vec<LogLine>,
    selected_file: Option<PathBuf>,
    validation: Option<String>,
    outcome: Option<UploadReport>,
    content: Option<ContentPane>,
    pending: Option<Region>,
    in_flight: bool,
    dirty: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn view(&self) -> SessionViewModel {
        SessionViewModel {
            region: self.region,
            progress: self.progress,
            log: self.log.clone(),
            validation: self.validation.clone(),
            summary: self.outcome.as_ref().map(|outcome| ResultsSummary {
                output_dir: outcome.output_dir.clone(),
                file_count: outcome.entries.len(),
            }),
            entries: self
                .outcome
                .as_ref()
                .map(|outcome| {
                    outcome
                        .entries
                        .iter()
                        .enumerate()
                        .map(|(index, path)| EntryRowView {
                            index,
                            label: base_name(path).to_string(),
                            path: path.clone(),
                        })
                        .collect()
                })
                .unwrap_or_default(),
            content: self.content.clone(),
            submit_enabled: self.region == Region::Upload && !self.in_flight,
            dirty: self.dirty,
        }
    }

    /// Returns and clears the dirty flag; the platform renders when set.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn selected_file(&self) -> Option<PathBuf> {
        self.selected_file.clone()
    }

    pub(crate) fn choose_file(&mut self, file: PathBuf) {
        self.selected_file = Some(file);
        self.validation = None;
        self.mark_dirty();
    }

    pub(crate) fn set_validation(&mut self, text: impl Into<String>) {
        self.validation = Some(text.into());
        self.mark_dirty();
    }

    /// Enters the processing region with a clean slate for the new request.
    pub(crate) fn begin_submission(&mut self) {
        self.region = Region::Processing;
        self.progress = 0;
        self.log.clear();
        self.validation = None;
        self.outcome = None;
        self.content = None;
        self.pending = None;
        self.in_flight = true;
        self.mark_dirty();
    }

    /// Advances cosmetic progress while the upload is outstanding. Capped
    /// so only settlement reaches 100; a zero increment is a no-op.
    pub(crate) fn apply_tick(&mut self, increment: u8) {
        if !self.in_flight || increment == 0 {
            return;
        }
        let step = increment.min(MAX_TICK_INCREMENT);
        let next = self.progress.saturating_add(step).min(PROGRESS_CAP_IN_FLIGHT);
        if next != self.progress {
            self.progress = next;
            self.mark_dirty();
        }
    }

    pub(crate) fn settle_success(&mut self, at: String, report: UploadReport) {
        self.in_flight = false;
        self.progress = 100;
        self.push_log(at, "file processed successfully");
        self.outcome = Some(report);
        self.pending = Some(Region::Results);
        self.mark_dirty();
    }

    pub(crate) fn settle_failure(&mut self, at: String, failure: UploadFailure) {
        self.in_flight = false;
        self.progress = 100;
        match failure {
            UploadFailure::Rejected { message, stderr } => {
                self.push_log(at.clone(), format!("processing failed: {message}"));
                self.push_log(at, format!("error details: {stderr}"));
            }
            UploadFailure::Transport { detail } => {
                self.push_log(at, format!("request failed: {detail}"));
            }
        }
        self.pending = Some(Region::Upload);
        self.mark_dirty();
    }

    pub(crate) fn apply_pending_transition(&mut self) {
        if let Some(region) = self.pending.take() {
            self.region = region;
            self.mark_dirty();
        }
    }

    /// Resolves a viewer index against the current outcome. Only paths the
    /// server returned for this session are ever reachable.
    pub(crate) fn entry_path(&self, index: usize) -> Option<String> {
        if self.region != Region::Results {
            return None;
        }
        self.outcome
            .as_ref()
            .and_then(|outcome| outcome.entries.get(index))
            .cloned()
    }

    pub(crate) fn apply_entry(&mut self, path: String, result: Result<String, EntryFailure>) {
        let title = base_name(&path).to_string();
        let body = match result {
            Ok(rendered) => ContentBody::Json(rendered),
            Err(EntryFailure::Rejected { message }) => {
                ContentBody::Error(format!("unable to load file: {message}"))
            }
            Err(EntryFailure::Transport { detail }) => {
                ContentBody::Error(format!("request failed: {detail}"))
            }
        };
        self.content = Some(ContentPane { title, body });
        self.mark_dirty();
    }

    fn push_log(&mut self, at: String, text: impl Into<String>) {
        self.log.push(LogLine {
            at,
            text: text.into(),
        });
    }
}

/// Pre-flight check mirroring the server's accepted-extension set.
pub(crate) fn check_extension(file: &Path) -> Result<(), String> {
    let ext = file
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match ext {
        Some(ext) if ACCEPTED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        Some(ext) => Err(format!(
            "file type \"{ext}\" is not accepted (expected one of: {})",
            ACCEPTED_EXTENSIONS.join(", ")
        )),
        None => Err(format!(
            "file has no extension (expected one of: {})",
            ACCEPTED_EXTENSIONS.join(", ")
        )),
    }
}
