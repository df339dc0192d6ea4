use crate::{ContentPane, LogLine, Region};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionViewModel {
    pub region: Region,
    /// Cosmetic progress in [0, 100]; not derived from transfer bytes.
    pub progress: u8,
    pub log: Vec<LogLine>,
    /// Pre-flight validation error, shown without contacting the server.
    pub validation: Option<String>,
    pub summary: Option<ResultsSummary>,
    pub entries: Vec<EntryRowView>,
    pub content: Option<ContentPane>,
    /// False while a request is outstanding; one upload at a time.
    pub submit_enabled: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsSummary {
    pub output_dir: Option<String>,
    pub file_count: usize,
}

/// One row in the results list, in server order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRowView {
    pub index: usize,
    /// Base name of the entry path.
    pub label: String,
    pub path: String,
}
