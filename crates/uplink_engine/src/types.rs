use std::fmt;

use serde::Deserialize;

/// Body of a `POST /upload` response.
///
/// The server reports either a processed result (`success: true` with the
/// output directory and generated files) or a rejection carrying the
/// subprocess diagnostics.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub stdout: Option<String>,
    #[serde(default)]
    pub stderr: Option<String>,
    #[serde(default)]
    pub output_dir: Option<String>,
    #[serde(default)]
    pub json_files: Vec<String>,
}

/// Body of a `GET /json/{path}` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntryResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// Chunking options posted with the file as plain multipart fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOptions {
    pub chunk_type: String,
    pub chunk_size: u32,
    pub overlap: u32,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            chunk_type: "paragraph".to_string(),
            chunk_size: 1000,
            overlap: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    FileRead,
    Network,
    Timeout,
    HttpStatus(u16),
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::FileRead => write!(f, "file read error"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Decode => write!(f, "undecodable response"),
        }
    }
}

/// Completion events posted by the background engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    UploadCompleted {
        result: Result<UploadResponse, ApiError>,
    },
    EntryLoaded {
        path: String,
        result: Result<EntryResponse, ApiError>,
    },
}
