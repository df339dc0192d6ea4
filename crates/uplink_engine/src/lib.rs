//! Uplink engine: HTTP boundary to the processing server and effect execution.
mod client;
mod engine;
mod pretty;
mod types;

pub use client::{Api, ApiSettings, ReqwestApi};
pub use engine::{spawn, EngineHandle};
pub use pretty::render_entry;
pub use types::{
    ApiError, EngineEvent, EntryResponse, FailureKind, ProcessOptions, UploadResponse,
};
