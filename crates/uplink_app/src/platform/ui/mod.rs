mod render;

pub use render::{Renderer, ResultsCommand, UploadCommand};
