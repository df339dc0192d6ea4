mod platform;

use std::path::PathBuf;

use clap::Parser;
use uplink_engine::ProcessOptions;

use platform::logging::LogDestination;

/// Terminal client for the document-processing server: upload a file and
/// review the generated JSON files.
#[derive(Parser)]
#[command(name = "uplink", version, about)]
struct Cli {
    /// Base URL of the processing server.
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    server: String,

    /// File to submit immediately on startup.
    file: Option<PathBuf>,

    /// Chunking strategy passed through to the server.
    #[arg(long, default_value = "paragraph")]
    chunk_type: String,

    /// Chunk size passed through to the server.
    #[arg(long, default_value_t = 1000)]
    chunk_size: u32,

    /// Chunk overlap passed through to the server.
    #[arg(long, default_value_t = 100)]
    overlap: u32,

    /// Mirror the log to the terminal in addition to uplink.log.
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let destination = if cli.verbose {
        LogDestination::Both
    } else {
        LogDestination::File
    };
    platform::logging::initialize(destination);

    platform::run(platform::RunConfig {
        server: cli.server,
        file: cli.file,
        options: ProcessOptions {
            chunk_type: cli.chunk_type,
            chunk_size: cli.chunk_size,
            overlap: cli.overlap,
        },
    })
}
