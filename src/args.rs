use std::path::PathBuf;

use clap::Parser;

/// Command line configuration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Working directory holding the notes (defaults to the app data directory)
    #[arg(long)]
    pub root_dir: Option<PathBuf>,

    /// Reject file names containing path separators or `.`/`..`
    #[arg(long)]
    pub confine_names: bool,

    /// Program used to open HTML files externally
    #[arg(long)]
    pub viewer: Option<String>,

    /// Extra argument passed to the viewer before the file path (repeatable)
    #[arg(long = "viewer-arg")]
    pub viewer_args: Vec<String>,

    /// Log level written to stderr (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
