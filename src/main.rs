use args::Args;
use clap::Parser;
use log::{LevelFilter, error, info};

use config::NotepadConfig;
use console::Console;
use editor::EditorSession;
use external::CommandOpener;
use repository::LocalRepository;

mod args;
mod config;
mod console;
mod editor;
mod external;
mod file_entry;
mod repository;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let level = args.log_level.parse().unwrap_or(LevelFilter::Info);
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = match NotepadConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(1);
        }
    };

    let repository = LocalRepository::new(config.root_dir.clone(), config.name_policy);
    let opener = CommandOpener::new(config.viewer.clone(), config.viewer_args.clone());
    let session = EditorSession::new(repository, opener);

    info!("Starting notepad in {:?}", config.root_dir);

    let mut console = Console::new(
        session,
        tokio::io::BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    );

    if let Err(e) = console.run().await {
        error!("Console I/O failed: {}", e);
        std::process::exit(1);
    }
}
