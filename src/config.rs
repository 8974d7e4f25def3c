use std::path::PathBuf;

use anyhow::{Context, anyhow};
use log::info;

use crate::args::Args;
use crate::repository::NamePolicy;

pub const APP_NAME: &str = "offline-notepad";

#[derive(Debug, Clone)]
pub struct NotepadConfig {
    pub root_dir: PathBuf,
    pub name_policy: NamePolicy,
    pub viewer: String,
    pub viewer_args: Vec<String>,
}

impl NotepadConfig {
    /// Resolves the working directory once and creates it if missing.
    pub fn from_args(args: Args) -> anyhow::Result<Self> {
        let root_dir = match args.root_dir {
            Some(dir) => dir,
            None => default_root_dir()?,
        };

        std::fs::create_dir_all(&root_dir)
            .with_context(|| format!("Failed to create working directory {:?}", root_dir))?;

        let root_dir = root_dir
            .canonicalize()
            .with_context(|| format!("Failed to canonicalize working directory {:?}", root_dir))?;

        if !root_dir.is_dir() {
            return Err(anyhow!("Working directory {:?} is not a directory", root_dir));
        }

        let name_policy = if args.confine_names {
            NamePolicy::Confined
        } else {
            NamePolicy::Verbatim
        };

        let (viewer, viewer_args) = match args.viewer {
            Some(viewer) => (viewer, args.viewer_args),
            None => default_viewer(args.viewer_args),
        };

        info!("Working directory: {:?}", root_dir);
        info!("Name policy: {:?}", name_policy);

        Ok(Self {
            root_dir,
            name_policy,
            viewer,
            viewer_args,
        })
    }
}

fn default_root_dir() -> anyhow::Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", APP_NAME)
        .ok_or_else(|| anyhow!("Could not determine platform data directory"))?;
    Ok(dirs.data_dir().to_path_buf())
}

fn default_viewer(extra: Vec<String>) -> (String, Vec<String>) {
    if cfg!(target_os = "macos") {
        ("open".to_string(), extra)
    } else if cfg!(target_os = "windows") {
        ("explorer".to_string(), extra)
    } else {
        ("xdg-open".to_string(), extra)
    }
}
