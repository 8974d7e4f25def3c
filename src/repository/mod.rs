//! Flat working-directory storage.
//!
//! The repository is the only component touching the disk. Listing and reading
//! never fail outward: listing degrades to fewer entries and a failed read is
//! reported through [`ReadResult`] so callers may substitute empty text.

pub mod local;
pub mod path_resolver;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::file_entry::FileEntry;

pub use local::LocalRepository;
pub use path_resolver::{NamePolicy, PathResolver};

#[derive(Debug, Error)]
pub enum ReadFailure {
    #[error("file not found: {0:?}")]
    NotFound(PathBuf),
    #[error("not a regular file: {0:?}")]
    NotAFile(PathBuf),
    #[error("permission denied: {0:?}")]
    PermissionDenied(PathBuf),
    #[error("file is not valid UTF-8 text: {0:?}")]
    InvalidEncoding(PathBuf),
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReadFailure {
    pub(crate) fn from_io(path: PathBuf, e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => ReadFailure::NotFound(path),
            io::ErrorKind::PermissionDenied => ReadFailure::PermissionDenied(path),
            io::ErrorKind::InvalidData => ReadFailure::InvalidEncoding(path),
            _ => ReadFailure::Io { path, source: e },
        }
    }
}

#[derive(Debug)]
pub enum ReadResult {
    Text(String),
    Failed(ReadFailure),
}

impl ReadResult {
    /// Degrades a failed read to empty text.
    pub fn into_text(self) -> String {
        match self {
            ReadResult::Text(text) => text,
            ReadResult::Failed(_) => String::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("invalid file name: {0:?}")]
    InvalidName(String),
    #[error("failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Storage seam used by the editor session.
#[allow(async_fn_in_trait)]
pub trait FileRepository {
    /// Regular files directly under the root, ordered by lowercase name.
    async fn list(&self) -> Vec<FileEntry>;

    async fn read(&self, entry: &FileEntry) -> ReadResult;

    /// Builds a write target from a user supplied name without touching disk.
    fn entry_for(&self, name: &str) -> Result<FileEntry, WriteError>;

    /// Replaces the whole file, creating it if absent.
    async fn write(&self, entry: &FileEntry, content: &str) -> Result<(), WriteError>;
}
