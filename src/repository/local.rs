use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use tokio::fs;

use super::{FileRepository, NamePolicy, PathResolver, ReadFailure, ReadResult, WriteError};
use crate::file_entry::FileEntry;

/// Repository backed by one directory on the local filesystem.
pub struct LocalRepository {
    path_resolver: PathResolver,
}

impl LocalRepository {
    pub fn new(root_dir: PathBuf, policy: NamePolicy) -> Self {
        Self {
            path_resolver: PathResolver::new(root_dir, policy),
        }
    }

    pub fn root_dir(&self) -> &Path {
        self.path_resolver.root_dir()
    }
}

impl FileRepository for LocalRepository {
    async fn list(&self) -> Vec<FileEntry> {
        let root = self.root_dir();

        let mut read_dir = match fs::read_dir(root).await {
            Ok(read_dir) => read_dir,
            Err(e) => {
                warn!("Failed to list directory {:?}: {}", root, e);
                return Vec::new();
            }
        };

        let mut files = Vec::new();
        loop {
            match read_dir.next_entry().await {
                Ok(Some(entry)) => {
                    let path = entry.path();
                    // Follows symlinks so a link to a regular file is listed.
                    match fs::metadata(&path).await {
                        Ok(metadata) if metadata.is_file() => {
                            let name = entry.file_name().to_string_lossy().to_string();
                            files.push(FileEntry::new(name, path));
                        }
                        Ok(_) => {}
                        Err(e) => warn!("Failed to get metadata for {:?}: {}", path, e),
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!("Stopped listing {:?}: {}", root, e);
                    break;
                }
            }
        }

        files.sort_by_cached_key(|entry| entry.name.to_lowercase());
        debug!("Listed {} files in {:?}", files.len(), root);
        files
    }

    async fn read(&self, entry: &FileEntry) -> ReadResult {
        let path = entry.path();

        match fs::metadata(path).await {
            Ok(metadata) if !metadata.is_file() => {
                return ReadResult::Failed(ReadFailure::NotAFile(path.to_path_buf()));
            }
            Ok(_) => {}
            Err(e) => return ReadResult::Failed(ReadFailure::from_io(path.to_path_buf(), e)),
        }

        match fs::read(path).await {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(text) => {
                    info!("Read {} bytes from {:?}", text.len(), path);
                    ReadResult::Text(text)
                }
                Err(_) => ReadResult::Failed(ReadFailure::InvalidEncoding(path.to_path_buf())),
            },
            Err(e) => ReadResult::Failed(ReadFailure::from_io(path.to_path_buf(), e)),
        }
    }

    fn entry_for(&self, name: &str) -> Result<FileEntry, WriteError> {
        self.path_resolver.resolve_name(name)
    }

    async fn write(&self, entry: &FileEntry, content: &str) -> Result<(), WriteError> {
        let path = entry.path();

        match fs::write(path, content).await {
            Ok(()) => {
                info!("Wrote {} bytes to {:?}", content.len(), path);
                Ok(())
            }
            Err(e) => {
                warn!("Failed to write {:?}: {}", path, e);
                Err(WriteError::Io {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        }
    }
}
