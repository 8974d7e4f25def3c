use log::{info, warn};

use super::{SaveOutcome, SessionState, Snapshot};
use crate::external::ExternalOpener;
use crate::file_entry::FileEntry;
use crate::repository::{FileRepository, ReadResult, WriteError};

pub const DEFAULT_NEW_FILE_NAME: &str = "untitled.txt";
pub const UNTITLED_TITLE: &str = "Sapphire";

/// Coordinates the one editing buffer against the repository.
///
/// Every mutating operation borrows the session mutably, so a read or write
/// always finishes before the next operation can observe the state.
pub struct EditorSession<R, O> {
    pub(crate) state: SessionState,
    repository: R,
    opener: O,
}

impl<R: FileRepository, O: ExternalOpener> EditorSession<R, O> {
    pub fn new(repository: R, opener: O) -> Self {
        Self {
            state: SessionState::default(),
            repository,
            opener,
        }
    }

    pub fn current_file(&self) -> Option<&FileEntry> {
        self.state.current_file.as_ref()
    }

    pub fn buffer(&self) -> &str {
        &self.state.buffer
    }

    pub fn title(&self) -> &str {
        self.current_file()
            .map(|entry| entry.name.as_str())
            .unwrap_or(UNTITLED_TITLE)
    }

    pub async fn list_files(&self) -> Vec<FileEntry> {
        self.repository.list().await
    }

    /// Binds to `entry` and replaces the buffer, discarding any edits.
    ///
    /// An unreadable file still binds, with an empty buffer.
    pub async fn open(&mut self, entry: FileEntry) {
        let result = self.repository.read(&entry).await;
        if let ReadResult::Failed(e) = &result {
            warn!("Opening {:?} with an empty buffer: {}", entry.name, e);
        }
        let text = result.into_text();

        info!("Opened {:?}", entry.name);
        self.state.current_file = Some(entry);
        self.state.buffer = text;
    }

    pub fn edit(&mut self, text: impl Into<String>) {
        self.state.buffer = text.into();
    }

    pub async fn save(&mut self) -> Result<SaveOutcome, WriteError> {
        let Some(entry) = self.state.current_file.clone() else {
            return Ok(SaveOutcome::NeedsDestination {
                suggested: self.new_file(),
            });
        };

        self.repository.write(&entry, &self.state.buffer).await?;
        info!("Saved {:?}", entry.name);
        Ok(SaveOutcome::Saved(entry))
    }

    /// Writes the buffer to `name` and binds to it. An existing file of that
    /// name is overwritten. On failure the session is left as it was.
    pub async fn save_as(&mut self, name: &str) -> Result<FileEntry, WriteError> {
        let target = self.repository.entry_for(name)?;
        self.repository.write(&target, &self.state.buffer).await?;

        info!("Saved as {:?}", target.name);
        self.state.current_file = Some(target.clone());
        Ok(target)
    }

    /// Suggested name for the save-as prompt; changes nothing.
    pub fn new_file(&self) -> String {
        DEFAULT_NEW_FILE_NAME.to_string()
    }

    pub fn can_open_externally(&self) -> bool {
        self.current_file()
            .is_some_and(|entry| entry.is_external_viewable())
    }

    /// Returns whether the hand-off was issued.
    pub fn request_open_externally(&self) -> bool {
        let Some(entry) = self.current_file() else {
            return false;
        };
        let Some(mime_type) = entry.mime_type() else {
            return false;
        };

        self.opener.open_externally(entry.path(), mime_type);
        true
    }

    pub async fn snapshot(&self) -> Snapshot {
        Snapshot {
            files: self.list_files().await,
            current_file_name: self.current_file().map(|entry| entry.name.clone()),
            buffer: self.state.buffer.clone(),
            can_open_externally: self.can_open_externally(),
        }
    }
}
