use crate::file_entry::FileEntry;

/// The single editing context: `current_file` is `None` while untitled.
#[derive(Debug, Default)]
pub struct SessionState {
    pub current_file: Option<FileEntry>,
    pub buffer: String,
}

/// Read-only view of the session handed to the front end after every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub files: Vec<FileEntry>,
    pub current_file_name: Option<String>,
    pub buffer: String,
    pub can_open_externally: bool,
}

/// Result of a plain save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(FileEntry),
    /// Untitled buffer; the caller must prompt for a name and use `save_as`.
    NeedsDestination { suggested: String },
}
