use std::path::{Path, PathBuf};

/// Extensions handed to the external viewer, compared lowercase.
const EXTERNAL_VIEW_EXTENSIONS: [&str; 2] = [".html", ".htm"];

pub const HTML_MIME_TYPE: &str = "text/html";

/// One file directly under the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
}

impl FileEntry {
    pub fn new(name: impl Into<String>, path: PathBuf) -> Self {
        Self {
            name: name.into(),
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Checks the name only, never the content.
    pub fn is_external_viewable(&self) -> bool {
        let name = self.name.to_lowercase();
        EXTERNAL_VIEW_EXTENSIONS
            .iter()
            .any(|extension| name.ends_with(extension))
    }

    pub fn mime_type(&self) -> Option<&'static str> {
        self.is_external_viewable().then_some(HTML_MIME_TYPE)
    }
}
