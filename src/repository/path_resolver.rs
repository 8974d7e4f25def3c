use std::path::{Path, PathBuf, is_separator};

use log::warn;

use super::WriteError;
use crate::file_entry::FileEntry;

/// How user supplied file names are mapped to paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamePolicy {
    /// Names are joined to the root as typed, separators and `..` included.
    #[default]
    Verbatim,
    /// Only bare names are accepted.
    Confined,
}

pub struct PathResolver {
    root_dir: PathBuf,
    policy: NamePolicy,
}

impl PathResolver {
    pub fn new(root_dir: PathBuf, policy: NamePolicy) -> Self {
        Self { root_dir, policy }
    }

    pub fn resolve_name(&self, name: &str) -> Result<FileEntry, WriteError> {
        if name.trim().is_empty() {
            return Err(WriteError::InvalidName(name.to_string()));
        }

        if self.policy == NamePolicy::Confined
            && (name.chars().any(is_separator) || name == "." || name == "..")
        {
            warn!("Rejected file name outside the working directory: {:?}", name);
            return Err(WriteError::InvalidName(name.to_string()));
        }

        // A leading separator is part of the name, not an absolute path.
        let relative = name.trim_start_matches(is_separator);
        if relative.is_empty() {
            return Err(WriteError::InvalidName(name.to_string()));
        }

        Ok(FileEntry::new(name, self.root_dir.join(Path::new(relative))))
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(policy: NamePolicy) -> PathResolver {
        PathResolver::new(PathBuf::from("/notes"), policy)
    }

    #[test]
    fn bare_name_is_joined_to_root() {
        let entry = resolver(NamePolicy::Verbatim).resolve_name("todo.txt").unwrap();
        assert_eq!(entry.name, "todo.txt");
        assert_eq!(entry.path, PathBuf::from("/notes/todo.txt"));
    }

    #[test]
    fn name_is_kept_as_typed() {
        let entry = resolver(NamePolicy::Verbatim).resolve_name(" a.html ").unwrap();
        assert_eq!(entry.name, " a.html ");
        assert_eq!(entry.path, PathBuf::from("/notes/ a.html "));
    }

    #[test]
    fn blank_name_is_invalid() {
        for name in ["", "   ", "\t"] {
            assert!(matches!(
                resolver(NamePolicy::Verbatim).resolve_name(name),
                Err(WriteError::InvalidName(_))
            ));
        }
    }

    #[test]
    fn verbatim_passes_traversal_through() {
        let entry = resolver(NamePolicy::Verbatim).resolve_name("../escape.txt").unwrap();
        assert_eq!(entry.name, "../escape.txt");
        assert_eq!(entry.path, PathBuf::from("/notes/../escape.txt"));

        let entry = resolver(NamePolicy::Verbatim).resolve_name("/etc/x").unwrap();
        assert_eq!(entry.path, PathBuf::from("/notes/etc/x"));
    }

    #[test]
    fn confined_rejects_separators_and_dot_names() {
        let resolver = resolver(NamePolicy::Confined);
        for name in ["../escape.txt", "a/b.txt", "/abs", ".", ".."] {
            assert!(
                matches!(resolver.resolve_name(name), Err(WriteError::InvalidName(_))),
                "{name} should be rejected"
            );
        }
        assert!(resolver.resolve_name("..hidden.txt").is_ok());
    }
}
