use std::path::Path;
use std::process::Stdio;

use log::{error, info};
use tokio::process::Command;

/// One-way hand-off of a file to another application.
pub trait ExternalOpener {
    fn open_externally(&self, path: &Path, mime_type: &str);
}

/// Spawns a viewer program with the file path as its last argument.
#[derive(Debug, Clone)]
pub struct CommandOpener {
    program: String,
    args: Vec<String>,
}

impl CommandOpener {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl ExternalOpener for CommandOpener {
    fn open_externally(&self, path: &Path, mime_type: &str) {
        info!(
            "Opening {:?} ({}) with {} {:?}",
            path, mime_type, self.program, self.args
        );

        // The child is detached; its exit status is never observed.
        let spawned = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        if let Err(e) = spawned {
            error!("Failed to start viewer {}: {}", self.program, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_program_is_logged_not_raised() {
        let opener = CommandOpener::new("definitely-not-a-viewer-binary", Vec::new());
        opener.open_externally(Path::new("/tmp/page.html"), "text/html");
    }
}
