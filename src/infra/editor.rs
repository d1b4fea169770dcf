//! Launching an external editor for a note, detached from this process.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use thiserror::Error;
use tracing::info;

/// Errors when starting an editor.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("editor command is empty")]
    EmptyCommand,

    #[error("failed to launch editor '{editor}': {source}")]
    Spawn {
        editor: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to open {path} with the default application: {source}")]
    Opener {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Opens a note file for editing (allows mocking in tests).
pub trait EditorLauncher {
    fn open(&self, path: &Path) -> Result<(), EditorError>;
}

/// Launches a configured editor command, or the platform default opener,
/// without waiting for it to exit.
#[derive(Debug, Clone, Default)]
pub struct DetachedEditor {
    command: Option<String>,
}

impl DetachedEditor {
    /// Creates a launcher for `command`.
    ///
    /// `None` or a blank command means the platform default opener.
    pub fn new(command: Option<&str>) -> Self {
        let command = command
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);
        Self { command }
    }

    /// The configured editor command, if any.
    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }
}

impl EditorLauncher for DetachedEditor {
    fn open(&self, path: &Path) -> Result<(), EditorError> {
        match &self.command {
            Some(editor) => spawn_detached(editor, path),
            None => {
                info!(path = %path.display(), "opening note with default application");
                open::that_detached(path).map_err(|source| EditorError::Opener {
                    path: path.display().to_string(),
                    source,
                })
            }
        }
    }
}

/// Builds the command line for `editor` (which may carry arguments such as
/// `"code --new-window"`) with `path` appended.
pub fn editor_command(editor: &str, path: &Path) -> Result<Command, EditorError> {
    let mut parts = editor.split_whitespace();
    let program = parts.next().ok_or(EditorError::EmptyCommand)?;

    let mut cmd = Command::new(program);
    cmd.args(parts)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    Ok(cmd)
}

// The child handle is dropped right away; the editor keeps running on its own.
fn spawn_detached(editor: &str, path: &Path) -> Result<(), EditorError> {
    let child = editor_command(editor, path)?
        .spawn()
        .map_err(|source| EditorError::Spawn {
            editor: editor.to_string(),
            source,
        })?;

    info!(editor, pid = child.id(), path = %path.display(), "launched editor");
    Ok(())
}
