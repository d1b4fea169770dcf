//! Isolated test environment management.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::command::NoteBagCommand;

/// Template written into every test notes directory.
pub const TEST_TEMPLATE: &str = "Title: %(NOTE NAME)%\n\n";

/// An isolated test environment with a temporary notes directory and its
/// own config file.
///
/// The config points `Document Editor` at `true` so commands that open a
/// note succeed without launching anything interactive.
/// The temporary directory is cleaned up when dropped.
pub struct TestEnv {
    temp_dir: TempDir,
    notes_dir: PathBuf,
    config_path: PathBuf,
}

impl TestEnv {
    /// Creates an environment with a notes directory, a template and a
    /// config file naming both.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let notes_dir = temp_dir.path().join("notes");
        let config_path = temp_dir.path().join("NoteBag.toml");

        fs::create_dir_all(&notes_dir).expect("Failed to create notes directory");
        fs::write(notes_dir.join("Template.txt"), TEST_TEMPLATE)
            .expect("Failed to write template");

        let env = Self {
            temp_dir,
            notes_dir,
            config_path,
        };
        env.write_config("true");
        env
    }

    /// Rewrites the config file with the given editor command.
    pub fn write_config(&self, editor: &str) {
        let contents = format!(
            "[NoteBag]\n\"Notes Directory\" = \"notes\"\n\"Document Editor\" = \"{}\"\n",
            editor
        );
        fs::write(&self.config_path, contents).expect("Failed to write config");
    }

    /// Returns the root of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Returns the notes directory.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Returns the config file path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the index file path.
    pub fn index_path(&self) -> PathBuf {
        self.notes_dir.join("NoteBag.index")
    }

    /// Returns a command already pointed at this environment's config.
    pub fn cmd(&self) -> NoteBagCommand {
        NoteBagCommand::new().config(&self.config_path)
    }

    /// Reads a document from the notes directory.
    pub fn read_note(&self, filename: &str) -> String {
        fs::read_to_string(self.notes_dir.join(filename)).expect("Failed to read note")
    }

    /// Returns true if the document exists in the notes directory.
    pub fn note_exists(&self, filename: &str) -> bool {
        self.notes_dir.join(filename).exists()
    }

    /// Reads the index file as JSON.
    pub fn read_index(&self) -> serde_json::Value {
        let contents = fs::read_to_string(self.index_path()).expect("Failed to read index");
        serde_json::from_str(&contents).expect("Index was not valid JSON")
    }

    /// Adds notes through the CLI without opening an editor.
    pub fn add_notes(&self, names: &[&str]) {
        for name in names {
            self.cmd().add(name).assert().success();
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_layout() {
        let env = TestEnv::new();
        assert!(env.notes_dir().is_dir());
        assert!(env.config_path().is_file());
        assert!(env.note_exists("Template.txt"));
        assert!(!env.index_path().exists());
    }

    #[test]
    fn test_env_write_config_sets_editor() {
        let env = TestEnv::new();
        env.write_config("my-editor --wait");
        let contents = fs::read_to_string(env.config_path()).unwrap();
        assert!(contents.contains("\"Document Editor\" = \"my-editor --wait\""));
        assert!(contents.contains("[NoteBag]"));
    }
}
