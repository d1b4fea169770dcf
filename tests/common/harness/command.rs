//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `notebag` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct NoteBagCommand {
    args: Vec<String>,
    stdin: Option<String>,
}

impl NoteBagCommand {
    /// Creates a new command for the `notebag` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            stdin: None,
        }
    }

    /// Sets the `--config` option to point at a config file.
    pub fn config(mut self, path: &Path) -> Self {
        self.args.push("--config".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Sets the `--dir` option to override the notes directory.
    pub fn dir(mut self, path: &Path) -> Self {
        self.args.push("--dir".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Feeds `input` to the command's stdin.
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("notebag").expect("Failed to find notebag binary");
        cmd.args(&self.args).env_remove("RUST_LOG");
        if let Some(input) = self.stdin {
            cmd.write_stdin(input);
        }
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `ls` command.
    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    /// Configures for the `ls` command with a search string.
    pub fn search(self, text: &str) -> Self {
        self.args(["ls", text])
    }

    /// Configures for the `action` command.
    pub fn action(self, name: &str) -> Self {
        self.args(["action", name])
    }

    /// Configures for the `go` command.
    pub fn go(self, name: &str) -> Self {
        self.args(["go", name])
    }

    /// Configures for the `add` command without launching an editor.
    pub fn add(self, name: &str) -> Self {
        self.args(["add", "--no-edit", name])
    }

    /// Configures for the `open` command.
    pub fn open(self, name: &str) -> Self {
        self.args(["open", name])
    }

    /// Configures for the `rm` command.
    pub fn rm(self, name: &str) -> Self {
        self.args(["rm", name])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }

    /// Adds `--format paths` to the command.
    pub fn format_paths(self) -> Self {
        self.args(["--format", "paths"])
    }
}

impl Default for NoteBagCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_command_runs_binary() {
        NoteBagCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("NoteBag.toml");
        let cmd = NoteBagCommand::new().config(&path);
        let args = cmd.get_args();
        assert_eq!(args[0], "--config");
        assert_eq!(args[1], path.to_string_lossy());
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = NoteBagCommand::new().search("an").format_json();
        let args = cmd.get_args();
        assert_eq!(args, ["ls", "an", "--format", "json"]);
    }
}
