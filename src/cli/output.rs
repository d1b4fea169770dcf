//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::bag::NoteEntry;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
    /// Plain file paths, one per line
    Paths,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// The note list as shown for a search string.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub label: String,
    pub notes: Vec<NoteEntry>,
}
