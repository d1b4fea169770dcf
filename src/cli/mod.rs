//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// notebag - named notes created from a template and opened in your editor
#[derive(Parser, Debug)]
#[command(name = "notebag", version, about, long_about = None)]
pub struct Cli {
    /// Notes directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List note names, optionally filtered by a search string
    #[command(name = "ls")]
    List(ListArgs),

    /// Show which action a note name would trigger (Add or Open)
    Action(ActionArgs),

    /// Open the named note, or add it if it doesn't exist yet
    Go(GoArgs),

    /// Add a new note from the template
    Add(AddArgs),

    /// Open an existing note in your editor
    Open(OpenArgs),

    /// Delete a note and its file
    #[command(name = "rm")]
    Delete(DeleteArgs),

    /// Write the config file and prepare the notes directory
    Setup(SetupArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only list names containing this text (case-insensitive)
    #[arg(default_value = "")]
    pub search: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `action` command
#[derive(Parser, Debug)]
pub struct ActionArgs {
    /// Note name as typed
    pub name: String,
}

/// Arguments for the `go` command
#[derive(Parser, Debug)]
pub struct GoArgs {
    /// Note name as typed
    pub name: String,
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Name of the new note
    pub name: String,

    /// Don't open the new note in the editor
    #[arg(long)]
    pub no_edit: bool,
}

/// Arguments for the `open` command
#[derive(Parser, Debug)]
pub struct OpenArgs {
    /// Note name (case-insensitive)
    #[arg(default_value = "")]
    pub name: String,
}

/// Arguments for the `rm` (delete) command
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Note name (case-insensitive)
    #[arg(default_value = "")]
    pub name: String,

    /// Delete without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `setup` command
#[derive(Parser, Debug)]
pub struct SetupArgs {
    /// Directory to keep notes in (created if missing)
    #[arg(long)]
    pub notes_dir: Option<PathBuf>,

    /// Editor command; pass an empty string to use the default application
    #[arg(long)]
    pub editor: Option<String>,

    /// Template filename, relative to the notes directory unless absolute
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Index filename, relative to the notes directory unless absolute
    #[arg(long)]
    pub index_file: Option<PathBuf>,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
