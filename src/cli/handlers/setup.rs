//! Setup and completions command handlers.

use anyhow::{Context, Result, bail};
use clap::CommandFactory;
use std::io::{self, Write};
use std::path::Path;

use crate::cli::config::Config;
use crate::cli::{Cli, CompletionsArgs, SetupArgs};

/// Template written by `setup` when the configured template is missing.
pub const DEFAULT_TEMPLATE: &str = "%(NOTE NAME)%\n\n";

/// Writes the config file and prepares the notes directory and template.
///
/// Settings not given on the command line keep their current values. A
/// notes directory must be known after merging, either from `--notes-dir`
/// or from an existing config.
pub(crate) fn handle_setup_impl<W: Write>(
    args: &SetupArgs,
    config_path: &Path,
    config: &Config,
    out: &mut W,
) -> Result<()> {
    let mut updated = config.clone();

    if let Some(dir) = &args.notes_dir {
        let dir = std::path::absolute(dir)
            .with_context(|| format!("invalid notes directory: {}", dir.display()))?;
        updated.notes_dir = Some(dir);
    }
    if let Some(editor) = &args.editor {
        updated.editor = Some(editor.trim().to_string());
    }
    if let Some(template) = &args.template {
        updated.template_file = Some(template.clone());
    }
    if let Some(index_file) = &args.index_file {
        updated.notes_list_file = Some(index_file.clone());
    }

    if updated.notes_dir.is_none() {
        bail!("no notes directory configured; pass --notes-dir <DIR>");
    }

    updated.save_to(config_path)?;
    writeln!(out, "Wrote config: {}", config_path.display())?;

    let paths = updated.paths(None);
    std::fs::create_dir_all(&paths.notes_dir).with_context(|| {
        format!(
            "failed to create notes directory: {}",
            paths.notes_dir.display()
        )
    })?;
    writeln!(out, "Notes directory: {}", paths.notes_dir.display())?;

    if !paths.template_file.exists() {
        if let Some(parent) = paths.template_file.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(&paths.template_file, DEFAULT_TEMPLATE).with_context(|| {
            format!(
                "failed to write template: {}",
                paths.template_file.display()
            )
        })?;
        writeln!(out, "Created template: {}", paths.template_file.display())?;
    } else {
        writeln!(out, "Template: {}", paths.template_file.display())?;
    }

    tracing::info!(config = %config_path.display(), "setup complete");
    Ok(())
}

pub fn handle_setup(args: &SetupArgs, config_path: &Path, config: &Config) -> Result<()> {
    handle_setup_impl(args, config_path, config, &mut io::stdout().lock())
}

pub fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "notebag", &mut io::stdout());
    Ok(())
}
