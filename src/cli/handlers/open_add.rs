//! Go, Add and Open command handlers.

use anyhow::Result;
use std::io::{self, Write};

use super::{ensure_notes_dir, open_bag};
use crate::bag::{NoteEntry, NotePaths};
use crate::cli::config::Config;
use crate::cli::{AddArgs, GoArgs, OpenArgs};
use crate::domain::NoteAction;
use crate::infra::{DetachedEditor, EditorLauncher};

fn print_entry<W: Write>(out: &mut W, verb: &str, entry: &NoteEntry) -> Result<()> {
    writeln!(out, "{}: {}", verb, entry.name)?;
    writeln!(out, "  {}", entry.path.display())?;
    Ok(())
}

/// Internal implementation that accepts a generic editor launcher.
pub(crate) fn handle_go_impl<E: EditorLauncher, W: Write>(
    args: &GoArgs,
    paths: &NotePaths,
    editor: &E,
    out: &mut W,
) -> Result<()> {
    let mut bag = open_bag(paths)?;
    if bag.current_action(&args.name) == NoteAction::Add {
        ensure_notes_dir(paths)?;
    }

    let activation = bag.activate(&args.name, editor)?;
    let verb = match activation.action {
        NoteAction::Add => "Added",
        NoteAction::Open => "Opened",
    };
    print_entry(out, verb, &activation.note)
}

pub fn handle_go(args: &GoArgs, paths: &NotePaths, config: &Config) -> Result<()> {
    let editor = DetachedEditor::new(config.editor());
    handle_go_impl(args, paths, &editor, &mut io::stdout().lock())
}

pub(crate) fn handle_add_impl<E: EditorLauncher, W: Write>(
    args: &AddArgs,
    paths: &NotePaths,
    editor: &E,
    out: &mut W,
) -> Result<()> {
    ensure_notes_dir(paths)?;
    let mut bag = open_bag(paths)?;

    let entry = bag.add_note(&args.name)?;
    print_entry(out, "Added", &entry)?;

    if !args.no_edit {
        editor.open(&entry.path)?;
    }
    Ok(())
}

pub fn handle_add(args: &AddArgs, paths: &NotePaths, config: &Config) -> Result<()> {
    let editor = DetachedEditor::new(config.editor());
    handle_add_impl(args, paths, &editor, &mut io::stdout().lock())
}

pub(crate) fn handle_open_impl<E: EditorLauncher, W: Write>(
    args: &OpenArgs,
    paths: &NotePaths,
    editor: &E,
    out: &mut W,
) -> Result<()> {
    let bag = open_bag(paths)?;
    let entry = bag.open_note(&args.name, editor)?;
    print_entry(out, "Opened", &entry)
}

pub fn handle_open(args: &OpenArgs, paths: &NotePaths, config: &Config) -> Result<()> {
    let editor = DetachedEditor::new(config.editor());
    handle_open_impl(args, paths, &editor, &mut io::stdout().lock())
}
