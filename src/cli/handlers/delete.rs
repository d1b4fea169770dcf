//! Delete command handler.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

use super::open_bag;
use crate::bag::NotePaths;
use crate::cli::DeleteArgs;

/// Asks the user a yes/no question (allows scripting answers in tests).
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

/// Prompts on stderr and reads the answer from stdin.
///
/// Only `y` or `yes` (any case) confirm; anything else, including end of
/// input, declines.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        eprint!("{} [y/N] ", question);
        io::stderr().flush().ok();

        let mut answer = String::new();
        io::stdin()
            .lock()
            .read_line(&mut answer)
            .context("failed to read confirmation")?;

        Ok(is_yes(&answer))
    }
}

pub(crate) fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

pub(crate) fn handle_delete_impl<C: Confirm, W: Write>(
    args: &DeleteArgs,
    paths: &NotePaths,
    confirm: &mut C,
    out: &mut W,
) -> Result<()> {
    let mut bag = open_bag(paths)?;
    let entry = bag.entry(&args.name)?;

    let question = format!("Really delete note '{}'?", entry.name);
    if !args.yes && !confirm.confirm(&question)? {
        writeln!(out, "Kept: {}", entry.name)?;
        return Ok(());
    }

    let deleted = bag.delete_note(&entry.name)?;
    writeln!(out, "Deleted: {}", deleted.name)?;
    writeln!(out, "  {}", deleted.path.display())?;
    Ok(())
}

pub fn handle_delete(args: &DeleteArgs, paths: &NotePaths) -> Result<()> {
    handle_delete_impl(args, paths, &mut StdinConfirm, &mut io::stdout().lock())
}
