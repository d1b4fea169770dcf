//! List and action command handlers.

use anyhow::Result;
use std::io::{self, Write};

use super::open_bag;
use crate::bag::NotePaths;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::cli::{ActionArgs, ListArgs};

pub fn handle_list(args: &ListArgs, paths: &NotePaths) -> Result<()> {
    handle_list_impl(args, paths, &mut io::stdout().lock())
}

pub(crate) fn handle_list_impl<W: Write>(
    args: &ListArgs,
    paths: &NotePaths,
    out: &mut W,
) -> Result<()> {
    let bag = open_bag(paths)?;
    let search = args.search.trim();

    match args.format {
        OutputFormat::Human => {
            writeln!(out, "{}", bag.list_label(search))?;
            for name in bag.filter_and_sort(search) {
                writeln!(out, "  {}", name)?;
            }
        }
        OutputFormat::Json => {
            let listing = NoteListing {
                label: bag.list_label(search),
                notes: bag.entries(search),
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&Output::new(listing))?)?;
        }
        OutputFormat::Paths => {
            for entry in bag.entries(search) {
                writeln!(out, "{}", entry.path.display())?;
            }
        }
    }

    Ok(())
}

pub fn handle_action(args: &ActionArgs, paths: &NotePaths) -> Result<()> {
    handle_action_impl(args, paths, &mut io::stdout().lock())
}

pub(crate) fn handle_action_impl<W: Write>(
    args: &ActionArgs,
    paths: &NotePaths,
    out: &mut W,
) -> Result<()> {
    let bag = open_bag(paths)?;
    writeln!(out, "{}", bag.current_action_label(&args.name))?;
    Ok(())
}
