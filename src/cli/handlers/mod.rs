//! Command handlers for the CLI.

mod delete;
mod list;
mod open_add;
mod setup;


use anyhow::{Context, Result, bail};

use crate::bag::{NoteBag, NotePaths};

// Re-export public items
pub use delete::{Confirm, StdinConfirm, handle_delete};
pub use list::{handle_action, handle_list};
pub use open_add::{handle_add, handle_go, handle_open};
pub use setup::{DEFAULT_TEMPLATE, handle_completions, handle_setup};

// Re-export for tests
#[cfg(test)]
pub(crate) use delete::handle_delete_impl;
#[cfg(test)]
pub(crate) use list::{handle_action_impl, handle_list_impl};
#[cfg(test)]
pub(crate) use open_add::{handle_add_impl, handle_go_impl, handle_open_impl};
#[cfg(test)]
pub(crate) use setup::handle_setup_impl;

// ===========================================
// Shared Utilities
// ===========================================

/// Loads the note index for `paths`.
pub(crate) fn open_bag(paths: &NotePaths) -> Result<NoteBag> {
    NoteBag::load(paths.clone()).with_context(|| {
        format!(
            "failed to load note index at {}",
            paths.index_file.display()
        )
    })
}

/// Fails unless the notes directory exists.
pub(crate) fn ensure_notes_dir(paths: &NotePaths) -> Result<()> {
    if !paths.notes_dir.is_dir() {
        bail!(
            "notes directory does not exist: {} (run `notebag setup --notes-dir <DIR>`)",
            paths.notes_dir.display()
        );
    }
    Ok(())
}
