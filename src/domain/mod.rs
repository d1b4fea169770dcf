//! Core rules: name matching, the add/open decision, filename sanitizing

mod action;
mod matching;
mod sanitize;

pub use action::NoteAction;
pub use matching::{ALL_NOTES_LABEL, filter_and_sort, find_existing, list_label};
pub use sanitize::sanitize;
