//! Add-or-open decision for an entered note name.

use serde::Serialize;
use std::fmt;

use super::matching::find_existing;

/// The single action available for the text in the note name field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoteAction {
    /// No note matches the entered name; it can be created.
    Add,
    /// A note matches the entered name case-insensitively.
    Open,
}

impl NoteAction {
    /// Decides the action from the entered text and the current note names.
    pub fn decide<'a, I>(names: I, entered: &str) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        match find_existing(names, entered) {
            Some(_) => NoteAction::Open,
            None => NoteAction::Add,
        }
    }

    /// Button label for this action.
    pub fn label(self) -> &'static str {
        match self {
            NoteAction::Add => "Add",
            NoteAction::Open => "Open",
        }
    }
}

impl fmt::Display for NoteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_name_is_add() {
        assert_eq!(NoteAction::decide(["Foo"], "Bar"), NoteAction::Add);
    }

    #[test]
    fn known_name_is_open_regardless_of_case() {
        assert_eq!(NoteAction::decide(["Foo"], "foo"), NoteAction::Open);
        assert_eq!(NoteAction::decide(["Foo"], " FOO "), NoteAction::Open);
    }

    #[test]
    fn empty_index_is_always_add() {
        assert_eq!(
            NoteAction::decide(std::iter::empty::<&str>(), "Foo"),
            NoteAction::Add
        );
    }

    #[test]
    fn partial_match_is_still_add() {
        assert_eq!(NoteAction::decide(["Foobar"], "Foo"), NoteAction::Add);
    }

    #[test]
    fn labels() {
        assert_eq!(NoteAction::Add.label(), "Add");
        assert_eq!(NoteAction::Open.to_string(), "Open");
    }
}
