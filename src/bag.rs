//! NoteBag: the note index plus the documents it points at.
//!
//! A `NoteBag` owns one loaded [`NoteIndex`] and the paths it works with.
//! Every mutation saves the index before returning.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

use crate::domain::{NoteAction, filter_and_sort, list_label, sanitize};
use crate::index::{IndexError, NoteIndex};
use crate::infra::{
    DocumentError, EditorError, EditorLauncher, create_from_template, delete_document,
    dotted_extension, unique_filename,
};

/// Errors from note-level operations.
#[derive(Debug, Error)]
pub enum BagError {
    /// The name has no characters usable in a filename.
    #[error("note name is empty after removing unsupported characters")]
    EmptyName,

    /// No note name was given for an action that needs one.
    #[error("no note selected")]
    NoSelection,

    #[error("note not found: '{0}'")]
    NotFound(String),

    #[error("a note named '{0}' already exists")]
    AlreadyExists(String),

    #[error(transparent)]
    Index(#[from] IndexError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Editor(#[from] EditorError),
}

/// Result type for note-level operations.
pub type BagResult<T> = Result<T, BagError>;

/// Locations of the notes directory, index file and template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotePaths {
    pub notes_dir: PathBuf,
    pub index_file: PathBuf,
    pub template_file: PathBuf,
}

/// A note as known to the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteEntry {
    pub name: String,
    pub filename: String,
    pub path: PathBuf,
}

/// Outcome of performing the current action for some entered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub action: NoteAction,
    pub note: NoteEntry,
}

/// The loaded note index and the operations built on it.
#[derive(Debug)]
pub struct NoteBag {
    paths: NotePaths,
    index: NoteIndex,
}

impl NoteBag {
    /// Loads the index named by `paths`.
    ///
    /// A missing index file gives an empty bag.
    pub fn load(paths: NotePaths) -> BagResult<Self> {
        let index = NoteIndex::load(&paths.index_file)?;
        Ok(Self { paths, index })
    }

    pub fn paths(&self) -> &NotePaths {
        &self.paths
    }

    pub fn index(&self) -> &NoteIndex {
        &self.index
    }

    /// Returns the stored name matching `text` ignoring case.
    pub fn find_existing(&self, text: &str) -> Option<&str> {
        self.index.find(text)
    }

    /// Note names containing `text` (ignoring case), alphabetically.
    pub fn filter_and_sort(&self, text: &str) -> Vec<&str> {
        filter_and_sort(self.index.names(), text)
    }

    /// Heading for the list produced by [`NoteBag::filter_and_sort`].
    pub fn list_label(&self, text: &str) -> String {
        list_label(text)
    }

    /// The action the entered `text` would trigger.
    pub fn current_action(&self, text: &str) -> NoteAction {
        NoteAction::decide(self.index.names(), text)
    }

    /// Label of [`NoteBag::current_action`]: `"Add"` or `"Open"`.
    pub fn current_action_label(&self, text: &str) -> &'static str {
        self.current_action(text).label()
    }

    /// Resolves `name` (ignoring case) to its index entry and file path.
    ///
    /// # Errors
    ///
    /// Returns `BagError::NoSelection` if `name` is blank.
    /// Returns `BagError::NotFound` if no note matches.
    pub fn entry(&self, name: &str) -> BagResult<NoteEntry> {
        if name.trim().is_empty() {
            return Err(BagError::NoSelection);
        }
        let key = self
            .index
            .find(name)
            .ok_or_else(|| BagError::NotFound(name.trim().to_string()))?;
        let filename = self.index.get(key).unwrap_or_default();

        Ok(NoteEntry {
            name: key.to_string(),
            filename: filename.to_string(),
            path: self.paths.notes_dir.join(filename),
        })
    }

    /// Every note, in list order for `search`.
    pub fn entries(&self, search: &str) -> Vec<NoteEntry> {
        self.filter_and_sort(search)
            .into_iter()
            .filter_map(|name| self.entry(name).ok())
            .collect()
    }

    /// Creates a new note named `name` from the template and indexes it.
    ///
    /// The filename is the sanitized name plus the template's extension,
    /// with a numeric suffix if that file already exists. The document is
    /// written before the index is saved; if saving fails, the in-memory
    /// entry is dropped again but the document stays on disk.
    ///
    /// # Errors
    ///
    /// Returns `BagError::AlreadyExists` if a note with this name exists.
    /// Returns `BagError::EmptyName` if sanitizing leaves nothing.
    /// Returns `BagError::Document` if the template can't be instantiated.
    /// Returns `BagError::Index` if the index can't be saved.
    pub fn add_note(&mut self, name: &str) -> BagResult<NoteEntry> {
        let name = name.trim();
        if let Some(existing) = self.index.find(name) {
            return Err(BagError::AlreadyExists(existing.to_string()));
        }

        let stem = sanitize(name);
        if stem.is_empty() {
            return Err(BagError::EmptyName);
        }

        let extension = dotted_extension(&self.paths.template_file);
        let filename = unique_filename(&self.paths.notes_dir, &stem, &extension, |f| {
            self.index.contains_filename(f)
        });
        let path = self.paths.notes_dir.join(&filename);

        create_from_template(name, &path, &self.paths.template_file)?;

        self.index.insert(name, filename.clone())?;
        if let Err(e) = self.index.save(&self.paths.index_file) {
            self.index.remove(name);
            return Err(e.into());
        }

        info!(name, filename = %filename, "added note");
        Ok(NoteEntry {
            name: name.to_string(),
            filename,
            path,
        })
    }

    /// Removes the note matching `name` from the index, then deletes its file.
    ///
    /// The index is saved before the file is touched, so a failed file
    /// deletion leaves an orphaned file rather than an entry pointing at
    /// nothing. A file that is already gone is not an error.
    ///
    /// # Errors
    ///
    /// Returns `BagError::NoSelection` if `name` is blank.
    /// Returns `BagError::NotFound` if no note matches.
    /// Returns `BagError::Index` if the index can't be saved (nothing changes).
    /// Returns `BagError::Document` if the file can't be deleted.
    pub fn delete_note(&mut self, name: &str) -> BagResult<NoteEntry> {
        let entry = self.entry(name)?;

        self.index.remove(&entry.name);
        if let Err(e) = self.index.save(&self.paths.index_file) {
            self.index.insert(entry.name.clone(), entry.filename.clone())?;
            return Err(e.into());
        }

        delete_document(&entry.path)?;

        info!(name = %entry.name, path = %entry.path.display(), "deleted note");
        Ok(entry)
    }

    /// Opens the note matching `name` with `editor`.
    pub fn open_note<E: EditorLauncher>(
        &self,
        name: &str,
        editor: &E,
    ) -> BagResult<NoteEntry> {
        let entry = self.entry(name)?;
        editor.open(&entry.path)?;
        Ok(entry)
    }

    /// Performs the current action for `text`: opens the matching note, or
    /// adds a new one and opens it.
    pub fn activate<E: EditorLauncher>(
        &mut self,
        text: &str,
        editor: &E,
    ) -> BagResult<Activation> {
        let action = self.current_action(text);
        let note = match action {
            NoteAction::Open => self.open_note(text, editor)?,
            NoteAction::Add => {
                let note = self.add_note(text)?;
                editor.open(&note.path)?;
                note
            }
        };
        Ok(Activation { action, note })
    }
}
