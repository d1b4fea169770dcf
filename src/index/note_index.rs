//! NoteIndex: the name → filename mapping and its checksummed index file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

use super::checksum::IndexChecksum;
use crate::domain::find_existing;

/// Errors that can occur while loading, saving or mutating the note index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The index file exists but its contents failed validation.
    #[error("note index at {path} is corrupted: {reason}")]
    Corrupted { path: PathBuf, reason: String },

    /// A name equal to an existing one (ignoring case) was inserted.
    #[error("a note named '{existing}' already exists")]
    DuplicateName { existing: String },

    /// Reading or writing the index file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Encoding the index record failed.
    #[error("failed to encode note index: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for index operations.
pub type IndexResult<T> = Result<T, IndexError>;

/// On-disk form of the index: the checksum, then the mapping.
#[derive(Serialize)]
struct IndexRecordRef<'a> {
    checksum: &'a str,
    notes: &'a BTreeMap<String, String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct IndexRecord {
    checksum: String,
    notes: BTreeMap<String, String>,
}

/// Mapping from note name to backing filename.
///
/// Names keep the case they were entered with but are unique ignoring case.
/// Entries are held in a `BTreeMap`, so iteration (and the checksum) always
/// follows byte order of the names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteIndex {
    notes: BTreeMap<String, String>,
}

impl NoteIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the index from `path`.
    ///
    /// A missing file yields an empty index.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::Corrupted` if the file cannot be decoded, if the
    /// stored checksum does not match the loaded entries, or if two names
    /// differ only by case.
    /// Returns `IndexError::Io` if the file exists but cannot be read.
    pub fn load(path: &Path) -> IndexResult<Self> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no index file, starting empty");
                return Ok(Self::new());
            }
            Err(e) => {
                return Err(IndexError::Io {
                    path: path.into(),
                    source: e,
                });
            }
        };

        let corrupted = |reason: String| IndexError::Corrupted {
            path: path.into(),
            reason,
        };

        let record: IndexRecord =
            serde_json::from_slice(&bytes).map_err(|e| corrupted(e.to_string()))?;

        let index = Self {
            notes: record.notes,
        };

        if !index.checksum().matches(&record.checksum) {
            return Err(corrupted("checksum mismatch".to_string()));
        }

        // Escapes like `\u001B` decode to the same text as `\u001b`.
        if index.encode()? != bytes {
            return Err(corrupted("non-canonical encoding".to_string()));
        }

        if let Some(name) = index.first_case_collision() {
            return Err(corrupted(format!(
                "note name '{}' appears more than once",
                name
            )));
        }

        debug!(path = %path.display(), notes = index.len(), "loaded note index");
        Ok(index)
    }

    /// Writes the index and its checksum to `path` atomically.
    ///
    /// The record is written to a temporary file in the same directory and
    /// renamed over `path`. Missing parent directories are created.
    pub fn save(&self, path: &Path) -> IndexResult<()> {
        let io_err = |source: io::Error| IndexError::Io {
            path: path.into(),
            source,
        };

        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(io_err)?;

        let bytes = self.encode()?;

        let mut temp = NamedTempFile::new_in(parent).map_err(io_err)?;
        temp.write_all(&bytes).map_err(io_err)?;
        temp.persist(path).map_err(|e| io_err(e.error))?;

        debug!(path = %path.display(), notes = self.len(), "saved note index");
        Ok(())
    }

    /// Computes the checksum over the current entries.
    pub fn checksum(&self) -> IndexChecksum {
        IndexChecksum::compute(self.iter())
    }

    /// Returns the filename stored under exactly `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.notes.get(name).map(String::as_str)
    }

    /// Returns the stored name matching `entered` ignoring case and
    /// surrounding whitespace.
    pub fn find(&self, entered: &str) -> Option<&str> {
        find_existing(self.names(), entered)
    }

    /// Adds an entry.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::DuplicateName` if a name equal to `name`
    /// ignoring case is already present.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        filename: impl Into<String>,
    ) -> IndexResult<()> {
        let name = name.into();
        if let Some(existing) = self.find_exact_ignoring_case(&name) {
            return Err(IndexError::DuplicateName {
                existing: existing.to_string(),
            });
        }
        self.notes.insert(name, filename.into());
        Ok(())
    }

    /// Removes the entry stored under exactly `name`, returning its filename.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.notes.remove(name)
    }

    /// Iterates over note names in index order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.notes.keys().map(String::as_str)
    }

    /// Iterates over `(name, filename)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.notes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if some entry already uses `filename`.
    pub fn contains_filename(&self, filename: &str) -> bool {
        self.notes.values().any(|f| f == filename)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// The exact bytes written by `save`.
    fn encode(&self) -> IndexResult<Vec<u8>> {
        let checksum = self.checksum();
        let record = IndexRecordRef {
            checksum: checksum.as_str(),
            notes: &self.notes,
        };
        Ok(serde_json::to_vec(&record)?)
    }

    // Unlike `find`, does not trim; names are compared as stored.
    fn find_exact_ignoring_case(&self, name: &str) -> Option<&str> {
        let lower = name.to_lowercase();
        self.names().find(|n| n.to_lowercase() == lower)
    }

    fn first_case_collision(&self) -> Option<&str> {
        let mut seen = std::collections::HashSet::new();
        self.names().find(|n| !seen.insert(n.to_lowercase()))
    }
}

impl FromIterator<(String, String)> for NoteIndex {
    /// Builds an index from pairs; later pairs replace earlier ones with
    /// the same exact name. Case collisions are not checked here.
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            notes: iter.into_iter().collect(),
        }
    }
}
