//! File I/O for note documents with atomic writes.

use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, warn};

/// Placeholder replaced by the note name when instantiating a template.
pub const NOTE_NAME_PLACEHOLDER: &str = "%(NOTE NAME)%";

/// Errors during file system operations on note documents.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("note template not found: {path}")]
    TemplateNotFound { path: PathBuf },

    #[error("failed to read note template {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write note {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("note file already exists: {path}")]
    AlreadyExists { path: PathBuf },

    #[error("failed to delete note {path}: {source}")]
    DeleteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Replaces every placeholder in `template` with `note_name`.
///
/// # Examples
///
/// ```
/// use notebag::infra::fill_template;
///
/// let text = fill_template("# %(NOTE NAME)%\n", "Groceries");
/// assert_eq!(text, "# Groceries\n");
/// ```
pub fn fill_template(template: &str, note_name: &str) -> String {
    template.replace(NOTE_NAME_PLACEHOLDER, note_name)
}

/// Creates a new note document at `destination` from `template_path`.
///
/// The template is read as UTF-8 text, every `%(NOTE NAME)%` is replaced by
/// `note_name`, and the result is written atomically. An existing file at
/// `destination` is never overwritten.
///
/// # Errors
///
/// Returns `DocumentError::TemplateNotFound` if the template doesn't exist.
/// Returns `DocumentError::TemplateRead` if the template can't be read as text.
/// Returns `DocumentError::AlreadyExists` if `destination` already exists.
/// Returns `DocumentError::WriteFailed` if writing the destination fails.
pub fn create_from_template(
    note_name: &str,
    destination: &Path,
    template_path: &Path,
) -> Result<(), DocumentError> {
    let template = std::fs::read_to_string(template_path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DocumentError::TemplateNotFound {
            path: template_path.into(),
        },
        _ => DocumentError::TemplateRead {
            path: template_path.into(),
            source: e,
        },
    })?;

    if destination.exists() {
        return Err(DocumentError::AlreadyExists {
            path: destination.into(),
        });
    }

    let content = fill_template(&template, note_name);
    write_atomic(destination, content.as_bytes())?;

    debug!(
        template = %template_path.display(),
        destination = %destination.display(),
        "instantiated note template"
    );
    Ok(())
}

/// Deletes a note document.
///
/// A file that is already gone is not an error; it is logged and ignored.
pub fn delete_document(path: &Path) -> Result<(), DocumentError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "note file was already missing");
            Ok(())
        }
        Err(e) => Err(DocumentError::DeleteFailed {
            path: path.into(),
            source: e,
        }),
    }
}

/// Picks a filename in `dir` that doesn't exist yet and isn't `taken`.
///
/// Tries `{stem}{ext}` first, then `{stem}-2{ext}`, `{stem}-3{ext}`, ...
/// `extension` includes its leading dot, or is empty.
pub fn unique_filename(
    dir: &Path,
    stem: &str,
    extension: &str,
    taken: impl Fn(&str) -> bool,
) -> String {
    let is_free = |candidate: &str| !taken(candidate) && !dir.join(candidate).exists();

    let first = format!("{}{}", stem, extension);
    if is_free(&first) {
        return first;
    }

    (2u32..)
        .map(|n| format!("{}-{}{}", stem, n, extension))
        .find(|candidate| is_free(candidate))
        .unwrap_or(first)
}

/// Returns the extension of `path` with a leading dot, or an empty string.
pub fn dotted_extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e))
        .unwrap_or_default()
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), DocumentError> {
    let write_failed = |source: io::Error| DocumentError::WriteFailed {
        path: path.into(),
        source,
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(parent).map_err(write_failed)?;
    temp.write_all(bytes).map_err(write_failed)?;
    temp.persist_noclobber(path)
        .map_err(|e| match e.error.kind() {
            io::ErrorKind::AlreadyExists => DocumentError::AlreadyExists { path: path.into() },
            _ => write_failed(e.error),
        })?;

    Ok(())
}
