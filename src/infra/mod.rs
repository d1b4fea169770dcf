//! Note document files and the external editor

mod editor;
mod fs;

pub use editor::{DetachedEditor, EditorError, EditorLauncher, editor_command};
pub use fs::{
    DocumentError, NOTE_NAME_PLACEHOLDER, create_from_template, delete_document,
    dotted_extension, fill_template, unique_filename,
};
