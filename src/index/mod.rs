//! Note index: name → filename mapping persisted with a checksum

mod checksum;
mod note_index;

pub use checksum::IndexChecksum;
pub use note_index::{IndexError, IndexResult, NoteIndex};
