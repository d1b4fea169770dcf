//! Integrity checksum over the note index contents.

use sha2::{Digest, Sha256};
use std::fmt;

/// SHA256 digest of a note index's name/filename bytes.
///
/// Each entry contributes its name's UTF-8 bytes followed directly by its
/// filename's UTF-8 bytes, in the iteration order of the entries given to
/// [`IndexChecksum::compute`]. Stored as a 64-character lowercase hex string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexChecksum {
    hex: String,
}

impl IndexChecksum {
    /// Computes the checksum over `(name, filename)` pairs in the order given.
    pub fn compute<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut hasher = Sha256::new();
        for (name, filename) in entries {
            hasher.update(name.as_bytes());
            hasher.update(filename.as_bytes());
        }
        let hex = format!("{:x}", hasher.finalize());
        Self { hex }
    }

    /// Returns true if `stored` is exactly this checksum's hex string.
    ///
    /// Comparison is byte-for-byte, so a stored value differing only in
    /// letter case does not match.
    pub fn matches(&self, stored: &str) -> bool {
        self.hex == stored
    }

    pub fn as_str(&self) -> &str {
        &self.hex
    }
}

impl fmt::Display for IndexChecksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex)
    }
}
