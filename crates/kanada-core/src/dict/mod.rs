//! Kanji reading dictionary.
//!
//! `KanwaDictionary` serves reading lookups from a paged binary file: a dense
//! index of one offset per kanji codepoint, followed by one serialized entry
//! list per key. Entry lists are read lazily and cached for the lifetime of
//! the dictionary. `KanwaBuilder` produces that file from plain-text source
//! dictionaries.

mod entry;
mod kanwa;
mod kanwa_io;
mod source;
#[cfg(test)]
mod tests;

pub use entry::DictEntry;
pub use kanwa::{DictStats, KanwaDictionary};
pub use kanwa_io::{FIRST_CODEPOINT, INDEX_SIZE, INDEX_SLOTS, LAST_CODEPOINT};
pub use source::{decode_source, parse_line, KanwaBuilder};

use std::io;
use std::sync::Arc;

/// Error type for dictionary build, load and lookup.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid index section: {0}")]
    InvalidIndex(String),

    #[error("entry block at offset {offset} overruns the file")]
    InvalidBlock { offset: u64 },

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error("no readable source dictionary")]
    NoSource,

    #[error("parse error: {0}")]
    Parse(String),
}

impl DictError {
    /// Whether this is a damaged or truncated entry block rather than a
    /// failure of the underlying file.
    pub fn is_corruption(&self) -> bool {
        match self {
            DictError::InvalidBlock { .. } | DictError::Deserialize(_) => true,
            DictError::Io(e) => e.kind() == io::ErrorKind::UnexpectedEof,
            _ => false,
        }
    }
}

/// Lookup key: the first codepoint of a headword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DictKey(char);

impl DictKey {
    pub fn new(c: char) -> Self {
        DictKey(c)
    }

    pub fn codepoint(self) -> char {
        self.0
    }

    /// Slot in the index section, if the codepoint is in the indexed range.
    pub fn slot(self) -> Option<usize> {
        let cp = self.0 as u32;
        (FIRST_CODEPOINT..=LAST_CODEPOINT)
            .contains(&cp)
            .then(|| (cp - FIRST_CODEPOINT) as usize)
    }
}

/// Reading lookup keyed by a headword's first codepoint.
///
/// `search_key` may page entries in from storage; `get_value` only returns
/// what a previous `search_key` made available.
pub trait Dictionary: Send + Sync {
    fn get_key(&self, c: char) -> DictKey {
        DictKey::new(c)
    }

    /// True iff entries exist for `key`. Damaged entry blocks are reported as
    /// a miss; only failures of the storage itself are returned as errors.
    fn search_key(&self, key: DictKey) -> Result<bool, DictError>;

    /// Entries for `key` in source order (empty if unknown or not yet paged in).
    fn get_value(&self, key: DictKey) -> Arc<[DictEntry]>;
}
