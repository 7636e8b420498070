//! Kana to romaji conversion.
//!
//! `KanaTrie` maps kana sequences (base kana, youon digraphs, extended
//! sounds, sokuon and syllabic-n combinations) to one romanization per
//! supported system. The table is embedded TOML; a custom table may be
//! installed with `KanaTrie::init_custom` before first use.

pub mod config;
mod system;
mod table;
mod trie;

pub use config::{parse_kana_toml, RomajiConfigError, Romanizations};
pub use system::{remove_macrons, RomanizationSystem, SYSTEM_COUNT};
pub use table::default_toml;
pub use trie::{KanaTrie, MatchResult};
