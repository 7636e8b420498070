use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use encoding_rs::EUC_JP;
use tracing::{debug, info};

use super::kanwa_io::write_dictionary;
use super::{DictEntry, DictError, DictKey};
use crate::romaji::{KanaTrie, RomanizationSystem};
use crate::unicode::{is_hiragana, is_katakana, is_kanji, ITERATION_MARK, PROLONGED_SOUND_MARK};

/// Accumulates source dictionary lines and writes the kanwa binary file.
#[derive(Default)]
pub struct KanwaBuilder {
    entries: BTreeMap<DictKey, Vec<DictEntry>>,
    lines_read: usize,
    lines_skipped: usize,
}

impl KanwaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every line of a source dictionary. Lines that do not parse are
    /// skipped.
    pub fn add_source_text(&mut self, text: &str) {
        for line in text.lines() {
            self.lines_read += 1;
            let entries = parse_line(line);
            if entries.is_empty() {
                self.lines_skipped += 1;
                continue;
            }
            for entry in entries {
                self.add_entry(entry);
            }
        }
    }

    /// Read a source dictionary file (UTF-8 or EUC-JP).
    pub fn add_source_file(&mut self, path: &Path) -> Result<(), DictError> {
        let bytes = fs::read(path)?;
        let text = decode_source(&bytes);
        let before = self.entry_count();
        self.add_source_text(&text);
        info!(
            source = %path.display(),
            entries = self.entry_count() - before,
            "loaded source dictionary"
        );
        Ok(())
    }

    /// Append an entry under its headword's first codepoint. Duplicates are
    /// kept in insertion order.
    pub fn add_entry(&mut self, entry: DictEntry) {
        let Some(first) = entry.headword.chars().next() else {
            return;
        };
        let key = DictKey::new(first);
        if key.slot().is_none() {
            return;
        }
        self.entries.entry(key).or_default().push(entry);
    }

    pub fn key_count(&self) -> usize {
        self.entries.len()
    }

    pub fn entry_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn write(&self, path: &Path) -> Result<(), DictError> {
        let mut writer = BufWriter::new(File::create(path)?);
        write_dictionary(&mut writer, &self.entries)?;
        info!(
            path = %path.display(),
            keys = self.key_count(),
            entries = self.entry_count(),
            lines = self.lines_read,
            skipped = self.lines_skipped,
            "kanwa dictionary written"
        );
        Ok(())
    }
}

/// Decode a source file as UTF-8, falling back to EUC-JP.
pub fn decode_source(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            debug!("source is not UTF-8, decoding as EUC-JP");
            let (text, had_errors) = EUC_JP.decode_without_bom_handling(bytes);
            if had_errors {
                debug!("source contains malformed EUC-JP sequences");
            }
            text
        }
    }
}

/// Parse one source line into entries sharing its reading.
///
/// Accepts both `reading headword ...` (kakasi) and `reading /headword/.../`
/// (SKK) layouts. Returns nothing for comments, malformed lines, and lines
/// whose reading is not hiragana. Individual headwords that are not made of
/// kana and kanji, or that do not start with an indexed kanji, are dropped.
/// Surrounding whitespace and a leading byte-order mark are ignored.
pub fn parse_line(line: &str) -> Vec<DictEntry> {
    let line = line.trim_start_matches('\u{FEFF}').trim();
    if !line.starts_with(is_hiragana) {
        return Vec::new();
    }

    let cleaned = strip_annotations(line).replace(['/', ',', '\t'], " ");
    let mut fields = cleaned.split_whitespace();
    let Some(raw_reading) = fields.next() else {
        return Vec::new();
    };

    let (reading, tail) = match raw_reading.chars().last() {
        Some(c) if c.is_ascii_alphabetic() => (
            &raw_reading[..raw_reading.len() - 1],
            Some(c.to_ascii_lowercase()),
        ),
        _ => (raw_reading, None),
    };
    let Some(reading) = normalize_reading(reading) else {
        return Vec::new();
    };

    fields
        .filter(|headword| is_valid_headword(headword))
        .map(|headword| DictEntry::new(reading.clone(), tail, headword))
        .collect()
}

/// Remove SKK annotations (`;` up to the next `/`).
fn strip_annotations(line: &str) -> Cow<'_, str> {
    if !line.contains(';') {
        return Cow::Borrowed(line);
    }
    let mut out = String::with_capacity(line.len());
    let mut in_annotation = false;
    for c in line.chars() {
        match c {
            ';' => in_annotation = true,
            '/' => {
                in_annotation = false;
                out.push(c);
            }
            _ if !in_annotation => out.push(c),
            _ => {}
        }
    }
    Cow::Owned(out)
}

/// Replace each ー with the vowel kana of the preceding syllable and check
/// that the result is pure hiragana.
fn normalize_reading(reading: &str) -> Option<String> {
    let mut out = String::with_capacity(reading.len());
    let mut prev = None;
    for c in reading.chars() {
        let c = if c == PROLONGED_SOUND_MARK {
            vowel_kana(prev?)?
        } else if is_hiragana(c) {
            c
        } else {
            return None;
        };
        out.push(c);
        prev = Some(c);
    }
    (!out.is_empty()).then_some(out)
}

fn vowel_kana(kana: char) -> Option<char> {
    let m = KanaTrie::global().search_longest([kana])?;
    match m.romaji(RomanizationSystem::ModifiedHepburn).chars().last()? {
        'a' => Some('あ'),
        'i' => Some('い'),
        'u' => Some('う'),
        'e' => Some('え'),
        'o' => Some('お'),
        _ => None,
    }
}

fn is_valid_headword(headword: &str) -> bool {
    let mut chars = headword.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if DictKey::new(first).slot().is_none() || !is_kanji(first) {
        return false;
    }
    chars.all(|c| is_hiragana(c) || is_katakana(c) || is_kanji(c) || c == ITERATION_MARK)
}
