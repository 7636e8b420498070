use serde::{Deserialize, Serialize};

/// One reading for a headword, as stored in a key's entry list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictEntry {
    /// Hiragana reading with the inflection letter already stripped.
    pub reading: String,
    /// Okurigana marker: the romaji initial of the kana that must follow
    /// the headword for this entry to apply (`おくr` → `Some('r')`).
    pub tail: Option<char>,
    pub headword: String,
}

impl DictEntry {
    pub fn new(reading: impl Into<String>, tail: Option<char>, headword: impl Into<String>) -> Self {
        Self {
            reading: reading.into(),
            tail,
            headword: headword.into(),
        }
    }

    pub fn headword_len(&self) -> usize {
        self.headword.chars().count()
    }
}
