//! Conversion configuration.
//!
//! `Config` is a plain value: one `Target` per character class plus the
//! mode flags. It can be built in code, parsed from TOML with
//! `Config::from_toml`, or taken from the embedded presets
//! (`include_str!("presets.toml")`), which are parsed once on first use.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::romaji::RomanizationSystem;

pub const PRESETS_TOML: &str = include_str!("presets.toml");

/// What to turn one class of characters into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    #[default]
    AsIs,
    Hiragana,
    Katakana,
    Romaji,
    HalfWidth,
    FullWidth,
}

/// Reading annotation appended after each dictionary match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Annotation {
    #[default]
    None,
    /// `漢字[かんじ]`
    Furigana,
    /// `日本{にほん|にっぽん}`
    AllReadings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    AsIs,
    Romaji,
    Hiragana,
    Katakana,
    HalfWidthKana,
    FullWidthKana,
    FullWidthAll,
}

impl Preset {
    fn table_name(self) -> &'static str {
        match self {
            Preset::AsIs => "as_is",
            Preset::Romaji => "romaji",
            Preset::Hiragana => "hiragana",
            Preset::Katakana => "katakana",
            Preset::HalfWidthKana => "half_width_kana",
            Preset::FullWidthKana => "full_width_kana",
            Preset::FullWidthAll => "full_width_all",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Kanji: `AsIs` keeps the headword, anything else emits the reading
    /// converted to that target.
    pub kanji: Target,
    pub hiragana: Target,
    pub katakana: Target,
    /// Full-width ASCII variants (Ａ, １, ！).
    pub wide_ascii: Target,
    /// CJK symbols and punctuation (、。「」〜).
    pub wide_symbol: Target,
    pub half_katakana: Target,
    pub ascii: Target,
    /// Half-width punctuation (｡｢｣､･) and Latin-1 currency symbols.
    pub half_symbol: Target,

    /// Insert `separator` between words.
    pub spaces: bool,
    pub separator: char,
    pub upper_first: bool,
    pub upper_all: bool,
    pub system: RomanizationSystem,
    /// Keep ā/â style long vowels; when off they are spelled aa.
    pub macron: bool,
    pub annotation: Annotation,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kanji: Target::AsIs,
            hiragana: Target::AsIs,
            katakana: Target::AsIs,
            wide_ascii: Target::AsIs,
            wide_symbol: Target::AsIs,
            half_katakana: Target::AsIs,
            ascii: Target::AsIs,
            half_symbol: Target::AsIs,
            spaces: false,
            separator: ' ',
            upper_first: false,
            upper_all: false,
            system: RomanizationSystem::default(),
            macron: false,
            annotation: Annotation::None,
        }
    }
}

impl Config {
    pub fn preset(preset: Preset) -> Self {
        static PRESETS: OnceLock<HashMap<String, Config>> = OnceLock::new();
        let presets = PRESETS
            .get_or_init(|| toml::from_str(PRESETS_TOML).expect("presets TOML must be valid"));
        presets
            .get(preset.table_name())
            .cloned()
            .unwrap_or_default()
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upper_first && self.upper_all {
            return Err(ConfigError::InvalidValue {
                field: "upper_first".to_string(),
                reason: "cannot be combined with upper_all".to_string(),
            });
        }
        if self.separator.is_control() && self.separator != '\t' {
            return Err(ConfigError::InvalidValue {
                field: "separator".to_string(),
                reason: format!("control character U+{:04X}", self.separator as u32),
            });
        }
        Ok(())
    }

    pub fn with_spaces(mut self) -> Self {
        self.spaces = true;
        self
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.spaces = true;
        self.separator = separator;
        self
    }

    pub fn with_system(mut self, system: RomanizationSystem) -> Self {
        self.system = system;
        self
    }

    pub fn with_macron(mut self) -> Self {
        self.macron = true;
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotation = annotation;
        self
    }

    /// Uppercase the first letter of each word; clears `upper_all`.
    pub fn upper_case_first(mut self) -> Self {
        self.upper_first = true;
        self.upper_all = false;
        self
    }

    /// Uppercase the whole output; clears `upper_first`.
    pub fn upper_case_all(mut self) -> Self {
        self.upper_all = true;
        self.upper_first = false;
        self
    }

    /// Configuration used to render a dictionary reading: the hiragana
    /// reading is converted according to the kanji target.
    pub(crate) fn for_reading(&self) -> Config {
        let mut config = self.clone();
        config.hiragana = match self.kanji {
            Target::Hiragana | Target::AsIs => Target::AsIs,
            other => other,
        };
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pass_through() {
        let c = Config::default();
        assert_eq!(c, Config::preset(Preset::AsIs));
        assert_eq!(c.kanji, Target::AsIs);
        assert!(!c.spaces);
        assert!(!c.macron);
        assert_eq!(c.separator, ' ');
    }

    #[test]
    fn test_presets_parse() {
        let romaji = Config::preset(Preset::Romaji);
        assert_eq!(romaji.kanji, Target::Romaji);
        assert_eq!(romaji.hiragana, Target::Romaji);
        assert_eq!(romaji.ascii, Target::AsIs);
        assert_eq!(romaji.system, RomanizationSystem::ModifiedHepburn);

        let full = Config::preset(Preset::FullWidthAll);
        assert_eq!(full.ascii, Target::FullWidth);
        assert_eq!(full.half_katakana, Target::Katakana);

        let kata = Config::preset(Preset::Katakana);
        assert_eq!(kata.kanji, Target::Katakana);
        assert_eq!(kata.katakana, Target::AsIs);

        for preset in [
            Preset::Hiragana,
            Preset::HalfWidthKana,
            Preset::FullWidthKana,
        ] {
            Config::preset(preset).validate().unwrap();
        }
    }

    #[test]
    fn test_from_toml() {
        let config = Config::from_toml(
            r#"
kanji = "romaji"
hiragana = "romaji"
spaces = true
separator = "_"
system = "kunrei"
macron = true
annotation = "furigana"
"#,
        )
        .unwrap();
        assert_eq!(config.kanji, Target::Romaji);
        assert_eq!(config.katakana, Target::AsIs);
        assert_eq!(config.separator, '_');
        assert_eq!(config.system, RomanizationSystem::Kunrei);
        assert_eq!(config.annotation, Annotation::Furigana);
    }

    #[test]
    fn test_from_toml_rejects_both_upper_modes() {
        let err = Config::from_toml("upper_first = true\nupper_all = true").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_from_toml_rejects_unknown_target() {
        let err = Config::from_toml("kanji = \"braille\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_toml_rejects_unknown_field() {
        let err = Config::from_toml("kanij = \"romaji\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_upper_modes_are_exclusive() {
        let c = Config::default().upper_case_first().upper_case_all();
        assert!(c.upper_all);
        assert!(!c.upper_first);
    }

    #[test]
    fn test_for_reading() {
        let c = Config {
            kanji: Target::Katakana,
            ..Config::default()
        };
        assert_eq!(c.for_reading().hiragana, Target::Katakana);
        let c = Config::preset(Preset::Hiragana);
        assert_eq!(c.for_reading().hiragana, Target::AsIs);
    }
}
