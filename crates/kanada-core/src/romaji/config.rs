use std::collections::BTreeMap;

use serde::Deserialize;

use super::system::SYSTEM_COUNT;
use crate::unicode::{is_hiragana, is_katakana, is_katakana_ext};

/// One romanization per system, in `RomanizationSystem::column()` order.
pub type Romanizations = [String; SYSTEM_COUNT];

#[derive(Deserialize)]
struct KanaConfig {
    mappings: BTreeMap<String, RomajiValue>,
}

/// A table value: one spelling shared by every system, or one per system.
#[derive(Deserialize)]
#[serde(untagged)]
enum RomajiValue {
    Uniform(String),
    PerSystem(Vec<String>),
}

#[derive(Debug, thiserror::Error)]
pub enum RomajiConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("non-kana key: {0}")]
    NonKanaKey(String),
    #[error("expected {expected} romanizations for key {key}, got {got}")]
    ColumnCount {
        key: String,
        expected: usize,
        got: usize,
    },
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("kana trie already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a sorted `BTreeMap<kana, romanizations>`.
pub fn parse_kana_toml(toml_str: &str) -> Result<BTreeMap<String, Romanizations>, RomajiConfigError> {
    let config: KanaConfig =
        toml::from_str(toml_str).map_err(|e| RomajiConfigError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(RomajiConfigError::Empty);
    }

    let mut map = BTreeMap::new();
    for (key, value) in config.mappings {
        let is_kana = |c: char| is_hiragana(c) || is_katakana(c) || is_katakana_ext(c);
        if key.is_empty() || !key.chars().all(is_kana) {
            return Err(RomajiConfigError::NonKanaKey(key));
        }
        let values: Romanizations = match value {
            RomajiValue::Uniform(s) => std::array::from_fn(|_| s.clone()),
            RomajiValue::PerSystem(v) => {
                let got = v.len();
                v.try_into().map_err(|_| RomajiConfigError::ColumnCount {
                    key: key.clone(),
                    expected: SYSTEM_COUNT,
                    got,
                })?
            }
        };
        if values.iter().any(|s| s.is_empty()) {
            return Err(RomajiConfigError::EmptyValue(key));
        }
        map.insert(key, values);
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[mappings]
"あ" = "a"
"し" = ["shi", "si", "shi", "si", "shi", "shi"]
"#;
        let map = parse_kana_toml(toml).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["あ"][3], "a");
        assert_eq!(map["し"][0], "shi");
        assert_eq!(map["し"][1], "si");
    }

    #[test]
    fn parse_default_toml() {
        let map = parse_kana_toml(super::super::table::DEFAULT_TOML).unwrap();
        assert!(map.len() > 150, "expected 150+ mappings, got {}", map.len());
    }

    #[test]
    fn error_empty_mappings() {
        let err = parse_kana_toml("[mappings]\n").unwrap_err();
        assert!(matches!(err, RomajiConfigError::Empty));
    }

    #[test]
    fn error_non_kana_key() {
        let toml = "
[mappings]
ka = \"ka\"
";
        let err = parse_kana_toml(toml).unwrap_err();
        assert!(matches!(err, RomajiConfigError::NonKanaKey(_)));
    }

    #[test]
    fn error_column_count() {
        let toml = r#"
[mappings]
"し" = ["shi", "si"]
"#;
        let err = parse_kana_toml(toml).unwrap_err();
        assert!(matches!(
            err,
            RomajiConfigError::ColumnCount { got: 2, expected: 6, .. }
        ));
    }

    #[test]
    fn error_empty_value() {
        let toml = r#"
[mappings]
"あ" = ""
"#;
        let err = parse_kana_toml(toml).unwrap_err();
        assert!(matches!(err, RomajiConfigError::EmptyValue(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_kana_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, RomajiConfigError::Parse(_)));
    }
}
