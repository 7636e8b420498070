/// Default kana table (TOML). Parsed at runtime by `parse_kana_toml()`.
pub const DEFAULT_TOML: &str = include_str!("default_kana.toml");

/// Returns the embedded default kana table content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
