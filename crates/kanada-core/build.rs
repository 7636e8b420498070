fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml("src/presets.toml", include_str!("src/presets.toml"));
    validate_toml(
        "src/romaji/default_kana.toml",
        include_str!("src/romaji/default_kana.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
