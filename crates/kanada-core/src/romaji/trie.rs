use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use super::config::{parse_kana_toml, RomajiConfigError, Romanizations};
use super::system::RomanizationSystem;
use super::table::DEFAULT_TOML;
use crate::unicode::{hiragana_to_katakana, is_hiragana};

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

#[derive(Default)]
struct Node {
    children: HashMap<char, Node>,
    value: Option<Romanizations>,
}

/// Longest-prefix match: the romanizations at the deepest valued node and
/// the number of input characters it spans.
#[derive(Debug, Clone, Copy)]
pub struct MatchResult<'a> {
    pub values: &'a Romanizations,
    pub length: usize,
}

impl MatchResult<'_> {
    pub fn romaji(&self, system: RomanizationSystem) -> &str {
        &self.values[system.column()]
    }
}

#[derive(Default)]
pub struct KanaTrie {
    root: Node,
    len: usize,
}

impl KanaTrie {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), RomajiConfigError> {
        // Validate eagerly
        parse_kana_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RomajiConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static KanaTrie {
        static INSTANCE: OnceLock<KanaTrie> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let map = parse_kana_toml(toml_str).expect("kana TOML must be valid");
            KanaTrie::from_table(&map)
        })
    }

    /// Build a trie from a parsed table, adding katakana mirrors of hiragana
    /// keys and the derived sokuon / syllabic-n combinations.
    pub fn from_table(map: &BTreeMap<String, Romanizations>) -> Self {
        let mut trie = KanaTrie::default();
        let insert_with_mirror = |trie: &mut KanaTrie, key: &str, values: &Romanizations| {
            trie.insert(key, values.clone());
            if key.chars().all(is_hiragana) {
                let katakana = hiragana_to_katakana(key);
                if katakana != key {
                    trie.insert(&katakana, values.clone());
                }
            }
        };

        for (key, values) in map {
            insert_with_mirror(&mut trie, key, values);
        }

        for (key, values) in map {
            let Some(first) = key.chars().next() else {
                continue;
            };
            if !is_hiragana(first) || is_small_kana(first) || first == 'ん' {
                continue;
            }
            if let Some(doubled) = geminate(values) {
                insert_with_mirror(&mut trie, &format!("っ{key}"), &doubled);
            }
            if needs_syllabic_n_form(values) {
                insert_with_mirror(&mut trie, &format!("ん{key}"), &after_syllabic_n(values));
            }
        }

        trie
    }

    pub fn insert(&mut self, key: &str, values: Romanizations) {
        let mut node = &mut self.root;
        for c in key.chars() {
            node = node.children.entry(c).or_default();
        }
        if node.value.replace(values).is_none() {
            self.len += 1;
        }
    }

    /// Walk from the root one character at a time, remembering the deepest
    /// node that carries romanizations.
    pub fn search_longest<I>(&self, input: I) -> Option<MatchResult<'_>>
    where
        I: IntoIterator<Item = char>,
    {
        let mut node = &self.root;
        let mut best = None;
        for (i, c) in input.into_iter().enumerate() {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(values) = &node.value {
                best = Some(MatchResult {
                    values,
                    length: i + 1,
                });
            }
        }
        best
    }

    /// First Latin letter of a single kana's romanization in `system`.
    pub fn romaji_initial(&self, kana: char, system: RomanizationSystem) -> Option<char> {
        self.search_longest([kana])
            .and_then(|m| m.romaji(system).chars().next())
    }

    /// Number of keys holding romanizations.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

fn is_small_kana(c: char) -> bool {
    matches!(
        c,
        'ぁ' | 'ぃ' | 'ぅ' | 'ぇ' | 'ぉ' | 'ゃ' | 'ゅ' | 'ょ' | 'ゎ' | 'ゕ' | 'ゖ' | 'っ'
    )
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// っ + kana: double the first consonant. Hepburn spells っち as "tchi".
fn geminate(values: &Romanizations) -> Option<Romanizations> {
    if values.iter().any(|r| r.starts_with(is_vowel)) {
        return None;
    }
    Some(std::array::from_fn(|col| {
        let romaji = &values[col];
        if RomanizationSystem::ALL[col].is_hepburn() && romaji.starts_with("ch") {
            return format!("t{romaji}");
        }
        match romaji.chars().next() {
            Some(c) => format!("{c}{romaji}"),
            None => String::new(),
        }
    }))
}

fn needs_syllabic_n_form(values: &Romanizations) -> bool {
    values
        .iter()
        .any(|r| r.starts_with(|c: char| is_vowel(c) || matches!(c, 'y' | 'b' | 'm' | 'p')))
}

/// ん + kana: `n'` before a vowel or y where the system disambiguates,
/// `m` before b/m/p in passport Hepburn, plain `n` otherwise.
fn after_syllabic_n(values: &Romanizations) -> Romanizations {
    std::array::from_fn(|col| {
        let system = RomanizationSystem::ALL[col];
        let romaji = &values[col];
        let n = match romaji.chars().next() {
            Some(c) if (is_vowel(c) || c == 'y') && system.uses_n_apostrophe() => "n'",
            Some('b' | 'm' | 'p') if system.uses_m_before_labial() => "m",
            _ => "n",
        };
        format!("{n}{romaji}")
    })
}
