//! Character-level Unicode classification for Japanese text.

/// The prolonged sound mark. Technically katakana, but it also lengthens
/// hiragana vowels in loanword-style spellings such as "らーめん".
pub const PROLONGED_SOUND_MARK: char = 'ー';

/// The kanji iteration mark (々), valid inside a headword after its first
/// character.
pub const ITERATION_MARK: char = '々';

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes ー and ・.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// Katakana Phonetic Extensions (small ㇰ..ㇿ used for Ainu).
pub fn is_katakana_ext(c: char) -> bool {
    ('\u{31F0}'..='\u{31FF}').contains(&c)
}

/// Halfwidth katakana including the half-width 。「」、・ punctuation.
pub fn is_half_katakana(c: char) -> bool {
    ('\u{FF61}'..='\u{FF9F}').contains(&c)
}

pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
        || ('\u{FF21}'..='\u{FF3A}').contains(&c)
        || ('\u{FF41}'..='\u{FF5A}').contains(&c)
        || (('\u{00C0}'..='\u{024F}').contains(&c) && c.is_alphabetic())
}

/// Characters the segmenter consults the dictionary for.
pub fn is_japanese_script(c: char) -> bool {
    is_hiragana(c) || is_katakana(c) || is_katakana_ext(c) || is_kanji(c)
}

/// Hiragana that has a katakana counterpart exactly 0x60 above it.
fn has_katakana_pair(c: char) -> bool {
    ('\u{3041}'..='\u{3096}').contains(&c) || c == 'ゝ' || c == 'ゞ'
}

/// Katakana that has a hiragana counterpart exactly 0x60 below it.
fn has_hiragana_pair(c: char) -> bool {
    ('\u{30A1}'..='\u{30F6}').contains(&c) || c == 'ヽ' || c == 'ヾ'
}

pub fn hiragana_char_to_katakana(c: char) -> char {
    if has_katakana_pair(c) {
        char::from_u32(c as u32 + 0x60).unwrap_or(c)
    } else {
        c
    }
}

pub fn katakana_char_to_hiragana(c: char) -> char {
    if has_hiragana_pair(c) {
        char::from_u32(c as u32 - 0x60).unwrap_or(c)
    } else {
        c
    }
}

/// Convert a hiragana string to katakana.
/// Non-hiragana characters (ー, ASCII, etc.) are passed through unchanged.
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars().map(hiragana_char_to_katakana).collect()
}

/// Coarse script class used for word-boundary decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Hiragana,
    Katakana,
    Han,
    Latin,
    /// Script-neutral: punctuation, digits, symbols, ー, whitespace.
    Common,
}

pub fn script_of(c: char) -> Script {
    match c {
        PROLONGED_SOUND_MARK | '・' | '゛' | '゜' | '\u{30A0}' | '\u{FF61}'..='\u{FF65}' => {
            Script::Common
        }
        '\u{FF70}' | '\u{FF9E}' | '\u{FF9F}' => Script::Common,
        ITERATION_MARK => Script::Han,
        _ if is_hiragana(c) => Script::Hiragana,
        _ if is_katakana(c) || is_katakana_ext(c) || is_half_katakana(c) => Script::Katakana,
        _ if is_kanji(c) => Script::Han,
        _ if is_latin(c) => Script::Latin,
        _ => Script::Common,
    }
}

pub fn is_common(c: char) -> bool {
    script_of(c) == Script::Common
}
