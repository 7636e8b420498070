use super::{Converted, RomajiContext};
use crate::config::Target;
use crate::romaji::remove_macrons;
use crate::unicode::{hiragana_char_to_katakana, katakana_char_to_hiragana, PROLONGED_SOUND_MARK};

/// Half-width katakana for U+3040..=U+309F; empty or unchanged where none exists.
const HIRAGANA_TO_HALF: [&str; 96] = [
    "", "ｧ", "ｱ", "ｨ", "ｲ", "ｩ", "ｳ", "ｪ",
    "ｴ", "ｫ", "ｵ", "ｶ", "ｶﾞ", "ｷ", "ｷﾞ", "ｸ",
    "ｸﾞ", "ｹ", "ｹﾞ", "ｺ", "ｺﾞ", "ｻ", "ｻﾞ", "ｼ",
    "ｼﾞ", "ｽ", "ｽﾞ", "ｾ", "ｾﾞ", "ｿ", "ｿﾞ", "ﾀ",
    "ﾀﾞ", "ﾁ", "ﾁﾞ", "ｯ", "ﾂ", "ﾂﾞ", "ﾃ", "ﾃﾞ",
    "ﾄ", "ﾄﾞ", "ﾅ", "ﾆ", "ﾇ", "ﾈ", "ﾉ", "ﾊ",
    "ﾊﾞ", "ﾊﾟ", "ﾋ", "ﾋﾞ", "ﾋﾟ", "ﾌ", "ﾌﾞ", "ﾌﾟ",
    "ﾍ", "ﾍﾞ", "ﾍﾟ", "ﾎ", "ﾎﾞ", "ﾎﾟ", "ﾏ", "ﾐ",
    "ﾑ", "ﾒ", "ﾓ", "ｬ", "ﾔ", "ｭ", "ﾕ", "ｮ",
    "ﾖ", "ﾗ", "ﾘ", "ﾙ", "ﾚ", "ﾛ", "ﾜ", "ﾜ",
    "ｲ", "ｴ", "ｦ", "ﾝ", "ｳﾞ", "ｶ", "ｹ", "",
    "", "ﾞ", "ﾟ", "ﾞ", "ﾟ", "ゝ", "ゞ", "ﾖﾘ",
];

/// Half-width katakana for U+30A0..=U+30FF; empty or unchanged where none exists.
const KATAKANA_TO_HALF: [&str; 96] = [
    "゠", "ｧ", "ｱ", "ｨ", "ｲ", "ｩ", "ｳ", "ｪ",
    "ｴ", "ｫ", "ｵ", "ｶ", "ｶﾞ", "ｷ", "ｷﾞ", "ｸ",
    "ｸﾞ", "ｹ", "ｹﾞ", "ｺ", "ｺﾞ", "ｻ", "ｻﾞ", "ｼ",
    "ｼﾞ", "ｽ", "ｽﾞ", "ｾ", "ｾﾞ", "ｿ", "ｿﾞ", "ﾀ",
    "ﾀﾞ", "ﾁ", "ﾁﾞ", "ｯ", "ﾂ", "ﾂﾞ", "ﾃ", "ﾃﾞ",
    "ﾄ", "ﾄﾞ", "ﾅ", "ﾆ", "ﾇ", "ﾈ", "ﾉ", "ﾊ",
    "ﾊﾞ", "ﾊﾟ", "ﾋ", "ﾋﾞ", "ﾋﾟ", "ﾌ", "ﾌﾞ", "ﾌﾟ",
    "ﾍ", "ﾍﾞ", "ﾍﾟ", "ﾎ", "ﾎﾞ", "ﾎﾟ", "ﾏ", "ﾐ",
    "ﾑ", "ﾒ", "ﾓ", "ｬ", "ﾔ", "ｭ", "ﾕ", "ｮ",
    "ﾖ", "ﾗ", "ﾘ", "ﾙ", "ﾚ", "ﾛ", "ヮ", "ﾜ",
    "ｲ", "ｴ", "ｦ", "ﾝ", "ｳﾞ", "ｶ", "ｹ", "ﾜﾞ",
    "ｲﾞ", "ｴﾞ", "ｦﾞ", "･", "ｰ", "ヽ", "ヾ", "ｺﾄ",
];

pub(super) fn hiragana(run: &[char], target: Target, ctx: &RomajiContext<'_>) -> Option<Converted> {
    let c = run[0];
    match target {
        Target::Katakana => Some(Converted::single(hiragana_char_to_katakana(c))),
        Target::HalfWidth => Some(Converted::text(half_width(c, 0x3040, &HIRAGANA_TO_HALF), 1)),
        Target::Romaji => Some(romanize(run, ctx)),
        _ => None,
    }
}

/// Katakana and Katakana Phonetic Extensions.
pub(super) fn katakana(run: &[char], target: Target, ctx: &RomajiContext<'_>) -> Option<Converted> {
    let c = run[0];
    match target {
        Target::Hiragana => Some(Converted::single(katakana_char_to_hiragana(c))),
        Target::HalfWidth if ('\u{30A0}'..='\u{30FF}').contains(&c) => {
            Some(Converted::text(half_width(c, 0x30A0, &KATAKANA_TO_HALF), 1))
        }
        Target::Romaji => Some(romanize(run, ctx)),
        _ => None,
    }
}

fn half_width(c: char, base: u32, table: &[&str; 96]) -> String {
    match table[(c as u32 - base) as usize] {
        "" => c.to_string(),
        half => half.to_string(),
    }
}

/// Romanize the longest kana sequence at the start of `run`.
///
/// A ー directly after the match lengthens its final vowel and is consumed
/// with it. Characters the trie does not know are emitted as-is, except a
/// lone ー (`-`) and the middle dot (a space).
pub(super) fn romanize(run: &[char], ctx: &RomajiContext<'_>) -> Converted {
    let Some(m) = ctx.trie.search_longest(run.iter().copied()) else {
        return match run[0] {
            PROLONGED_SOUND_MARK => Converted::single('-'),
            '・' => Converted::single(' '),
            c => Converted::single(c),
        };
    };

    let mut romaji = m.romaji(ctx.system).to_string();
    let mut consumed = m.length;
    if run.get(consumed) == Some(&PROLONGED_SOUND_MARK) {
        romaji = ctx.system.lengthen(&romaji);
        consumed += 1;
    }
    if !ctx.macron {
        romaji = remove_macrons(&romaji);
    }
    Converted::text(romaji, consumed)
}
