use super::kana::romanize;
use super::{Converted, RomajiContext};
use crate::config::Target;
use crate::unicode::katakana_char_to_hiragana;

/// Full-width katakana for U+FF66..=U+FF9F.
const FULL_WIDTH: &str = "ヲァィゥェォャュョッーアイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワン゛゜";

const DAKUTEN: char = 'ﾞ';
const HANDAKUTEN: char = 'ﾟ';

pub(super) fn is_half_kana_letter(c: char) -> bool {
    ('\u{FF66}'..='\u{FF9F}').contains(&c)
}

/// Consume the whole run of half-width kana at the start of `run`.
pub(super) fn half_kana(
    run: &[char],
    target: Target,
    ctx: &RomajiContext<'_>,
) -> Option<Converted> {
    let len = run.iter().take_while(|&&c| is_half_kana_letter(c)).count();
    let full = to_full_width(&run[..len]);
    let output = match target {
        Target::Katakana | Target::FullWidth => full.iter().collect(),
        Target::Hiragana => full.iter().map(|&c| katakana_char_to_hiragana(c)).collect(),
        Target::Romaji => {
            let mut out = String::new();
            let mut i = 0;
            while i < full.len() {
                let conv = romanize(&full[i..], ctx);
                out.push_str(&conv.output);
                i += conv.consumed;
            }
            out
        }
        _ => return None,
    };
    Some(Converted::text(output, len))
}

/// Map half-width kana to full-width, folding a following (han)dakuten
/// into the voiced form where one exists.
fn to_full_width(half: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(half.len());
    let mut i = 0;
    while i < half.len() {
        let Some(base) = full_width_of(half[i]) else {
            out.push(half[i]);
            i += 1;
            continue;
        };
        let combined = match half.get(i + 1) {
            Some(&DAKUTEN) => voiced(base),
            Some(&HANDAKUTEN) => semi_voiced(base),
            _ => None,
        };
        match combined {
            Some(c) => {
                out.push(c);
                i += 2;
            }
            None => {
                out.push(base);
                i += 1;
            }
        }
    }
    out
}

fn full_width_of(c: char) -> Option<char> {
    let index = (c as u32).checked_sub(0xFF66)? as usize;
    FULL_WIDTH.chars().nth(index)
}

fn voiced(c: char) -> Option<char> {
    match c {
        'カ' | 'キ' | 'ク' | 'ケ' | 'コ' | 'サ' | 'シ' | 'ス' | 'セ' | 'ソ' | 'タ' | 'チ' | 'ツ'
        | 'テ' | 'ト' | 'ハ' | 'ヒ' | 'フ' | 'ヘ' | 'ホ' => char::from_u32(c as u32 + 1),
        'ウ' => Some('ヴ'),
        'ワ' => Some('ヷ'),
        'ヲ' => Some('ヺ'),
        _ => None,
    }
}

fn semi_voiced(c: char) -> Option<char> {
    match c {
        'ハ' | 'ヒ' | 'フ' | 'ヘ' | 'ホ' => char::from_u32(c as u32 + 2),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::romaji::{KanaTrie, RomanizationSystem};

    fn convert(input: &str, target: Target) -> (String, usize) {
        let ctx = RomajiContext {
            trie: KanaTrie::global(),
            system: RomanizationSystem::ModifiedHepburn,
            macron: false,
        };
        let chars: Vec<char> = input.chars().collect();
        let conv = half_kana(&chars, target, &ctx).unwrap();
        (conv.output, conv.consumed)
    }

    #[test]
    fn test_dakuten_combination() {
        assert_eq!(convert("ｶﾞｷﾞ", Target::Katakana), ("ガギ".into(), 4));
        assert_eq!(convert("ﾊﾟﾋﾞﾌ", Target::Katakana), ("パビフ".into(), 5));
        assert_eq!(convert("ｳﾞｧ", Target::Katakana), ("ヴァ".into(), 3));
    }

    #[test]
    fn test_mark_without_voiced_form_stays() {
        assert_eq!(convert("ｱﾞ", Target::Katakana), ("ア゛".into(), 2));
        assert_eq!(convert("ﾟ", Target::Katakana), ("゜".into(), 1));
    }

    #[test]
    fn test_stops_at_non_kana() {
        assert_eq!(convert("ｶﾅa", Target::Katakana), ("カナ".into(), 2));
        // half-width punctuation is handled separately
        assert_eq!(convert("ｶ｡", Target::Katakana), ("カ".into(), 1));
    }

    #[test]
    fn test_targets() {
        assert_eq!(convert("ｶﾞｷﾞ", Target::Romaji).0, "gagi");
        assert_eq!(convert("ｷｬｰ", Target::Romaji).0, "kyaa");
        assert_eq!(convert("ﾃﾞｨｽｸ", Target::Hiragana).0, "でぃすく");
        let ctx = RomajiContext {
            trie: KanaTrie::global(),
            system: RomanizationSystem::ModifiedHepburn,
            macron: false,
        };
        assert!(half_kana(&['ｶ'], Target::HalfWidth, &ctx).is_none());
    }
}
