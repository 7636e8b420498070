use super::Converted;
use crate::config::Target;

const WIDE_OFFSET: u32 = 0xFEE0;

/// Latin-1 symbols with a full-width form, paired with that form.
const HALF_FULL_SYMBOLS: [(char, char); 6] = [
    ('¢', '￠'),
    ('£', '￡'),
    ('¬', '￢'),
    ('¯', '￣'),
    ('¦', '￤'),
    ('¥', '￥'),
];

/// Basic Latin: printable ASCII to full-width. Space and controls stay.
pub(super) fn ascii(c: char, target: Target) -> Option<Converted> {
    if target != Target::FullWidth {
        return None;
    }
    let out = match c {
        '!'..='~' => char::from_u32(c as u32 + WIDE_OFFSET).unwrap_or(c),
        _ => c,
    };
    Some(Converted::single(out))
}

/// Latin-1 Supplement: currency and sign symbols to their full-width forms.
pub(super) fn latin1(c: char, target: Target) -> Option<Converted> {
    if target != Target::FullWidth {
        return None;
    }
    let out = HALF_FULL_SYMBOLS
        .iter()
        .find(|(half, _)| *half == c)
        .map_or(c, |&(_, full)| full);
    Some(Converted::single(out))
}

/// Halfwidth and Fullwidth Forms outside the half-width kana range:
/// full-width ASCII and symbols back to their narrow forms.
pub(super) fn wide_ascii(c: char, target: Target) -> Option<Converted> {
    if !matches!(target, Target::Romaji | Target::HalfWidth) {
        return None;
    }
    let out = match c {
        '！'..='～' => char::from_u32(c as u32 - WIDE_OFFSET).unwrap_or(c),
        '￦' => '₩',
        _ => HALF_FULL_SYMBOLS
            .iter()
            .find(|(_, full)| *full == c)
            .map_or(c, |&(half, _)| half),
    };
    Some(Converted::single(out))
}
