use super::Converted;
use crate::config::Target;

/// ASCII renderings of U+3000..=U+303F.
const CJK_TO_ASCII: [&str; 64] = [
    " ", ",", ".", "(repeat)", "(jis)", "(repeat)", "(closing mark)", "(circle)",
    "<", ">", "<<", ">>", "'", "'", "\"", "\"",
    "[", "]", "(postal mark)", "=", "[", "]", "{", "}",
    "[", "]", "[[", "]]", "~", "\"", "\"", "\"",
    "(postal mark face)", "1", "2", "3", "4", "5", "6", "7",
    "8", "9", "", "", "", "", "", "",
    "~", "(repeat)", "(repeat)", "(repeat)", "(repeat)", "(repeat)", "(postal mark circle)", "XX",
    "10", "20", "30", "(repeat)", "(masu mark)", "♪", " ", " ",
];

/// CJK Symbols and Punctuation.
pub(super) fn cjk(c: char, target: Target) -> Option<Converted> {
    match target {
        Target::Romaji => {
            let index = (c as u32 - 0x3000) as usize;
            Some(Converted::text(CJK_TO_ASCII[index].to_string(), 1))
        }
        Target::HalfWidth => {
            let half = match c {
                '　' => ' ',
                '、' => '､',
                '。' => '｡',
                '「' => '｢',
                '」' => '｣',
                '〜' | '〰' => 'ｰ',
                _ => c,
            };
            Some(Converted::single(half))
        }
        _ => None,
    }
}

/// Half-width CJK punctuation (U+FF61..=U+FF65).
pub(super) fn half_symbol(c: char, target: Target) -> Option<Converted> {
    match target {
        Target::FullWidth | Target::Katakana | Target::Hiragana => {
            let full = match c {
                '｡' => '。',
                '｢' => '「',
                '｣' => '」',
                '､' => '、',
                '･' => '・',
                _ => c,
            };
            Some(Converted::single(full))
        }
        Target::Romaji => {
            let ascii = match c {
                '｡' => '.',
                '｢' | '｣' => '"',
                '､' => ',',
                '･' => ' ',
                _ => c,
            };
            Some(Converted::single(ascii))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cjk_to_ascii() {
        assert_eq!(cjk('、', Target::Romaji).unwrap().output, ",");
        assert_eq!(cjk('。', Target::Romaji).unwrap().output, ".");
        assert_eq!(cjk('「', Target::Romaji).unwrap().output, "'");
        assert_eq!(cjk('『', Target::Romaji).unwrap().output, "\"");
        assert_eq!(cjk('　', Target::Romaji).unwrap().output, " ");
        assert_eq!(cjk('〜', Target::Romaji).unwrap().output, "~");
    }

    #[test]
    fn test_cjk_to_half() {
        assert_eq!(cjk('「', Target::HalfWidth).unwrap().output, "｢");
        assert_eq!(cjk('〰', Target::HalfWidth).unwrap().output, "ｰ");
        assert_eq!(cjk('〒', Target::HalfWidth).unwrap().output, "〒");
        assert!(cjk('「', Target::Katakana).is_none());
    }

    #[test]
    fn test_half_symbol() {
        assert_eq!(half_symbol('｡', Target::FullWidth).unwrap().output, "。");
        assert_eq!(half_symbol('･', Target::Romaji).unwrap().output, " ");
        assert!(half_symbol('｡', Target::AsIs).is_none());
    }
}
