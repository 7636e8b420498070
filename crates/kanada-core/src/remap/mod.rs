//! Per-block character remapping.
//!
//! `ScriptRemapper` walks a run of text, picks a `Converter` for the Unicode
//! block of the character at the cursor, and lets it consume as many
//! characters as it needs (a kana digraph, a half-width kana run with
//! dakuten, a single symbol). Characters of other blocks, or of blocks
//! whose target is `AsIs`, pass through unchanged.

mod half_kana;
mod kana;
mod symbol;
mod width;

use crate::config::{Config, Target};
use crate::romaji::{KanaTrie, RomanizationSystem};

/// Output of one converter step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Converted {
    pub output: String,
    /// Input characters consumed; always at least 1.
    pub consumed: usize,
}

impl Converted {
    fn single(c: char) -> Self {
        Self {
            output: c.to_string(),
            consumed: 1,
        }
    }

    fn text(output: String, consumed: usize) -> Self {
        Self { output, consumed }
    }
}

pub(crate) struct RomajiContext<'a> {
    pub trie: &'a KanaTrie,
    pub system: RomanizationSystem,
    pub macron: bool,
}

/// The closed set of block converters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Converter {
    Ascii,
    Latin1,
    CjkSymbol,
    Hiragana,
    Katakana,
    HalfSymbol,
    HalfKana,
    WideAscii,
}

impl Converter {
    /// Block lookup.
    pub fn for_char(c: char) -> Option<Self> {
        Some(match c {
            '\u{0000}'..='\u{007F}' => Converter::Ascii,
            '\u{0080}'..='\u{00FF}' => Converter::Latin1,
            '\u{3000}'..='\u{303F}' => Converter::CjkSymbol,
            '\u{3040}'..='\u{309F}' => Converter::Hiragana,
            '\u{30A0}'..='\u{30FF}' | '\u{31F0}'..='\u{31FF}' => Converter::Katakana,
            '\u{FF61}'..='\u{FF65}' => Converter::HalfSymbol,
            '\u{FF66}'..='\u{FF9F}' => Converter::HalfKana,
            '\u{FF00}'..='\u{FFEF}' => Converter::WideAscii,
            _ => return None,
        })
    }

    /// The configured target for this converter's block.
    pub fn target(self, config: &Config) -> Target {
        match self {
            Converter::Ascii => config.ascii,
            Converter::Latin1 | Converter::HalfSymbol => config.half_symbol,
            Converter::CjkSymbol => config.wide_symbol,
            Converter::Hiragana => config.hiragana,
            Converter::Katakana => config.katakana,
            Converter::HalfKana => config.half_katakana,
            Converter::WideAscii => config.wide_ascii,
        }
    }

    /// Convert the start of `run`. `None` when the target does not apply to
    /// this block.
    fn consume(self, run: &[char], target: Target, ctx: &RomajiContext<'_>) -> Option<Converted> {
        let c = run[0];
        match self {
            Converter::Ascii => width::ascii(c, target),
            Converter::Latin1 => width::latin1(c, target),
            Converter::WideAscii => width::wide_ascii(c, target),
            Converter::CjkSymbol => symbol::cjk(c, target),
            Converter::HalfSymbol => symbol::half_symbol(c, target),
            Converter::Hiragana => kana::hiragana(run, target, ctx),
            Converter::Katakana => kana::katakana(run, target, ctx),
            Converter::HalfKana => half_kana::half_kana(run, target, ctx),
        }
    }
}

pub struct ScriptRemapper<'a> {
    config: &'a Config,
    trie: &'a KanaTrie,
}

impl<'a> ScriptRemapper<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self::with_trie(config, KanaTrie::global())
    }

    pub fn with_trie(config: &'a Config, trie: &'a KanaTrie) -> Self {
        Self { config, trie }
    }

    /// Render a buffered run. `mid_inflection` suppresses uppercase-first
    /// when the run continues an inflected word.
    pub fn render(&self, run: &[char], mid_inflection: bool) -> String {
        let ctx = RomajiContext {
            trie: self.trie,
            system: self.config.system,
            macron: self.config.macron,
        };

        let mut out = String::with_capacity(run.len() * 3);
        let mut i = 0;
        while i < run.len() {
            let converted = Converter::for_char(run[i]).and_then(|conv| {
                let target = conv.target(self.config);
                if target == Target::AsIs {
                    None
                } else {
                    conv.consume(&run[i..], target, &ctx)
                }
            });
            match converted {
                Some(conv) => {
                    out.push_str(&conv.output);
                    i += conv.consumed.max(1);
                }
                None => {
                    out.push(run[i]);
                    i += 1;
                }
            }
        }

        if self.config.upper_first && !mid_inflection {
            out = upper_case_first(&out);
        }
        out
    }

    pub fn render_str(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        self.render(&chars, false)
    }
}

/// Uppercase the first character of every whitespace-separated token.
pub fn upper_case_first(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_token_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            at_token_start = true;
            out.push(c);
        } else if at_token_start {
            at_token_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}
