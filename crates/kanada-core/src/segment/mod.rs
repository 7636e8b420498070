//! Dictionary-driven segmentation.
//!
//! The segmenter walks the input one character at a time. Kana and kanji
//! positions are looked up in the dictionary; the longest valid headword is
//! emitted as a unit (headword or reading), everything else accumulates in a
//! pending run that is rendered through the `ScriptRemapper` when the next
//! match or the end of input is reached. With spacing enabled, a separator
//! goes between adjoining segments unless the previous match is mid-
//! inflection or either side is whitespace or punctuation.

mod select;

pub use select::{longest_match, Match};

use std::ops::Range;

use tracing::{debug, debug_span};

use crate::config::{Annotation, Config, Target};
use crate::dict::{DictError, Dictionary};
use crate::remap::ScriptRemapper;
use crate::romaji::KanaTrie;
use crate::unicode::{is_common, is_japanese_script, script_of};

/// Input not yet matched against the dictionary: a contiguous range of the
/// input plus the inflection tail of the match emitted just before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRun {
    pub range: Range<usize>,
    pub tail: Option<char>,
}

impl PendingRun {
    fn starting_at(pos: usize, tail: Option<char>) -> Self {
        Self {
            range: pos..pos,
            tail,
        }
    }

    fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    fn extend(&mut self) {
        self.range.end += 1;
    }
}

/// Last input character of the previous segment and its inflection tail.
#[derive(Debug, Clone, Copy)]
struct Boundary {
    last: char,
    tail: Option<char>,
}

/// Whether a separator may go between two adjoining characters.
fn separable(prev: char, next: char) -> bool {
    !prev.is_whitespace() && !next.is_whitespace() && !is_common(prev) && !is_common(next)
}

pub struct Segmenter<'a> {
    dict: Option<&'a dyn Dictionary>,
    config: &'a Config,
    trie: &'a KanaTrie,
}

impl<'a> Segmenter<'a> {
    /// Without a dictionary every lookup misses and kanji pass through.
    pub fn new(dict: Option<&'a dyn Dictionary>, config: &'a Config) -> Self {
        Self::with_trie(dict, config, KanaTrie::global())
    }

    pub fn with_trie(
        dict: Option<&'a dyn Dictionary>,
        config: &'a Config,
        trie: &'a KanaTrie,
    ) -> Self {
        Self { dict, config, trie }
    }

    /// Segment and convert `input`. Only storage failures from the
    /// dictionary are returned as errors.
    pub fn parse(&self, input: &str) -> Result<String, DictError> {
        let _span = debug_span!("parse", len = input.len()).entered();

        let chars: Vec<char> = input.chars().collect();
        let reading_config = self.config.for_reading();
        let mut writer = SegmentWriter {
            out: String::with_capacity(input.len() * 2),
            config: self.config,
            remapper: ScriptRemapper::with_trie(self.config, self.trie),
            reading_remapper: ScriptRemapper::with_trie(&reading_config, self.trie),
            last: None,
        };

        let mut pending = PendingRun::starting_at(0, None);
        let mut matches = 0usize;
        let mut i = 0;
        while i < chars.len() {
            let found = if is_japanese_script(chars[i]) {
                self.find_match(&chars, i)?
            } else {
                None
            };
            let Some(m) = found else {
                pending.extend();
                i += 1;
                continue;
            };

            writer.flush(&pending, &chars);
            writer.emit_match(&m, &chars[i..i + m.len]);
            matches += 1;
            i += m.len;
            pending = PendingRun::starting_at(i, m.tail);
        }
        writer.flush(&pending, &chars);

        debug!(chars = chars.len(), matches, "segmented");
        let mut out = writer.out;
        if self.config.upper_all {
            out = out.to_uppercase();
        }
        Ok(out)
    }

    fn find_match(&self, chars: &[char], pos: usize) -> Result<Option<Match>, DictError> {
        let Some(dict) = self.dict else {
            return Ok(None);
        };
        let key = dict.get_key(chars[pos]);
        if !dict.search_key(key)? {
            return Ok(None);
        }
        let entries = dict.get_value(key);
        Ok(longest_match(&entries, chars, pos, self.trie))
    }
}

/// Output accumulator threaded through one parse.
struct SegmentWriter<'a> {
    out: String,
    config: &'a Config,
    remapper: ScriptRemapper<'a>,
    reading_remapper: ScriptRemapper<'a>,
    last: Option<Boundary>,
}

impl SegmentWriter<'_> {
    fn separate_from_previous(&mut self, first: char, prev_tail: Option<char>) {
        let Some(prev) = self.last else {
            return;
        };
        if self.config.spaces && prev_tail.is_none() && separable(prev.last, first) {
            self.out.push(self.config.separator);
        }
    }

    /// Render the pending run. With spacing enabled the run is also split
    /// where the script changes between two separable characters.
    fn flush(&mut self, pending: &PendingRun, chars: &[char]) {
        if pending.is_empty() {
            return;
        }
        let run = &chars[pending.range.clone()];
        self.separate_from_previous(run[0], pending.tail);

        let mid_inflection = pending.tail.is_some();
        let mut start = 0;
        if self.config.spaces {
            for k in 1..run.len() {
                let (prev, next) = (run[k - 1], run[k]);
                if separable(prev, next) && script_of(prev) != script_of(next) {
                    let piece = self.remapper.render(&run[start..k], mid_inflection && start == 0);
                    self.out.push_str(&piece);
                    self.out.push(self.config.separator);
                    start = k;
                }
            }
        }
        let piece = self
            .remapper
            .render(&run[start..], mid_inflection && start == 0);
        self.out.push_str(&piece);

        self.last = Some(Boundary {
            last: run[run.len() - 1],
            tail: None,
        });
    }

    fn emit_match(&mut self, m: &Match, covered: &[char]) {
        let prev_tail = self.last.and_then(|b| b.tail);
        self.separate_from_previous(covered[0], prev_tail);

        let keep_headword = self.config.kanji == Target::AsIs;
        let body = if keep_headword {
            self.remapper.render_str(&m.headword)
        } else {
            self.reading_remapper.render_str(&m.reading)
        };
        self.out.push_str(&body);

        let readings = if keep_headword {
            &self.remapper
        } else {
            &self.reading_remapper
        };
        match self.config.annotation {
            Annotation::None => {}
            Annotation::Furigana => {
                let reading = readings.render_str(&m.reading);
                self.out.push('[');
                self.out.push_str(&reading);
                self.out.push(']');
            }
            Annotation::AllReadings => {
                let all: Vec<String> = m.readings.iter().map(|r| readings.render_str(r)).collect();
                self.out.push('{');
                self.out.push_str(&all.join("|"));
                self.out.push('}');
            }
        }

        self.last = Some(Boundary {
            last: covered[covered.len() - 1],
            tail: m.tail,
        });
    }
}
