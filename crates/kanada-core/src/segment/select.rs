use crate::dict::DictEntry;
use crate::romaji::{KanaTrie, RomanizationSystem};
use crate::unicode::is_hiragana;

/// The dictionary candidate chosen at one input position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub headword: String,
    pub reading: String,
    pub tail: Option<char>,
    /// Input characters covered by the headword.
    pub len: usize,
    /// Distinct readings of every valid candidate of the same length, in
    /// dictionary order.
    pub readings: Vec<String>,
}

/// Pick the longest valid candidate starting at `pos`.
///
/// A candidate is valid when its headword equals the input at `pos`, its
/// reading is non-empty, and, for an inflected entry, the next input
/// character is hiragana whose romaji initial in `trie` equals the tail. On equal
/// length a neutral entry beats an inflected one; otherwise the first entry
/// in dictionary order wins.
pub fn longest_match(
    entries: &[DictEntry],
    chars: &[char],
    pos: usize,
    trie: &KanaTrie,
) -> Option<Match> {
    let remaining = chars.len().saturating_sub(pos);
    let mut best: Option<(&DictEntry, usize)> = None;
    let mut valid: Vec<(&DictEntry, usize)> = Vec::new();

    for entry in entries {
        if entry.reading.is_empty() {
            continue;
        }
        let len = entry.headword_len();
        if len == 0 || len > remaining {
            continue;
        }
        if !entry.headword.chars().eq(chars[pos..pos + len].iter().copied()) {
            continue;
        }
        if let Some(tail) = entry.tail {
            match chars.get(pos + len) {
                Some(&next) if tail_matches(trie, tail, next) => {}
                _ => continue,
            }
        }

        valid.push((entry, len));
        best = match best {
            None => Some((entry, len)),
            Some((_, best_len)) if len > best_len => Some((entry, len)),
            Some((current, best_len))
                if len == best_len && current.tail.is_some() && entry.tail.is_none() =>
            {
                Some((entry, len))
            }
            keep => keep,
        };
    }

    let (entry, len) = best?;
    let mut readings: Vec<String> = Vec::new();
    for (candidate, candidate_len) in valid {
        if candidate_len == len && !readings.contains(&candidate.reading) {
            readings.push(candidate.reading.clone());
        }
    }

    Some(Match {
        headword: entry.headword.clone(),
        reading: entry.reading.clone(),
        tail: entry.tail,
        len,
        readings,
    })
}

/// Okurigana letters follow Hepburn or Kunrei spelling depending on the
/// source (`もt` for 持つ, `もc` or `もt` for 持ち), so accept either.
fn tail_matches(trie: &KanaTrie, tail: char, next: char) -> bool {
    is_hiragana(next)
        && [RomanizationSystem::ModifiedHepburn, RomanizationSystem::Kunrei]
            .iter()
            .any(|&system| trie.romaji_initial(next, system) == Some(tail))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(entries: &[DictEntry], input: &str, pos: usize) -> Option<Match> {
        let chars: Vec<char> = input.chars().collect();
        longest_match(entries, &chars, pos, KanaTrie::global())
    }

    #[test]
    fn test_longest_wins() {
        let entries = vec![
            DictEntry::new("かん", None, "漢"),
            DictEntry::new("かんじ", None, "漢字"),
        ];
        let m = find(&entries, "漢字だ", 0).unwrap();
        assert_eq!(m.reading, "かんじ");
        assert_eq!(m.len, 2);
    }

    #[test]
    fn test_candidate_must_fit_remaining_input() {
        let entries = vec![
            DictEntry::new("かんじ", None, "漢字"),
            DictEntry::new("かん", None, "漢"),
        ];
        let m = find(&entries, "漢", 0).unwrap();
        assert_eq!(m.headword, "漢");
    }

    #[test]
    fn test_match_at_offset() {
        let entries = vec![DictEntry::new("じ", None, "字")];
        let m = find(&entries, "漢字", 1).unwrap();
        assert_eq!(m.reading, "じ");
        assert!(find(&entries, "漢字", 0).is_none());
    }

    #[test]
    fn test_empty_reading_is_a_miss() {
        let entries = vec![DictEntry::new("", None, "漢")];
        assert!(find(&entries, "漢", 0).is_none());
    }

    #[test]
    fn test_inflected_needs_matching_next_kana() {
        let entries = vec![DictEntry::new("おく", Some('r'), "送")];
        assert_eq!(find(&entries, "送る", 0).unwrap().reading, "おく");
        assert_eq!(find(&entries, "送り", 0).unwrap().tail, Some('r'));
        assert!(find(&entries, "送", 0).is_none());
        assert!(find(&entries, "送た", 0).is_none());
        assert!(find(&entries, "送付", 0).is_none());
    }

    #[test]
    fn test_kunrei_tail_letter() {
        let entries = vec![DictEntry::new("も", Some('t'), "持")];
        assert!(find(&entries, "持ち", 0).is_some());
        assert!(find(&entries, "持つ", 0).is_some());
    }

    #[test]
    fn test_neutral_tail_preferred_on_tie() {
        let entries = vec![
            DictEntry::new("おこな", Some('u'), "行"),
            DictEntry::new("ぎょう", None, "行"),
        ];
        let m = find(&entries, "行う", 0).unwrap();
        assert_eq!(m.reading, "ぎょう");
        assert_eq!(m.tail, None);
        assert_eq!(m.readings, vec!["おこな", "ぎょう"]);
    }

    #[test]
    fn test_longer_inflected_beats_shorter_neutral() {
        let entries = vec![
            DictEntry::new("いき", None, "生"),
            DictEntry::new("いきもの", None, "生物"),
            DictEntry::new("うまれ", Some('r'), "生まれ"),
        ];
        let m = find(&entries, "生まれる", 0).unwrap();
        assert_eq!(m.headword, "生まれ");
    }

    #[test]
    fn test_first_entry_wins_full_tie() {
        let entries = vec![
            DictEntry::new("にほん", None, "日本"),
            DictEntry::new("にっぽん", None, "日本"),
            DictEntry::new("にほん", None, "日本"),
        ];
        let m = find(&entries, "日本", 0).unwrap();
        assert_eq!(m.reading, "にほん");
        assert_eq!(m.readings, vec!["にほん", "にっぽん"]);
    }

    #[test]
    fn test_tail_uses_given_trie() {
        let entries = vec![DictEntry::new("も", Some('t'), "持")];
        let chars: Vec<char> = "持ち".chars().collect();
        let mut trie = KanaTrie::default();
        trie.insert("ち", std::array::from_fn(|_| "chi".to_string()));
        assert!(longest_match(&entries, &chars, 0, &trie).is_none());
        trie.insert("ち", std::array::from_fn(|_| "ti".to_string()));
        assert!(longest_match(&entries, &chars, 0, &trie).is_some());
    }
}
