use crate::dict::{decode_source, parse_line, DictEntry, KanwaBuilder};

#[test]
fn test_parse_kakasi_line() {
    assert_eq!(
        parse_line("かんじ 漢字"),
        vec![DictEntry::new("かんじ", None, "漢字")]
    );
}

#[test]
fn test_surrounding_whitespace_ignored() {
    let expected = vec![DictEntry::new("かんじ", None, "漢字")];
    assert_eq!(parse_line("  かんじ 漢字"), expected);
    assert_eq!(parse_line("\tかんじ 漢字 \r"), expected);
}

#[test]
fn test_leading_byte_order_mark_ignored() {
    assert_eq!(
        parse_line("\u{FEFF}かんじ 漢字"),
        vec![DictEntry::new("かんじ", None, "漢字")]
    );

    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice("かんじ 漢字\nにほん 日本\n".as_bytes());
    let mut builder = KanwaBuilder::new();
    builder.add_source_text(&decode_source(&bytes));
    assert_eq!(builder.entry_count(), 2);
}

#[test]
fn test_parse_skk_line_with_multiple_headwords() {
    let entries = parse_line("かんじ /漢字/幹事/感じ/");
    let headwords: Vec<&str> = entries.iter().map(|e| e.headword.as_str()).collect();
    assert_eq!(headwords, vec!["漢字", "幹事", "感じ"]);
    assert!(entries.iter().all(|e| e.reading == "かんじ"));
}

#[test]
fn test_field_separators() {
    assert_eq!(parse_line("かんじ\t漢字,幹事").len(), 2);
}

#[test]
fn test_inflection_tail_is_stripped_and_lowercased() {
    assert_eq!(
        parse_line("おくR /送/"),
        vec![DictEntry::new("おく", Some('r'), "送")]
    );
}

#[test]
fn test_skk_annotation_removed() {
    assert_eq!(
        parse_line("しんぶん /新聞;newspaper/新報/"),
        vec![
            DictEntry::new("しんぶん", None, "新聞"),
            DictEntry::new("しんぶん", None, "新報"),
        ]
    );
}

#[test]
fn test_prolonged_mark_becomes_vowel() {
    assert_eq!(
        parse_line("らーめん 拉麺"),
        vec![DictEntry::new("らあめん", None, "拉麺")]
    );
    assert_eq!(parse_line("きゃー 嗚呼")[0].reading, "きゃあ");
    // nothing to lengthen
    assert!(parse_line("んー 嗯").is_empty());
}

#[test]
fn test_iteration_mark_in_headword() {
    assert_eq!(parse_line("ひとびと 人々")[0].headword, "人々");
    assert!(parse_line("ひとびと 々人").is_empty());
}

#[test]
fn test_skips_malformed_lines() {
    assert!(parse_line("").is_empty());
    assert!(parse_line(";; okuri-ari entries.").is_empty());
    assert!(parse_line("カンジ 漢字").is_empty());
    assert!(parse_line("kanji 漢字").is_empty());
    assert!(parse_line("かanじ 漢字").is_empty());
    assert!(parse_line("かんじ").is_empty());
}

#[test]
fn test_skips_invalid_headwords_only() {
    // a headword must start with an indexed kanji and contain only kana/kanji
    let entries = parse_line("かんじ /漢字/かんじ/漢x/漢字/");
    let headwords: Vec<&str> = entries.iter().map(|e| e.headword.as_str()).collect();
    assert_eq!(headwords, vec!["漢字", "漢字"]);
}

#[test]
fn test_builder_counts() {
    let mut builder = KanwaBuilder::new();
    builder.add_source_text("かんじ /漢字/幹事/\n;; comment\nbad line\nにほん 日本\n");
    assert_eq!(builder.entry_count(), 3);
    assert_eq!(builder.key_count(), 3);
}

#[test]
fn test_decode_utf8_source() {
    assert_eq!(decode_source("かんじ 漢字".as_bytes()), "かんじ 漢字");
}

#[test]
fn test_decode_euc_jp_source() {
    // "かんじ 漢字" in EUC-JP
    let bytes = [
        0xA4, 0xAB, 0xA4, 0xF3, 0xA4, 0xB8, 0x20, 0xB4, 0xC1, 0xBB, 0xFA,
    ];
    assert_eq!(decode_source(&bytes), "かんじ 漢字");
}
