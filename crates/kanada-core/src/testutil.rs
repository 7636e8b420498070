#![cfg(test)]

use tempfile::TempDir;

use crate::dict::{KanwaBuilder, KanwaDictionary};

/// Small kakasi/SKK style source covering the segmentation scenarios.
pub const FIXTURE_SOURCE: &str = "\
;; okuri-ari entries
おくr /送/
かえr /帰/
;; okuri-nasi entries
かん 漢
かんじ 漢字
じ 字
にほん 日本
にっぽん 日本
にほんご 日本語
ご 語
とうきょう 東京
きょう 京
ひと 人
ひとびと 人々
らーめん 拉麺
しんぶん /新聞;newspaper/
";

/// Build the fixture source into a temporary kanwa file and open it.
///
/// The returned `TempDir` must outlive the dictionary.
pub fn fixture_dict() -> (TempDir, KanwaDictionary) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kanwadict");
    let mut builder = KanwaBuilder::new();
    builder.add_source_text(FIXTURE_SOURCE);
    builder.write(&path).unwrap();
    let dict = KanwaDictionary::open(&path).unwrap();
    (dir, dict)
}
