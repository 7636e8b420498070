
use std::sync::Arc;

use tempfile::TempDir;

use crate::{KanwaBuilder, KanwaDictionary};

pub(super) const SOURCE: &str = "\
おくr /送/
かん 漢
かんじ 漢字
にほん 日本
にほんご 日本語
とうきょう 東京
";

/// Build `SOURCE` into a temporary kanwa file. Keep the `TempDir` alive
/// for as long as the dictionary is used.
pub(super) fn make_test_dict() -> (TempDir, Arc<KanwaDictionary>) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kanwadict");
    let mut builder = KanwaBuilder::new();
    builder.add_source_text(SOURCE);
    builder.write(&path).unwrap();
    let dict = KanwaDictionary::open(&path).unwrap();
    (dir, Arc::new(dict))
}
