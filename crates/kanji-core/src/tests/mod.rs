mod reconcile_tests;

use kanji_types::{ExampleWord, KanjiEntry};

pub(crate) fn entry(kanji: &str, hanviet: &[&str], kun: &[&str], on: &[&str]) -> KanjiEntry {
    let mut entry = KanjiEntry::new(kanji);
    entry.hanviet = hanviet.iter().map(|s| s.to_string()).collect();
    entry.kun = kun.iter().map(|s| s.to_string()).collect();
    entry.on = on.iter().map(|s| s.to_string()).collect();
    entry
}

pub(crate) fn example(text: &str, phonetic: Option<&str>) -> ExampleWord {
    ExampleWord::new(text, phonetic.map(str::to_string))
}
