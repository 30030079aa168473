use kanji_types::{EntryStatus, ImportMode, KanjiEntry};

use super::{entry, example};
use crate::reconcile::{classify, duplicate_keys, reconcile};

fn person() -> KanjiEntry {
    let mut e = entry("人", &["nhân"], &["ひと"], &["ジン", "ニン"]);
    e.example = vec![example("人間", Some("にんげん")), example("間柄", None)];
    e
}

fn water() -> KanjiEntry {
    entry("水", &["thủy"], &["みず"], &["スイ"])
}

fn fire() -> KanjiEntry {
    entry("火", &["hỏa"], &["ひ"], &["カ"])
}

fn statuses(entries: &[KanjiEntry]) -> Vec<(&str, Option<EntryStatus>)> {
    entries.iter().map(|e| (e.kanji.as_str(), e.status)).collect()
}

#[test]
fn absent_prior_is_new() {
    let empty = KanjiEntry::new("空");
    assert_eq!(classify(None, &empty), EntryStatus::New);
    assert_eq!(classify(None, &person()), EntryStatus::New);
}

#[test]
fn identical_entry_is_existing() {
    assert_eq!(classify(Some(&person()), &person()), EntryStatus::Existing);
}

#[test]
fn blank_readings_do_not_count_as_changes() {
    let old = entry("人", &["nhân"], &["ひと", ""], &["ジン"]);
    let fresh = entry("人", &["nhân", "  "], &["ひと"], &["ジン"]);
    assert_eq!(classify(Some(&old), &fresh), EntryStatus::Existing);
}

#[test]
fn reading_order_matters() {
    let old = entry("人", &[], &[], &["ジン", "ニン"]);
    let fresh = entry("人", &[], &[], &["ニン", "ジン"]);
    assert_eq!(classify(Some(&old), &fresh), EntryStatus::Updated);
}

#[test]
fn added_reading_is_update() {
    let old = entry("人", &["nhân"], &["ひと"], &[]);
    let fresh = entry("人", &["nhân"], &["ひと"], &["ジン"]);
    assert_eq!(classify(Some(&old), &fresh), EntryStatus::Updated);
}

#[test]
fn example_phonetic_null_is_significant() {
    let mut old = KanjiEntry::new("人");
    old.example = vec![example("人間", Some("にんげん"))];
    let mut fresh = KanjiEntry::new("人");
    fresh.example = vec![example("人間", None)];

    assert_eq!(classify(Some(&old), &fresh), EntryStatus::Updated);
}

#[test]
fn example_order_is_significant() {
    let mut old = person();
    old.example.reverse();
    assert_eq!(classify(Some(&old), &person()), EntryStatus::Updated);
}

#[test]
fn empty_examples_are_ignored() {
    let mut fresh = person();
    fresh.example.insert(1, example("", Some("x")));
    fresh.example.push(example("", None));
    assert_eq!(classify(Some(&person()), &fresh), EntryStatus::Existing);
}

#[test]
fn status_on_prior_does_not_affect_classification() {
    let old = person().with_status(EntryStatus::New);
    assert_eq!(classify(Some(&old), &person()), EntryStatus::Existing);
}

#[test]
fn merge_appends_untouched_prior_entries() {
    let prior = vec![
        person().with_status(EntryStatus::New),
        water().with_status(EntryStatus::Updated),
    ];
    let mut changed = person();
    changed.kun.push("と".to_string());

    let outcome = reconcile(vec![fire(), changed], &prior, ImportMode::Merge);

    assert_eq!(
        statuses(&outcome.final_set),
        vec![
            ("火", Some(EntryStatus::New)),
            ("人", Some(EntryStatus::Updated)),
            // kept verbatim, status included
            ("水", Some(EntryStatus::Updated)),
        ]
    );
    assert_eq!(outcome.final_set[2], prior[1]);
    assert_eq!(outcome.stats.new, 1);
    assert_eq!(outcome.stats.updated, 1);
    assert_eq!(outcome.stats.existing, 0);
    assert_eq!(outcome.stats.total, 2);
    assert_eq!(outcome.stats.removed, None);
}

#[test]
fn merge_reimport_is_idempotent() {
    let sheet = vec![person(), water()];
    let first = reconcile(sheet.clone(), &[], ImportMode::Merge);
    assert_eq!(first.stats.new, 2);

    let second = reconcile(sheet, &first.final_set, ImportMode::Merge);
    assert_eq!(second.stats.existing, 2);
    assert_eq!(second.stats.new + second.stats.updated, 0);

    let strip = |entries: &[KanjiEntry]| -> Vec<KanjiEntry> {
        entries
            .iter()
            .cloned()
            .map(|mut e| {
                e.status = None;
                e
            })
            .collect()
    };
    assert_eq!(strip(&second.final_set), strip(&first.final_set));
}

#[test]
fn replace_drops_prior_and_counts_removed() {
    let prior = vec![person(), water(), fire()];
    let outcome = reconcile(vec![water()], &prior, ImportMode::Replace);

    assert_eq!(statuses(&outcome.final_set), vec![("水", Some(EntryStatus::Existing))]);
    assert_eq!(outcome.stats.removed, Some(3));
    assert_eq!(outcome.stats.existing, 1);
    assert_eq!(outcome.stats.total, 1);
}

#[test]
fn replace_into_empty_collection() {
    let outcome = reconcile(vec![person()], &[], ImportMode::Replace);
    assert_eq!(outcome.stats.removed, Some(0));
    assert_eq!(outcome.stats.new, 1);
}

#[test]
fn duplicate_prior_keys_last_wins() {
    let stale = entry("人", &["cũ"], &[], &[]);
    let prior = vec![stale, person()];

    let outcome = reconcile(vec![person()], &prior, ImportMode::Merge);
    assert_eq!(outcome.final_set[0].status, Some(EntryStatus::Existing));
    assert_eq!(outcome.final_set.len(), 1);
}

#[test]
fn duplicate_fresh_keys_are_kept_and_reported() {
    let fresh = vec![water(), fire(), water()];
    assert_eq!(duplicate_keys(&fresh), vec!["水".to_string()]);

    let outcome = reconcile(fresh, &[water()], ImportMode::Merge);
    assert_eq!(outcome.final_set.len(), 3);
    assert_eq!(outcome.stats.existing, 2);
    assert_eq!(outcome.stats.new, 1);
}

#[test]
fn sparse_entries_are_valid() {
    let prior = [KanjiEntry::new("空")];
    let outcome = reconcile(vec![KanjiEntry::new("空")], &prior, ImportMode::Merge);
    assert_eq!(outcome.final_set[0].status, Some(EntryStatus::Existing));
}
