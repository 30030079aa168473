use anyhow::Context;
use kanji_core::{EntryCollection, KeyValueStore};
use kanji_lang_japanese::{kana_to_romaji, reading_matches};

use super::collection::find_entry;

/// Check `answer` against the kun readings of `kanji`, or the on readings with `on`
pub fn check_answer<S: KeyValueStore>(
    collection: &EntryCollection<S>,
    kanji: &str,
    answer: &str,
    romaji: bool,
    on: bool,
) -> anyhow::Result<String> {
    let entries = collection.load().context("Failed to load kanji collection")?;
    let entry = find_entry(&entries, kanji)?;

    let (kind, readings) = if on {
        ("on", &entry.on)
    } else {
        ("kun", &entry.kun)
    };
    let readings: Vec<&str> = readings
        .iter()
        .map(|r| r.trim())
        .filter(|r| !r.is_empty())
        .collect();
    if readings.is_empty() {
        anyhow::bail!("{kanji} has no {kind} readings");
    }

    let hit = readings.iter().find(|r| reading_matches(answer, r, romaji));
    tracing::debug!("Checked {answer:?} against {kind} readings of {kanji}: {}", hit.is_some());

    let expected = readings
        .iter()
        .map(|r| {
            if romaji {
                format!("{r} ({})", kana_to_romaji(r))
            } else {
                r.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    Ok(match hit {
        Some(_) => format!("Correct! {kanji}: {expected}"),
        None => format!("Incorrect. {kanji}: {expected}"),
    })
}
