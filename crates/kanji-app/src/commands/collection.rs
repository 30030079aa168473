use anyhow::Context;
use kanji_core::{EntryCollection, KeyValueStore};
use kanji_lang_japanese::{align_ruby, is_kana, kana_to_romaji, render_ruby};
use kanji_types::KanjiEntry;

pub fn list_entries<S: KeyValueStore>(collection: &EntryCollection<S>) -> anyhow::Result<String> {
    let entries = collection.load().context("Failed to load kanji collection")?;
    if entries.is_empty() {
        return Ok("No kanji stored".to_string());
    }

    let lines: Vec<String> = entries
        .iter()
        .map(|entry| {
            format!(
                "{}  {} | {} | {} | {} examples | {}",
                entry.kanji,
                entry.hanviet.join(", "),
                entry.kun.join(", "),
                entry.on.join(", "),
                entry.example.len(),
                entry.status.map_or("-", |s| s.as_str()),
            )
        })
        .collect();

    Ok(lines.join("\n"))
}

pub fn show_entry<S: KeyValueStore>(
    collection: &EntryCollection<S>,
    kanji: &str,
) -> anyhow::Result<String> {
    let entries = collection.load().context("Failed to load kanji collection")?;
    let entry = find_entry(&entries, kanji)?;

    let mut out = vec![entry.kanji.clone()];
    out.push(format!("  Hán Việt: {}", entry.hanviet.join(", ")));
    out.push(format!("  Kun: {}", with_romaji(&entry.kun)));
    out.push(format!("  On: {}", with_romaji(&entry.on)));

    if !entry.example.is_empty() {
        out.push("  Examples:".to_string());
        for example in &entry.example {
            let segments = align_ruby(&example.text, example.phonetic.as_deref());
            out.push(format!("    {}", render_ruby(&segments)));
        }
    }

    Ok(out.join("\n"))
}

pub fn delete_entry<S: KeyValueStore>(
    collection: &mut EntryCollection<S>,
    kanji: &str,
) -> anyhow::Result<String> {
    if collection.delete(kanji).context("Failed to update kanji collection")? {
        Ok(format!("Deleted {kanji}"))
    } else {
        Ok(format!("{kanji} is not in the collection"))
    }
}

pub fn clear_collection<S: KeyValueStore>(
    collection: &mut EntryCollection<S>,
) -> anyhow::Result<String> {
    collection.clear().context("Failed to clear kanji collection")?;
    tracing::info!("Cleared kanji collection");
    Ok("Collection cleared".to_string())
}

/// Stored entry for `kanji`; the last one wins if an import stored duplicates
pub(crate) fn find_entry<'a>(
    entries: &'a [KanjiEntry],
    kanji: &str,
) -> anyhow::Result<&'a KanjiEntry> {
    entries
        .iter()
        .rev()
        .find(|e| e.kanji == kanji)
        .with_context(|| format!("{kanji} is not in the collection"))
}

/// Kana readings get their romaji alongside
fn with_romaji(readings: &[String]) -> String {
    readings
        .iter()
        .map(|r| {
            if r.chars().any(is_kana) {
                format!("{r} ({})", kana_to_romaji(r))
            } else {
                r.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
