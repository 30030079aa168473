use kanji_types::{ExampleWord, KanjiEntry};

use crate::phonetic::extract_phonetic;
use crate::types::{Cell, SheetGrid};

/// Spreadsheet row 1 holds column titles
pub const HEADER_ROWS: usize = 1;

/// Rows narrower than this are ignored
pub const MIN_ROW_WIDTH: usize = 6;

pub const KANJI_COL: usize = 0;
pub const HANVIET_COL: usize = 1;
pub const KUN_COL: usize = 2;
pub const ON_COL: usize = 3;
/// First example column, every column from here on holds one example
pub const EXAMPLE_START_COL: usize = 4;

/// Parse a decoded sheet into kanji entries, in row order.
///
/// A row with a kanji starts a new entry. A row with an empty kanji cell
/// continues the previous entry and only contributes examples.
pub fn parse_grid(grid: &SheetGrid) -> Vec<KanjiEntry> {
    grid.rows()
        .iter()
        .enumerate()
        .skip(HEADER_ROWS)
        .fold(RowFold::default(), |acc, (index, row)| acc.push_row(index, row))
        .finish()
}

#[derive(Default)]
struct RowFold {
    entries: Vec<KanjiEntry>,
    open: Option<KanjiEntry>,
}

impl RowFold {
    fn push_row(mut self, index: usize, row: &[Cell]) -> Self {
        if row.len() < MIN_ROW_WIDTH {
            tracing::debug!("Skipping row {}: only {} columns", index + 1, row.len());
            return self;
        }

        let kanji = row[KANJI_COL].text.trim();
        let examples = row_examples(&row[EXAMPLE_START_COL..]);

        if !kanji.is_empty() {
            let entry = KanjiEntry {
                hanviet: split_readings(&row[HANVIET_COL].text),
                kun: split_readings(&row[KUN_COL].text),
                on: split_readings(&row[ON_COL].text),
                example: examples,
                ..KanjiEntry::new(kanji)
            };

            if let Some(done) = self.open.replace(entry) {
                self.entries.push(done);
            }
        } else if let Some(open) = self.open.as_mut() {
            open.example.extend(examples);
        } else if !examples.is_empty() {
            tracing::debug!("Skipping row {}: continuation without a kanji", index + 1);
        }

        self
    }

    fn finish(mut self) -> Vec<KanjiEntry> {
        self.entries.extend(self.open);
        self.entries
    }
}

fn row_examples(cells: &[Cell]) -> Vec<ExampleWord> {
    cells
        .iter()
        .filter_map(|cell| {
            let text = cell.text.trim();
            if text.is_empty() {
                return None;
            }
            Some(ExampleWord::new(text, extract_phonetic(cell.rich.as_ref())))
        })
        .collect()
}

/// Split a reading cell on `、` or `,` into trimmed, non-empty readings.
///
/// The full-width comma takes precedence when both are present.
pub fn split_readings(raw: &str) -> Vec<String> {
    let raw = raw.trim();

    let separator = if raw.contains('、') {
        '、'
    } else if raw.contains(',') {
        ','
    } else if raw.is_empty() {
        return Vec::new();
    } else {
        return vec![raw.to_string()];
    };

    raw.split(separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
