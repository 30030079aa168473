pub mod error;
pub mod loaders;
pub mod parser;
pub mod phonetic;
pub mod types;

use std::path::Path;

use kanji_types::KanjiEntry;

pub use error::SheetError;
pub use loaders::{load_grid_json, load_path, load_workbook};
pub use parser::{parse_grid, split_readings};
pub use phonetic::extract_phonetic;
pub use types::{Cell, Phonetic, RichText, SheetGrid, TextRun};

/// Read a spreadsheet file and parse it into kanji entries
pub fn import_file(path: &Path) -> Result<Vec<KanjiEntry>, SheetError> {
    let grid = load_path(path)?;
    let entries = parse_grid(&grid);
    tracing::info!(
        "Parsed {} kanji entries from {} rows in {}",
        entries.len(),
        grid.height(),
        path.display()
    );
    Ok(entries)
}
