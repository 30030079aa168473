use std::io::Cursor;

use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};

use super::ruby_overlay::PhoneticOverlay;
use crate::error::SheetError;
use crate::types::{Cell, SheetGrid};

/// Decode a workbook (xlsx, xls, xlsb, ods) and return its first sheet.
///
/// For xlsx input the phonetic runs calamine discards are read back from the
/// package and attached to their cells.
pub fn load_workbook(bytes: &[u8]) -> Result<SheetGrid, SheetError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(SheetError::NoSheets)?;
    let range = workbook.worksheet_range(&sheet_name)?;

    let mut grid = grid_from_range(&range);
    tracing::info!("Read sheet '{}' with {} rows", sheet_name, grid.height());

    if is_zip(bytes) {
        match PhoneticOverlay::read(bytes) {
            Ok(overlay) => {
                let found = overlay.len();
                let applied = overlay.apply(&mut grid);
                tracing::debug!("Attached {} of {} phonetic annotations", applied, found);
            }
            Err(e) => tracing::warn!("Phonetic annotations unavailable: {}", e),
        }
    }

    Ok(grid)
}

fn is_zip(bytes: &[u8]) -> bool {
    bytes.starts_with(b"PK\x03\x04")
}

/// Lay the range out on absolute coordinates, calamine starts it at the first used cell.
///
/// Each row ends at its last non-empty cell, the range itself is rectangular.
fn grid_from_range(range: &Range<Data>) -> SheetGrid {
    let Some((start_row, start_col)) = range.start() else {
        return SheetGrid::default();
    };
    let (start_row, start_col) = (start_row as usize, start_col as usize);

    let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); start_row];

    for row in range.rows() {
        let Some(last) = row.iter().rposition(|data| !matches!(data, Data::Empty)) else {
            rows.push(Vec::new());
            continue;
        };

        let mut cells = vec![Cell::default(); start_col];
        cells.extend(row[..=last].iter().map(|data| Cell::text(cell_text(data))));
        rows.push(cells);
    }

    SheetGrid::new(rows)
}

fn cell_text(data: &Data) -> String {
    match data {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}
