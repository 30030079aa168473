mod grid_json;
mod ruby_overlay;
mod workbook;

use std::fs;
use std::path::Path;

use crate::error::SheetError;
use crate::types::SheetGrid;

pub use grid_json::load_grid_json;
pub use ruby_overlay::parse_cell_ref;
#[cfg(test)]
pub(crate) use ruby_overlay::PhoneticOverlay;
pub use workbook::load_workbook;

/// Load a sheet from disk, `.json` files are pre-decoded grids
pub fn load_path(path: &Path) -> Result<SheetGrid, SheetError> {
    tracing::info!("Loading sheet from file: {}", path.display());
    let bytes = fs::read(path).map_err(|source| SheetError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        let text = String::from_utf8_lossy(&bytes);
        load_grid_json(&text)
    } else {
        load_workbook(&bytes)
    }
}
