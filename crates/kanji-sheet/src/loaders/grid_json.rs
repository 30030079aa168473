use serde_json::Value;

use crate::error::SheetError;
use crate::types::{Cell, RichText, SheetGrid};

/// Load a grid decoded elsewhere.
///
/// The document is an array of rows; a cell is a string, a number, null, or
/// `{ "text": .., "rich": .. }`. A `rich` value that matches no known payload
/// shape is dropped.
pub fn load_grid_json(json: &str) -> Result<SheetGrid, SheetError> {
    let Value::Array(rows) = serde_json::from_str::<Value>(json)? else {
        return Err(SheetError::GridShape);
    };

    let rows = rows
        .into_iter()
        .map(|row| match row {
            Value::Array(cells) => cells.into_iter().map(cell_from_value).collect(),
            _ => Vec::new(),
        })
        .collect();

    Ok(SheetGrid::new(rows))
}

fn cell_from_value(value: Value) -> Cell {
    match value {
        Value::Object(mut fields) => {
            let text = fields.remove("text").map(scalar_text).unwrap_or_default();
            let rich = fields
                .remove("rich")
                .filter(|v| !v.is_null())
                .and_then(|v| match serde_json::from_value::<RichText>(v) {
                    Ok(rich) => Some(rich),
                    Err(e) => {
                        tracing::debug!("Ignoring unrecognized rich text payload: {}", e);
                        None
                    }
                });
            Cell { text, rich }
        }
        other => Cell::text(scalar_text(other)),
    }
}

fn scalar_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}
