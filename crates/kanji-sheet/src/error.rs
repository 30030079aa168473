#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a readable spreadsheet: {0}")]
    Decode(#[from] calamine::Error),

    #[error("Spreadsheet contains no sheets")]
    NoSheets,

    #[error("Invalid spreadsheet archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Invalid sheet XML: {0}")]
    Xml(String),

    #[error("Invalid grid JSON: {0}")]
    GridJson(#[from] serde_json::Error),

    #[error("Grid JSON must be an array of rows")]
    GridShape,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
