use serde::{Deserialize, Serialize};

/// Decoded sheet: rows of cells, row 0 is spreadsheet row 1
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetGrid {
    rows: Vec<Vec<Cell>>,
}

impl SheetGrid {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Grid of plain text cells
    pub fn from_text<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Cell::text).collect())
                .collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Attach an annotation to an existing cell, returns false if out of bounds
    pub fn annotate(&mut self, row: usize, col: usize, rich: RichText) -> bool {
        match self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                cell.rich = Some(rich);
                true
            }
            None => false,
        }
    }
}

/// Cell value plus the optional rich-text payload carrying ruby readings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    pub text: String,
    pub rich: Option<RichText>,
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rich: None,
        }
    }

    pub fn with_rich(text: impl Into<String>, rich: RichText) -> Self {
        Self {
            text: text.into(),
            rich: Some(rich),
        }
    }
}

/// Rich-text payload shapes a cell may carry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RichText {
    /// Raw rich-text markup, phonetic runs embedded as `<rPh><t>..</t></rPh>`
    Markup(String),
    /// Formatting runs, one of which may carry the phonetic
    Runs(Vec<TextRun>),
    /// A single run carrying the phonetic directly
    Run(TextRun),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub phonetic: Option<Phonetic>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Phonetic {
    Text(String),
    Run { text: String },
}

impl Phonetic {
    pub fn as_str(&self) -> &str {
        match self {
            Phonetic::Text(text) | Phonetic::Run { text } => text,
        }
    }
}
