use std::collections::HashMap;
use std::io::{Cursor, Read, Seek};
use std::sync::LazyLock;

use quick_xml::Reader as XmlReader;
use quick_xml::events::{BytesStart, Event};
use regex::Regex;
use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::SheetError;
use crate::types::{Phonetic, RichText, SheetGrid, TextRun};

const WORKBOOK_PART: &str = "xl/workbook.xml";
const WORKBOOK_RELS_PART: &str = "xl/_rels/workbook.xml.rels";
const SHARED_STRINGS_PART: &str = "xl/sharedStrings.xml";
const DEFAULT_SHEET_PART: &str = "xl/worksheets/sheet1.xml";

/// Column XFD, the widest a worksheet can be
const MAX_COLUMNS: usize = 16_384;

/// One `<si>` per shared string, self-closing entries included so indices stay aligned
static SHARED_STRING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<(?:\w+:)?si\s*/>|<(?:\w+:)?si(?:\s[^>]*)?>(.*?)</(?:\w+:)?si>")
        .expect("shared string pattern is valid")
});

/// Phonetic payloads of the first worksheet, keyed by (row, col) from 0
#[derive(Debug, Default)]
pub(crate) struct PhoneticOverlay {
    cells: HashMap<(usize, usize), RichText>,
}

impl PhoneticOverlay {
    /// Read phonetic runs out of an xlsx package
    pub(crate) fn read(bytes: &[u8]) -> Result<Self, SheetError> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;

        let shared = match read_part(&mut archive, SHARED_STRINGS_PART)? {
            Some(xml) => shared_string_markup(&xml),
            None => Vec::new(),
        };

        let sheet_part = first_sheet_part(&mut archive)?;
        let sheet_xml = read_part(&mut archive, &sheet_part)?
            .ok_or(SheetError::Archive(ZipError::FileNotFound))?;

        Self::from_sheet_xml(&sheet_xml, &shared)
    }

    /// Collect annotated cells from worksheet XML.
    ///
    /// Shared-string cells get the raw `<si>` markup; inline strings get
    /// their phonetic text as a single run.
    pub(crate) fn from_sheet_xml(xml: &str, shared: &[Option<String>]) -> Result<Self, SheetError> {
        let mut reader = XmlReader::from_str(xml);
        let mut cells = HashMap::new();

        let mut row = 0usize;
        let mut rows_seen = 0usize;
        let mut next_col = 0usize;
        let mut current: Option<CellCursor> = None;
        let mut in_value = false;
        let mut in_phonetic = false;
        let mut in_phonetic_text = false;
        let mut inline_reading: Option<String> = None;

        loop {
            match reader.read_event().map_err(xml_error)? {
                Event::Start(e) => match e.local_name().as_ref() {
                    b"row" => {
                        row = match attr(&e, b"r")?.and_then(|r| r.parse::<usize>().ok()) {
                            Some(r) if r > 0 => r - 1,
                            _ if rows_seen == 0 => 0,
                            _ => row + 1,
                        };
                        rows_seen += 1;
                        next_col = 0;
                    }
                    b"c" => {
                        let cursor = CellCursor::open(&e, row, next_col)?;
                        next_col = cursor.col + 1;
                        current = Some(cursor);
                    }
                    b"v" => in_value = true,
                    b"rPh" => {
                        in_phonetic = true;
                        inline_reading.get_or_insert_with(String::new);
                    }
                    b"t" if in_phonetic => in_phonetic_text = true,
                    _ => {}
                },
                Event::Empty(e) if e.local_name().as_ref() == b"c" => {
                    next_col = CellCursor::open(&e, row, next_col)?.col + 1;
                }
                Event::Text(t) => {
                    if let Some(cursor) = &current {
                        if in_value && cursor.shared {
                            let text = t.unescape().map_err(xml_error)?;
                            let markup = text
                                .trim()
                                .parse::<usize>()
                                .ok()
                                .and_then(|idx| shared.get(idx).cloned().flatten());
                            if let Some(markup) = markup {
                                cells.insert((cursor.row, cursor.col), RichText::Markup(markup));
                            }
                        } else if in_phonetic_text {
                            let text = t.unescape().map_err(xml_error)?;
                            if let Some(reading) = inline_reading.as_mut() {
                                reading.push_str(&text);
                            }
                        }
                    }
                }
                Event::End(e) => match e.local_name().as_ref() {
                    b"v" => in_value = false,
                    b"t" => in_phonetic_text = false,
                    b"rPh" => in_phonetic = false,
                    b"c" => {
                        let cell = current.take();
                        if let (Some(cursor), Some(reading)) = (cell, inline_reading.take()) {
                            cells.insert(
                                (cursor.row, cursor.col),
                                RichText::Run(TextRun {
                                    text: None,
                                    phonetic: Some(Phonetic::Text(reading)),
                                }),
                            );
                        }
                        in_value = false;
                    }
                    b"row" => next_col = 0,
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(Self { cells })
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    #[cfg(test)]
    pub(crate) fn get(&self, row: usize, col: usize) -> Option<&RichText> {
        self.cells.get(&(row, col))
    }

    /// Attach every annotation to its grid cell, returns how many landed
    pub(crate) fn apply(self, grid: &mut SheetGrid) -> usize {
        self.cells
            .into_iter()
            .filter(|((row, col), rich)| grid.annotate(*row, *col, rich.clone()))
            .count()
    }
}

struct CellCursor {
    row: usize,
    col: usize,
    shared: bool,
}

impl CellCursor {
    fn open(e: &BytesStart<'_>, row: usize, next_col: usize) -> Result<Self, SheetError> {
        let (row, col) = match attr(e, b"r")?.as_deref().and_then(parse_cell_ref) {
            Some(pos) => pos,
            None => (row, next_col),
        };
        let shared = attr(e, b"t")?.as_deref() == Some("s");
        Ok(Self { row, col, shared })
    }
}

/// `E12` to (11, 4), None for anything past column XFD
pub fn parse_cell_ref(reference: &str) -> Option<(usize, usize)> {
    let split = reference.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = reference.split_at(split);
    if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    let col = letters.chars().try_fold(0usize, |acc, c| {
        let digit = c.to_ascii_uppercase() as usize - 'A' as usize + 1;
        acc.checked_mul(26)?
            .checked_add(digit)
            .filter(|&col| col <= MAX_COLUMNS)
    })?;
    let row: usize = digits.parse().ok()?;

    (row > 0).then(|| (row - 1, col - 1))
}

/// Markup of each shared string that carries a phonetic run
fn shared_string_markup(xml: &str) -> Vec<Option<String>> {
    SHARED_STRING
        .captures_iter(xml)
        .map(|caps| {
            caps.get(1)
                .map(|m| m.as_str())
                .filter(|inner| inner.contains("rPh"))
                .map(str::to_string)
        })
        .collect()
}

/// Worksheet part of the first sheet listed in the workbook
fn first_sheet_part<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<String, SheetError> {
    let Some(workbook) = read_part(archive, WORKBOOK_PART)? else {
        return Ok(DEFAULT_SHEET_PART.to_string());
    };
    let Some(rel_id) = first_sheet_rel_id(&workbook)? else {
        return Ok(DEFAULT_SHEET_PART.to_string());
    };
    let Some(rels) = read_part(archive, WORKBOOK_RELS_PART)? else {
        return Ok(DEFAULT_SHEET_PART.to_string());
    };

    let target = relationship_target(&rels, &rel_id)?;
    Ok(match target {
        Some(target) if target.starts_with('/') => target.trim_start_matches('/').to_string(),
        Some(target) => format!("xl/{target}"),
        None => DEFAULT_SHEET_PART.to_string(),
    })
}

fn first_sheet_rel_id(workbook_xml: &str) -> Result<Option<String>, SheetError> {
    let mut reader = XmlReader::from_str(workbook_xml);
    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"sheet" => {
                return attr(&e, b"id");
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

fn relationship_target(rels_xml: &str, rel_id: &str) -> Result<Option<String>, SheetError> {
    let mut reader = XmlReader::from_str(rels_xml);
    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                if attr(&e, b"Id")?.as_deref() == Some(rel_id) {
                    return attr(&e, b"Target");
                }
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

/// Attribute value by local name
fn attr(e: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>, SheetError> {
    for attribute in e.attributes() {
        let attribute = attribute.map_err(xml_error)?;
        if attribute.key.local_name().as_ref() == name {
            let value = attribute.unescape_value().map_err(xml_error)?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn read_part<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<Option<String>, SheetError> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut xml = String::new();
    file.read_to_string(&mut xml)?;
    Ok(Some(xml))
}

fn xml_error(e: impl std::fmt::Display) -> SheetError {
    SheetError::Xml(e.to_string())
}
