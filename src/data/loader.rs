use std::path::Path;

use thiserror::Error;

use crate::data::table::RawTable;

/// Errors raised at the parsing boundary, before validation or analysis.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported file format: .{0}")]
    UnsupportedFormat(String),
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed JSON: {0}")]
    Json(String),
    #[error("no data rows found below the header")]
    Empty,
}

/// Load a CSV or JSON file into a raw table. The extension decides the
/// parser; anything else is rejected here.
pub fn load_file(path: &Path) -> Result<RawTable, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let text = read_text(path)?;
    match ext.as_str() {
        "csv" => parse_delimited(&text, b','),
        "json" => parse_json(&text),
        _ => Err(LoadError::UnsupportedFormat(ext)),
    }
}

/// Read file bytes as UTF-8, falling back to latin1 (each byte maps to the
/// same Unicode code point) for files saved by older spreadsheet tools.
fn read_text(path: &Path) -> Result<String, LoadError> {
    let content = std::fs::read(path)?;
    Ok(String::from_utf8(content.clone())
        .unwrap_or_else(|_| content.iter().map(|&b| b as char).collect()))
}

/// Parse delimited text: first record is the header, the rest are data rows.
/// Blank records are skipped. Used for both CSV files and pasted text.
pub fn parse_delimited(text: &str, delimiter: u8) -> Result<RawTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        records.push(row);
    }

    if records.len() < 2 {
        return Err(LoadError::Empty);
    }

    let columns: Vec<String> = records[0].iter().map(|s| s.trim().to_string()).collect();
    let rows = records.split_off(1);
    Ok(RawTable { columns, rows })
}

/// Parse a JSON array of flat objects. Column names and order come from the
/// first object's keys; every object must carry the same keys.
pub fn parse_json(text: &str) -> Result<RawTable, LoadError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| LoadError::Json(e.to_string()))?;

    let array = value
        .as_array()
        .ok_or_else(|| LoadError::Json("expected a top-level array of objects".to_string()))?;

    let first = match array.first() {
        Some(serde_json::Value::Object(obj)) => obj,
        Some(_) => {
            return Err(LoadError::Json(
                "expected every array element to be an object".to_string(),
            ))
        }
        None => return Err(LoadError::Empty),
    };

    let columns: Vec<String> = first.keys().cloned().collect();

    let mut rows = Vec::with_capacity(array.len());
    for (i, element) in array.iter().enumerate() {
        let obj = element.as_object().ok_or_else(|| {
            LoadError::Json(format!("element {i} is not an object"))
        })?;

        let mut cells = Vec::with_capacity(columns.len());
        for name in &columns {
            let cell = obj.get(name).ok_or_else(|| {
                LoadError::Json(format!("element {i} is missing key {name:?}"))
            })?;
            cells.push(json_cell_to_string(cell));
        }
        if obj.len() != columns.len() {
            return Err(LoadError::Json(format!(
                "element {i} has {} keys, expected {}",
                obj.len(),
                columns.len()
            )));
        }
        rows.push(cells);
    }

    Ok(RawTable { columns, rows })
}

fn json_cell_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        // Numbers, bools and null keep their JSON rendering; validation
        // decides later whether the cell is an acceptable frequency.
        other => other.to_string(),
    }
}
