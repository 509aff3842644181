use std::collections::HashSet;
use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use stockgroup_core::{CellValue, RawRecord};

use crate::SheetError;

/// Header assigned to columns whose first-row cell is blank.
const EMPTY_HEADER: &str = "__EMPTY";

/// Decodes spreadsheet bytes into records keyed by first-row headers.
///
/// The format (xlsx, xlsm, xlsb, xls, ods) is detected from the content.
/// Empty cells are left out of each record and fully empty rows are skipped.
///
/// # Errors
///
/// Returns [`SheetError`] if the bytes are not a workbook, the workbook has
/// no sheets, or the first sheet cannot be read.
pub fn decode_spreadsheet(bytes: &[u8]) -> Result<Vec<RawRecord>, SheetError> {
    let mut workbook =
        open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(SheetError::Workbook)?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(SheetError::NoSheets)?;

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|source| SheetError::Sheet {
            sheet: sheet.clone(),
            source,
        })?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        tracing::debug!(sheet = %sheet, "first sheet is empty");
        return Ok(Vec::new());
    };
    let headers = build_headers(header_row);

    let records: Vec<RawRecord> = rows
        .filter(|row| row.iter().any(|cell| !matches!(cell, Data::Empty)))
        .map(|row| {
            headers
                .iter()
                .zip(row)
                .filter(|(_, cell)| !matches!(cell, Data::Empty))
                .map(|(header, cell)| (header.as_str(), cell_value(cell)))
                .collect()
        })
        .collect();

    tracing::debug!(sheet = %sheet, columns = headers.len(), rows = records.len(), "decoded sheet");
    Ok(records)
}

/// Turns the first row into unique column names.
///
/// Blank cells become `__EMPTY`, `__EMPTY_1`, ...; a repeated header gets a
/// numeric suffix (`Price`, `Price_1`).
fn build_headers(row: &[Data]) -> Vec<String> {
    let mut seen = HashSet::new();
    row.iter()
        .map(|cell| {
            let base = cell_value(cell)
                .as_text()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| EMPTY_HEADER.to_owned());

            let mut name = base.clone();
            let mut suffix = 1usize;
            while !seen.insert(name.clone()) {
                name = format!("{base}_{suffix}");
                suffix += 1;
            }
            name
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::Error(e) => CellValue::Text(e.to_string()),
    }
}
