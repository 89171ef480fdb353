//! Spreadsheet reading via calamine.
//!
//! The workbook path is a thin collaborator: it turns binary spreadsheet
//! content into the same [`RawTable`] the text tokenizer produces and does
//! no validation of its own. Only the first sheet is read.

use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};

use retrodex_model::{IngestError, Result};

use crate::tokenizer::RawTable;

/// Read workbook bytes (`.xlsx`, `.xls`) into a [`RawTable`].
pub fn read_workbook(bytes: &[u8]) -> Result<RawTable> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|err| IngestError::File(format!("could not open workbook: {err}")))?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| IngestError::File("workbook has no sheets".to_string()))?;
    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|err| IngestError::File(format!("could not read sheet '{sheet}': {err}")))?;

    let mut rows = Vec::new();
    for row in range.rows() {
        let cells: Vec<String> = row.iter().map(cell_to_string).collect();
        if cells.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        rows.push(cells);
    }
    Ok(RawTable { rows })
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{e:?}"),
        Data::Empty => String::new(),
    }
}
