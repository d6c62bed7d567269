use calamine::{open_workbook_auto_from_rs, Data, Reader};
use crisisdesk_errors::AppError;
use std::io::Cursor;

/// One column of complaint texts pulled out of an uploaded spreadsheet.
#[derive(Debug)]
pub struct ColumnData {
    pub headers: Vec<String>,
    pub values: Vec<String>,
    /// Rows whose chosen cell was empty.
    pub skipped: usize,
}

/// Reads the chosen column from an uploaded CSV or XLSX file. `column` is
/// matched case-insensitively against the header row; `None` means the first
/// column.
pub fn read_complaint_column(
    filename: &str,
    bytes: &[u8],
    column: Option<&str>,
) -> Result<ColumnData, AppError> {
    let extension = filename
        .rsplit('.')
        .next()
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => read_csv(bytes, column),
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => read_workbook(bytes, column),
        other => Err(AppError::SpreadsheetError(format!(
            "unsupported file type: .{other}"
        ))),
    }
}

fn read_csv(bytes: &[u8], column: Option<&str>) -> Result<ColumnData, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| AppError::SpreadsheetError(e.to_string()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    let col_idx = column_index(&headers, column)?;

    let mut values = Vec::new();
    let mut skipped = 0;
    for record in reader.records() {
        let record = record.map_err(|e| AppError::SpreadsheetError(e.to_string()))?;
        match record.get(col_idx).map(str::trim) {
            Some(cell) if !cell.is_empty() => values.push(cell.to_string()),
            _ => skipped += 1,
        }
    }

    Ok(ColumnData {
        headers,
        values,
        skipped,
    })
}

fn read_workbook(bytes: &[u8], column: Option<&str>) -> Result<ColumnData, AppError> {
    let cursor = Cursor::new(bytes.to_vec());
    let mut workbook = open_workbook_auto_from_rs(cursor)
        .map_err(|e| AppError::SpreadsheetError(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::SpreadsheetError("workbook has no sheets".to_string()))?
        .map_err(|e| AppError::SpreadsheetError(e.to_string()))?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .ok_or_else(|| AppError::SpreadsheetError("sheet is empty".to_string()))?
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();
    let col_idx = column_index(&headers, column)?;

    let mut values = Vec::new();
    let mut skipped = 0;
    for row in rows {
        let cell = row.get(col_idx);
        let text = match cell {
            Some(Data::Empty) | None => String::new(),
            Some(other) => other.to_string().trim().to_string(),
        };
        if text.is_empty() {
            skipped += 1;
        } else {
            values.push(text);
        }
    }

    Ok(ColumnData {
        headers,
        values,
        skipped,
    })
}

fn column_index(headers: &[String], column: Option<&str>) -> Result<usize, AppError> {
    match column {
        None => {
            if headers.is_empty() {
                Err(AppError::SpreadsheetError("file has no columns".to_string()))
            } else {
                Ok(0)
            }
        }
        Some(name) => headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| {
                AppError::SpreadsheetError(format!(
                    "column \"{}\" not found; available: {}",
                    name,
                    headers.join(", ")
                ))
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &[u8] = b"id,message,channel\n1,Food arrived cold,app\n2,,app\n3,Great service,web\n";

    #[test]
    fn csv_selects_named_column_and_skips_empty_cells() {
        let data = read_complaint_column("upload.csv", CSV, Some("message")).unwrap();
        assert_eq!(data.headers, vec!["id", "message", "channel"]);
        assert_eq!(data.values, vec!["Food arrived cold", "Great service"]);
        assert_eq!(data.skipped, 1);
    }

    #[test]
    fn csv_column_match_is_case_insensitive() {
        let data = read_complaint_column("upload.csv", CSV, Some("MESSAGE")).unwrap();
        assert_eq!(data.values.len(), 2);
    }

    #[test]
    fn csv_defaults_to_first_column() {
        let data = read_complaint_column("upload.csv", CSV, None).unwrap();
        assert_eq!(data.values, vec!["1", "2", "3"]);
    }

    #[test]
    fn unknown_column_lists_headers() {
        let err = read_complaint_column("upload.csv", CSV, Some("body")).unwrap_err();
        assert!(err.to_string().contains("id, message, channel"));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        assert!(read_complaint_column("notes.txt", CSV, None).is_err());
    }

    #[test]
    fn xlsx_round_trips_through_calamine() {
        use rust_xlsxwriter::Workbook;

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write(0, 0, "message").unwrap();
        sheet.write(1, 0, "Late delivery").unwrap();
        sheet.write(3, 0, "Rude staff").unwrap(); // row 2 left empty
        let bytes = workbook.save_to_buffer().unwrap();

        let data = read_complaint_column("upload.xlsx", &bytes, Some("message")).unwrap();
        assert_eq!(data.values, vec!["Late delivery", "Rude staff"]);
        assert_eq!(data.skipped, 1);
    }
}
