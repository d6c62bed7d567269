use crate::domain::BatchReport;
use crisisdesk_errors::AppError;
use rust_xlsxwriter::{Workbook, XlsxError};

pub const SHEET_ANALYSES: &str = "Analyses";
pub const SHEET_STATISTICS: &str = "Statistics";
pub const SHEET_WORD_FREQUENCY: &str = "Word Frequency";

/// Serializes a batch report into a three-sheet XLSX workbook.
pub fn build_workbook(report: &BatchReport) -> Result<Vec<u8>, AppError> {
    build(report).map_err(|e| AppError::ExportError(e.to_string()))
}

fn build(report: &BatchReport) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_ANALYSES)?;
    let headers = [
        "Row",
        "Message",
        "Anger score",
        "Risk level",
        "Category",
        "Suggested reply",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet.write(0, col as u16, *header)?;
    }
    for (i, row) in report.rows.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write(r, 0, row.row_index as u32)?;
        sheet.write(r, 1, row.message.as_str())?;
        if let Some(score) = row.anger_score {
            sheet.write(r, 2, u32::from(score))?;
        }
        sheet.write(r, 3, row.risk_level.as_str())?;
        sheet.write(r, 4, row.category.as_str())?;
        sheet.write(r, 5, row.suggested_reply.as_str())?;
    }

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_STATISTICS)?;
    sheet.write(0, 0, "Persona")?;
    sheet.write(0, 1, report.persona_label.as_str())?;
    sheet.write(1, 0, "Platform")?;
    sheet.write(1, 1, report.platform_label.as_str())?;
    sheet.write(2, 0, "Total rows")?;
    sheet.write(2, 1, report.stats.total_rows as u32)?;
    sheet.write(3, 0, "Error rows")?;
    sheet.write(3, 1, report.stats.error_rows as u32)?;
    sheet.write(4, 0, "Skipped empty rows")?;
    sheet.write(4, 1, report.skipped_rows as u32)?;
    sheet.write(5, 0, "Average anger score")?;
    if let Some(avg) = report.stats.average_anger_score {
        sheet.write(5, 1, avg)?;
    }

    let mut r = 7u32;
    sheet.write(r, 0, "Risk level")?;
    sheet.write(r, 1, "Count")?;
    for (level, count) in &report.stats.risk_level_counts {
        r += 1;
        sheet.write(r, 0, level.as_str())?;
        sheet.write(r, 1, *count)?;
    }

    r += 2;
    sheet.write(r, 0, "Category")?;
    sheet.write(r, 1, "Count")?;
    for (category, count) in &report.stats.category_counts {
        r += 1;
        sheet.write(r, 0, category.as_str())?;
        sheet.write(r, 1, *count)?;
    }

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_WORD_FREQUENCY)?;
    sheet.write(0, 0, "Word")?;
    sheet.write(0, 1, "Count")?;
    for (i, (word, count)) in report.word_frequency.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write(r, 0, word.as_str())?;
        sheet.write(r, 1, *count)?;
    }

    workbook.save_to_buffer()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BatchStats, RowAnalysis};
    use calamine::{open_workbook_auto_from_rs, Reader};
    use std::io::Cursor;

    fn sample_report() -> BatchReport {
        let rows = vec![
            RowAnalysis {
                row_index: 1,
                message: "Food was cold".to_string(),
                anger_score: Some(7),
                risk_level: "High".to_string(),
                category: "Delivery".to_string(),
                suggested_reply: "We are sorry.".to_string(),
                error: false,
            },
            RowAnalysis::failed(2, "???".to_string(), "no json here"),
        ];
        let stats = crate::infrastructure::batch::stats::compute_stats(&rows);
        BatchReport::new(
            "Restaurant Chain".to_string(),
            "X (Twitter)".to_string(),
            rows,
            stats,
            vec![("cold".to_string(), 1), ("food".to_string(), 1)],
            0,
        )
    }

    #[test]
    fn workbook_has_exactly_three_sheets() {
        let bytes = build_workbook(&sample_report()).unwrap();
        let workbook = open_workbook_auto_from_rs(Cursor::new(bytes)).unwrap();
        assert_eq!(
            workbook.sheet_names(),
            vec![
                SHEET_ANALYSES.to_string(),
                SHEET_STATISTICS.to_string(),
                SHEET_WORD_FREQUENCY.to_string(),
            ]
        );
    }

    #[test]
    fn analyses_sheet_holds_one_row_per_analysis() {
        let report = sample_report();
        let bytes = build_workbook(&report).unwrap();
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes)).unwrap();
        let range = workbook.worksheet_range(SHEET_ANALYSES).unwrap();
        // header + 2 analyses
        assert_eq!(range.rows().count(), 3);
    }

    #[test]
    fn empty_report_still_exports_three_sheets() {
        let report = BatchReport::new(
            "Airline".to_string(),
            "Facebook".to_string(),
            Vec::new(),
            BatchStats::default(),
            Vec::new(),
            0,
        );
        let bytes = build_workbook(&report).unwrap();
        let workbook = open_workbook_auto_from_rs(Cursor::new(bytes)).unwrap();
        assert_eq!(workbook.sheet_names().len(), 3);
    }
}
