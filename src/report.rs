// Spreadsheet report — one row per enriched record.
//
// The workbook is assembled entirely in memory (`save_to_buffer`); the
// caller decides where the bytes go. Column headers mirror the record
// fields, with the localized тональность / тип labels the report's
// audience expects.

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook};

use crate::records::EnrichedRecord;

/// Worksheet name inside the workbook.
const SHEET_NAME: &str = "report";

/// Column headers, in write order.
pub const COLUMNS: [&str; 9] = [
    "author",
    "text",
    "published_at",
    "platform",
    "language",
    "toxicity",
    "is_toxic",
    "тональность",
    "тип",
];

/// Build the xlsx report into an in-memory buffer.
///
/// An empty record set still produces a valid workbook with just the
/// header row.
pub fn build_workbook(records: &[EnrichedRecord]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME).context("Invalid sheet name")?;

    let bold = Format::new().set_bold();
    for (col, header) in COLUMNS.iter().enumerate() {
        sheet
            .write_with_format(0, col as u16, *header, &bold)
            .context("Failed to write header row")?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write(row, 0, record.comment.author.as_str())?;
        sheet.write(row, 1, record.comment.text.as_str())?;
        sheet.write(row, 2, record.comment.published_at.as_str())?;
        sheet.write(row, 3, record.comment.platform.as_str())?;
        sheet.write(row, 4, record.language.as_str())?;
        sheet.write(row, 5, record.toxicity)?;
        sheet.write(row, 6, record.is_toxic)?;
        sheet.write(row, 7, record.sentiment.label())?;
        sheet.write(row, 8, record.intent.label())?;
    }

    workbook
        .save_to_buffer()
        .context("Failed to serialize workbook")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{CommentRecord, Intent, Language, Platform, Sentiment};

    fn enriched(text: &str, toxicity: f64) -> EnrichedRecord {
        EnrichedRecord::new(
            CommentRecord {
                author: "someone".to_string(),
                text: text.to_string(),
                published_at: "2024-05-01T10:00:00Z".to_string(),
                platform: Platform::Instagram,
            },
            Language::Ru,
            toxicity,
            Sentiment::Negative,
            Intent::Complaint,
        )
    }

    #[test]
    fn workbook_is_valid_zip() {
        let buf = build_workbook(&[enriched("плохо", 0.9)]).unwrap();
        // xlsx is a zip container; PK magic marks a well-formed archive
        assert_eq!(&buf[..2], b"PK");
        assert!(buf.len() > 100);
    }

    #[test]
    fn empty_records_still_produce_a_workbook() {
        let buf = build_workbook(&[]).unwrap();
        assert_eq!(&buf[..2], b"PK");
    }
}
