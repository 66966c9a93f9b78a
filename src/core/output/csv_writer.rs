//! CSV export of scanned records and frequency tables.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::frequency::WordFrequencyTable;
use crate::error::Result;
use crate::message::MessageRecord;

/// Timestamp layout used in the `Timestamp` column.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

fn writer<W: Write>(inner: W) -> csv::Writer<W> {
    csv::WriterBuilder::new().delimiter(b';').from_writer(inner)
}

fn write_records<W: Write>(records: &[MessageRecord], writer: &mut csv::Writer<W>) -> Result<()> {
    writer.write_record(["Timestamp", "Sender", "Message"])?;
    for record in records {
        let timestamp = record.timestamp.format(TIMESTAMP_FORMAT).to_string();
        writer.write_record([
            timestamp.as_str(),
            record.sender.as_str(),
            record.message.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_frequencies<W: Write>(
    table: &WordFrequencyTable,
    writer: &mut csv::Writer<W>,
) -> Result<()> {
    writer.write_record(["Word", "Count"])?;
    for (word, n) in table.ranked() {
        writer.write_record([word, n.to_string().as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes records to `path` with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, `Sender`, `Message`
/// - Timestamp: `YYYY-MM-DD HH:MM`
/// - Multi-line messages are quoted, newlines kept
pub fn write_records_csv(records: &[MessageRecord], path: &Path) -> Result<()> {
    let mut writer = writer(File::create(path)?);
    write_records(records, &mut writer)
}

/// Same as [`write_records_csv`], returned as a string.
pub fn to_records_csv(records: &[MessageRecord]) -> Result<String> {
    let mut writer = writer(Vec::new());
    write_records(records, &mut writer)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Writes `Word;Count` rows to `path`, most frequent first.
pub fn write_frequency_csv(table: &WordFrequencyTable, path: &Path) -> Result<()> {
    let mut writer = writer(File::create(path)?);
    write_frequencies(table, &mut writer)
}

/// Same as [`write_frequency_csv`], returned as a string.
pub fn to_frequency_csv(table: &WordFrequencyTable) -> Result<String> {
    let mut writer = writer(Vec::new());
    write_frequencies(table, &mut writer)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}
