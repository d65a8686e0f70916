//! CSV row sink
//!
//! Serializes records back to CSV. Every field is quoted, the fixed
//! convention for the file family this tool targets, and the header is
//! written once before any rows.

use crate::domain::{Record, Result};
use csv::{QuoteStyle, WriterBuilder};
use std::fs::File;
use std::path::Path;

/// Sink writing [`Record`]s to one CSV file with a fixed header
pub struct CsvRowSink {
    writer: csv::Writer<File>,
}

impl CsvRowSink {
    /// Create the output file and write the header row
    ///
    /// An empty header (input had no header row) produces an empty output
    /// file with no header line.
    pub fn create(path: impl AsRef<Path>, header: &[String]) -> Result<Self> {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .from_path(path.as_ref())?;

        if !header.is_empty() {
            writer.write_record(header)?;
        }

        Ok(Self { writer })
    }

    /// Write one record's values in header order
    pub fn write(&mut self, record: &Record) -> Result<()> {
        self.writer.write_record(record.values())?;
        Ok(())
    }

    /// Flush buffered output to disk
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
