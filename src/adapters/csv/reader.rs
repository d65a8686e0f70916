//! CSV row source
//!
//! Reads records from a CSV file using the first row as the header. Field
//! order is preserved and a UTF-8 byte-order mark at the start of the file
//! is stripped by the underlying reader.

use crate::domain::{Record, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

/// Streaming source of [`Record`]s read from one CSV file
pub struct CsvRowSource {
    reader: csv::Reader<File>,
    header: Vec<String>,
    buffer: csv::StringRecord,
}

impl CsvRowSource {
    /// Open a CSV file and read its header row
    ///
    /// A file with no header yields an empty header and no records, which
    /// is a tolerated boundary condition rather than an error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(path.as_ref())?;

        let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        Ok(Self {
            reader,
            header,
            buffer: csv::StringRecord::new(),
        })
    }

    /// Column names from the header row, in file order
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Read the next record, or `None` at end of file
    ///
    /// Rows shorter than the header are padded with empty values; fields
    /// beyond the header are dropped.
    pub fn next_record(&mut self) -> Result<Option<Record>> {
        if !self.reader.read_record(&mut self.buffer)? {
            return Ok(None);
        }

        let mut record = Record::with_capacity(self.header.len());
        for (index, column) in self.header.iter().enumerate() {
            let value = self.buffer.get(index).unwrap_or("");
            record.push(column.clone(), value.to_string());
        }

        Ok(Some(record))
    }
}
