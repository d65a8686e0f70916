//! CSV file adapters
//!
//! The row source and row sink are the engine's only collaborators for
//! file I/O. [`process_file`] runs one file through a shared
//! [`RowTransformer`], row by row, so registry state carries across files
//! processed with the same transformer.

pub mod reader;
pub mod writer;

pub use reader::CsvRowSource;
pub use writer::CsvRowSink;

use crate::domain::Result;
use crate::engine::RowTransformer;
use std::collections::BTreeSet;
use std::path::Path;

/// Counters for one processed file
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSummary {
    /// Data rows read and written
    pub rows: usize,
    /// Target cells that were renamed
    pub renamed_cells: usize,
}

/// Stream one CSV file through the transformer into a new output file
///
/// Reads every row from `input`, renames the target columns in place, and
/// writes the row to `output` with the original header shape. A headerless
/// input produces an empty output without error.
pub fn process_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    transformer: &mut RowTransformer,
    target_columns: &BTreeSet<String>,
) -> Result<FileSummary> {
    let mut source = CsvRowSource::open(input)?;
    let mut sink = CsvRowSink::create(output, source.header())?;
    let mut summary = FileSummary::default();

    while let Some(mut record) = source.next_record()? {
        summary.renamed_cells += transformer.transform(&mut record, target_columns);
        sink.write(&record)?;
        summary.rows += 1;
    }

    sink.flush()?;
    Ok(summary)
}

/// Header names that likely hold person names
///
/// The detection rule is deliberately simple: a case-insensitive substring
/// test for "name".
pub fn name_like_columns(header: &[String]) -> Vec<String> {
    header
        .iter()
        .filter(|column| column.to_lowercase().contains("name"))
        .cloned()
        .collect()
}

/// Read a file's header and return its name-like columns
pub fn detect_name_columns(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let source = CsvRowSource::open(path)?;
    Ok(name_like_columns(source.header()))
}
