//! External collaborators
//!
//! Adapters keep file-format concerns out of the engine. The only adapter
//! family today is CSV reading/writing.

pub mod csv;

pub use self::csv::{process_file, CsvRowSink, CsvRowSource, FileSummary};
