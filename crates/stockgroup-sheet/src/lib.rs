//! Spreadsheet decoding into [`stockgroup_core::RawRecord`] rows.
//!
//! Only the first sheet of a workbook is read. Its first row supplies the
//! column headers; every later row with at least one non-empty cell becomes
//! a record.

pub mod decode;
pub mod error;

pub use decode::decode_spreadsheet;
pub use error::SheetError;
