//! U101: flat-file payroll import.
//!
//! Parses an uploaded `$`-delimited text file line by line into the fixed
//! 80-column field schema and persists each non-empty row with an
//! idempotent insert keyed on (yearcd, monthcd, perscode). Duplicates are
//! counted and diagnosed, never failed.

pub mod executor;
pub mod field_schema;
pub mod row_parser;
pub mod store;

pub use executor::{ImportError, ImportExecutor, UploadedFile};
pub use store::PayrollStore;
