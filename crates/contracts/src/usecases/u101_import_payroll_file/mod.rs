pub mod report;

pub use report::{ImportReport, ImportedFile, SkippedRow};
