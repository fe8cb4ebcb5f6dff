//! U102: bank-transfer file export for one payroll period.

pub mod executor;
