pub mod u101_import_payroll_file;
pub mod u102_export_bank_transfer;
