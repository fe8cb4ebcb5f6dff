pub mod common;

pub mod a001_officer;
pub mod a002_station;
pub mod a003_payment_code;
pub mod a004_salary_item;
