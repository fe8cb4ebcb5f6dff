use serde::{Deserialize, Serialize};

/// Query parameters for the bank-transfer export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankTransferQuery {
    pub yearcd: String,
    pub monthcd: String,
}

/// One line of the bank-transfer file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankTransferLine {
    pub perscode: String,
    pub surname: String,
    pub firstname: String,
    #[serde(rename = "bankCd")]
    pub bank_cd: String,
    #[serde(rename = "accountNo")]
    pub account_no: String,
    /// Net amount from the payroll balance column, as recorded in the file
    pub balance: String,
}
