use async_trait::async_trait;
use contracts::usecases::u102_export_bank_transfer::BankTransferLine;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use crate::shared::data::db::get_connection;
use crate::usecases::u101_import_payroll_file::field_schema::PAYROLL_FIELDS;
use crate::usecases::u101_import_payroll_file::store::PayrollStore;

/// Write/read access to the wide payroll table. The table has one TEXT
/// column per schema field and a UNIQUE constraint on the natural key, so
/// `INSERT OR IGNORE` affects zero rows for a duplicate submission.
pub struct PayrollRecordRepository;

/// INSERT OR IGNORE statement over every schema column, with one
/// positional bind per column
fn insert_statement() -> String {
    let placeholders = vec!["?"; PAYROLL_FIELDS.len()].join(", ");
    format!(
        "INSERT OR IGNORE INTO a005_payroll_record ({}) VALUES ({})",
        PAYROLL_FIELDS.join(", "),
        placeholders
    )
}

#[async_trait]
impl PayrollStore for PayrollRecordRepository {
    async fn insert_if_absent(&self, values: &[String]) -> anyhow::Result<u64> {
        anyhow::ensure!(
            values.len() == PAYROLL_FIELDS.len(),
            "expected {} values, got {}",
            PAYROLL_FIELDS.len(),
            values.len()
        );

        let params: Vec<sea_orm::Value> = values.iter().map(|v| v.clone().into()).collect();
        let result = get_connection()
            .execute(Statement::from_sql_and_values(
                DatabaseBackend::Sqlite,
                &insert_statement(),
                params,
            ))
            .await?;

        Ok(result.rows_affected())
    }
}

/// Bank-transfer rows of one payroll period, ordered by person code
pub async fn list_bank_transfer_lines(
    yearcd: &str,
    monthcd: &str,
) -> anyhow::Result<Vec<BankTransferLine>> {
    let rows = get_connection()
        .query_all(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT perscode, surname, firstname, bankcd, accountno, balance \
             FROM a005_payroll_record \
             WHERE yearcd = ? AND monthcd = ? \
             ORDER BY perscode",
            [yearcd.into(), monthcd.into()],
        ))
        .await?;

    let mut lines = Vec::with_capacity(rows.len());
    for row in rows {
        lines.push(BankTransferLine {
            perscode: row.try_get("", "perscode")?,
            surname: row.try_get("", "surname")?,
            firstname: row.try_get("", "firstname")?,
            bank_cd: row.try_get("", "bankcd")?,
            account_no: row.try_get("", "accountno")?,
            balance: row.try_get("", "balance")?,
        });
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_statement_binds_every_column() {
        let sql = insert_statement();
        assert!(sql.starts_with("INSERT OR IGNORE INTO a005_payroll_record"));
        assert_eq!(sql.matches('?').count(), PAYROLL_FIELDS.len());
        assert!(sql.contains("yearcd, monthcd, perscode"));
    }
}
