use contracts::usecases::u102_export_bank_transfer::{BankTransferLine, BankTransferQuery};

use crate::domain::a005_payroll_record::repository;

/// Produce the bank-transfer CSV for one payroll period
pub async fn run(query: &BankTransferQuery) -> anyhow::Result<Vec<u8>> {
    if query.yearcd.trim().is_empty() || query.monthcd.trim().is_empty() {
        anyhow::bail!("yearcd and monthcd are required");
    }

    let lines = repository::list_bank_transfer_lines(&query.yearcd, &query.monthcd).await?;
    tracing::info!(
        yearcd = %query.yearcd,
        monthcd = %query.monthcd,
        rows = lines.len(),
        "bank transfer export generated"
    );
    write_csv(&lines)
}

/// File name the export is served under
pub fn file_name(query: &BankTransferQuery) -> String {
    format!("bank_transfer_{}_{}.csv", query.yearcd, query.monthcd)
}

fn write_csv(lines: &[BankTransferLine]) -> anyhow::Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["perscode", "surname", "firstname", "bankcd", "accountno", "balance"])?;
    for line in lines {
        writer.write_record([
            &line.perscode,
            &line.surname,
            &line.firstname,
            &line.bank_cd,
            &line.account_no,
            &line.balance,
        ])?;
    }
    Ok(writer.into_inner()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(perscode: &str, balance: &str) -> BankTransferLine {
        BankTransferLine {
            perscode: perscode.into(),
            surname: "OKORO".into(),
            firstname: "ADA".into(),
            bank_cd: "044".into(),
            account_no: "0123456789".into(),
            balance: balance.into(),
        }
    }

    #[test]
    fn test_csv_has_header_and_one_row_per_line() {
        let bytes = write_csv(&[line("PC100", "125000.50"), line("PC200", "98000.00")]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], "perscode,surname,firstname,bankcd,accountno,balance");
        assert!(rows[1].starts_with("PC100,"));
        assert!(rows[2].ends_with(",98000.00"));
    }

    #[test]
    fn test_empty_period_yields_header_only() {
        let bytes = write_csv(&[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_file_name_embeds_period() {
        let query = BankTransferQuery {
            yearcd: "2024".into(),
            monthcd: "01".into(),
        };
        assert_eq!(file_name(&query), "bank_transfer_2024_01.csv");
    }
}
