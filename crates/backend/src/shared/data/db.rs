use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

use crate::usecases::u101_import_payroll_file::field_schema::{NATURAL_KEY_LEN, PAYROLL_FIELDS};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    let db_file = db_path.unwrap_or("target/db/payroll.db");
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    // Minimal schema bootstrap: create every missing table
    for (table, ddl) in table_definitions() {
        if !table_exists(&conn, &table).await? {
            tracing::info!("Creating {} table", table);
            conn.execute(Statement::from_string(DatabaseBackend::Sqlite, ddl))
                .await?;
        }
    }

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

async fn table_exists(conn: &DatabaseConnection, table: &str) -> anyhow::Result<bool> {
    let rows = conn
        .query_all(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type='table' AND name=?",
            [table.into()],
        ))
        .await?;
    Ok(!rows.is_empty())
}

fn table_definitions() -> Vec<(String, String)> {
    vec![
        (
            "a001_officer".into(),
            r#"
            CREATE TABLE a001_officer (
                id TEXT PRIMARY KEY NOT NULL,
                code TEXT NOT NULL DEFAULT '',
                description TEXT NOT NULL,
                comment TEXT,
                perscode TEXT NOT NULL,
                surname TEXT NOT NULL,
                firstname TEXT NOT NULL,
                othername TEXT,
                rank_cd TEXT NOT NULL DEFAULT '',
                station_cd TEXT NOT NULL DEFAULT '',
                bank_cd TEXT NOT NULL DEFAULT '',
                account_no TEXT NOT NULL DEFAULT '',
                status TEXT NOT NULL DEFAULT 'active',
                is_deleted INTEGER NOT NULL DEFAULT 0,
                created_at TEXT,
                updated_at TEXT,
                version INTEGER NOT NULL DEFAULT 0,
                UNIQUE(perscode)
            );
            "#
            .into(),
        ),
        (
            "a002_station".into(),
            r#"
            CREATE TABLE a002_station (
                id TEXT PRIMARY KEY NOT NULL,
                code TEXT NOT NULL DEFAULT '',
                description TEXT NOT NULL,
                comment TEXT,
                station_cd TEXT NOT NULL,
                command_cd TEXT NOT NULL DEFAULT '',
                zone TEXT,
                is_deleted INTEGER NOT NULL DEFAULT 0,
                created_at TEXT,
                updated_at TEXT,
                version INTEGER NOT NULL DEFAULT 0,
                UNIQUE(station_cd)
            );
            "#
            .into(),
        ),
        (
            "a003_payment_code".into(),
            r#"
            CREATE TABLE a003_payment_code (
                id TEXT PRIMARY KEY NOT NULL,
                code TEXT NOT NULL DEFAULT '',
                description TEXT NOT NULL,
                comment TEXT,
                pay_cd TEXT NOT NULL,
                kind TEXT NOT NULL DEFAULT 'income',
                taxable INTEGER NOT NULL DEFAULT 0,
                is_deleted INTEGER NOT NULL DEFAULT 0,
                created_at TEXT,
                updated_at TEXT,
                version INTEGER NOT NULL DEFAULT 0,
                UNIQUE(pay_cd)
            );
            "#
            .into(),
        ),
        (
            "a004_salary_item".into(),
            r#"
            CREATE TABLE a004_salary_item (
                id TEXT PRIMARY KEY NOT NULL,
                code TEXT NOT NULL DEFAULT '',
                description TEXT NOT NULL,
                comment TEXT,
                yearcd TEXT NOT NULL,
                monthcd TEXT NOT NULL,
                perscode TEXT NOT NULL,
                station_cd TEXT NOT NULL DEFAULT '',
                pay_cd TEXT NOT NULL,
                amount INTEGER NOT NULL DEFAULT 0,
                is_deleted INTEGER NOT NULL DEFAULT 0,
                created_at TEXT,
                updated_at TEXT,
                version INTEGER NOT NULL DEFAULT 0,
                UNIQUE(yearcd, monthcd, perscode, pay_cd)
            );
            "#
            .into(),
        ),
        ("a005_payroll_record".into(), payroll_record_ddl()),
    ]
}

/// DDL of the wide payroll table, generated from the field schema so the
/// column order can never drift from the importer's mapping. The UNIQUE
/// constraint on the natural key is what makes INSERT OR IGNORE report
/// zero affected rows for duplicate submissions.
fn payroll_record_ddl() -> String {
    let columns: Vec<String> = PAYROLL_FIELDS
        .iter()
        .map(|name| format!("{} TEXT NOT NULL DEFAULT ''", name))
        .collect();
    format!(
        "CREATE TABLE a005_payroll_record (\n    {},\n    UNIQUE({})\n);",
        columns.join(",\n    "),
        PAYROLL_FIELDS[..NATURAL_KEY_LEN].join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payroll_record_ddl_covers_every_field() {
        let ddl = payroll_record_ddl();
        for field in PAYROLL_FIELDS {
            assert!(ddl.contains(field), "missing column {}", field);
        }
        assert!(ddl.contains("UNIQUE(yearcd, monthcd, perscode)"));
    }
}
