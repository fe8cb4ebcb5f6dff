use async_trait::async_trait;

/// Write side of the wide payroll table, as seen by the importer.
///
/// `insert_if_absent` takes one value per schema field, in schema order,
/// and returns the affected-row count of a parameterized
/// insert-if-absent statement. The store enforces uniqueness on the
/// natural key (yearcd, monthcd, perscode); zero affected rows is the
/// duplicate signal the importer relies on.
///
/// Production implementation: `domain::a005_payroll_record::repository`.
/// Tests substitute a counting mock.
#[async_trait]
pub trait PayrollStore: Send + Sync {
    async fn insert_if_absent(&self, values: &[String]) -> anyhow::Result<u64>;
}
