use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a salary line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SalaryItemId(pub Uuid);

impl SalaryItemId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for SalaryItemId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SalaryItemId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// One salary line item: an amount against a payment code for an officer
/// in a payroll period. Period columns mirror the payroll file natural key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryItem {
    #[serde(flatten)]
    pub base: BaseAggregate<SalaryItemId>,

    pub yearcd: String,
    pub monthcd: String,
    pub perscode: String,
    #[serde(rename = "stationCd")]
    pub station_cd: String,
    #[serde(rename = "payCd")]
    pub pay_cd: String,
    /// Monetary amount, kept as minor units (kobo/cents) in an i64
    pub amount: i64,
}

impl SalaryItem {
    #[allow(clippy::too_many_arguments)]
    pub fn new_for_insert(
        code: String,
        description: String,
        yearcd: String,
        monthcd: String,
        perscode: String,
        station_cd: String,
        pay_cd: String,
        amount: i64,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(SalaryItemId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            yearcd,
            monthcd,
            perscode,
            station_cd,
            pay_cd,
            amount,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.yearcd.trim().is_empty() || self.monthcd.trim().is_empty() {
            return Err("Payroll period must not be empty".into());
        }
        if self.perscode.trim().is_empty() {
            return Err("Person code must not be empty".into());
        }
        if self.pay_cd.trim().is_empty() {
            return Err("Pay code must not be empty".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for SalaryItem {
    type Id = SalaryItemId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "salary_item"
    }

    fn element_name() -> &'static str {
        "Salary item"
    }

    fn list_name() -> &'static str {
        "Salary items"
    }
}

/// Query parameters for listing salary items of a period
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SalaryItemQuery {
    pub yearcd: String,
    pub monthcd: String,
    pub perscode: Option<String>,
    #[serde(rename = "stationCd")]
    pub station_cd: Option<String>,
}

/// DTO for creating a salary line item
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SalaryItemDto {
    pub code: Option<String>,
    #[serde(default)]
    pub description: String,
    pub yearcd: String,
    pub monthcd: String,
    pub perscode: String,
    #[serde(rename = "stationCd")]
    pub station_cd: String,
    #[serde(rename = "payCd")]
    pub pay_cd: String,
    pub amount: i64,
    pub comment: Option<String>,
}

/// DTO for amount edits; only the amount is caller-writable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryItemAmountDto {
    pub amount: i64,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> SalaryItem {
        SalaryItem::new_for_insert(
            "SAL-1".into(),
            "PC100 001".into(),
            "2024".into(),
            "01".into(),
            "PC100".into(),
            "ST01".into(),
            "001".into(),
            125_000,
            Some("manual adjustment".into()),
        )
    }

    #[test]
    fn test_new_for_insert_populates_base_fields() {
        let item = item();
        assert_eq!(item.base.code, "SAL-1");
        assert_eq!(item.base.comment.as_deref(), Some("manual adjustment"));
        assert!(!item.base.metadata.is_deleted);
        assert_eq!(item.base.metadata.version, 0);
        assert!(item.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_key_fields() {
        let mut no_period = item();
        no_period.yearcd = " ".into();
        assert!(no_period.validate().is_err());

        let mut no_person = item();
        no_person.perscode = "".into();
        assert!(no_person.validate().is_err());

        let mut no_pay_cd = item();
        no_pay_cd.pay_cd = "".into();
        assert!(no_pay_cd.validate().is_err());
    }
}
