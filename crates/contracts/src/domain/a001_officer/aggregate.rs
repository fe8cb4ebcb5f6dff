use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of an officer record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OfficerId(pub Uuid);

impl OfficerId {
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

impl AggregateId for OfficerId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(OfficerId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Officer reference record. `perscode` is the citizen-id-like key that the
/// payroll file producer uses; it is the third column of the payroll
/// natural key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Officer {
    #[serde(flatten)]
    pub base: BaseAggregate<OfficerId>,

    pub perscode: String,
    pub surname: String,
    pub firstname: String,
    pub othername: Option<String>,
    #[serde(rename = "rankCd")]
    pub rank_cd: String,
    #[serde(rename = "stationCd")]
    pub station_cd: String,
    #[serde(rename = "bankCd")]
    pub bank_cd: String,
    #[serde(rename = "accountNo")]
    pub account_no: String,
    /// "active", "retired" or "suspended"; inactive officers keep their
    /// history but drop out of the payroll views
    pub status: String,
}

impl Officer {
    #[allow(clippy::too_many_arguments)]
    pub fn new_for_insert(
        code: String,
        description: String,
        perscode: String,
        surname: String,
        firstname: String,
        othername: Option<String>,
        rank_cd: String,
        station_cd: String,
        bank_cd: String,
        account_no: String,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(OfficerId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            perscode,
            surname,
            firstname,
            othername,
            rank_cd,
            station_cd,
            bank_cd,
            account_no,
            status: "active".into(),
        }
    }

    pub fn update(&mut self, dto: &OfficerDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.perscode = dto.perscode.clone();
        self.surname = dto.surname.clone();
        self.firstname = dto.firstname.clone();
        self.othername = dto.othername.clone();
        self.rank_cd = dto.rank_cd.clone();
        self.station_cd = dto.station_cd.clone();
        self.bank_cd = dto.bank_cd.clone();
        self.account_no = dto.account_no.clone();
        if let Some(status) = &dto.status {
            self.status = status.clone();
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.perscode.trim().is_empty() {
            return Err("Person code must not be empty".into());
        }
        if self.surname.trim().is_empty() {
            return Err("Surname must not be empty".into());
        }
        if self.base.code.trim().is_empty() {
            return Err("Code must not be empty".into());
        }
        if !matches!(self.status.as_str(), "active" | "retired" | "suspended") {
            return Err(format!("Unknown officer status: {}", self.status));
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Officer {
    type Id = OfficerId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "officer"
    }

    fn element_name() -> &'static str {
        "Officer"
    }

    fn list_name() -> &'static str {
        "Officers"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating/updating an officer
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OfficerDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub perscode: String,
    pub surname: String,
    pub firstname: String,
    pub othername: Option<String>,
    #[serde(rename = "rankCd")]
    pub rank_cd: String,
    #[serde(rename = "stationCd")]
    pub station_cd: String,
    #[serde(rename = "bankCd")]
    pub bank_cd: String,
    #[serde(rename = "accountNo")]
    pub account_no: String,
    pub status: Option<String>,
    pub comment: Option<String>,
}
