use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a station
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StationId(pub Uuid);

impl StationId {
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

impl AggregateId for StationId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(StationId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Station (duty post) reference record. `station_cd` matches the
/// `stationcd` column of imported payroll rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    #[serde(flatten)]
    pub base: BaseAggregate<StationId>,

    #[serde(rename = "stationCd")]
    pub station_cd: String,
    #[serde(rename = "commandCd")]
    pub command_cd: String,
    pub zone: Option<String>,
}

impl Station {
    pub fn new_for_insert(
        code: String,
        description: String,
        station_cd: String,
        command_cd: String,
        zone: Option<String>,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(StationId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            station_cd,
            command_cd,
            zone,
        }
    }

    pub fn update(&mut self, dto: &StationDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.station_cd = dto.station_cd.clone();
        self.command_cd = dto.command_cd.clone();
        self.zone = dto.zone.clone();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.station_cd.trim().is_empty() {
            return Err("Station code must not be empty".into());
        }
        if self.base.description.trim().is_empty() {
            return Err("Description must not be empty".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Station {
    type Id = StationId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "station"
    }

    fn element_name() -> &'static str {
        "Station"
    }

    fn list_name() -> &'static str {
        "Stations"
    }
}

/// DTO for creating/updating a station
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StationDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    #[serde(rename = "stationCd")]
    pub station_cd: String,
    #[serde(rename = "commandCd")]
    pub command_cd: String,
    pub zone: Option<String>,
    pub comment: Option<String>,
}
