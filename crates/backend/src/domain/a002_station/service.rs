use super::repository;
use contracts::domain::a002_station::aggregate::{Station, StationDto};
use uuid::Uuid;

use crate::domain::error::ServiceError;

/// Create a new station
pub async fn create(dto: StationDto) -> Result<Uuid, ServiceError> {
    let code = dto
        .code
        .clone()
        .unwrap_or_else(|| format!("STN-{}", Uuid::new_v4()));
    let mut aggregate = Station::new_for_insert(
        code,
        dto.description,
        dto.station_cd,
        dto.command_cd,
        dto.zone,
        dto.comment,
    );

    aggregate.validate().map_err(ServiceError::Validation)?;

    aggregate.before_write();

    Ok(repository::insert(&aggregate).await?)
}

/// Update an existing station
pub async fn update(dto: StationDto) -> Result<(), ServiceError> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::Validation("Invalid station id".into()))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound("Station"))?;

    aggregate.update(&dto);

    aggregate.validate().map_err(ServiceError::Validation)?;

    aggregate.before_write();

    Ok(repository::update(&aggregate).await?)
}

/// Soft-delete a station
pub async fn delete(id: Uuid) -> Result<bool, ServiceError> {
    Ok(repository::soft_delete(id).await?)
}

pub async fn get_by_id(id: Uuid) -> Result<Option<Station>, ServiceError> {
    Ok(repository::get_by_id(id).await?)
}

pub async fn list_all() -> Result<Vec<Station>, ServiceError> {
    Ok(repository::list_all().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_rejects_empty_station_cd() {
        let dto = StationDto {
            description: "Central Station".into(),
            station_cd: "".into(),
            ..StationDto::default()
        };
        let err = create(dto).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
