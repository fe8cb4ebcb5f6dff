use super::repository;
use contracts::domain::a001_officer::aggregate::{Officer, OfficerDto};
use uuid::Uuid;

use crate::domain::error::ServiceError;

/// Create a new officer record
pub async fn create(dto: OfficerDto) -> Result<Uuid, ServiceError> {
    let code = dto
        .code
        .clone()
        .unwrap_or_else(|| format!("OFC-{}", Uuid::new_v4()));
    let description = if dto.description.trim().is_empty() {
        format!("{} {}", dto.surname, dto.firstname)
    } else {
        dto.description.clone()
    };
    let mut aggregate = Officer::new_for_insert(
        code,
        description,
        dto.perscode,
        dto.surname,
        dto.firstname,
        dto.othername,
        dto.rank_cd,
        dto.station_cd,
        dto.bank_cd,
        dto.account_no,
        dto.comment,
    );
    if let Some(status) = dto.status {
        aggregate.status = status;
    }

    aggregate.validate().map_err(ServiceError::Validation)?;

    aggregate.before_write();

    Ok(repository::insert(&aggregate).await?)
}

/// Update an existing officer record
pub async fn update(dto: OfficerDto) -> Result<(), ServiceError> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::Validation("Invalid officer id".into()))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound("Officer"))?;

    aggregate.update(&dto);

    aggregate.validate().map_err(ServiceError::Validation)?;

    aggregate.before_write();

    Ok(repository::update(&aggregate).await?)
}

/// Soft-delete an officer record
pub async fn delete(id: Uuid) -> Result<bool, ServiceError> {
    Ok(repository::soft_delete(id).await?)
}

pub async fn get_by_id(id: Uuid) -> Result<Option<Officer>, ServiceError> {
    Ok(repository::get_by_id(id).await?)
}

pub async fn list_all() -> Result<Vec<Officer>, ServiceError> {
    Ok(repository::list_all().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_rejects_empty_perscode_before_any_store_call() {
        let dto = OfficerDto {
            perscode: "   ".into(),
            surname: "OKORO".into(),
            firstname: "ADA".into(),
            ..OfficerDto::default()
        };
        let err = create(dto).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_without_id_is_a_validation_error() {
        let dto = OfficerDto {
            id: None,
            perscode: "PC100".into(),
            surname: "OKORO".into(),
            firstname: "ADA".into(),
            ..OfficerDto::default()
        };
        let err = update(dto).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
