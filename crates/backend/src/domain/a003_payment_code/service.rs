use super::repository;
use contracts::domain::a003_payment_code::aggregate::{PaymentCode, PaymentCodeDto};
use uuid::Uuid;

use crate::domain::error::ServiceError;

/// Create a new payment code
pub async fn create(dto: PaymentCodeDto) -> Result<Uuid, ServiceError> {
    let code = dto
        .code
        .clone()
        .unwrap_or_else(|| format!("PAY-{}", dto.pay_cd));
    let mut aggregate = PaymentCode::new_for_insert(
        code,
        dto.description,
        dto.pay_cd,
        dto.kind,
        dto.taxable,
        dto.comment,
    );

    aggregate.validate().map_err(ServiceError::Validation)?;

    aggregate.before_write();

    Ok(repository::insert(&aggregate).await?)
}

/// Update an existing payment code
pub async fn update(dto: PaymentCodeDto) -> Result<(), ServiceError> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::Validation("Invalid payment code id".into()))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound("Payment code"))?;

    aggregate.update(&dto);

    aggregate.validate().map_err(ServiceError::Validation)?;

    aggregate.before_write();

    Ok(repository::update(&aggregate).await?)
}

/// Soft-delete a payment code
pub async fn delete(id: Uuid) -> Result<bool, ServiceError> {
    Ok(repository::soft_delete(id).await?)
}

pub async fn get_by_id(id: Uuid) -> Result<Option<PaymentCode>, ServiceError> {
    Ok(repository::get_by_id(id).await?)
}

pub async fn list_all() -> Result<Vec<PaymentCode>, ServiceError> {
    Ok(repository::list_all().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_rejects_empty_pay_cd() {
        let dto = PaymentCodeDto {
            description: "Basic salary".into(),
            pay_cd: " ".into(),
            ..PaymentCodeDto::default()
        };
        let err = create(dto).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
