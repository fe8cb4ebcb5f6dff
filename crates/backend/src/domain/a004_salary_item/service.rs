use super::repository;
use contracts::domain::a004_salary_item::aggregate::{
    SalaryItem, SalaryItemAmountDto, SalaryItemDto, SalaryItemQuery,
};
use uuid::Uuid;

use crate::domain::error::ServiceError;
use crate::shared::access::AccessScope;

/// List line items of a period, narrowed to what the caller may see
pub async fn list_for_period(
    scope: &AccessScope,
    query: &SalaryItemQuery,
) -> Result<Vec<SalaryItem>, ServiceError> {
    if query.yearcd.trim().is_empty() || query.monthcd.trim().is_empty() {
        return Err(ServiceError::Validation(
            "yearcd and monthcd are required".into(),
        ));
    }
    Ok(repository::list_for_period(scope, query).await?)
}

/// Create one salary line item. Admins may create anywhere; editors only
/// inside their own station.
pub async fn create(scope: &AccessScope, dto: SalaryItemDto) -> Result<Uuid, ServiceError> {
    if !scope.can_edit_station(&dto.station_cd) {
        return Err(ServiceError::Forbidden(
            "Caller may not create salary items for this station".into(),
        ));
    }
    if dto.amount < 0 {
        return Err(ServiceError::Validation("Amount must not be negative".into()));
    }

    let code = dto
        .code
        .clone()
        .unwrap_or_else(|| format!("SAL-{}", Uuid::new_v4()));
    let description = if dto.description.trim().is_empty() {
        format!("{} {}", dto.perscode, dto.pay_cd)
    } else {
        dto.description.clone()
    };
    let mut aggregate = SalaryItem::new_for_insert(
        code,
        description,
        dto.yearcd,
        dto.monthcd,
        dto.perscode,
        dto.station_cd,
        dto.pay_cd,
        dto.amount,
        dto.comment,
    );

    aggregate.validate().map_err(ServiceError::Validation)?;

    aggregate.before_write();

    Ok(repository::insert(&aggregate).await?)
}

/// Edit the amount of one line item. Users are read-only; editors can only
/// touch rows inside their station scope (enforced by the scoped lookup).
pub async fn update_amount(
    scope: &AccessScope,
    id: Uuid,
    dto: SalaryItemAmountDto,
) -> Result<bool, ServiceError> {
    if !scope.can_edit() {
        return Err(ServiceError::Forbidden(
            "Caller is not allowed to edit salary items".into(),
        ));
    }
    if dto.amount < 0 {
        return Err(ServiceError::Validation("Amount must not be negative".into()));
    }

    let existing = repository::get_by_id(scope, id).await?;
    if existing.is_none() {
        return Ok(false);
    }

    Ok(repository::update_amount(id, dto.amount, dto.comment).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> SalaryItemDto {
        SalaryItemDto {
            code: None,
            description: String::new(),
            yearcd: "2024".into(),
            monthcd: "01".into(),
            perscode: "PC100".into(),
            station_cd: "ST01".into(),
            pay_cd: "001".into(),
            amount: 125_000,
            comment: None,
        }
    }

    #[tokio::test]
    async fn test_create_forbidden_for_user_scope() {
        let scope = AccessScope::User {
            person: "PC100".into(),
        };
        let err = create(&scope, dto()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_create_forbidden_outside_editor_station() {
        let scope = AccessScope::Editor {
            station: Some("ST02".into()),
        };
        let err = create(&scope, dto()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_negative_amount() {
        let mut negative = dto();
        negative.amount = -1;
        let err = create(&AccessScope::Admin, negative).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_empty_perscode() {
        let mut no_person = dto();
        no_person.perscode = "  ".into();
        let err = create(&AccessScope::Admin, no_person).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_amount_forbidden_for_user_scope() {
        let scope = AccessScope::User {
            person: "PC100".into(),
        };
        let amount = SalaryItemAmountDto {
            amount: 1000,
            comment: None,
        };
        let err = update_amount(&scope, Uuid::new_v4(), amount)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Forbidden(_)));
    }
}
