use chrono::Utc;
use contracts::domain::a003_payment_code::aggregate::{PaymentCode, PaymentCodeId, PaymentKind};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a003_payment_code")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub pay_cd: String,
    /// "income" or "deduction"
    pub kind: String,
    pub taxable: bool,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn kind_from_str(kind: &str) -> PaymentKind {
    match kind {
        "deduction" => PaymentKind::Deduction,
        _ => PaymentKind::Income,
    }
}

fn kind_to_str(kind: PaymentKind) -> &'static str {
    match kind {
        PaymentKind::Income => "income",
        PaymentKind::Deduction => "deduction",
    }
}

impl From<Model> for PaymentCode {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        PaymentCode {
            base: BaseAggregate::with_metadata(
                PaymentCodeId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            pay_cd: m.pay_cd,
            kind: kind_from_str(&m.kind),
            taxable: m.taxable,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<PaymentCode>> {
    let mut items: Vec<PaymentCode> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    items.sort_by(|a, b| a.pay_cd.cmp(&b.pay_cd));
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<PaymentCode>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &PaymentCode) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        pay_cd: Set(aggregate.pay_cd.clone()),
        kind: Set(kind_to_str(aggregate.kind).to_string()),
        taxable: Set(aggregate.taxable),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &PaymentCode) -> anyhow::Result<()> {
    let id = aggregate.base.id.value().to_string();
    let active = ActiveModel {
        id: Set(id),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        pay_cd: Set(aggregate.pay_cd.clone()),
        kind: Set(kind_to_str(aggregate.kind).to_string()),
        taxable: Set(aggregate.taxable),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
        created_at: sea_orm::ActiveValue::NotSet,
    };
    active.update(conn()).await?;
    Ok(())
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping_roundtrip() {
        assert_eq!(kind_from_str("income"), PaymentKind::Income);
        assert_eq!(kind_from_str("deduction"), PaymentKind::Deduction);
        assert_eq!(kind_to_str(PaymentKind::Income), "income");
        assert_eq!(kind_to_str(PaymentKind::Deduction), "deduction");
    }
}
