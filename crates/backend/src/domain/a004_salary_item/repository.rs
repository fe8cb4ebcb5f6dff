use chrono::Utc;
use contracts::domain::a004_salary_item::aggregate::{SalaryItem, SalaryItemId, SalaryItemQuery};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::access::AccessScope;
use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a004_salary_item")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub yearcd: String,
    pub monthcd: String,
    pub perscode: String,
    pub station_cd: String,
    pub pay_cd: String,
    pub amount: i64,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SalaryItem {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        SalaryItem {
            base: BaseAggregate::with_metadata(
                SalaryItemId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            yearcd: m.yearcd,
            monthcd: m.monthcd,
            perscode: m.perscode,
            station_cd: m.station_cd,
            pay_cd: m.pay_cd,
            amount: m.amount,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// List the line items of a payroll period visible to the given scope.
/// The scope condition is ANDed onto the period filter; optional query
/// filters narrow further within the visible rows.
pub async fn list_for_period(
    scope: &AccessScope,
    query: &SalaryItemQuery,
) -> anyhow::Result<Vec<SalaryItem>> {
    let mut find = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(Column::Yearcd.eq(query.yearcd.clone()))
        .filter(Column::Monthcd.eq(query.monthcd.clone()))
        .filter(scope.condition(Column::Perscode, Column::StationCd));

    if let Some(perscode) = &query.perscode {
        find = find.filter(Column::Perscode.eq(perscode.clone()));
    }
    if let Some(station_cd) = &query.station_cd {
        find = find.filter(Column::StationCd.eq(station_cd.clone()));
    }

    let items = find
        .order_by_asc(Column::Perscode)
        .order_by_asc(Column::PayCd)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Fetch one item if the scope is allowed to see it
pub async fn get_by_id(scope: &AccessScope, id: Uuid) -> anyhow::Result<Option<SalaryItem>> {
    let result = Entity::find_by_id(id.to_string())
        .filter(scope.condition(Column::Perscode, Column::StationCd))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &SalaryItem) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        yearcd: Set(aggregate.yearcd.clone()),
        monthcd: Set(aggregate.monthcd.clone()),
        perscode: Set(aggregate.perscode.clone()),
        station_cd: Set(aggregate.station_cd.clone()),
        pay_cd: Set(aggregate.pay_cd.clone()),
        amount: Set(aggregate.amount),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

/// Overwrite the amount of one item, bumping version and updated_at
pub async fn update_amount(
    id: Uuid,
    amount: i64,
    comment: Option<String>,
) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::Amount, Expr::value(amount))
        .col_expr(Column::Comment, Expr::value(comment))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .col_expr(Column::Version, Expr::col(Column::Version).add(1))
        .filter(Column::Id.eq(id.to_string()))
        .filter(Column::IsDeleted.eq(false))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}
