use chrono::Utc;
use contracts::domain::a001_officer::aggregate::{Officer, OfficerId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_officer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub perscode: String,
    pub surname: String,
    pub firstname: String,
    pub othername: Option<String>,
    pub rank_cd: String,
    pub station_cd: String,
    pub bank_cd: String,
    pub account_no: String,
    pub status: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Officer {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        Officer {
            base: BaseAggregate::with_metadata(
                OfficerId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            perscode: m.perscode,
            surname: m.surname,
            firstname: m.firstname,
            othername: m.othername,
            rank_cd: m.rank_cd,
            station_cd: m.station_cd,
            bank_cd: m.bank_cd,
            account_no: m.account_no,
            status: m.status,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<Officer>> {
    let mut items: Vec<Officer> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    items.sort_by(|a, b| a.surname.to_lowercase().cmp(&b.surname.to_lowercase()));
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Officer>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Officer) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        perscode: Set(aggregate.perscode.clone()),
        surname: Set(aggregate.surname.clone()),
        firstname: Set(aggregate.firstname.clone()),
        othername: Set(aggregate.othername.clone()),
        rank_cd: Set(aggregate.rank_cd.clone()),
        station_cd: Set(aggregate.station_cd.clone()),
        bank_cd: Set(aggregate.bank_cd.clone()),
        account_no: Set(aggregate.account_no.clone()),
        status: Set(aggregate.status.clone()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Officer) -> anyhow::Result<()> {
    let id = aggregate.base.id.value().to_string();
    let active = ActiveModel {
        id: Set(id),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        perscode: Set(aggregate.perscode.clone()),
        surname: Set(aggregate.surname.clone()),
        firstname: Set(aggregate.firstname.clone()),
        othername: Set(aggregate.othername.clone()),
        rank_cd: Set(aggregate.rank_cd.clone()),
        station_cd: Set(aggregate.station_cd.clone()),
        bank_cd: Set(aggregate.bank_cd.clone()),
        account_no: Set(aggregate.account_no.clone()),
        status: Set(aggregate.status.clone()),
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
