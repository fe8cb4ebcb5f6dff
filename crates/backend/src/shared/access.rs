use contracts::system::auth::{AccessLevel, TokenClaims};
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, Condition};

/// Row-visibility policy of a verified principal, as data.
///
/// Derived once from the token claims and translated into a query
/// condition wherever scoped data is read. Admins see everything, editors
/// see their station, users see their own rows. An editor without a
/// station fails closed to "no rows".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessScope {
    Admin,
    Editor { station: Option<String> },
    User { person: String },
}

impl AccessScope {
    pub fn from_claims(claims: &TokenClaims) -> Self {
        match claims.access_level {
            AccessLevel::Admin => AccessScope::Admin,
            AccessLevel::Editor => AccessScope::Editor {
                station: claims.station.clone(),
            },
            AccessLevel::User => AccessScope::User {
                person: claims.perscode.clone(),
            },
        }
    }

    /// True for scopes allowed to edit salary amounts
    pub fn can_edit(&self) -> bool {
        !matches!(self, AccessScope::User { .. })
    }

    /// True when the scope may write rows belonging to the given station
    pub fn can_edit_station(&self, station_cd: &str) -> bool {
        match self {
            AccessScope::Admin => true,
            AccessScope::Editor {
                station: Some(station),
            } => station == station_cd,
            AccessScope::Editor { station: None } => false,
            AccessScope::User { .. } => false,
        }
    }

    /// Translate the scope into a condition over the given person and
    /// station columns. Values go through parameter binding, never into
    /// SQL text.
    pub fn condition<C: ColumnTrait>(&self, person_col: C, station_col: C) -> Condition {
        match self {
            AccessScope::Admin => Condition::all(),
            AccessScope::Editor {
                station: Some(station),
            } => Condition::all().add(station_col.eq(station.clone())),
            // editor without a station: match nothing
            AccessScope::Editor { station: None } => Condition::all().add(Expr::value(false)),
            AccessScope::User { person } => Condition::all().add(person_col.eq(person.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_salary_item::repository::{Column, Entity};
    use sea_orm::{DatabaseBackend, EntityTrait, QueryFilter, QueryTrait};

    fn render(scope: &AccessScope) -> String {
        Entity::find()
            .filter(scope.condition(Column::Perscode, Column::StationCd))
            .build(DatabaseBackend::Sqlite)
            .to_string()
    }

    fn claims(level: AccessLevel, station: Option<&str>) -> TokenClaims {
        TokenClaims {
            sub: "u-1".into(),
            perscode: "PC100".into(),
            access_level: level,
            station: station.map(Into::into),
            status: "active".into(),
            exp: 0,
            iat: 0,
        }
    }

    #[test]
    fn test_admin_is_unrestricted() {
        let sql = render(&AccessScope::Admin);
        assert!(!sql.contains("WHERE"));
    }

    #[test]
    fn test_editor_restricted_to_station() {
        let sql = render(&AccessScope::Editor {
            station: Some("ST01".into()),
        });
        assert!(sql.contains("station_cd"));
        assert!(sql.contains("ST01"));
    }

    #[test]
    fn test_editor_without_station_fails_closed() {
        let sql = render(&AccessScope::Editor { station: None });
        assert!(sql.to_uppercase().contains("FALSE"));
    }

    #[test]
    fn test_user_restricted_to_own_person_code() {
        let sql = render(&AccessScope::User {
            person: "PC100".into(),
        });
        assert!(sql.contains("perscode"));
        assert!(sql.contains("PC100"));
    }

    #[test]
    fn test_scope_from_claims() {
        assert_eq!(
            AccessScope::from_claims(&claims(AccessLevel::Admin, None)),
            AccessScope::Admin
        );
        assert_eq!(
            AccessScope::from_claims(&claims(AccessLevel::Editor, Some("ST01"))),
            AccessScope::Editor {
                station: Some("ST01".into())
            }
        );
        assert_eq!(
            AccessScope::from_claims(&claims(AccessLevel::User, None)),
            AccessScope::User {
                person: "PC100".into()
            }
        );
    }

    #[test]
    fn test_station_writes_follow_scope() {
        assert!(AccessScope::Admin.can_edit_station("ST01"));

        let editor = AccessScope::Editor {
            station: Some("ST01".into()),
        };
        assert!(editor.can_edit_station("ST01"));
        assert!(!editor.can_edit_station("ST02"));

        assert!(!AccessScope::Editor { station: None }.can_edit_station("ST01"));
        assert!(!AccessScope::User {
            person: "PC100".into()
        }
        .can_edit_station("ST01"));
    }

    #[test]
    fn test_only_users_are_read_only() {
        assert!(AccessScope::Admin.can_edit());
        assert!(AccessScope::Editor { station: None }.can_edit());
        assert!(!AccessScope::User {
            person: "PC100".into()
        }
        .can_edit());
    }
}
