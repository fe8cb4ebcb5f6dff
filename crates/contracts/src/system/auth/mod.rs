use serde::{Deserialize, Serialize};

/// Role carried by a verified principal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    /// Unrestricted
    Admin,
    /// Restricted to one station
    Editor,
    /// Restricted to the principal's own records
    User,
}

/// Claims of the bearer token minted by the external identity service.
/// This service only verifies them; it never issues tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// user id
    pub sub: String,
    /// citizen-id-like person code of the officer behind the account
    pub perscode: String,
    #[serde(rename = "accessLevel")]
    pub access_level: AccessLevel,
    /// station code an editor is scoped to; absent for admins and users
    pub station: Option<String>,
    /// "active" accounts pass authentication, anything else is rejected
    pub status: String,
    /// expiration timestamp
    pub exp: usize,
    /// issued at
    pub iat: usize,
}

impl TokenClaims {
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

/// Principal info returned by GET /api/system/auth/me
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrincipalInfo {
    pub id: String,
    pub perscode: String,
    #[serde(rename = "accessLevel")]
    pub access_level: AccessLevel,
    pub station: Option<String>,
    pub status: String,
}

impl From<&TokenClaims> for PrincipalInfo {
    fn from(claims: &TokenClaims) -> Self {
        Self {
            id: claims.sub.clone(),
            perscode: claims.perscode.clone(),
            access_level: claims.access_level,
            station: claims.station.clone(),
            status: claims.status.clone(),
        }
    }
}
