use anyhow::{Context, Result};
use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, DecodingKey, Validation};
use once_cell::sync::OnceCell;

// Tokens are minted by the external identity service; this service only
// verifies them against the shared secret.
static JWT_SECRET: OnceCell<String> = OnceCell::new();

/// Store the shared HS256 secret at startup
pub fn initialize_secret(secret: String) -> Result<()> {
    JWT_SECRET
        .set(secret)
        .map_err(|_| anyhow::anyhow!("JWT secret already initialized"))
}

/// Validate a bearer token and extract its claims
pub fn validate_token(token: &str) -> Result<TokenClaims> {
    let secret = JWT_SECRET
        .get()
        .context("JWT secret has not been initialized")?;
    validate_with_secret(token, secret)
}

fn validate_with_secret(token: &str, secret: &str) -> Result<TokenClaims> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::AccessLevel;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn mint(claims: &TokenClaims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn claims() -> TokenClaims {
        let now = chrono::Utc::now().timestamp() as usize;
        TokenClaims {
            sub: "u-1".into(),
            perscode: "PC100".into(),
            access_level: AccessLevel::Editor,
            station: Some("ST01".into()),
            status: "active".into(),
            exp: now + 3600,
            iat: now,
        }
    }

    #[test]
    fn test_valid_token_roundtrip() {
        let token = mint(&claims(), "secret");
        let decoded = validate_with_secret(&token, "secret").unwrap();
        assert_eq!(decoded.sub, "u-1");
        assert_eq!(decoded.perscode, "PC100");
        assert_eq!(decoded.access_level, AccessLevel::Editor);
        assert_eq!(decoded.station.as_deref(), Some("ST01"));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = mint(&claims(), "secret");
        assert!(validate_with_secret(&token, "other").is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let mut expired = claims();
        expired.exp = expired.iat - 7200;
        expired.iat -= 7800;
        let token = mint(&expired, "secret");
        assert!(validate_with_secret(&token, "secret").is_err());
    }
}
