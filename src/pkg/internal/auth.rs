use axum::http::{HeaderMap, StatusCode, header::AUTHORIZATION};
use axum_extra::extract::CookieJar;
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use standard_error::{StandardError, Status};

use crate::{
    conf::settings,
    pkg::{internal::adaptors::profiles::mutators::ProfileMutator, server::state::AppState},
    prelude::Result,
};

/// Claims minted by the auth provider; verified here with the shared secret.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub email: String,
    pub name: String,
    pub exp: i64,
}

#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: String,
    pub email: String,
    pub name: String,
}

pub fn verify_session(token: &str) -> Result<SessionClaims> {
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(settings.auth_jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| StandardError::new("ERR-AUTH-001").code(StatusCode::UNAUTHORIZED))
}

pub fn session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(value) = headers.get(AUTHORIZATION) {
        if let Ok(value) = value.to_str() {
            if let Some(token) = value.strip_prefix("Bearer ") {
                if !token.is_empty() {
                    return Some(token.to_string());
                }
            }
        }
    }
    let jar = CookieJar::from_headers(headers);
    jar.get("_Host_bb_session")
        .filter(|c| !c.value().is_empty())
        .map(|c| c.value().to_string())
}

pub async fn resolve_session(state: &AppState, headers: &HeaderMap) -> Result<CurrentUser> {
    let Some(token) = session_token(headers) else {
        tracing::warn!("session token missing, authentication denied");
        return Err(StandardError::new("ERR-AUTH-001").code(StatusCode::UNAUTHORIZED));
    };
    let claims = verify_session(&token)?;
    let mut conn = state.db_pool.acquire().await?;
    ProfileMutator::new(&mut conn)
        .ensure(&claims.sub, &claims.email, &claims.name)
        .await?;
    Ok(CurrentUser {
        user_id: claims.sub,
        email: claims.email,
        name: claims.name,
    })
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, HeaderValue, header::AUTHORIZATION};
    use jsonwebtoken::{EncodingKey, Header, encode};

    use super::*;

    fn mint(secret: &str) -> String {
        let claims = SessionClaims {
            sub: "user-1".into(),
            email: "builder@x.com".into(),
            name: "Builder One".into(),
            exp: (chrono::Utc::now() + chrono::Duration::hours(1)).timestamp(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_verify_session_roundtrip() {
        let token = mint(&settings.auth_jwt_secret);
        let claims = verify_session(&token).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.email, "builder@x.com");
    }

    #[test]
    fn test_verify_session_rejects_wrong_secret() {
        let token = mint("some-other-secret");
        assert!(verify_session(&token).is_err());
    }

    #[test]
    fn test_session_token_prefers_bearer_header() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        assert_eq!(session_token(&headers), Some("abc".to_string()));
    }

    #[test]
    fn test_session_token_missing() {
        assert_eq!(session_token(&HeaderMap::new()), None);
    }
}
