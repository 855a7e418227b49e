use axum::http::StatusCode;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use sqlx::PgConnection;
use sqlx::prelude::{FromRow, Type};
use standard_error::{StandardError, Status};
use uuid::Uuid;

use crate::{conf::settings, prelude::Result};

#[derive(Debug, Clone, Copy, PartialEq, Type, Serialize, Deserialize)]
#[sqlx(type_name = "decision_action", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DecisionAction {
    Accept,
    Reject,
}

impl DecisionAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionAction::Accept => "accept",
            DecisionAction::Reject => "reject",
        }
    }
}

/// Signed payload of an emailed decision link. Signature validity alone is
/// never enough to act: the persisted row keyed by `jti` is what makes a
/// token single-use.
#[derive(Debug, Serialize, Deserialize)]
pub struct DecisionClaims {
    pub jti: String,
    pub sub: String,
    pub act: DecisionAction,
    pub owner: String,
    pub exp: i64,
}

#[derive(FromRow, Debug)]
pub struct DecisionToken {
    pub token_id: String,
    pub application_id: String,
    pub action: DecisionAction,
    pub used: bool,
}

pub struct DecisionLinks {
    pub accept_url: String,
    pub reject_url: String,
}

fn invalid_token() -> StandardError {
    StandardError::new("ERR-TOKEN-001").code(StatusCode::UNAUTHORIZED)
}

fn already_used() -> StandardError {
    StandardError::new("ERR-TOKEN-002").code(StatusCode::CONFLICT)
}

pub fn sign_claims(claims: &DecisionClaims) -> Result<String> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(settings.decision_token_secret.as_bytes()),
    )
    .map_err(|_| invalid_token())
}

pub fn decode_claims(raw: &str) -> Result<DecisionClaims> {
    decode::<DecisionClaims>(
        raw,
        &DecodingKey::from_secret(settings.decision_token_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| invalid_token())
}

pub fn check_claims(
    claims: &DecisionClaims,
    application_id: &str,
    expected: DecisionAction,
) -> Result<()> {
    if claims.act != expected || claims.sub != application_id {
        return Err(invalid_token());
    }
    Ok(())
}

/// Issues the accept/reject pair for a fresh application. Rows land in the
/// caller's transaction, so they are durable before the email ever leaves.
pub async fn issue_pair(
    txn: &mut PgConnection,
    application_id: &str,
    owner_user_id: &str,
) -> Result<DecisionLinks> {
    let accept = issue_one(txn, application_id, owner_user_id, DecisionAction::Accept).await?;
    let reject = issue_one(txn, application_id, owner_user_id, DecisionAction::Reject).await?;
    Ok(DecisionLinks {
        accept_url: format!(
            "{}/applications/{}/accept?token={}",
            settings.base_url, application_id, accept
        ),
        reject_url: format!(
            "{}/applications/{}/reject?token={}",
            settings.base_url, application_id, reject
        ),
    })
}

async fn issue_one(
    txn: &mut PgConnection,
    application_id: &str,
    owner_user_id: &str,
    action: DecisionAction,
) -> Result<String> {
    let claims = DecisionClaims {
        jti: Uuid::new_v4().to_string(),
        sub: application_id.to_string(),
        act: action,
        owner: owner_user_id.to_string(),
        exp: (Utc::now() + chrono::Duration::days(settings.decision_token_ttl_days)).timestamp(),
    };
    let token = sign_claims(&claims)?;
    sqlx::query("INSERT INTO decision_tokens (token_id, application_id, action) VALUES ($1, $2, $3)")
        .bind(&claims.jti)
        .bind(application_id)
        .bind(action)
        .execute(&mut *txn)
        .await?;
    Ok(token)
}

/// Verification order matters: signature, payload match, persisted record,
/// used flag, then the atomic consume. Run this in the same transaction as
/// the status transition so a failed transition rolls the consume back.
pub async fn verify_and_consume(
    txn: &mut PgConnection,
    raw: &str,
    application_id: &str,
    expected: DecisionAction,
) -> Result<DecisionClaims> {
    let claims = decode_claims(raw)?;
    check_claims(&claims, application_id, expected)?;

    let record = sqlx::query_as::<_, DecisionToken>(
        "SELECT token_id, application_id, action, used FROM decision_tokens
         WHERE token_id = $1 AND application_id = $2 AND action = $3",
    )
    .bind(&claims.jti)
    .bind(application_id)
    .bind(expected)
    .fetch_optional(&mut *txn)
    .await?
    .ok_or_else(invalid_token)?;

    if record.used {
        return Err(already_used());
    }

    let result = sqlx::query(
        "UPDATE decision_tokens SET used = true, used_at = now()
         WHERE token_id = $1 AND used = false",
    )
    .bind(&claims.jti)
    .execute(&mut *txn)
    .await?;
    if result.rows_affected() == 0 {
        // lost the race to a concurrent click on the same link
        return Err(already_used());
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(action: DecisionAction) -> DecisionClaims {
        DecisionClaims {
            jti: Uuid::new_v4().to_string(),
            sub: "app-42".into(),
            act: action,
            owner: "owner-7".into(),
            exp: (Utc::now() + chrono::Duration::days(1)).timestamp(),
        }
    }

    #[test]
    fn test_claims_roundtrip() {
        let original = claims(DecisionAction::Accept);
        let token = sign_claims(&original).unwrap();
        let decoded = decode_claims(&token).unwrap();
        assert_eq!(decoded.jti, original.jti);
        assert_eq!(decoded.sub, "app-42");
        assert_eq!(decoded.act, DecisionAction::Accept);
        assert_eq!(decoded.owner, "owner-7");
    }

    #[test]
    fn test_tampered_token_rejected() {
        let token = sign_claims(&claims(DecisionAction::Accept)).unwrap();
        let mut tampered = token.clone();
        tampered.push('x');
        assert!(decode_claims(&tampered).is_err());
    }

    #[test]
    fn test_accept_token_refused_on_reject_endpoint() {
        let c = claims(DecisionAction::Accept);
        assert!(check_claims(&c, "app-42", DecisionAction::Reject).is_err());
        assert!(check_claims(&c, "app-42", DecisionAction::Accept).is_ok());
    }

    #[test]
    fn test_application_mismatch_refused() {
        let c = claims(DecisionAction::Reject);
        assert!(check_claims(&c, "another-app", DecisionAction::Reject).is_err());
    }
}
