use std::sync::Arc;

use axum::{Extension, Json, extract::State, http::StatusCode};
use serde::Deserialize;
use standard_error::{StandardError, Status};
use validator::Validate;

use crate::{
    pkg::{
        internal::{
            adaptors::profiles::{
                mutators::ProfileMutator, selectors::ProfileSelector, spec::ProfileEntry,
            },
            auth::CurrentUser,
            validate,
        },
        server::state::{AppState, GetTxn},
    },
    prelude::Result,
};

#[derive(Deserialize, Validate)]
pub struct UpdateProfileInput {
    #[validate(length(min = 2, message = "name must be at least 2 characters"))]
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub portfolio_url: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub phone_number: Option<String>,
}

pub async fn me(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<CurrentUser>>,
) -> Result<Json<ProfileEntry>> {
    let mut conn = state.db_pool.acquire().await?;
    let profile = ProfileSelector::new(&mut conn)
        .get_by_id(&user.user_id)
        .await?
        .ok_or_else(|| StandardError::new("ERR-PROFILE-001").code(StatusCode::NOT_FOUND))?;
    Ok(Json(profile))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<CurrentUser>>,
    Json(input): Json<UpdateProfileInput>,
) -> Result<Json<ProfileEntry>> {
    input
        .validate()
        .map_err(|e| validate::validation_err(&e.to_string()))?;
    let mut input = input;
    if let Some(links) = &input.portfolio_url {
        input.portfolio_url = Some(validate::normalize_links(links)?);
    }
    if let Some(phone) = &input.phone_number {
        validate::check_phone(phone)?;
    }
    let mut tx = state.db_pool.begin_txn().await?;
    let profile = ProfileMutator::new(&mut tx)
        .update(&user.user_id, input)
        .await?
        .ok_or_else(|| StandardError::new("ERR-PROFILE-001").code(StatusCode::NOT_FOUND))?;
    tx.commit().await?;
    Ok(Json(profile))
}
