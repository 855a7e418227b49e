use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path as AxumPath, Query, State},
    http::HeaderMap,
};
use serde::Deserialize;
use serde_json::{Value, json};
use validator::Validate;

use crate::{
    pkg::{
        internal::{
            auth::{self, CurrentUser},
            decision::DecisionAction,
            workflow::{self, DecisionAuth},
        },
        server::state::AppState,
    },
    prelude::Result,
};

/// Identity is not part of the body; it comes from the verified session.
#[derive(Deserialize, Validate)]
pub struct ApplyInput {
    #[validate(length(
        min = 1,
        max = 500,
        message = "message must be between 1 and 500 characters"
    ))]
    pub application_message: String,
    #[serde(default)]
    pub profile_links: Vec<String>,
    pub phone_number: Option<String>,
}

pub async fn apply(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<CurrentUser>>,
    AxumPath(job_id): AxumPath<String>,
    Json(input): Json<ApplyInput>,
) -> Result<Json<Value>> {
    let outcome = workflow::submit_application(&state, &user, &job_id, input).await?;
    Ok(Json(json!({
        "success": true,
        "application_id": outcome.application.id,
        "creator_name": outcome.creator_name,
        "applicant_email": outcome.application.applicant_email,
    })))
}

#[derive(Deserialize)]
pub struct DecisionQuery {
    pub token: Option<String>,
}

pub async fn accept(
    State(state): State<AppState>,
    AxumPath(application_id): AxumPath<String>,
    Query(q): Query<DecisionQuery>,
    headers: HeaderMap,
) -> Result<Json<Value>> {
    decide(&state, &application_id, DecisionAction::Accept, q, &headers).await
}

pub async fn reject(
    State(state): State<AppState>,
    AxumPath(application_id): AxumPath<String>,
    Query(q): Query<DecisionQuery>,
    headers: HeaderMap,
) -> Result<Json<Value>> {
    decide(&state, &application_id, DecisionAction::Reject, q, &headers).await
}

async fn decide(
    state: &AppState,
    application_id: &str,
    action: DecisionAction,
    q: DecisionQuery,
    headers: &HeaderMap,
) -> Result<Json<Value>> {
    let auth = match q.token {
        Some(token) => DecisionAuth::Token(token),
        None => DecisionAuth::Owner(auth::resolve_session(state, headers).await?),
    };
    workflow::decide_application(state, application_id, action, auth).await?;
    Ok(Json(json!({ "success": true })))
}
