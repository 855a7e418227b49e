use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path as AxumPath, State},
    http::StatusCode,
};
use serde_json::{Value, json};
use standard_error::{StandardError, Status};

use crate::{
    pkg::{
        internal::{
            adaptors::{
                jobs::selectors::JobSelector,
                shortlists::{mutators::ShortlistMutator, selectors::ShortlistSelector},
            },
            auth::CurrentUser,
        },
        server::state::{AppState, GetTxn},
    },
    prelude::Result,
};

pub async fn status(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<CurrentUser>>,
    AxumPath(job_id): AxumPath<String>,
) -> Result<Json<Value>> {
    let mut conn = state.db_pool.acquire().await?;
    let entry = ShortlistSelector::new(&mut conn)
        .get(&job_id, &user.user_id)
        .await?;
    Ok(Json(json!({ "shortlisted": entry.is_some(), "data": entry })))
}

pub async fn add(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<CurrentUser>>,
    AxumPath(job_id): AxumPath<String>,
) -> Result<Json<Value>> {
    let mut tx = state.db_pool.begin_txn().await?;
    JobSelector::new(&mut tx)
        .get_by_id(&job_id)
        .await?
        .ok_or_else(|| StandardError::new("ERR-JOB-001").code(StatusCode::NOT_FOUND))?;
    ShortlistMutator::new(&mut tx)
        .add(&job_id, &user.user_id)
        .await?;
    tx.commit().await?;
    Ok(Json(json!({ "shortlisted": true })))
}

pub async fn remove(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<CurrentUser>>,
    AxumPath(job_id): AxumPath<String>,
) -> Result<Json<Value>> {
    let mut conn = state.db_pool.acquire().await?;
    ShortlistMutator::new(&mut conn)
        .remove(&job_id, &user.user_id)
        .await?;
    Ok(Json(json!({ "shortlisted": false })))
}
