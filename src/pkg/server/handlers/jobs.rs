use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path as AxumPath, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use standard_error::{StandardError, Status};
use validator::Validate;

use crate::{
    pkg::{
        internal::{
            adaptors::{
                Page,
                jobs::{
                    mutators::JobMutator,
                    selectors::JobSelector,
                    spec::{
                        AppliedJob, JobCard, JobCommitment, JobEntry, JobStatus, OwnedJobEntry,
                    },
                },
            },
            auth::CurrentUser,
            validate,
        },
        server::state::{AppState, GetTxn},
    },
    prelude::Result,
};

#[derive(Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: i64,
}

#[derive(Deserialize, Validate)]
pub struct CreateJobInput {
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub description: String,
    pub location: Option<String>,
    #[serde(default)]
    pub skills_needed: Vec<String>,
    pub commitment: JobCommitment,
}

#[derive(Deserialize)]
pub struct PatchJobInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub skills_needed: Option<Vec<String>>,
    pub commitment: Option<JobCommitment>,
    pub status: Option<JobStatus>,
}

pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<CurrentUser>>,
    Json(input): Json<CreateJobInput>,
) -> Result<Json<JobEntry>> {
    input
        .validate()
        .map_err(|e| validate::validation_err(&e.to_string()))?;
    let mut tx = state.db_pool.begin_txn().await?;
    let job = JobMutator::new(&mut tx).create(&user.user_id, input).await?;
    tx.commit().await?;
    tracing::info!("{} posted job {}", &user.user_id, &job.id);
    Ok(Json(job))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<CurrentUser>>,
    AxumPath(job_id): AxumPath<String>,
    Json(input): Json<PatchJobInput>,
) -> Result<Json<JobEntry>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let existing = JobSelector::new(&mut tx)
        .get_by_id(&job_id)
        .await?
        .ok_or_else(|| StandardError::new("ERR-JOB-001").code(StatusCode::NOT_FOUND))?;
    if existing.profile_id != user.user_id {
        return Err(StandardError::new("ERR-JOB-002").code(StatusCode::FORBIDDEN));
    }
    let job = JobMutator::new(&mut tx)
        .update(&job_id, input)
        .await?
        .ok_or_else(|| StandardError::new("ERR-JOB-001").code(StatusCode::NOT_FOUND))?;
    tx.commit().await?;
    Ok(Json(job))
}

pub async fn list(
    State(state): State<AppState>,
    Extension(_user): Extension<Arc<CurrentUser>>,
    Query(q): Query<PageQuery>,
) -> Result<Json<Page<JobCard>>> {
    let mut conn = state.db_pool.acquire().await?;
    let (items, total) = JobSelector::new(&mut conn).page_active(q.page).await?;
    Ok(Json(Page::new(items, q.page, total)))
}

pub async fn recommended(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<CurrentUser>>,
    Query(q): Query<PageQuery>,
) -> Result<Json<Page<JobCard>>> {
    let mut conn = state.db_pool.acquire().await?;
    let (items, total) = JobSelector::new(&mut conn)
        .page_recommended(&user.user_id, q.page)
        .await?;
    Ok(Json(Page::new(items, q.page, total)))
}

pub async fn shortlisted(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<CurrentUser>>,
    Query(q): Query<PageQuery>,
) -> Result<Json<Page<JobCard>>> {
    let mut conn = state.db_pool.acquire().await?;
    let (items, total) = JobSelector::new(&mut conn)
        .page_shortlisted(&user.user_id, q.page)
        .await?;
    Ok(Json(Page::new(items, q.page, total)))
}

pub async fn connections_sent(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<CurrentUser>>,
    Query(q): Query<PageQuery>,
) -> Result<Json<Page<AppliedJob>>> {
    let mut conn = state.db_pool.acquire().await?;
    let (items, total) = JobSelector::new(&mut conn)
        .page_applied(&user.user_id, q.page)
        .await?;
    Ok(Json(Page::new(items, q.page, total)))
}

pub async fn my_projects(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<CurrentUser>>,
    Query(q): Query<PageQuery>,
) -> Result<Json<Page<OwnedJobEntry>>> {
    let mut conn = state.db_pool.acquire().await?;
    let (items, total) = JobSelector::new(&mut conn)
        .page_owned(&user.user_id, q.page)
        .await?;
    Ok(Json(Page::new(items, q.page, total)))
}
