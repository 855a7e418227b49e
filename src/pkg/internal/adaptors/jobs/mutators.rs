use sqlx::PgConnection;
use uuid::Uuid;

use crate::pkg::internal::adaptors::jobs::spec::JobEntry;
use crate::pkg::server::handlers::jobs::{CreateJobInput, PatchJobInput};
use crate::prelude::Result;

pub struct JobMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> JobMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        JobMutator { pool }
    }

    pub async fn create(&mut self, profile_id: &str, job: CreateJobInput) -> Result<JobEntry> {
        let row = sqlx::query_as::<_, JobEntry>(
            r#"
            INSERT INTO jobs (id, profile_id, title, description, location, skills_needed, commitment)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, profile_id, title, description, location, skills_needed, commitment, status, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(profile_id)
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.location)
        .bind(&job.skills_needed)
        .bind(job.commitment)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }

    /// Partial update; the owner column is deliberately absent, a posting
    /// never changes hands.
    pub async fn update(&mut self, id: &str, job: PatchJobInput) -> Result<Option<JobEntry>> {
        let mut query = String::from("UPDATE jobs SET updated_at = CURRENT_TIMESTAMP");
        let mut param_count = 1;

        if job.title.is_some() {
            param_count += 1;
            query.push_str(&format!(", title = ${}", param_count));
        }
        if job.description.is_some() {
            param_count += 1;
            query.push_str(&format!(", description = ${}", param_count));
        }
        if job.location.is_some() {
            param_count += 1;
            query.push_str(&format!(", location = ${}", param_count));
        }
        if job.skills_needed.is_some() {
            param_count += 1;
            query.push_str(&format!(", skills_needed = ${}", param_count));
        }
        if job.commitment.is_some() {
            param_count += 1;
            query.push_str(&format!(", commitment = ${}", param_count));
        }
        if job.status.is_some() {
            param_count += 1;
            query.push_str(&format!(", status = ${}", param_count));
        }

        query.push_str(
            " WHERE id = $1 RETURNING id, profile_id, title, description, location, skills_needed, commitment, status, created_at, updated_at",
        );

        let mut q = sqlx::query_as::<_, JobEntry>(&query).bind(id);

        if let Some(title) = job.title {
            q = q.bind(title);
        }
        if let Some(description) = job.description {
            q = q.bind(description);
        }
        if let Some(location) = job.location {
            q = q.bind(location);
        }
        if let Some(skills_needed) = job.skills_needed {
            q = q.bind(skills_needed);
        }
        if let Some(commitment) = job.commitment {
            q = q.bind(commitment);
        }
        if let Some(status) = job.status {
            q = q.bind(status);
        }
        let row = q.fetch_optional(&mut *self.pool).await?;
        Ok(row)
    }
}
