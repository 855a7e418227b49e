use sqlx::PgConnection;

use crate::prelude::Result;

pub struct ShortlistMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ShortlistMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ShortlistMutator { pool }
    }

    /// Returns false when the pair already existed; re-bookmarking is not an
    /// error.
    pub async fn add(&mut self, job_id: &str, profile_id: &str) -> Result<bool> {
        let result = sqlx::query(
            "INSERT INTO shortlists (job_id, profile_id) VALUES ($1, $2)
             ON CONFLICT (job_id, profile_id) DO NOTHING",
        )
        .bind(job_id)
        .bind(profile_id)
        .execute(&mut *self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn remove(&mut self, job_id: &str, profile_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM shortlists WHERE job_id = $1 AND profile_id = $2")
            .bind(job_id)
            .bind(profile_id)
            .execute(&mut *self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
