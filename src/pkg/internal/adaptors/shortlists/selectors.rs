use sqlx::PgConnection;

use crate::pkg::internal::adaptors::shortlists::spec::ShortlistEntry;
use crate::prelude::Result;

pub struct ShortlistSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ShortlistSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ShortlistSelector { pool }
    }

    pub async fn get(&mut self, job_id: &str, profile_id: &str) -> Result<Option<ShortlistEntry>> {
        let row = sqlx::query_as::<_, ShortlistEntry>(
            "SELECT job_id, profile_id, created_at FROM shortlists
             WHERE job_id = $1 AND profile_id = $2",
        )
        .bind(job_id)
        .bind(profile_id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }
}
