use sqlx::PgConnection;

use crate::pkg::internal::adaptors::applications::spec::ApplicationWithJob;
use crate::prelude::Result;

pub struct ApplicationSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ApplicationSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ApplicationSelector { pool }
    }

    pub async fn get_with_job(&mut self, id: &str) -> Result<Option<ApplicationWithJob>> {
        let row = sqlx::query_as::<_, ApplicationWithJob>(
            "SELECT a.id, a.job_id, a.applicant_user_id, a.applicant_email, a.applicant_name, a.status,
                    j.title AS job_title, p.id AS owner_id, p.full_name AS owner_name, p.email AS owner_email
             FROM applications a
             JOIN jobs j ON j.id = a.job_id
             JOIN profiles p ON p.id = j.profile_id
             WHERE a.id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }
}
