use sqlx::PgConnection;

use crate::pkg::internal::adaptors::profiles::spec::ProfileEntry;
use crate::prelude::Result;

pub struct ProfileSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ProfileSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ProfileSelector { pool }
    }

    pub async fn get_by_id(&mut self, id: &str) -> Result<Option<ProfileEntry>> {
        let row = sqlx::query_as::<_, ProfileEntry>(
            "SELECT id, email, full_name, avatar_url, bio, portfolio_url, skills, phone_number, created_at, updated_at
             FROM profiles WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }
}
