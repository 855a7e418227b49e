use sqlx::PgConnection;

use crate::pkg::internal::adaptors::profiles::spec::ProfileEntry;
use crate::pkg::server::handlers::profiles::UpdateProfileInput;
use crate::prelude::Result;

pub struct ProfileMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ProfileMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ProfileMutator { pool }
    }

    /// Creates the profile row on first sight of an authenticated identity.
    /// The auth provider stays authoritative for the email; the rest of the
    /// row belongs to the user and is never clobbered here.
    pub async fn ensure(&mut self, id: &str, email: &str, name: &str) -> Result<ProfileEntry> {
        let row = sqlx::query_as::<_, ProfileEntry>(
            r#"
            INSERT INTO profiles (id, email, full_name)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE
            SET email = $2
            RETURNING id, email, full_name, avatar_url, bio, portfolio_url, skills, phone_number, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(email)
        .bind(name)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(
        &mut self,
        id: &str,
        profile: UpdateProfileInput,
    ) -> Result<Option<ProfileEntry>> {
        let mut query = String::from("UPDATE profiles SET updated_at = CURRENT_TIMESTAMP");
        let mut param_count = 1;

        if profile.full_name.is_some() {
            param_count += 1;
            query.push_str(&format!(", full_name = ${}", param_count));
        }
        if profile.avatar_url.is_some() {
            param_count += 1;
            query.push_str(&format!(", avatar_url = ${}", param_count));
        }
        if profile.bio.is_some() {
            param_count += 1;
            query.push_str(&format!(", bio = ${}", param_count));
        }
        if profile.portfolio_url.is_some() {
            param_count += 1;
            query.push_str(&format!(", portfolio_url = ${}", param_count));
        }
        if profile.skills.is_some() {
            param_count += 1;
            query.push_str(&format!(", skills = ${}", param_count));
        }
        if profile.phone_number.is_some() {
            param_count += 1;
            query.push_str(&format!(", phone_number = ${}", param_count));
        }

        query.push_str(
            " WHERE id = $1 RETURNING id, email, full_name, avatar_url, bio, portfolio_url, skills, phone_number, created_at, updated_at",
        );

        let mut q = sqlx::query_as::<_, ProfileEntry>(&query).bind(id);

        if let Some(full_name) = profile.full_name {
            q = q.bind(full_name);
        }
        if let Some(avatar_url) = profile.avatar_url {
            q = q.bind(avatar_url);
        }
        if let Some(bio) = profile.bio {
            q = q.bind(bio);
        }
        if let Some(portfolio_url) = profile.portfolio_url {
            q = q.bind(portfolio_url);
        }
        if let Some(skills) = profile.skills {
            q = q.bind(skills);
        }
        if let Some(phone_number) = profile.phone_number {
            q = q.bind(phone_number);
        }
        let row = q.fetch_optional(&mut *self.pool).await?;
        Ok(row)
    }
}
