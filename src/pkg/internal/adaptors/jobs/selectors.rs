use sqlx::PgConnection;

use crate::pkg::internal::adaptors::jobs::spec::{
    AppliedJob, AppliedJobRow, JobCard, JobCardRow, JobEntry, JobOwnerRow, JobStatus, OwnedJobEntry,
};
use crate::pkg::internal::adaptors::limit_offset;
use crate::prelude::Result;

pub struct JobSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> JobSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        JobSelector { pool }
    }

    pub async fn get_by_id(&mut self, id: &str) -> Result<Option<JobEntry>> {
        let row = sqlx::query_as::<_, JobEntry>(
            "SELECT id, profile_id, title, description, location, skills_needed, commitment, status, created_at, updated_at
             FROM jobs WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    /// Only active postings accept applications; the owner join feeds the
    /// notification email.
    pub async fn get_active_with_owner(&mut self, id: &str) -> Result<Option<JobOwnerRow>> {
        let row = sqlx::query_as::<_, JobOwnerRow>(
            "SELECT j.id, j.title, j.profile_id, p.full_name AS owner_name, p.email AS owner_email
             FROM jobs j JOIN profiles p ON p.id = j.profile_id
             WHERE j.id = $1 AND j.status = $2",
        )
        .bind(id)
        .bind(JobStatus::Active)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn page_active(&mut self, page: i64) -> Result<(Vec<JobCard>, i64)> {
        let (limit, offset) = limit_offset(page);
        let rows = sqlx::query_as::<_, JobCardRow>(
            "SELECT j.id, j.title, j.description, j.location, j.skills_needed, j.commitment, j.created_at,
                    p.id AS creator_id, p.full_name AS creator_name, p.avatar_url AS creator_avatar_url
             FROM jobs j JOIN profiles p ON p.id = j.profile_id
             WHERE j.status = $1
             ORDER BY j.created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(JobStatus::Active)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *self.pool)
        .await?;
        let total: i64 = sqlx::query_scalar("SELECT count(*) FROM jobs WHERE status = $1")
            .bind(JobStatus::Active)
            .fetch_one(&mut *self.pool)
            .await?;
        Ok((rows.into_iter().map(JobCard::from).collect(), total))
    }

    /// Active postings from other builders, newest first.
    pub async fn page_recommended(
        &mut self,
        user_id: &str,
        page: i64,
    ) -> Result<(Vec<JobCard>, i64)> {
        let (limit, offset) = limit_offset(page);
        let rows = sqlx::query_as::<_, JobCardRow>(
            "SELECT j.id, j.title, j.description, j.location, j.skills_needed, j.commitment, j.created_at,
                    p.id AS creator_id, p.full_name AS creator_name, p.avatar_url AS creator_avatar_url
             FROM jobs j JOIN profiles p ON p.id = j.profile_id
             WHERE j.status = $1 AND j.profile_id <> $2
             ORDER BY j.created_at DESC LIMIT $3 OFFSET $4",
        )
        .bind(JobStatus::Active)
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *self.pool)
        .await?;
        let total: i64 =
            sqlx::query_scalar("SELECT count(*) FROM jobs WHERE status = $1 AND profile_id <> $2")
                .bind(JobStatus::Active)
                .bind(user_id)
                .fetch_one(&mut *self.pool)
                .await?;
        Ok((rows.into_iter().map(JobCard::from).collect(), total))
    }

    pub async fn page_shortlisted(
        &mut self,
        profile_id: &str,
        page: i64,
    ) -> Result<(Vec<JobCard>, i64)> {
        let (limit, offset) = limit_offset(page);
        let rows = sqlx::query_as::<_, JobCardRow>(
            "SELECT j.id, j.title, j.description, j.location, j.skills_needed, j.commitment, j.created_at,
                    p.id AS creator_id, p.full_name AS creator_name, p.avatar_url AS creator_avatar_url
             FROM shortlists s
             JOIN jobs j ON j.id = s.job_id
             JOIN profiles p ON p.id = j.profile_id
             WHERE s.profile_id = $1
             ORDER BY s.created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(profile_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *self.pool)
        .await?;
        let total: i64 = sqlx::query_scalar("SELECT count(*) FROM shortlists WHERE profile_id = $1")
            .bind(profile_id)
            .fetch_one(&mut *self.pool)
            .await?;
        Ok((rows.into_iter().map(JobCard::from).collect(), total))
    }

    /// Jobs the user has applied to, with each application's state.
    pub async fn page_applied(
        &mut self,
        user_id: &str,
        page: i64,
    ) -> Result<(Vec<AppliedJob>, i64)> {
        let (limit, offset) = limit_offset(page);
        let rows = sqlx::query_as::<_, AppliedJobRow>(
            "SELECT j.id, j.title, j.description, j.location, j.skills_needed, j.commitment, j.created_at,
                    p.id AS creator_id, p.full_name AS creator_name, p.avatar_url AS creator_avatar_url,
                    a.status AS application_status, a.created_at AS application_date
             FROM applications a
             JOIN jobs j ON j.id = a.job_id
             JOIN profiles p ON p.id = j.profile_id
             WHERE a.applicant_user_id = $1
             ORDER BY a.created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *self.pool)
        .await?;
        let total: i64 =
            sqlx::query_scalar("SELECT count(*) FROM applications WHERE applicant_user_id = $1")
                .bind(user_id)
                .fetch_one(&mut *self.pool)
                .await?;
        Ok((rows.into_iter().map(AppliedJob::from).collect(), total))
    }

    pub async fn page_owned(
        &mut self,
        profile_id: &str,
        page: i64,
    ) -> Result<(Vec<OwnedJobEntry>, i64)> {
        let (limit, offset) = limit_offset(page);
        let rows = sqlx::query_as::<_, OwnedJobEntry>(
            "SELECT j.id, j.title, j.description, j.location, j.skills_needed, j.commitment, j.status, j.created_at,
                    (SELECT count(*) FROM shortlists s WHERE s.job_id = j.id) AS shortlist_count,
                    (SELECT count(*) FROM applications a WHERE a.job_id = j.id) AS application_count
             FROM jobs j
             WHERE j.profile_id = $1
             ORDER BY j.created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(profile_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *self.pool)
        .await?;
        let total: i64 = sqlx::query_scalar("SELECT count(*) FROM jobs WHERE profile_id = $1")
            .bind(profile_id)
            .fetch_one(&mut *self.pool)
            .await?;
        Ok((rows, total))
    }
}
