use axum::http::StatusCode;
use sqlx::PgConnection;
use standard_error::{StandardError, Status};
use uuid::Uuid;

use crate::pkg::internal::adaptors::applications::spec::{ApplicationEntry, ApplicationStatus};
use crate::prelude::Result;

pub struct CreateApplicationData {
    pub job_id: String,
    pub applicant_user_id: String,
    pub applicant_email: String,
    pub applicant_name: String,
    pub profile_links: Vec<String>,
    pub application_message: String,
    pub phone_number: Option<String>,
}

pub struct ApplicationMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ApplicationMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ApplicationMutator { pool }
    }

    /// The store enforces one application per (job, applicant); the unique
    /// violation comes back as the duplicate-application conflict.
    pub async fn create(&mut self, data: CreateApplicationData) -> Result<ApplicationEntry> {
        let row = sqlx::query_as::<_, ApplicationEntry>(
            r#"
            INSERT INTO applications (id, job_id, applicant_user_id, applicant_email, applicant_name,
                                      profile_links, application_message, phone_number)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, job_id, applicant_user_id, applicant_email, applicant_name, profile_links,
                      application_message, phone_number, status, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&data.job_id)
        .bind(&data.applicant_user_id)
        .bind(&data.applicant_email)
        .bind(&data.applicant_name)
        .bind(&data.profile_links)
        .bind(&data.application_message)
        .bind(&data.phone_number)
        .fetch_one(&mut *self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e {
                if db.code().as_deref() == Some("23505") {
                    return StandardError::new("ERR-APP-002").code(StatusCode::CONFLICT);
                }
            }
            e.into()
        })?;
        Ok(row)
    }

    /// Conditional transition: pending may move to either terminal status,
    /// and a terminal status may only be re-written to itself. Returns the
    /// affected-row count so the caller can detect a refused cross-flip.
    pub async fn set_status(&mut self, id: &str, status: ApplicationStatus) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE applications SET status = $2, updated_at = CURRENT_TIMESTAMP
             WHERE id = $1 AND (status = 'pending' OR status = $2)",
        )
        .bind(id)
        .bind(status)
        .execute(&mut *self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
