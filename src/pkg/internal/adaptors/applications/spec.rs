use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::prelude::{FromRow, Type};

#[derive(Debug, Clone, Copy, PartialEq, Type, Serialize, Deserialize)]
#[sqlx(type_name = "application_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

#[derive(FromRow, Serialize, Debug)]
pub struct ApplicationEntry {
    pub id: String,
    pub job_id: String,
    pub applicant_user_id: String,
    pub applicant_email: String,
    pub applicant_name: String,
    pub profile_links: Vec<String>,
    pub application_message: String,
    pub phone_number: Option<String>,
    pub status: ApplicationStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Application joined with its posting and the posting's owner, for the
/// decision path and the connection email.
#[derive(FromRow, Debug)]
pub struct ApplicationWithJob {
    pub id: String,
    pub job_id: String,
    pub applicant_user_id: String,
    pub applicant_email: String,
    pub applicant_name: String,
    pub status: ApplicationStatus,
    pub job_title: String,
    pub owner_id: String,
    pub owner_name: String,
    pub owner_email: String,
}
