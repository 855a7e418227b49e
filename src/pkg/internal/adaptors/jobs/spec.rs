use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::prelude::{FromRow, Type};

use crate::pkg::internal::adaptors::applications::spec::ApplicationStatus;

#[derive(Debug, Clone, Copy, PartialEq, Type, Serialize, Deserialize)]
#[sqlx(type_name = "job_commitment")]
pub enum JobCommitment {
    #[sqlx(rename = "under_5")]
    #[serde(rename = "< 5 hrs/week")]
    Under5,
    #[sqlx(rename = "from_5_to_10")]
    #[serde(rename = "5-10 hrs/week")]
    From5To10,
    #[sqlx(rename = "from_10_to_20")]
    #[serde(rename = "10-20 hrs/week")]
    From10To20,
    #[sqlx(rename = "over_20")]
    #[serde(rename = "20+ hrs/week")]
    Over20,
}

#[derive(Debug, Clone, Copy, PartialEq, Type, Serialize, Deserialize)]
#[sqlx(type_name = "job_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Active,
    Inactive,
}

#[derive(FromRow, Serialize, Debug)]
pub struct JobEntry {
    pub id: String,
    pub profile_id: String,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub skills_needed: Vec<String>,
    pub commitment: JobCommitment,
    pub status: JobStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Job row joined with its creator, as selected by the listing queries.
#[derive(FromRow, Debug)]
pub struct JobCardRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub skills_needed: Vec<String>,
    pub commitment: JobCommitment,
    pub created_at: NaiveDateTime,
    pub creator_id: String,
    pub creator_name: String,
    pub creator_avatar_url: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct Creator {
    pub id: String,
    pub full_name: String,
    pub avatar_url: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct JobCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub skills_needed: Vec<String>,
    pub commitment: JobCommitment,
    pub created_at: NaiveDateTime,
    pub creator: Creator,
}

impl From<JobCardRow> for JobCard {
    fn from(row: JobCardRow) -> Self {
        JobCard {
            id: row.id,
            title: row.title,
            description: row.description,
            location: row.location,
            skills_needed: row.skills_needed,
            commitment: row.commitment,
            created_at: row.created_at,
            creator: Creator {
                id: row.creator_id,
                full_name: row.creator_name,
                avatar_url: row.creator_avatar_url,
            },
        }
    }
}

#[derive(FromRow, Debug)]
pub struct AppliedJobRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub skills_needed: Vec<String>,
    pub commitment: JobCommitment,
    pub created_at: NaiveDateTime,
    pub creator_id: String,
    pub creator_name: String,
    pub creator_avatar_url: Option<String>,
    pub application_status: ApplicationStatus,
    pub application_date: NaiveDateTime,
}

#[derive(Serialize, Debug)]
pub struct AppliedJob {
    #[serde(flatten)]
    pub job: JobCard,
    pub application_status: ApplicationStatus,
    pub application_date: NaiveDateTime,
}

impl From<AppliedJobRow> for AppliedJob {
    fn from(row: AppliedJobRow) -> Self {
        AppliedJob {
            job: JobCard {
                id: row.id,
                title: row.title,
                description: row.description,
                location: row.location,
                skills_needed: row.skills_needed,
                commitment: row.commitment,
                created_at: row.created_at,
                creator: Creator {
                    id: row.creator_id,
                    full_name: row.creator_name,
                    avatar_url: row.creator_avatar_url,
                },
            },
            application_status: row.application_status,
            application_date: row.application_date,
        }
    }
}

/// Owner dashboard row: the posting plus engagement counts.
#[derive(FromRow, Serialize, Debug)]
pub struct OwnedJobEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub skills_needed: Vec<String>,
    pub commitment: JobCommitment,
    pub status: JobStatus,
    pub created_at: NaiveDateTime,
    pub shortlist_count: i64,
    pub application_count: i64,
}

/// What the apply workflow needs to know about a posting and its owner.
#[derive(FromRow, Debug)]
pub struct JobOwnerRow {
    pub id: String,
    pub title: String,
    pub profile_id: String,
    pub owner_name: String,
    pub owner_email: String,
}

#[cfg(test)]
mod tests {
    use super::JobCommitment;

    #[test]
    fn test_commitment_bands_serialize_to_ui_labels() {
        assert_eq!(
            serde_json::to_string(&JobCommitment::Under5).unwrap(),
            r#""< 5 hrs/week""#
        );
        let parsed: JobCommitment = serde_json::from_str(r#""20+ hrs/week""#).unwrap();
        assert_eq!(parsed, JobCommitment::Over20);
    }
}
