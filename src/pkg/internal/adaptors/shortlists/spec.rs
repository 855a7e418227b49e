use serde::Serialize;
use sqlx::FromRow;

#[derive(FromRow, Serialize, Debug)]
pub struct ShortlistEntry {
    pub job_id: String,
    pub profile_id: String,
    pub created_at: chrono::NaiveDateTime,
}
