use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionEntry {
    pub id: i32,
    pub name: String,
    pub roll_no: String,
    pub class: String,
    pub section: String,
    pub college: String,
    pub timestamp: DateTime<Utc>,
    pub analysis: String,
    pub resume_path: String,
    pub original_filename: String,
}
