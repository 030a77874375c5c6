use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};

use crate::pkg::internal::adaptors::submissions::spec::SubmissionEntry;
use crate::pkg::server::state::GetTxn;
use crate::prelude::Result;

#[derive(Debug, Clone)]
pub struct CreateSubmissionData {
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

pub struct SubmissionMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> SubmissionMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        SubmissionMutator { pool }
    }

    pub async fn create(&mut self, data: &CreateSubmissionData) -> Result<SubmissionEntry> {
        let row = sqlx::query_as::<_, SubmissionEntry>(
            r#"
            INSERT INTO submissions (name, roll_no, class, section, college, "timestamp", analysis, resume_path, original_filename)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, name, roll_no, class, section, college, "timestamp", analysis, resume_path, original_filename
            "#,
        )
        .bind(&data.name)
        .bind(&data.roll_no)
        .bind(&data.class)
        .bind(&data.section)
        .bind(&data.college)
        .bind(data.timestamp)
        .bind(&data.analysis)
        .bind(&data.resume_path)
        .bind(&data.original_filename)
        .fetch_one(&mut *self.pool)
        .await?;

        Ok(row)
    }
}

/// Insert seam used by the pipeline. The Postgres implementation wraps the
/// mutator in a transaction; tests substitute an in-memory fake.
#[async_trait]
pub trait SubmissionOps {
    async fn insert(&self, data: &CreateSubmissionData) -> Result<SubmissionEntry>;
}

#[async_trait]
impl SubmissionOps for Arc<PgPool> {
    async fn insert(&self, data: &CreateSubmissionData) -> Result<SubmissionEntry> {
        let mut tx = self.begin_txn().await?;
        let entry = SubmissionMutator::new(&mut tx).create(data).await?;
        tx.commit().await?;
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::{
        conf::Settings,
        pkg::{
            internal::adaptors::submissions::selectors::SubmissionSelector,
            server::state::AppState,
        },
        prelude::Result,
    };

    #[tokio::test]
    #[traced_test]
    #[ignore = "needs a running postgres and environment configuration"]
    async fn test_insert_round_trip() -> Result<()> {
        let state = AppState::new(&Settings::new()?)?;
        let data = CreateSubmissionData {
            name: "Asha".into(),
            roll_no: "12".into(),
            class: "10".into(),
            section: "B".into(),
            college: "ABC High".into(),
            timestamp: chrono::Utc::now(),
            analysis: "Strengths: ... ATS Score: 82".into(),
            resume_path: "uploads/test.pdf".into(),
            original_filename: "resume.pdf".into(),
        };
        let entry = state.db_pool.insert(&data).await?;

        let mut tx = state.db_pool.begin_txn().await?;
        let fetched = SubmissionSelector::new(&mut tx)
            .get_by_id(entry.id)
            .await?
            .expect("inserted row should be readable");
        assert_eq!(fetched.name, data.name);
        assert_eq!(fetched.roll_no, data.roll_no);
        assert_eq!(fetched.class, data.class);
        assert_eq!(fetched.section, data.section);
        assert_eq!(fetched.college, data.college);
        assert_eq!(fetched.analysis, data.analysis);
        assert_eq!(fetched.resume_path, data.resume_path);
        assert_eq!(fetched.original_filename, data.original_filename);
        assert_eq!(
            fetched.timestamp.timestamp_micros(),
            data.timestamp.timestamp_micros()
        );
        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    #[ignore = "needs a running postgres and environment configuration"]
    async fn test_duplicate_roll_no_accepted() -> Result<()> {
        let state = AppState::new(&Settings::new()?)?;
        let data = CreateSubmissionData {
            name: "Asha".into(),
            roll_no: "12".into(),
            class: "10".into(),
            section: "B".into(),
            college: "ABC High".into(),
            timestamp: chrono::Utc::now(),
            analysis: "ok".into(),
            resume_path: "uploads/test.pdf".into(),
            original_filename: "resume.pdf".into(),
        };
        let first = state.db_pool.insert(&data).await?;
        let second = state.db_pool.insert(&data).await?;
        assert_ne!(first.id, second.id);
        Ok(())
    }
}
