use sqlx::PgConnection;

use crate::pkg::internal::adaptors::submissions::spec::SubmissionEntry;
use crate::prelude::Result;

pub struct SubmissionSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> SubmissionSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        SubmissionSelector { pool }
    }

    pub async fn get_by_id(&mut self, id: i32) -> Result<Option<SubmissionEntry>> {
        let row = sqlx::query_as::<_, SubmissionEntry>(
            r#"
            SELECT id, name, roll_no, class, section, college, "timestamp", analysis, resume_path, original_filename
            FROM submissions WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn list_recent(&mut self) -> Result<Vec<SubmissionEntry>> {
        let rows = sqlx::query_as::<_, SubmissionEntry>(
            r#"
            SELECT id, name, roll_no, class, section, college, "timestamp", analysis, resume_path, original_filename
            FROM submissions ORDER BY "timestamp" DESC
            "#,
        )
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows)
    }
}
