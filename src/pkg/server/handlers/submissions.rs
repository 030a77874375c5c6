use askama::Template;
use axum::{
    extract::{Multipart, State},
    response::Html,
    Json,
};

use crate::{
    pkg::{
        internal::{
            adaptors::submissions::{selectors::SubmissionSelector, spec::SubmissionEntry},
            pipeline::{self, ResumeFile, SubmissionForm},
        },
        server::{
            state::{AppState, GetTxn},
            uispec::{AnalysisPage, SubmitForm},
        },
    },
    prelude::{Error, Result},
};

const MAX_RESUME_BYTES: usize = 10 * 1024 * 1024;

pub async fn form() -> Result<Html<String>> {
    Ok(Html(SubmitForm { error: None }.render()?))
}

pub async fn submit(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>> {
    let mut form = SubmissionForm::default();
    let mut resume: Option<ResumeFile> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::Validation(format!("malformed form data: {}", e)))?
    {
        match field.name().unwrap_or("") {
            "name" => {
                form.name = field
                    .text()
                    .await
                    .map_err(|e| Error::Validation(format!("invalid name field: {}", e)))?;
            }
            "rollNo" => {
                form.roll_no = field
                    .text()
                    .await
                    .map_err(|e| Error::Validation(format!("invalid rollNo field: {}", e)))?;
            }
            "class" => {
                form.class = field
                    .text()
                    .await
                    .map_err(|e| Error::Validation(format!("invalid class field: {}", e)))?;
            }
            "section" => {
                form.section = field
                    .text()
                    .await
                    .map_err(|e| Error::Validation(format!("invalid section field: {}", e)))?;
            }
            "college" => {
                form.college = field
                    .text()
                    .await
                    .map_err(|e| Error::Validation(format!("invalid college field: {}", e)))?;
            }
            "resume" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| Error::Validation(format!("could not read resume upload: {}", e)))?;
                if data.len() > MAX_RESUME_BYTES {
                    return Err(Error::Validation(
                        "Resume too large, maximum size is 10MB".into(),
                    ));
                }
                resume = Some(ResumeFile {
                    filename,
                    bytes: data,
                });
            }
            _ => {
                let _ = field
                    .bytes()
                    .await
                    .map_err(|e| Error::Validation(format!("malformed form data: {}", e)))?;
            }
        }
    }
    let resume = resume.ok_or_else(|| Error::Validation("A resume file is required".into()))?;

    let entry = pipeline::run(
        &state.file_store,
        &state.ai_client,
        &state.db_pool,
        form,
        resume,
    )
    .await?;

    let page = AnalysisPage {
        name: &entry.name,
        analysis: &entry.analysis,
    };
    Ok(Html(page.render()?))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<SubmissionEntry>>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let submissions = SubmissionSelector::new(&mut tx).list_recent().await?;
    Ok(Json(submissions))
}
