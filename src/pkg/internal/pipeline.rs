use axum::body::Bytes;
use chrono::Utc;

use super::adaptors::submissions::mutators::{CreateSubmissionData, SubmissionOps};
use super::adaptors::submissions::spec::SubmissionEntry;
use super::ai::{resume_mime, AnalyzeOps};
use super::files::FileStore;
use crate::prelude::Result;

/// Form fields accompanying the resume upload.
#[derive(Debug, Default, Clone)]
pub struct SubmissionForm {
    pub name: String,
    pub roll_no: String,
    pub class: String,
    pub section: String,
    pub college: String,
}

#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub filename: String,
    pub bytes: Bytes,
}

/// Runs one submission end to end: store the resume, have the AI service
/// analyze it, persist the record, hand the persisted entry back for
/// rendering. The first failing step aborts the run; nothing is retried.
///
/// A record only exists once analysis has succeeded. A storage failure after
/// a successful analysis still aborts the request and the analysis text is
/// lost with it.
pub async fn run<A, S>(
    files: &FileStore,
    analyzer: &A,
    submissions: &S,
    form: SubmissionForm,
    resume: ResumeFile,
) -> Result<SubmissionEntry>
where
    A: AnalyzeOps + Send + Sync,
    S: SubmissionOps + Send + Sync,
{
    let timestamp = Utc::now();

    let stored = files.save(&resume.filename, &resume.bytes).await?;
    tracing::debug!("submission from {}: resume stored at {}", &form.name, &stored.path);

    resume_mime(&stored.path)?;
    let analysis = analyzer.analyze_resume(&stored.path).await?;
    tracing::debug!("submission from {}: analysis received", &form.name);

    let data = CreateSubmissionData {
        name: form.name,
        roll_no: form.roll_no,
        class: form.class,
        section: form.section,
        college: form.college,
        timestamp,
        analysis,
        resume_path: stored.path,
        original_filename: stored.original_name,
    };
    let entry = submissions.insert(&data).await?;
    tracing::debug!("submission {} persisted", entry.id);

    Ok(entry)
}
