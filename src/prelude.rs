use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::pkg::server::uispec::SubmitForm;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Every failure a submission can run into. The pipeline aborts on the first
/// error; nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("file store error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported resume format: {0:?}")]
    UnsupportedFormat(String),

    #[error("resume upload to AI service failed: {0}")]
    RemoteUpload(String),

    #[error("resume analysis failed: {0}")]
    RemoteAnalysis(String),

    #[error("database error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("invalid submission: {0}")]
    Validation(String),

    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Error::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Error::UnsupportedFormat(ext) => {
                tracing::warn!("rejected resume with extension {:?}", ext);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Only PDF or Word resumes are accepted.".to_string(),
                )
            }
            Error::RemoteUpload(e) | Error::RemoteAnalysis(e) => {
                tracing::error!("AI service error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "Resume analysis is temporarily unavailable, please try again.".to_string(),
                )
            }
            Error::Io(e) => {
                tracing::error!("file store error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "We could not store your resume, please try again.".to_string(),
                )
            }
            Error::Storage(e) => {
                tracing::error!("database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Submission failed, please try again.".to_string(),
                )
            }
            e => {
                tracing::error!("internal error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong, please try again.".to_string(),
                )
            }
        };
        let page = SubmitForm {
            error: Some(&message),
        };
        match page.render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(_) => (status, message).into_response(),
        }
    }
}
