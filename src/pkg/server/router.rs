use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::{routing::get, Router};

use super::handlers::probes::{healthz, livez};
use super::handlers::submissions;
use super::state::AppState;
use crate::conf::Settings;
use crate::prelude::Result;

pub fn build_routes(settings: &Settings) -> Result<Router> {
    let state = AppState::new(settings)?;
    let app = Router::new()
        .route("/", get(submissions::form))
        .route("/", post(submissions::submit))
        .route("/submissions", get(submissions::list))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .layer(DefaultBodyLimit::max(12 * 1024 * 1024))
        .with_state(state);

    Ok(app)
}
