use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::DiagnosticReport;
use crate::services::diagnostic;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_diagnostic))
}

#[derive(Debug, Deserialize)]
struct DiagnosticQuery {
    company: Option<String>,
}

async fn get_diagnostic(
    Query(params): Query<DiagnosticQuery>,
    State(state): State<AppState>,
) -> Result<Json<DiagnosticReport>, AppError> {
    let company = params
        .company
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::Validation("missing required query parameter: company".into()))?
        .to_string();

    info!("GET /api/diagnostics?company={}", company);

    let dataset = state.dataset().await?;
    diagnostic::diagnose(&dataset, &company).map(Json)
}
