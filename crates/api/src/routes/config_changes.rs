//! Config change endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::services::{ChangeRecorder, HistoryReporter};
use domain::models::{ConfigChange, RecordChangeRequest, RuleHistory};

/// Query parameters for the history report.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    /// Rule name filter, matched case-insensitively.
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    /// Keep entries changed strictly after this instant.
    pub from: Option<DateTime<Utc>>,
    /// Keep entries changed strictly before this instant.
    pub to: Option<DateTime<Utc>>,
}

/// Create config change routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_changes).post(create_change))
        .route("/:id", get(get_change_by_id).delete(delete_change))
}

fn recorder(state: &AppState) -> ChangeRecorder {
    ChangeRecorder::new(
        state.rule_types.clone(),
        state.changes.clone(),
        state.notifier.clone(),
    )
}

/// Record a configuration change.
///
/// POST /api/config-changes
async fn create_change(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RecordChangeRequest>,
) -> Result<Json<ConfigChange>, ApiError> {
    info!(
        rule_id = request.rule_type_id,
        "Received request to create config change"
    );
    let change = recorder(&state).record(request).await?;
    Ok(Json(change))
}

/// Get the change history report, optionally filtered by rule name and time
/// window.
///
/// GET /api/config-changes?type=&from=&to=
async fn get_changes(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<RuleHistory>>, ApiError> {
    info!("Received request to get all config changes");
    let reporter = HistoryReporter::new(state.rule_types.clone(), state.changes.clone());
    let report = reporter.report(query.type_name.as_deref(), query.from, query.to)?;
    Ok(Json(report))
}

/// Get a change by id.
///
/// GET /api/config-changes/{id}
async fn get_change_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ConfigChange>, ApiError> {
    info!(change_id = id, "Received request to get config change");
    Ok(Json(recorder(&state).get(id)?))
}

/// Delete a change, returning the removed record.
///
/// DELETE /api/config-changes/{id}
async fn delete_change(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ConfigChange>, ApiError> {
    info!(change_id = id, "Received request to delete config change");
    Ok(Json(recorder(&state).delete(id)?))
}
