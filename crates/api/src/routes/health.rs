//! Health check endpoint handlers.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::app::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub notification_log: NotificationLogHealth,
}

/// Status of the notifier's backing log file.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct NotificationLogHealth {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
}

/// Health check endpoint.
///
/// GET /api/health
///
/// Reports process status and whether the notification log file exists and is
/// writable. The log file only appears after the first critical change, so a
/// missing file is reported but does not make the service unhealthy.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let log_path = &state.config.notifications.log_path;

    let notification_log = match tokio::fs::metadata(log_path).await {
        Ok(meta) if meta.is_file() && !meta.permissions().readonly() => NotificationLogHealth {
            available: true,
            size_bytes: Some(meta.len()),
        },
        _ => NotificationLogHealth {
            available: false,
            size_bytes: None,
        },
    };

    Json(HealthResponse {
        status: "up".to_string(),
        service: "Config Change Tracker".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        notification_log,
    })
}
