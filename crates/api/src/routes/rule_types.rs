//! Rule type endpoint handlers.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::services::CatalogService;
use domain::models::{CreateRuleTypeRequest, RuleType, UpdateRuleTypeRequest};

/// Create rule type routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_rule_types).post(create_rule_type))
        .route(
            "/:id",
            get(get_rule_type).put(update_rule_type).delete(delete_rule_type),
        )
}

fn catalog(state: &AppState) -> CatalogService {
    CatalogService::new(state.rule_types.clone())
}

/// Register a rule type.
///
/// POST /api/rule-types
async fn create_rule_type(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateRuleTypeRequest>,
) -> Result<Json<RuleType>, ApiError> {
    info!("Received request to create rule type");
    let rule = catalog(&state).register(request.name, &request.value_type)?;
    Ok(Json(rule))
}

/// List all rule types.
///
/// GET /api/rule-types
async fn list_rule_types(State(state): State<AppState>) -> Result<Json<Vec<RuleType>>, ApiError> {
    info!("Received request to get all rule types");
    Ok(Json(catalog(&state).list()?))
}

/// Get a rule type by id.
///
/// GET /api/rule-types/{id}
async fn get_rule_type(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RuleType>, ApiError> {
    info!(rule_id = id, "Received request to get rule type");
    Ok(Json(catalog(&state).get(id)?))
}

/// Update a rule type in place.
///
/// PUT /api/rule-types/{id}
async fn update_rule_type(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateRuleTypeRequest>,
) -> Result<Json<RuleType>, ApiError> {
    info!(rule_id = id, "Received request to update rule type");
    let rule = catalog(&state).update(id, request.name, &request.value_type)?;
    Ok(Json(rule))
}

/// Delete a rule type, returning the removed record.
///
/// DELETE /api/rule-types/{id}
async fn delete_rule_type(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RuleType>, ApiError> {
    info!(rule_id = id, "Received request to delete rule type");
    Ok(Json(catalog(&state).delete(id)?))
}
