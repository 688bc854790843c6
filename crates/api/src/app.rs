use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use domain::services::Notifier;
use persistence::{ConfigChangeRepository, RuleTypeRepository};

use crate::config::Config;
use crate::middleware::trace_id;
use crate::routes::{config_changes, health, rule_types};

#[derive(Clone)]
pub struct AppState {
    pub rule_types: Arc<RuleTypeRepository>,
    pub changes: Arc<ConfigChangeRepository>,
    pub notifier: Arc<dyn Notifier>,
    pub config: Arc<Config>,
}

pub fn create_app(config: Config, notifier: Arc<dyn Notifier>) -> Router {
    let request_timeout = Duration::from_secs(config.server.request_timeout_secs);

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let state = AppState {
        rule_types: Arc::new(RuleTypeRepository::new()),
        changes: Arc::new(ConfigChangeRepository::new()),
        notifier,
        config: Arc::new(config),
    };

    Router::new()
        .nest("/api/rule-types", rule_types::router())
        .nest("/api/config-changes", config_changes::router())
        .route("/api/health", get(health::health_check))
        .layer(middleware::from_fn(trace_id))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(cors)
        .with_state(state)
}
