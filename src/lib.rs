pub mod config;
pub mod db;
pub mod email;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod submission;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use sqlx::PgPool;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::{Config, CorsOrigins};
use crate::db::PgSubmissionStore;
use crate::email::build_notifier;
use crate::state::{AppState, SharedState};

pub fn build_app(pool: PgPool, config: Config) -> Router {
    let notifier = match build_notifier(&config.email, &config.site_name) {
        Ok(Some(notifier)) => {
            tracing::info!("Email notifications enabled via {}", notifier.name());
            Some(notifier)
        }
        Ok(None) => {
            tracing::info!("Email notifications disabled: no delivery credential configured");
            None
        }
        Err(e) => {
            tracing::warn!("Email notifications not available: {e}");
            None
        }
    };

    let state: SharedState = Arc::new(AppState {
        config,
        store: Arc::new(PgSubmissionStore::new(pool)),
        notifier,
    });

    router(state)
}

/// Assemble routes and middleware around an already-built state.
pub fn router(state: SharedState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);
    let max_body_size = state.config.max_body_size;

    Router::new()
        .merge(routes::api_routes())
        .route("/health", axum::routing::get(health))
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state)
}

/// Wildcard origins cannot be combined with credentials, so only an explicit
/// origin list turns credentials on.
fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    match origins {
        CorsOrigins::Any => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsOrigins::List(list) => {
            let origins: Vec<HeaderValue> = list
                .iter()
                .filter_map(|origin| match origin.parse() {
                    Ok(value) => Some(value),
                    Err(e) => {
                        tracing::warn!("Ignoring invalid CORS origin '{origin}': {e}");
                        None
                    }
                })
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(AllowMethods::mirror_request())
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true)
        }
    }
}

async fn health() -> &'static str {
    "ok"
}
