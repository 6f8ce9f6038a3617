use crate::handlers;
use crate::middleware::cors;
use crate::state::AppState;
use axum::{middleware, routing::get, Router};
use std::path::Path;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(handlers::blocked_phones::routes())
        .with_state(state)
}

/// Full HTTP surface: the API under `/api`, the frontend at `/` when
/// `static_dir` exists, and CORS on every response including static files.
pub fn create_app(state: AppState, static_dir: Option<&str>) -> Router {
    let app = Router::new().nest("/api", create_api_routes(state));

    let app = match static_dir {
        Some(dir) if Path::new(dir).is_dir() => {
            info!(static_dir = dir, "Serving frontend");
            app.fallback_service(ServeDir::new(dir))
        }
        Some(dir) => {
            warn!(static_dir = dir, "Static directory not found, frontend disabled");
            app
        }
        None => app,
    };

    app.layer(middleware::from_fn(cors))
        .layer(TraceLayer::new_for_http())
}
