mod handlers;

use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::engine::CalculatorEngine;

/// JSON API routes, nested under `/api`.
pub fn create_router(engine: CalculatorEngine) -> Router {
    with_layers(api_routes(), engine)
}

/// The API plus the static frontend served from `public_dir`.
///
/// The fallback sits inside the layer stack, so static requests are traced
/// and get CORS headers like API calls.
pub fn create_app(engine: CalculatorEngine, public_dir: &Path) -> Router {
    with_layers(
        api_routes().fallback_service(ServeDir::new(public_dir)),
        engine,
    )
}

fn api_routes() -> Router<CalculatorEngine> {
    let api = Router::new()
        // Arithmetic and functions
        .route("/calculate", post(handlers::calculate))
        .route("/scientific", post(handlers::scientific))
        // Memory register
        .route("/memory", post(handlers::memory))
        // Unit conversion
        .route("/convert", post(handlers::convert))
        // History
        .route(
            "/history",
            get(handlers::history).delete(handlers::clear_history),
        )
        // Health
        .route("/health", get(handlers::health));

    Router::new().nest("/api", api)
}

fn with_layers(router: Router<CalculatorEngine>, engine: CalculatorEngine) -> Router {
    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(engine)
}
