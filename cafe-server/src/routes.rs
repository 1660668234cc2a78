//! API routes

use crate::config::ServerConfig;
use crate::handlers;
use crate::state::AppState;
use axum::{
    http::HeaderValue,
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the CORS layer from `cors_origins`
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins = match config.cors_origins.as_deref() {
        Some("*") => AllowOrigin::any(),
        Some(origins) => {
            let allowed: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            AllowOrigin::list(allowed)
        }
        // Default: allow localhost origins for development
        None => AllowOrigin::list([
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://localhost:5173"),
            HeaderValue::from_static("http://127.0.0.1:3000"),
            HeaderValue::from_static("http://127.0.0.1:5173"),
        ]),
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/", get(handlers::home))
        .route("/all", get(handlers::list_cafes))
        .route("/random", get(handlers::random_cafe))
        .route("/search", get(handlers::search_cafes))
        .route("/add", post(handlers::add_cafe))
        .route(
            "/update-price/:cafe_id",
            get(handlers::update_price)
                .post(handlers::update_price)
                .patch(handlers::update_price),
        )
        .route("/delete-cafe/:cafe_id", delete(handlers::delete_cafe))
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
