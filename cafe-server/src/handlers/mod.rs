//! Request handlers

mod cafes;

pub use cafes::*;

use axum::{response::Html, Json};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Landing page
pub async fn home() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
