//! Cafe collection handlers

use crate::error::{ApiError, NO_CAFES, NO_COFFEE_AT_LOCATION};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Path, Query, State,
    },
    Form, Json,
};
use cafe_core::{Cafe, CafeForm, NewCafe};
use serde::{Deserialize, Serialize};

/// `{"cafes": [...]}`
#[derive(Debug, Serialize)]
pub struct CafeList {
    pub cafes: Vec<Cafe>,
}

/// `{"success": "..."}`
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: String,
}

impl SuccessResponse {
    fn new(message: &str) -> Self {
        Self {
            success: message.to_string(),
        }
    }
}

/// `{"response": {"success": "..."}}`, returned by the add endpoint
#[derive(Debug, Serialize)]
pub struct AddResponse {
    pub response: SuccessResponse,
}

/// List all cafes, sorted by name
pub async fn list_cafes(State(state): State<AppState>) -> Result<Json<CafeList>, ApiError> {
    let cafes = state.store.list_all().await?;
    Ok(Json(CafeList { cafes }))
}

/// Return one cafe picked at random
pub async fn random_cafe(State(state): State<AppState>) -> Result<Json<Cafe>, ApiError> {
    state
        .store
        .random()
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(NO_CAFES))
}

/// Query parameters for location search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub loc: Option<String>,
}

/// Find cafes at an exact location
pub async fn search_cafes(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<CafeList>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let loc = query
        .loc
        .filter(|l| !l.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing required query parameter: loc".into()))?;

    let cafes = state.store.find_by_location(&loc).await?;
    if cafes.is_empty() {
        tracing::debug!("No cafes at location {:?}", loc);
        return Err(ApiError::NotFound(NO_COFFEE_AT_LOCATION));
    }

    Ok(Json(CafeList { cafes }))
}

/// Add a new cafe from a form body
pub async fn add_cafe(
    State(state): State<AppState>,
    form: Result<Form<CafeForm>, FormRejection>,
) -> Result<Json<AddResponse>, ApiError> {
    let Form(form) = form.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let new_cafe = NewCafe::try_from(form)?;

    let cafe = state.store.insert(new_cafe).await?;
    tracing::info!("Added cafe {} ({})", cafe.id, cafe.name);

    Ok(Json(AddResponse {
        response: SuccessResponse::new("Successfully added the new cafe."),
    }))
}

/// Form body for price updates
#[derive(Debug, Deserialize)]
pub struct PriceForm {
    pub new_price: Option<String>,
}

/// Update a cafe's coffee price
///
/// Served for GET, POST and PATCH; on GET the form is read from the query string.
pub async fn update_price(
    State(state): State<AppState>,
    Path(cafe_id): Path<String>,
    form: Result<Form<PriceForm>, FormRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let new_price = form
        .ok()
        .and_then(|Form(f)| f.new_price)
        .ok_or_else(|| ApiError::BadRequest("Missing required field: new_price".into()))?;

    // Ids are not validated by the route; anything non-numeric cannot match a row
    let id: i64 = cafe_id.parse().map_err(|_| ApiError::UnknownId)?;

    if !state.store.update_price(id, Some(new_price.as_str())).await? {
        tracing::debug!("Price update for unknown cafe {}", id);
        return Err(ApiError::UnknownId);
    }

    tracing::info!("Updated price of cafe {} to {:?}", id, new_price);
    Ok(Json(SuccessResponse::new("Successfully updated the price.")))
}

/// Query parameters for deletion
#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    #[serde(rename = "api-key")]
    pub api_key: Option<String>,
}

/// Delete a cafe; requires the configured API key
pub async fn delete_cafe(
    State(state): State<AppState>,
    Path(cafe_id): Path<String>,
    query: Result<Query<DeleteQuery>, QueryRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    // Only integer ids are routable
    let id: i64 = cafe_id.parse().map_err(|_| ApiError::UnknownId)?;
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    if !state.api_key_matches(query.api_key.as_deref()) {
        tracing::warn!("Rejected delete of cafe {}: bad API key", id);
        return Err(ApiError::Forbidden);
    }

    if !state.store.delete(id).await? {
        return Err(ApiError::UnknownId);
    }

    tracing::info!("Deleted cafe {}", id);
    Ok(Json(SuccessResponse::new(
        "Successfully deleted the cafe from the database.",
    )))
}
