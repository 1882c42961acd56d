use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::models::{CreateShipInput, Ship, ShipFilter, ShipOrder, ShipType, UpdateShipInput};
use crate::service::{ShipError, ShipService};

// ============================================================
// Error Handling
// ============================================================

/// Map a service error onto an HTTP status. Validation failures are safe to
/// echo to the client; storage faults are logged server-side and replaced
/// with a generic message so internals never leak.
fn error_response(e: ShipError) -> (StatusCode, String) {
    match e {
        ShipError::InvalidRequest | ShipError::InvalidPayload => {
            tracing::warn!("Validation error: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string())
        }
        ShipError::NotFound => (StatusCode::NOT_FOUND, e.to_string()),
        ShipError::Storage(err) => {
            tracing::error!("Internal error: {:#}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Ships
// ============================================================

/// Query parameters for listing and counting ships: the twelve optional
/// filter criteria plus sort key and pagination.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListShipsQuery {
    pub name: Option<String>,
    pub planet: Option<String>,
    pub ship_type: Option<ShipType>,
    /// Inclusive lower bound on the production date, epoch milliseconds.
    pub after: Option<i64>,
    /// Inclusive upper bound on the production date, epoch milliseconds.
    pub before: Option<i64>,
    pub is_used: Option<bool>,
    pub min_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub min_crew_size: Option<i32>,
    pub max_crew_size: Option<i32>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
    pub order: Option<ShipOrder>,
    pub page_number: Option<usize>,
    pub page_size: Option<usize>,
}

impl ListShipsQuery {
    fn into_parts(self) -> (ShipFilter, Option<ShipOrder>, Option<usize>, Option<usize>) {
        let filter = ShipFilter {
            name: self.name,
            planet: self.planet,
            ship_type: self.ship_type,
            after: self.after,
            before: self.before,
            is_used: self.is_used,
            min_speed: self.min_speed,
            max_speed: self.max_speed,
            min_crew_size: self.min_crew_size,
            max_crew_size: self.max_crew_size,
            min_rating: self.min_rating,
            max_rating: self.max_rating,
        };
        (filter, self.order, self.page_number, self.page_size)
    }
}

pub async fn list_ships(
    State(service): State<ShipService>,
    Query(query): Query<ListShipsQuery>,
) -> Result<Json<Vec<Ship>>, (StatusCode, String)> {
    let (filter, order, page_number, page_size) = query.into_parts();
    service
        .list_ships(&filter, order, page_number, page_size)
        .map(Json)
        .map_err(error_response)
}

pub async fn count_ships(
    State(service): State<ShipService>,
    Query(query): Query<ListShipsQuery>,
) -> Result<Json<usize>, (StatusCode, String)> {
    let (filter, _, _, _) = query.into_parts();
    service
        .count_ships(&filter)
        .map(Json)
        .map_err(error_response)
}

pub async fn create_ship(
    State(service): State<ShipService>,
    Json(input): Json<CreateShipInput>,
) -> Result<Json<Ship>, (StatusCode, String)> {
    service.create_ship(input).map(Json).map_err(error_response)
}

pub async fn get_ship(
    State(service): State<ShipService>,
    Path(id): Path<i64>,
) -> Result<Json<Ship>, (StatusCode, String)> {
    service.get_ship(id).map(Json).map_err(error_response)
}

pub async fn update_ship(
    State(service): State<ShipService>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateShipInput>,
) -> Result<Json<Ship>, (StatusCode, String)> {
    service
        .update_ship(id, input)
        .map(Json)
        .map_err(error_response)
}

pub async fn delete_ship(
    State(service): State<ShipService>,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, String)> {
    service
        .delete_ship(id)
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(error_response)
}
