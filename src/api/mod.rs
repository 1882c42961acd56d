mod handlers;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::service::ShipService;

pub fn create_router(service: ShipService) -> Router {
    let api = Router::new()
        .route("/ships", get(handlers::list_ships))
        .route("/ships", post(handlers::create_ship))
        .route("/ships/count", get(handlers::count_ships))
        .route("/ships/{id}", get(handlers::get_ship))
        .route("/ships/{id}", post(handlers::update_ship))
        .route("/ships/{id}", delete(handlers::delete_ship))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/rest", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(service)
}
