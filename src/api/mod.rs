pub mod holidays;
pub mod middleware;

pub use middleware::*;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/holidays", post(holidays::create_holiday))
        .route("/holidays", get(holidays::list_holidays))
        .route("/holidays/:id", get(holidays::get_holiday))
        .route("/holidays/:id", patch(holidays::patch_holiday))
        .route("/holidays/:id", delete(holidays::delete_holiday))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
