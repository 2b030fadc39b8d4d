use crate::handlers;
use crate::state::AppState;
use axum::{Router, routing::{get, post}};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/rows", post(handlers::append_row))
        .route("/rows/:id/remove", post(handlers::remove_row))
        .route("/save", post(handlers::save))
        .route("/api/rows", get(handlers::get_rows))
        .route("/api/notice", get(handlers::get_notice))
        .route("/api/chart", get(handlers::get_chart))
        .with_state(state)
}
