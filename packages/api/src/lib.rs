// ABOUTME: HTTP API layer for Tasklist providing REST endpoints and routing
// ABOUTME: Integration layer that wires the item store into axum handlers

use axum::{routing::get, Router};

pub mod db;
pub mod error;
pub mod health;
pub mod items_handlers;
pub mod views;

pub use db::DbState;
pub use error::{ApiResult, AppError};

/// Creates the items API router (`/tasks` and `/tasks/{item_id}`)
pub fn create_items_router() -> Router<DbState> {
    Router::new()
        .route(
            "/tasks",
            get(items_handlers::list_items).post(items_handlers::create_item),
        )
        .route(
            "/tasks/{item_id}",
            get(items_handlers::get_item)
                .put(items_handlers::update_item)
                .delete(items_handlers::delete_item),
        )
}

/// Creates the complete application router with views, health and items
pub fn create_router(state: DbState) -> Router {
    Router::new()
        .route("/", get(views::index))
        .route("/health", get(health::health_check))
        .merge(create_items_router())
        .fallback(views::not_found)
        .with_state(state)
}
