// ABOUTME: HTML views served alongside the JSON API
// ABOUTME: Index page and the not-found page used as the router fallback

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};

const INDEX_PAGE: &str = include_str!("../templates/index.html");
const NOT_FOUND_PAGE: &str = include_str!("../templates/404.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// Fallback for every unmatched route
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE))
}
