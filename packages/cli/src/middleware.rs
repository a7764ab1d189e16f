// ABOUTME: Panic recovery layer for the Tasklist HTTP stack
// ABOUTME: Logs handler panics and answers with the API's sanitized 500 error body

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::error;
use uuid::Uuid;

type PanicPayload = Box<dyn Any + Send + 'static>;

/// Layer that turns a panicking handler into a 500 instead of a dropped connection
pub fn create_panic_handler() -> CatchPanicLayer<fn(PanicPayload) -> Response> {
    CatchPanicLayer::custom(handle_panic as fn(PanicPayload) -> Response)
}

fn panic_message(payload: &PanicPayload) -> &str {
    payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload")
}

fn handle_panic(payload: PanicPayload) -> Response {
    let request_id = Uuid::new_v4().to_string();

    error!(
        request_id = %request_id,
        panic_message = %panic_message(&payload),
        "Handler panicked"
    );

    // Same shape as AppError bodies; the panic text stays in the log
    let body = json!({
        "success": false,
        "error": {
            "code": "INTERNAL_ERROR",
            "message": "An internal server error occurred"
        },
        "request_id": request_id
    });

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
