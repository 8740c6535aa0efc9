//! Order lookup handler.
//!
//! # Responsibilities
//! - Validate the inbound order id
//! - Start the request-scoped span and thread it through the store call
//! - Classify store outcomes into HTTP responses
//!
//! # Design Decisions
//! - An empty stored value is indistinguishable from an absent key; both
//!   respond 404
//! - Error responses carry a bare status code, no body
//! - At most one error is recorded per span; the first terminal
//!   classification wins

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use opentelemetry::trace::{Status, TraceContextExt, Tracer};
use opentelemetry::{Context, KeyValue};
use serde::Serialize;
use thiserror::Error;

use crate::http::server::AppState;
use crate::store::StoreError;

/// Name of the request-scoped span, matching the route.
pub const ROUTE_SPAN: &str = "/v1/orders/{id}";

/// Success body: the stored value under a single `order` field.
#[derive(Debug, Serialize)]
struct OrderResponse {
    order: String,
}

/// Request-scoped failures recorded on the span before aborting.
#[derive(Debug, Error)]
enum RequestError {
    #[error("id is empty")]
    EmptyId,

    #[error("order not found")]
    NotFound,
}

/// `GET /v1/orders/{id}`
pub async fn get_order(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    fetch_order(state, id).await
}

/// `GET /v1/orders/` with no id segment. Runs the same decision table so
/// the empty-id validation responds 400 instead of a router-level 404.
pub async fn get_order_missing_id(State(state): State<AppState>) -> Response {
    fetch_order(state, String::new()).await
}

async fn fetch_order(state: AppState, id: String) -> Response {
    let span = state.tracer.start(ROUTE_SPAN);
    let cx = Context::current_with_span(span);

    let response = if id.is_empty() {
        reject(&cx, StatusCode::BAD_REQUEST, &RequestError::EmptyId)
    } else {
        cx.span().set_attribute(KeyValue::new("order.id", id.clone()));

        match state.store.get(&cx, &id).await {
            Ok(value) if !value.is_empty() => {
                (StatusCode::OK, Json(OrderResponse { order: value })).into_response()
            }
            // Empty value and absent key are the same outcome for callers.
            Ok(_) | Err(StoreError::NotFound) => {
                reject(&cx, StatusCode::NOT_FOUND, &RequestError::NotFound)
            }
            Err(err) => reject(&cx, StatusCode::INTERNAL_SERVER_ERROR, &err),
        }
    };

    // Every path ends the span before the response leaves the handler.
    cx.span().end();
    response
}

/// Record the error on the span and abort the request with the given
/// status code.
fn reject(cx: &Context, status: StatusCode, err: &dyn std::error::Error) -> Response {
    let span = cx.span();
    span.record_error(err);
    span.set_status(Status::error(err.to_string()));
    status.into_response()
}
