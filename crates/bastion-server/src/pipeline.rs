//! Failure channel of the request pipeline
//!
//! Handlers fail by returning a [`Fault`], which parks itself in the
//! response extensions. [`fault_middleware`] wraps every route: it takes the
//! parked fault out, classifies it and writes the envelope. Taking it out
//! consumes it, so a fault is emitted once even under nested pipelines.

use axum::body::Body;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use bastion_core::{Envelope, Environment, Fault, NormalizedError, classify};
use http::{HeaderValue, header};

/// Normalize any failure raised below this layer into the wire envelope
pub async fn fault_middleware(State(environment): State<Environment>, request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let mut response = next.run(request).await;

    let normalized = if let Some(fault) = response.extensions_mut().remove::<Fault>() {
        classify(fault)
    } else if let Some(normalized) = response.extensions_mut().remove::<NormalizedError>() {
        normalized
    } else {
        return response;
    };

    let status = normalized.status.as_u16();
    if normalized.status.is_server_error() {
        tracing::error!(%method, %path, status, message = %normalized.message, "request failed");
    } else {
        tracing::warn!(%method, %path, status, message = %normalized.message, "request rejected");
    }

    emit(normalized, environment)
}

/// Write a normalized error as the JSON envelope
///
/// The transport status is the normalized status. The trace is included
/// only when `environment` is diagnostic.
pub fn emit(normalized: NormalizedError, environment: Environment) -> Response {
    let status = normalized.status;
    let body = Envelope::new(normalized, environment).to_bytes();

    let mut response = (status, Body::from(body)).into_response();
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

/// Turn a caught handler panic into a parked fault
#[allow(clippy::needless_pass_by_value)]
pub fn panic_fault(payload: Box<dyn std::any::Any + Send + 'static>) -> Response {
    tracing::error!("handler panicked");
    Fault::from_panic(payload.as_ref()).into_response()
}
