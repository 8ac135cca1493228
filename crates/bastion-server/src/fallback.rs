use axum::extract::OriginalUri;
use axum::response::IntoResponse;
use bastion_core::NormalizedError;
use http::Method;

/// Terminal handler for requests that match no route
///
/// Produces a fixed not-found error; the classifier is never involved.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    NormalizedError::not_found(uri.path())
}

/// Handler for known paths requested with an unsupported method
pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    NormalizedError::method_not_allowed(method.as_str(), uri.path())
}
