//! Extractors whose rejections flow through the failure channel
//!
//! axum's own extractors answer malformed input with plain-text bodies.
//! These wrappers turn the rejection into a [`Fault`] so malformed bodies,
//! forms, queries and path segments get the same envelope as any other
//! failure.

use axum::Json;
use axum::extract::{Form, FromRequest, FromRequestParts, Path, Query};
use axum::response::{IntoResponse, Response};
use bastion_core::Fault;
use serde::Serialize;

/// JSON request body; also usable as a JSON response
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(Json), rejection(Fault))]
pub struct Payload<T>(pub T);

impl<T: Serialize> IntoResponse for Payload<T> {
    fn into_response(self) -> Response {
        Json(self.0).into_response()
    }
}

/// URL-encoded form body
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(Form), rejection(Fault))]
pub struct FormFields<T>(pub T);

/// Query string parameters
#[derive(Debug, Clone, Copy, Default, FromRequestParts)]
#[from_request(via(Query), rejection(Fault))]
pub struct Params<T>(pub T);

/// Path segment parameters
#[derive(Debug, Clone, Copy, Default, FromRequestParts)]
#[from_request(via(Path), rejection(Fault))]
pub struct Segments<T>(pub T);

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::body::Body;
    use axum::extract::Request;
    use axum::routing::{get, post};
    use bastion_core::Environment;
    use http::{StatusCode, header};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::pipeline::fault_middleware;

    #[derive(Debug, Deserialize, Serialize)]
    struct Login {
        email: String,
    }

    #[derive(Debug, Deserialize)]
    struct Page {
        page: u32,
    }

    fn app() -> Router {
        Router::new()
            .route("/login", post(|Payload(login): Payload<Login>| async move { Payload(login) }))
            .route("/signup", post(|FormFields(login): FormFields<Login>| async move { Payload(login) }))
            .route("/items", get(|Params(page): Params<Page>| async move { page.page.to_string() }))
            .route("/items/{id}", get(|Segments(id): Segments<u32>| async move { id.to_string() }))
            .layer(axum::middleware::from_fn_with_state(Environment::Production, fault_middleware))
    }

    async fn send(request: Request) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn valid_payload_round_trips() {
        let request = http::Request::post("/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"email":"a@b.test"}"#))
            .unwrap();

        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["email"], "a@b.test");
    }

    #[tokio::test]
    async fn malformed_json_is_enveloped() {
        let request = http::Request::post("/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["message"].as_str().unwrap().contains("JSON"));
    }

    #[tokio::test]
    async fn missing_content_type_is_enveloped() {
        let request = http::Request::post("/login").body(Body::from(r#"{"email":"a@b.test"}"#)).unwrap();

        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn wrong_shape_is_unprocessable() {
        let request = http::Request::post("/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"mail":"a@b.test"}"#))
            .unwrap();

        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["message"].as_str().unwrap().contains("email"));
    }

    #[tokio::test]
    async fn valid_form_is_accepted() {
        let request = http::Request::post("/signup")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("email=a%40b.test"))
            .unwrap();

        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["email"], "a@b.test");
    }

    #[tokio::test]
    async fn missing_form_field_is_enveloped() {
        let request = http::Request::post("/signup")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("mail=x"))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert!(body["message"].as_str().unwrap().contains("email"));
    }

    #[tokio::test]
    async fn bad_query_and_path_are_enveloped() {
        let (status, body) = send(http::Request::get("/items?page=abc").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);

        let (status, body) = send(http::Request::get("/items/abc").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }
}
