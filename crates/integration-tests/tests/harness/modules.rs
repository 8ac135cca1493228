//! Test modules whose routes fail in every way a handler can

use axum::Router;
use axum::routing::{get, post};
use bastion_core::{DataFault, Fault, HttpError};
use bastion_server::{FormFields, Module, Params, Payload, Segments};
use http::StatusCode;
use serde::Deserialize;
use serde_json::{Value, json};

/// Domain error of the kind a business module would define
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("account {0} is locked")]
    Locked(u32),
    #[error("ledger backend unavailable")]
    LedgerDown,
}

impl HttpError for AccountError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Locked(_) => StatusCode::FORBIDDEN,
            Self::LedgerDown => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Locked(_) => "Account is locked.".to_owned(),
            Self::LedgerDown => self.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Signup {
    email: String,
}

#[derive(Debug, Deserialize)]
struct GenericQuery {
    status: Option<u16>,
    message: Option<String>,
}

/// Module mounted at `/faults`
pub fn faults() -> Module {
    let router = Router::new()
        .route("/ok", get(|| async { Payload(json!({ "ok": true })) }))
        .route(
            "/known/{code}",
            get(|Segments(code): Segments<String>| async move {
                Err::<(), Fault>(
                    DataFault::known_request(code.clone(), format!("engine raised {code}"))
                        .with_trace(format!("trace for {code}"))
                        .into(),
                )
            }),
        )
        .route(
            "/conflict",
            get(|| async {
                Err::<(), Fault>(
                    DataFault::known_request("P2002", "Unique constraint failed on the fields: (`email`)")
                        .with_meta(json!({ "target": ["email"] }))
                        .into(),
                )
            }),
        )
        .route(
            "/validation",
            get(|| async { Err::<(), Fault>(DataFault::validation("Argument `email` is missing.").into()) }),
        )
        .route(
            "/unknown",
            get(|| async { Err::<(), Fault>(DataFault::unknown_request("engine returned garbage").into()) }),
        )
        .route(
            "/initialization",
            get(|| async { Err::<(), Fault>(DataFault::initialization("Can't reach database server").into()) }),
        )
        .route(
            "/generic",
            get(|Params(query): Params<GenericQuery>| async move {
                let fault = bastion_core::GenericFault {
                    message: query.message,
                    status: query.status,
                    trace: None,
                };
                Err::<(), Fault>(fault.into())
            }),
        )
        .route(
            "/locked/{id}",
            get(|Segments(id): Segments<u32>| async move { Err::<(), Fault>(AccountError::Locked(id).into()) }),
        )
        .route(
            "/ledger",
            get(|| async { Err::<(), Fault>(AccountError::LedgerDown.into()) }),
        )
        .route("/opaque", get(|| async { Err::<(), Fault>(Fault::opaque(&42)) }))
        .route(
            "/panic",
            get(|| async {
                if true {
                    panic!("handler blew up");
                }
                "unreachable"
            }),
        )
        .route(
            "/echo",
            post(|Payload(value): Payload<Value>| async move { Payload(value) }),
        )
        .route(
            "/signup",
            post(|FormFields(signup): FormFields<Signup>| async move { Payload(json!({ "email": signup.email })) }),
        );

    Module::new("/faults", router)
}

/// Module mounted at `/users`, with a single healthy route
pub fn users() -> Module {
    Module::new("/users", Router::new().route("/", get(|| async { Payload(json!([])) })))
}
