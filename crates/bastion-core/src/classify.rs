use http::StatusCode;
use serde_json::{Value, json};

use crate::codes;
use crate::fault::{DataFault, Fault, GenericFault};

/// Name of the persistence engine whose faults are classified
pub const ENGINE: &str = "Prisma";

/// Fault mapped onto the wire contract
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedError {
    /// HTTP status sent to the client
    pub status: StatusCode,
    /// Short, client-safe message
    pub message: String,
    /// Diagnostic payload
    pub detail: Value,
    /// Raw trace; only written to the wire in diagnostic mode
    pub trace: Option<String>,
}

impl NormalizedError {
    /// Fixed error for requests that match no route
    pub fn not_found(path: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: "API not found.".to_owned(),
            detail: json!({
                "path": path,
                "message": "The requested path does not exist.",
            }),
            trace: None,
        }
    }

    /// Fixed error for a known path requested with an unsupported method
    pub fn method_not_allowed(method: &str, path: &str) -> Self {
        Self {
            status: StatusCode::METHOD_NOT_ALLOWED,
            message: "Method not allowed.".to_owned(),
            detail: json!({
                "path": path,
                "method": method,
                "message": "The requested path does not support this method.",
            }),
            trace: None,
        }
    }
}

/// Map any handler fault onto a status, message and diagnostic detail
///
/// Total and side-effect free: every fault yields exactly one
/// [`NormalizedError`], and structurally equal faults yield equal results.
pub fn classify(fault: Fault) -> NormalizedError {
    match fault {
        Fault::Data(data) => classify_data(data),
        Fault::Generic(generic) => classify_generic(generic),
        Fault::Opaque(value) => NormalizedError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Something went wrong!".to_owned(),
            detail: value,
            trace: None,
        },
    }
}

fn classify_data(fault: DataFault) -> NormalizedError {
    match fault {
        DataFault::KnownRequest {
            code,
            message,
            meta,
            trace,
        } => {
            let (client_message, status) = match codes::lookup(&code) {
                Some((known, status)) => (known.to_owned(), status),
                None => (
                    format!("Unexpected {ENGINE} error (code: {code})."),
                    StatusCode::INTERNAL_SERVER_ERROR,
                ),
            };

            NormalizedError {
                status,
                message: client_message,
                detail: meta.filter(|meta| !meta.is_null()).unwrap_or(Value::String(message)),
                trace,
            }
        }
        DataFault::Validation { message, trace } => NormalizedError {
            status: StatusCode::BAD_REQUEST,
            message: format!("Validation error in {ENGINE} operation."),
            detail: Value::String(message),
            trace,
        },
        DataFault::UnknownRequest { message, trace } => NormalizedError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Unknown {ENGINE} request error occurred."),
            detail: Value::String(message),
            trace,
        },
        DataFault::Initialization { message, trace } => NormalizedError {
            status: StatusCode::BAD_GATEWAY,
            message: format!("Failed to initialize {ENGINE} client — check your DB connection."),
            detail: Value::String(message),
            trace,
        },
    }
}

fn classify_generic(fault: GenericFault) -> NormalizedError {
    let status = fault
        .status
        .and_then(|raw| StatusCode::from_u16(raw).ok())
        .filter(|status| status.is_client_error() || status.is_server_error())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let detail = match &fault.trace {
        Some(trace) => Value::String(trace.clone()),
        None => serde_json::to_value(&fault).unwrap_or(Value::Null),
    };

    let message = fault
        .message
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| "An unexpected error occurred.".to_owned());

    NormalizedError {
        status,
        message,
        detail,
        trace: fault.trace,
    }
}
