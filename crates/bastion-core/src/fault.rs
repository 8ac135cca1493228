use std::any::Any;
use std::error::Error as StdError;
use std::fmt;

use http::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::HttpError;

/// Failure raised by a request handler
///
/// The closed set of shapes a handler failure can take. The pipeline
/// captures the fault at its boundary and hands it to
/// [`classify`](crate::classify), which dispatches on the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Fault {
    /// Structured fault raised by the persistence engine
    Data(DataFault),
    /// Error-like runtime fault with best-effort fields
    Generic(GenericFault),
    /// Arbitrary non-error value, captured as JSON
    Opaque(Value),
}

/// Structured persistence-engine fault, one variant per family
#[derive(Debug, Clone, PartialEq)]
pub enum DataFault {
    /// Request failed with a known engine error code (e.g. `P2002`)
    KnownRequest {
        code: String,
        message: String,
        meta: Option<Value>,
        trace: Option<String>,
    },
    /// Engine rejected the query before running it
    Validation { message: String, trace: Option<String> },
    /// Engine failed without an error code
    UnknownRequest { message: String, trace: Option<String> },
    /// Engine client could not initialize or connect
    Initialization { message: String, trace: Option<String> },
}

/// Runtime fault with optional message, status hint and trace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenericFault {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Raw status hint; only honored when it is an HTTP error status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing)]
    pub trace: Option<String>,
}

impl DataFault {
    /// Known-request fault with the given engine code
    pub fn known_request(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::KnownRequest {
            code: code.into(),
            message: message.into(),
            meta: None,
            trace: None,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            trace: None,
        }
    }

    pub fn unknown_request(message: impl Into<String>) -> Self {
        Self::UnknownRequest {
            message: message.into(),
            trace: None,
        }
    }

    pub fn initialization(message: impl Into<String>) -> Self {
        Self::Initialization {
            message: message.into(),
            trace: None,
        }
    }

    /// Attach engine metadata; only known-request faults carry it
    #[must_use]
    pub fn with_meta(mut self, value: Value) -> Self {
        if let Self::KnownRequest { meta, .. } = &mut self {
            *meta = Some(value);
        }
        self
    }

    #[must_use]
    pub fn with_trace(mut self, value: impl Into<String>) -> Self {
        match &mut self {
            Self::KnownRequest { trace, .. }
            | Self::Validation { trace, .. }
            | Self::UnknownRequest { trace, .. }
            | Self::Initialization { trace, .. } => *trace = Some(value.into()),
        }
        self
    }

    /// Engine error code, present only for known-request faults
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::KnownRequest { code, .. } => Some(code),
            _ => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::KnownRequest { message, .. }
            | Self::Validation { message, .. }
            | Self::UnknownRequest { message, .. }
            | Self::Initialization { message, .. } => message,
        }
    }
}

impl Fault {
    /// Generic fault with an explicit HTTP status
    pub fn status(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Generic(GenericFault {
            message: Some(message.into()),
            status: Some(status.as_u16()),
            trace: None,
        })
    }

    /// Generic fault carrying only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self::Generic(GenericFault {
            message: Some(message.into()),
            ..GenericFault::default()
        })
    }

    /// Capture an arbitrary value
    ///
    /// Values that cannot be represented as JSON degrade to their `Debug`
    /// string form.
    pub fn opaque<T>(value: &T) -> Self
    where
        T: Serialize + fmt::Debug + ?Sized,
    {
        let value = serde_json::to_value(value).unwrap_or_else(|_| Value::String(format!("{value:?}")));
        Self::Opaque(value)
    }

    /// Capture a panic payload from a handler
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned());

        Self::Generic(GenericFault {
            trace: message.as_ref().map(|m| format!("panicked at handler: {m}")),
            message,
            status: Some(StatusCode::INTERNAL_SERVER_ERROR.as_u16()),
        })
    }

    /// Raw trace carried by the fault, if any
    pub fn trace(&self) -> Option<&str> {
        match self {
            Self::Data(
                DataFault::KnownRequest { trace, .. }
                | DataFault::Validation { trace, .. }
                | DataFault::UnknownRequest { trace, .. }
                | DataFault::Initialization { trace, .. },
            )
            | Self::Generic(GenericFault { trace, .. }) => trace.as_deref(),
            Self::Opaque(_) => None,
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data(data) => match data.code() {
                Some(code) => write!(f, "data fault {code}: {}", data.message()),
                None => write!(f, "data fault: {}", data.message()),
            },
            Self::Generic(generic) => f.write_str(generic.message.as_deref().unwrap_or("generic fault")),
            Self::Opaque(value) => write!(f, "opaque fault: {value}"),
        }
    }
}

impl From<DataFault> for Fault {
    fn from(fault: DataFault) -> Self {
        Self::Data(fault)
    }
}

impl From<GenericFault> for Fault {
    fn from(fault: GenericFault) -> Self {
        Self::Generic(fault)
    }
}

impl From<anyhow::Error> for Fault {
    fn from(error: anyhow::Error) -> Self {
        Self::Generic(GenericFault {
            message: Some(error.to_string()),
            status: None,
            trace: Some(format!("{error:?}")),
        })
    }
}

impl<E: HttpError> From<E> for Fault {
    fn from(error: E) -> Self {
        Self::Generic(GenericFault {
            message: Some(error.client_message()),
            status: Some(error.status_code().as_u16()),
            trace: Some(error_chain(&error)),
        })
    }
}

/// Render an error and its sources, one per line
fn error_chain(error: &dyn StdError) -> String {
    let mut chain = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        chain.push_str("\n  caused by: ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }
    chain
}
