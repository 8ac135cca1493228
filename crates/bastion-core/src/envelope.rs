use serde::Serialize;
use serde_json::Value;

use crate::{Environment, NormalizedError};

/// Uniform JSON body written for every failed request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    pub success: bool,
    pub message: String,
    pub error: Value,
    /// Present only in diagnostic mode, and only when the fault had a trace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl Envelope {
    /// Build the envelope for a normalized error
    ///
    /// The trace is dropped unless `environment` is diagnostic.
    pub fn new(normalized: NormalizedError, environment: Environment) -> Self {
        Self {
            success: false,
            message: normalized.message,
            error: normalized.detail,
            stack: normalized.trace.filter(|_| environment.is_diagnostic()),
        }
    }

    /// Encode as JSON bytes
    ///
    /// Never fails: a detail that cannot be encoded is replaced by its
    /// string form, and as a last resort a minimal envelope is written.
    pub fn to_bytes(&self) -> Vec<u8> {
        if let Ok(bytes) = serde_json::to_vec(self) {
            return bytes;
        }

        let degraded = Self {
            error: Value::String(self.error.to_string()),
            ..self.clone()
        };

        serde_json::to_vec(&degraded)
            .unwrap_or_else(|_| br#"{"success":false,"message":"Something went wrong!","error":null}"#.to_vec())
    }
}
