use http::StatusCode;

/// Trait for domain errors that carry their own HTTP semantics
///
/// Implemented by each module's error type. Any implementor converts into a
/// [`Fault`](crate::Fault) with `?`, keeping module errors decoupled from axum
/// and from the classifier.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String {
        self.to_string()
    }
}
