use axum::extract::rejection::{FormRejection, JsonRejection, PathRejection, QueryRejection};
use axum::response::{IntoResponse, Response};
use http::StatusCode;

use crate::{Fault, GenericFault, NormalizedError};

/// Parks the fault in the response extensions
///
/// The placeholder 500 is replaced by the pipeline middleware, which takes
/// the fault out, classifies it and writes the envelope.
impl IntoResponse for Fault {
    fn into_response(self) -> Response {
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response.extensions_mut().insert(self);
        response
    }
}

/// Parks an already-normalized error; the pipeline emits it unclassified
impl IntoResponse for NormalizedError {
    fn into_response(self) -> Response {
        let mut response = self.status.into_response();
        response.extensions_mut().insert(self);
        response
    }
}

macro_rules! rejection_fault {
    ($($rejection:ty),+ $(,)?) => {
        $(
            impl From<$rejection> for Fault {
                fn from(rejection: $rejection) -> Self {
                    Self::Generic(GenericFault {
                        message: Some(rejection.body_text()),
                        status: Some(rejection.status().as_u16()),
                        trace: Some(format!("{rejection:?}")),
                    })
                }
            }
        )+
    };
}

rejection_fault!(JsonRejection, FormRejection, QueryRejection, PathRejection);
