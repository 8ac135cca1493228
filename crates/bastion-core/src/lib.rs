//! Fault model and error normalization for the Bastion API pipeline
//!
//! Handlers fail with a [`Fault`]. The pipeline turns every fault into a
//! [`NormalizedError`] via [`classify`], and every normalized error into a
//! wire [`Envelope`].

#![allow(clippy::must_use_candidate)]

mod classify;
pub mod codes;
mod envelope;
mod environment;
mod error;
mod fault;
#[cfg(feature = "http")]
mod response;

pub use classify::{ENGINE, NormalizedError, classify};
pub use envelope::Envelope;
pub use environment::Environment;
pub use error::HttpError;
pub use fault::{DataFault, Fault, GenericFault};
