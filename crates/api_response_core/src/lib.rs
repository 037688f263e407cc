//! Shared API response primitives for serverless handlers.
//!
//! This crate owns the method-aware response taxonomy and the envelope
//! contract handed to the Lambda completion path. It intentionally excludes
//! AWS SDK and Lambda runtime concerns.

pub mod builder;
pub mod context;
pub mod envelope;
pub mod error;
pub mod kind;
pub mod method;

pub use builder::{FunctionalError, ResponseBuilder};
pub use context::RequestContext;
pub use envelope::{ApiResponse, ResponseEnvelope, REQUEST_ID_HEADER};
pub use error::{BuildError, ConfigurationError};
pub use kind::ResponseKind;
pub use method::SupportedMethod;
