//! # Fetch Lambda
//!
//! A minimal AWS Lambda function: log the triggering event, GET a fixed
//! upstream endpoint, log the response's status code and content-type.
//!
//! ## Modules
//!
//! - [`handler`] - the per-invocation fetch logic driven by the Lambda runtime
//! - [`error`] - centralized error type; failures propagate to the platform

pub mod error;
pub mod handler;

pub use error::{FetchError, FetchResult};
pub use handler::{DEFAULT_ENDPOINT, Fetcher};
