//! # Centralized Error Handling
//!
//! This module provides the single error type for handler failures. The
//! handler performs no local recovery: every variant propagates to the
//! Lambda runtime, which owns the failure policy (retry, dead-lettering).

use thiserror::Error;

/// Errors that can abort a handler invocation.
///
/// Transport-level failures are wrapped from [`reqwest::Error`]; the other
/// variants cover a response that arrived but cannot satisfy the contract.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to upstream endpoint failed")]
    Request(#[from] reqwest::Error),

    #[error("response is missing a content-type header")]
    MissingContentType,

    #[error("content-type header is not a valid string")]
    HeaderEncoding(#[from] reqwest::header::ToStrError),
}

/// Convenience Result type alias that uses FetchError as the error type.
pub type FetchResult<T> = Result<T, FetchError>;
