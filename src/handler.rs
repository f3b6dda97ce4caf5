//! # Fetch Handler
//!
//! The Lambda entry point. Each invocation logs the triggering event, issues
//! one GET request to the upstream endpoint, and logs the resulting status
//! code and `content-type` header. There is no retry and no timeout beyond
//! what the platform enforces; any failure propagates to the runtime.

use lambda_runtime::LambdaEvent;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::error::{FetchError, FetchResult};

/// Endpoint queried on every invocation.
pub const DEFAULT_ENDPOINT: &str = "http://example.com";

/// Performs the per-invocation fetch against a fixed upstream endpoint.
///
/// The endpoint is hardcoded in production ([`DEFAULT_ENDPOINT`]); tests
/// construct a `Fetcher` pointed at a local stand-in server via [`Fetcher::new`].
/// The `reqwest::Client` is shared across invocations of the same runtime
/// instance.
#[derive(Clone)]
pub struct Fetcher {
    endpoint: String,
    http_client: reqwest::Client,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT.to_string())
    }
}

impl Fetcher {
    /// Creates a fetcher targeting the given endpoint URL.
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            http_client: reqwest::Client::new(),
        }
    }

    /// Handles one trigger event.
    ///
    /// The event payload is opaque: it is rendered into the first log line
    /// and never parsed or validated. The platform context is not consulted.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Request`] if the network call cannot complete,
    /// [`FetchError::MissingContentType`] if the response carries no
    /// `content-type` header, and [`FetchError::HeaderEncoding`] if that
    /// header is not a valid string. A non-2xx status is not an error; the
    /// status is only logged.
    #[instrument(skip(self, event), fields(request_id = %event.context.request_id))]
    pub async fn handle(&self, event: LambdaEvent<Value>) -> FetchResult<()> {
        info!("Event: {}", event.payload);

        debug!(endpoint = %self.endpoint, "Sending HTTP request to upstream endpoint");
        let response = self.http_client.get(&self.endpoint).send().await?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .ok_or(FetchError::MissingContentType)?
            .to_str()?;

        info!("Got {status} status code and {content_type} content-type");
        Ok(())
    }
}
