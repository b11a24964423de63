use log::warn;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

pub use transport::{ApiRequest, HttpTransport, Method, Transport};

pub mod alerts;
pub mod inventory;
pub mod patches;
pub mod schedules;
pub mod transport;

use crate::config;
use crate::envelope::Envelope;
use crate::error::ClientError;

/// Fixed-count, linear-backoff retry. Not exponential, not jittered: the
/// delay before retry N is `base_delay * N`.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Additional attempts after the first, so 2 means 3 attempts total.
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Delay after failed attempt `attempt` (zero-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay * (attempt + 1)
    }
}

/// Typed client for the AutoOps glue API. Every operation returns a fully
/// populated [`Envelope`]; transient backend failures are retried and
/// terminal ones degrade to fixture data or a locally synthesized
/// acceptance, never to a caller-visible error.
pub struct ResilientClient {
    transport: Arc<dyn Transport>,
    retry: RetryPolicy,
}

impl ResilientClient {
    pub fn new(transport: Arc<dyn Transport>, retry: RetryPolicy) -> Self {
        Self { transport, retry }
    }

    pub fn from_env() -> Self {
        Self::new(
            Arc::new(HttpTransport::new(config::api_base_url())),
            RetryPolicy::default(),
        )
    }

    async fn request<T: DeserializeOwned>(&self, req: &ApiRequest) -> Result<T, ClientError> {
        let body = self.transport.send(req).await?;

        // schema-checked decode: a malformed body fails this attempt the
        // same way a transport error does
        serde_json::from_str::<T>(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn request_with_retry<T: DeserializeOwned>(
        &self,
        req: &ApiRequest,
    ) -> Result<T, ClientError> {
        let mut attempt: u32 = 0;

        loop {
            match self.request::<T>(req).await {
                Ok(val) => return Ok(val),
                Err(e) => {
                    if attempt >= self.retry.max_retries {
                        return Err(e);
                    }

                    let delay = self.retry.delay_for(attempt);
                    warn!(
                        "request to {} failed: {}, retrying in {:?}",
                        req.path, e, delay
                    );
                    sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    /// Read path: serves the static fixture when the backend stays down.
    pub(crate) async fn fetch_or_fixture<T, F>(&self, req: ApiRequest, fixture: F) -> Envelope<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        match self.request_with_retry(&req).await {
            Ok(val) => Envelope::ok(val),
            Err(e) => {
                warn!("{} unreachable, serving demo data: {}", req.path, e);
                Envelope::fallback(fixture())
            }
        }
    }

    /// Read path for id lookups, where the fixture set may not know the id.
    pub(crate) async fn fetch_or_else<T, F>(&self, req: ApiRequest, fallback: F) -> Envelope<T>
    where
        T: DeserializeOwned,
        F: FnOnce(ClientError) -> Envelope<T>,
    {
        match self.request_with_retry(&req).await {
            Ok(val) => Envelope::ok(val),
            Err(e) => {
                warn!("{} unreachable: {}", req.path, e);
                fallback(e)
            }
        }
    }

    /// Mutation path: synthesizes a local acceptance instead of failing the
    /// caller. The envelope's fallback flag is the only trace that the
    /// backend never saw the request.
    pub(crate) async fn mutate_or_accept<T, F>(&self, req: ApiRequest, accept: F) -> Envelope<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        match self.request_with_retry(&req).await {
            Ok(val) => Envelope::ok(val),
            Err(e) => {
                warn!("{} unreachable, accepting locally: {}", req.path, e);
                Envelope::fallback(accept())
            }
        }
    }
}
