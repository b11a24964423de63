//! Shared mock transports for the client tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::client::{ApiRequest, ResilientClient, RetryPolicy, Transport};
use crate::error::ClientError;

#[ctor::ctor]
fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Client with millisecond backoff so retry tests stay fast.
pub fn fast_client(transport: std::sync::Arc<dyn Transport>) -> ResilientClient {
    ResilientClient::new(
        transport,
        RetryPolicy {
            max_retries: 2,
            base_delay: std::time::Duration::from_millis(5),
        },
    )
}

/// Fails every attempt with a connection-refused style error.
#[derive(Default)]
pub struct DeadTransport {
    pub attempts: AtomicUsize,
}

#[async_trait]
impl Transport for DeadTransport {
    async fn send(&self, _req: &ApiRequest) -> Result<String, ClientError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(ClientError::Transport("connection refused".to_string()))
    }
}

/// Answers HTTP 500 on every attempt.
#[derive(Default)]
pub struct ServerErrorTransport {
    pub attempts: AtomicUsize,
}

#[async_trait]
impl Transport for ServerErrorTransport {
    async fn send(&self, _req: &ApiRequest) -> Result<String, ClientError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(ClientError::Status(500))
    }
}

/// Fails the first `failures` attempts, then serves the canned body.
pub struct FlakyTransport {
    failures: usize,
    body: String,
    pub attempts: AtomicUsize,
}

impl FlakyTransport {
    pub fn new(failures: usize, body: &str) -> Self {
        Self {
            failures,
            body: body.to_string(),
            attempts: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Transport for FlakyTransport {
    async fn send(&self, _req: &ApiRequest) -> Result<String, ClientError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if attempt < self.failures {
            return Err(ClientError::Transport("connection reset".to_string()));
        }
        Ok(self.body.clone())
    }
}

/// Always serves the canned body and records the requested paths.
pub struct StaticTransport {
    body: String,
    pub attempts: AtomicUsize,
    pub paths: Mutex<Vec<String>>,
}

impl StaticTransport {
    pub fn new(body: &str) -> Self {
        Self {
            body: body.to_string(),
            attempts: AtomicUsize::new(0),
            paths: Mutex::new(vec![]),
        }
    }

    pub fn last_path(&self) -> Option<String> {
        self.paths.lock().ok()?.last().cloned()
    }
}

#[async_trait]
impl Transport for StaticTransport {
    async fn send(&self, req: &ApiRequest) -> Result<String, ClientError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut paths) = self.paths.lock() {
            paths.push(req.path.clone());
        }
        Ok(self.body.clone())
    }
}
