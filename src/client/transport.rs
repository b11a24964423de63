use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use crate::error::ClientError;

// TODO(autoops): make this configurable once the gateway timeout is settled
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// One logical request against the glue API: method, path relative to the
/// base URL, optional JSON body.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
        }
    }

    pub fn post_empty(path: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: None,
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            body: None,
        }
    }
}

/// Seam between the retry loop and the actual wire. Tests substitute failing
/// or canned transports here.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs a single attempt and returns the raw response body.
    /// A non-2xx status is an error; no retrying happens at this level.
    async fn send(&self, req: &ApiRequest) -> Result<String, ClientError>;
}

pub struct HttpTransport {
    base_url: String,
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, req: &ApiRequest) -> Result<String, ClientError> {
        let url = format!("{}{}", self.base_url, req.path);

        let builder = match req.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
            Method::Delete => self.http.delete(&url),
        };

        let builder = match &req.body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(body.to_string()),
            None => builder,
        };

        let res = builder
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        res.text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))
    }
}
