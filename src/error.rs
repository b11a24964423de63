use thiserror::Error;

/// Failures that can occur on a single request attempt. All three variants
/// go through the same retry path; a malformed body is treated the same as
/// a refused connection.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected status code {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Decode(String),
}
