//! Transport port for the upstream REST API.
//!
//! This module defines the single network seam of the crate. The league
//! data client talks to the upstream only through [`Transport`], which lets
//! tests substitute a scripted, call-counting stub.

use async_trait::async_trait;

use crate::error::FetchError;

/// Issues HTTP GET requests and returns the raw response body.
///
/// Implementations must return `Err` for anything other than a 200
/// response, including timeouts and connection failures. Decoding the
/// body is the caller's job.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `url` and return its body.
    async fn get(&self, url: &str) -> Result<String, FetchError>;

    /// Name used in log lines.
    fn name(&self) -> &'static str {
        "http"
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        (**self).get(url).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
