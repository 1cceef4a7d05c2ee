//! `reqwest`-backed [`Transport`].

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use tracing::debug;

use super::settings::ApiConfig;
use crate::error::{FetchError, Result};
use crate::port::outbound::Transport;

/// Production transport: one pooled `reqwest` client with explicit timeouts.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: HttpClient,
}

impl HttpTransport {
    /// Build a transport from the API settings.
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> std::result::Result<String, FetchError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        // Anything but 200 is a failure, other 2xx codes included.
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        debug!(url, bytes = body.len(), "Received response");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn transport(timeout_ms: u64) -> HttpTransport {
        HttpTransport::from_config(&ApiConfig {
            timeout_ms,
            ..ApiConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_ok_returns_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/bootstrap-static/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"events":[]}"#))
            .mount(&mock_server)
            .await;

        let url = format!("{}/api/bootstrap-static/", mock_server.uri());
        let body = transport(1_000).get(&url).await.unwrap();
        assert_eq!(body, r#"{"events":[]}"#);
    }

    #[tokio::test]
    async fn test_non_200_is_status_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let err = transport(1_000)
            .get(&format!("{}/api/fixtures/", mock_server.uri()))
            .await
            .unwrap_err();
        assert_eq!(err, FetchError::Status { status: 503 });
    }

    #[tokio::test]
    async fn test_slow_response_is_timeout() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("{}")
                    .set_delay(std::time::Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let err = transport(50)
            .get(&format!("{}/api/fixtures/", mock_server.uri()))
            .await
            .unwrap_err();
        assert_eq!(err, FetchError::Timeout);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Port 9 (discard) on localhost is not listening in test environments.
        let err = transport(1_000)
            .get("http://127.0.0.1:9/api/fixtures/")
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Transport(_) | FetchError::Timeout));
    }
}
