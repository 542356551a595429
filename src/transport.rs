use std::collections::HashMap;

use tracing::debug;

use crate::config::FacebookConfig;
use crate::errors::ProviderError;

/// HTTP verbs this layer issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Seam over the platform Graph call
///
/// One call resolves to exactly one completion; there is no cancellation and
/// no retry at this layer.
#[async_trait::async_trait]
pub trait GraphTransport: Send + Sync {
    /// Performs one platform API call
    ///
    /// # Arguments
    /// * `path` - Endpoint path relative to the Graph base URL, query included
    /// * `method` - HTTP verb
    /// * `form` - Optional form-encoded payload (POST only)
    ///
    /// # Returns
    /// The raw response body text, or `ProviderError::Transport`
    async fn request(
        &self,
        path: &str,
        method: HttpMethod,
        form: Option<&HashMap<String, String>>,
    ) -> Result<String, ProviderError>;
}

/// Seam over the publish-permission check gating score submission
#[async_trait::async_trait]
pub trait PermissionGate: Send + Sync {
    /// Resolves with `Ok(())` when publishing is permitted, otherwise
    /// `ProviderError::PermissionDenied` carrying the denial message
    async fn ensure_publish(&self) -> Result<(), ProviderError>;
}

/// Gate for configurations whose platform session already holds publish rights
pub struct AlwaysGranted;

#[async_trait::async_trait]
impl PermissionGate for AlwaysGranted {
    async fn ensure_publish(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}

/// Graph API transport over reqwest
pub struct HttpGraphTransport {
    http_client: reqwest::Client,
    config: FacebookConfig,
}

impl HttpGraphTransport {
    pub fn new(config: FacebookConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait::async_trait]
impl GraphTransport for HttpGraphTransport {
    async fn request(
        &self,
        path: &str,
        method: HttpMethod,
        form: Option<&HashMap<String, String>>,
    ) -> Result<String, ProviderError> {
        let url = format!("{}{}", self.config.endpoint(), path);
        debug!("graph request: {:?} {}", method, url);

        let mut request = match method {
            HttpMethod::Get => self.http_client.get(&url),
            HttpMethod::Post => self.http_client.post(&url),
        };

        if let Some(token) = &self.config.access_token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        if let Some(form) = form {
            request = request.form(form);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ProviderError::Transport(format!("Graph request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProviderError::Transport(format!(
                "Graph API error: {} - {}",
                status, error_text
            )));
        }

        response
            .text()
            .await
            .map_err(|e| ProviderError::Transport(format!("Failed to read response body: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_always_granted() {
        assert!(AlwaysGranted.ensure_publish().await.is_ok());
    }

    #[test]
    fn test_transport_uses_configured_endpoint() {
        let transport =
            HttpGraphTransport::new(FacebookConfig::new().with_base_url("http://localhost:9000".to_string()));
        assert_eq!(transport.config.endpoint(), "http://localhost:9000");
    }
}
