/// Default Graph API host
const GRAPH_API_ENDPOINT: &str = "https://graph.facebook.com";

/// Facebook provider configuration
#[derive(Debug, Clone)]
pub struct FacebookConfig {
    pub base_url: Option<String>,
    pub access_token: Option<String>,
}

impl FacebookConfig {
    /// Create a configuration pointing at the production Graph API
    pub fn new() -> Self {
        Self {
            base_url: None,
            access_token: None,
        }
    }

    /// Set the bearer token attached to every Graph call
    pub fn with_access_token(mut self, token: String) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Override the Graph base URL (staging, local mock server)
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Get the effective Graph API endpoint
    pub fn endpoint(&self) -> &str {
        self.base_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .unwrap_or(GRAPH_API_ENDPOINT)
    }
}

impl Default for FacebookConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let cfg = FacebookConfig::new();
        assert_eq!(cfg.endpoint(), "https://graph.facebook.com");
        assert!(cfg.access_token.is_none());
    }

    #[test]
    fn test_base_url_override_strips_trailing_slash() {
        let cfg = FacebookConfig::new().with_base_url("http://localhost:9000/".to_string());
        assert_eq!(cfg.endpoint(), "http://localhost:9000");
    }

    #[test]
    fn test_with_access_token() {
        let cfg = FacebookConfig::new().with_access_token("token-123".to_string());
        assert_eq!(cfg.access_token.as_deref(), Some("token-123"));
    }
}
