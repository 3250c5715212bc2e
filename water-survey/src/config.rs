use std::time::Duration;

/// Marker left in endpoint templates that were never filled in.
pub const ENDPOINT_PLACEHOLDER: &str = "PASTE_YOUR_SCRIPT_ID";

/// Timeout applied by `HttpTransport` unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and how submissions are delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorConfig {
    endpoint: Option<String>,
    timeout: Duration,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self::unconfigured()
    }
}

impl CollectorConfig {
    /// Create a configuration posting to `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a configuration without an endpoint. Every submission fails
    /// with a configuration error.
    pub fn unconfigured() -> Self {
        Self {
            endpoint: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the transport timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The endpoint, if one is set and it is not blank or a placeholder.
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty() && !url.contains(ENDPOINT_PLACEHOLDER))
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_endpoint() {
        let config = CollectorConfig::new("https://collector.example/exec");
        assert!(config.is_configured());
        assert_eq!(config.endpoint(), Some("https://collector.example/exec"));
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn missing_blank_and_placeholder_are_unconfigured() {
        assert!(!CollectorConfig::unconfigured().is_configured());
        assert!(!CollectorConfig::new("   ").is_configured());
        assert!(
            !CollectorConfig::new("https://script.google.com/macros/s/PASTE_YOUR_SCRIPT_ID/exec")
                .is_configured()
        );
    }

    #[test]
    fn with_timeout() {
        let config = CollectorConfig::new("http://localhost").with_timeout(Duration::from_secs(2));
        assert_eq!(config.timeout(), Duration::from_secs(2));
    }
}
