use url::Url;

use crate::error::HarnessError;

/// Endpoint the harness talks to when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000";

/// Environment variable that overrides [`DEFAULT_ENDPOINT`].
pub const ENDPOINT_ENV: &str = "HARNESS_ENDPOINT";

/// Harness configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Address of the messaging endpoint.
    pub endpoint: Url,
}

impl HarnessConfig {
    /// Reads configuration from the environment, falling back to the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Endpoint`] if the override is not a valid URL.
    pub fn from_env() -> Result<Self, HarnessError> {
        let raw = std::env::var(ENDPOINT_ENV).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_owned());
        Ok(Self {
            endpoint: parse_endpoint(&raw)?,
        })
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, HarnessError> {
    Url::parse(raw).map_err(|e| HarnessError::Endpoint {
        endpoint: raw.to_owned(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_parses() {
        let endpoint = parse_endpoint(DEFAULT_ENDPOINT).unwrap();
        assert_eq!(endpoint.host_str(), Some("localhost"));
        assert_eq!(endpoint.port(), Some(3000));
    }

    #[test]
    fn garbage_endpoint_is_rejected() {
        let err = parse_endpoint("not a url").unwrap_err();
        assert!(matches!(err, HarnessError::Endpoint { .. }));
    }
}
