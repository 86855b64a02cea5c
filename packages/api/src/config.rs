//! Client configuration.

/// Where the backend lives.
///
/// The default targets the local development API. A deployment overrides it
/// at build time through the `BARMODULE_API_URL` environment variable.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    /// Base URL including the `/api` prefix, without a trailing slash.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("BARMODULE_API_URL")
                .unwrap_or("http://localhost:5000/api")
                .to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_api() {
        let config = ApiConfig::default();
        assert!(config.base_url.ends_with("/api"));
    }
}
