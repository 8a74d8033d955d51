//! # Client configuration — `portal.toml`
//!
//! The one place the backend origin is decided. Every request the client makes
//! is built from [`PortalConfig::api_base_url`]; no view or API call site
//! carries its own URL literal.
//!
//! ```toml
//! [api]
//! base_url = "https://campus-portal-backend.onrender.com"
//! ```
//!
//! The default points at the production origin and can be overridden at
//! build time with the `PORTAL_API_BASE` environment variable (local backend
//! development runs against `http://localhost:5003`).

use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE: &str = "https://campus-portal-backend.onrender.com";

/// Top-level client configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// API section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    match option_env!("PORTAL_API_BASE") {
        Some(base) => base.to_string(),
        None => DEFAULT_API_BASE.to_string(),
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
        }
    }
}

impl PortalConfig {
    /// The resolved backend origin, without a trailing slash.
    pub fn api_base_url(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "portal.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default_config() {
        let config = PortalConfig::from_toml("").unwrap();
        assert_eq!(config, PortalConfig::default());
    }

    #[test]
    fn base_url_roundtrip() {
        let config = PortalConfig::from_toml(
            "[api]\nbase_url = \"http://localhost:5003\"\n",
        )
        .unwrap();
        assert_eq!(config.api_base_url(), "http://localhost:5003");

        let serialized = config.to_toml().unwrap();
        assert_eq!(PortalConfig::from_toml(&serialized).unwrap(), config);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = PortalConfig::from_toml(
            "[api]\nbase_url = \"http://localhost:5003/\"\n",
        )
        .unwrap();
        assert_eq!(config.api_base_url(), "http://localhost:5003");
    }
}
