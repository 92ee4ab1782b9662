//! Configuration management for portfolio-htmx
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `PORTFOLIO_` prefix, `__` for nesting)
//! 2. The TOML file passed on the command line, or `./portfolio.toml`
//! 3. Hardcoded defaults (fallback)
//!
//! Environment variable format: `PORTFOLIO_SECTION__FIELD_NAME`, for example
//! `PORTFOLIO_SERVER__PORT=8080`.
//!
//! The contact form rules are not configurable.
//!
//! # Example Configuration
//!
//! ```toml
//! # portfolio.toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [site]
//! title = "Jane Doe - Architect"
//! owner = "Jane Doe"
//!
//! [notifications]
//! toast_duration_ms = 4000
//! success_banner_ms = 5000
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::PortfolioError;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "portfolio.toml";

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerSettings {
    /// Interface to bind
    pub host: String,

    /// Port to bind
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerSettings {
    /// Socket address to bind
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Config`] if `host:port` is not a valid
    /// socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, PortfolioError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| PortfolioError::Config(format!("invalid server address: {e}")))
    }
}

/// Text shown on the portfolio page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteSettings {
    /// Page title
    pub title: String,

    /// Portfolio owner's name
    pub owner: String,

    /// One-line description under the name
    pub tagline: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            owner: "Your Name".to_string(),
            tagline: "Architect & Designer".to_string(),
        }
    }
}

/// Feedback shown after contact form submissions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NotificationSettings {
    /// How long a toast stays on screen
    pub toast_duration_ms: u64,

    /// How long the success banner stays above the form
    pub success_banner_ms: u64,

    /// Banner text after a message is accepted
    pub success_message: String,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            toast_duration_ms: 4000,
            success_banner_ms: 5000,
            success_message: "Message sent successfully! We will contact you soon.".to_string(),
        }
    }
}

/// Complete portfolio-htmx configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PortfolioConfig {
    /// Listener settings
    #[serde(default)]
    pub server: ServerSettings,

    /// Page text
    #[serde(default)]
    pub site: SiteSettings,

    /// Submission feedback
    #[serde(default)]
    pub notifications: NotificationSettings,
}

impl PortfolioConfig {
    /// Load configuration using `./portfolio.toml` if present
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Config`] if a source cannot be parsed.
    pub fn load() -> Result<Self, PortfolioError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration from a specific file
    ///
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use portfolio_htmx::config::PortfolioConfig;
    ///
    /// # fn example() -> Result<(), portfolio_htmx::error::PortfolioError> {
    /// let config = PortfolioConfig::load_from("./config/production.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Config`] if a source cannot be parsed.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, PortfolioError> {
        Self::figment(path.as_ref())
            .merge(Env::prefixed("PORTFOLIO_").split("__").lowercase(true))
            .extract()
            .map_err(|e| PortfolioError::Config(e.to_string()))
    }

    /// Defaults overlaid with a TOML file, without the environment
    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default())).merge(Toml::file(path))
    }

    /// Resolve the config file to use: an explicit path, else the default
    #[must_use]
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        explicit.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), Path::to_path_buf)
    }
}
