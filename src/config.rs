//! Configuration management and validation.
//!
//! Provides configuration structures for feed parsing behavior and monitor
//! connection settings. Every setting travels as an explicit value handed to
//! the code that needs it; there is no process-wide settings singleton.

use crate::constants::{
    DEFAULT_BASE_PATH, DEFAULT_HOST, DEFAULT_PASSWORD, DEFAULT_PORT, DEFAULT_USERNAME,
    DEFAULT_USE_HTTPS, OUTAGES_RESOURCE,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Per-parse behavior switches for the outage feed parser
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseConfig {
    /// Keep every outage even when several share a node id
    pub allow_duplicate_nodes: bool,

    /// On a tokenizer failure, hand back the records accumulated before the
    /// failure instead of discarding them
    pub salvage_partial: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            allow_duplicate_nodes: true,
            salvage_partial: false,
        }
    }
}

impl ParseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapse outages that repeat a node id, keeping the first occurrence
    pub fn with_node_deduplication(mut self) -> Self {
        self.allow_duplicate_nodes = false;
        self
    }

    /// Return partial results when the feed breaks off mid-stream
    pub fn with_partial_salvage(mut self) -> Self {
        self.salvage_partial = true;
        self
    }
}

/// Connection settings for the monitor's REST endpoint
///
/// Fetching happens outside this crate; this type exists so callers can carry
/// one explicit value describing where the feed comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Use https instead of http
    pub https: bool,

    /// Monitor host name or address
    pub host: String,

    /// Monitor REST port
    pub port: u16,

    /// REST base path, must start with '/'
    pub path: String,

    /// REST username
    pub username: String,

    /// REST password
    pub password: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            https: DEFAULT_USE_HTTPS,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            path: DEFAULT_BASE_PATH.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_https(mut self) -> Self {
        self.https = true;
        self
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Base URL of the monitor's REST interface
    pub fn base_url(&self) -> String {
        format!(
            "http{}://{}:{}{}",
            if self.https { "s" } else { "" },
            self.host,
            self.port,
            self.path
        )
    }

    /// Full URL of the outage feed resource
    pub fn outages_url(&self) -> String {
        format!("{}/{}", self.base_url(), OUTAGES_RESOURCE)
    }

    /// Validate the settings for consistency
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(Error::configuration("Server host cannot be empty"));
        }

        if !self.path.starts_with('/') {
            return Err(Error::configuration(format!(
                "Server path must start with '/': '{}'",
                self.path
            )));
        }

        Ok(())
    }
}
