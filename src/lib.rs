//! Outage Processor Library
//!
//! A Rust library for converting network-monitor outage feeds from XML into
//! deduplicated, application-ready record lists.
//!
//! This library provides tools for:
//! - Streaming outage feed parsing driven by SAX-style element events
//! - Normalizing the non-standard timezone offsets real servers deliver
//! - Suppressing repeated entries for the same monitored node
//! - Recovering from malformed field values without aborting the parse
//! - Discovering feed files on disk for batch checking

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod feed_scanner;
        pub mod outage_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::Outage;
pub use app::services::outage_parser::{OutageFeedParser, OutageHandler, ParseResult, ParseStats};
pub use config::{ParseConfig, ServerConfig};

/// Result type alias for the outage processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for outage feed processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The XML tokenizer failed; the feed is structurally broken
    #[error("XML parsing error: {message}")]
    XmlParsing {
        message: String,
        #[source]
        source: quick_xml::Error,
    },

    /// The feed was readable but semantically unusable
    #[error("Feed format error: {message}")]
    FeedFormat { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an XML parsing error with context
    pub fn xml_parsing(message: impl Into<String>, source: quick_xml::Error) -> Self {
        Self::XmlParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a feed format error
    pub fn feed_format(message: impl Into<String>) -> Self {
        Self::FeedFormat {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a directory traversal error with context
    pub fn directory_traversal(message: impl Into<String>, source: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(error: quick_xml::Error) -> Self {
        Self::XmlParsing {
            message: "XML parsing failed".to_string(),
            source: error,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}
