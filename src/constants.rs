//! Application constants for the outage processor
//!
//! This module contains default values and fixed vocabularies used throughout
//! the outage processor application.

// =============================================================================
// Server Defaults
// =============================================================================

/// Default scheme selection for the monitor's REST endpoint
pub const DEFAULT_USE_HTTPS: bool = false;

/// Default monitor host
pub const DEFAULT_HOST: &str = "localhost";

/// Default monitor REST port
pub const DEFAULT_PORT: u16 = 8980;

/// Default REST base path on the monitor
pub const DEFAULT_BASE_PATH: &str = "/opennms/rest";

/// Default REST credentials
pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "admin";

/// REST resource that serves the outage feed
pub const OUTAGES_RESOURCE: &str = "outages";

// =============================================================================
// Feed Files
// =============================================================================

/// File extension used when discovering feed files on disk
pub const FEED_FILE_EXTENSION: &str = "xml";

// =============================================================================
// Severity Vocabulary
// =============================================================================

/// Event severity values carried by the `serviceLostEvent` element
///
/// The feed delivers severity as free text; these are the values the monitor
/// is known to emit. Records keep whatever string the feed sent, these
/// constants only drive presentation.
pub mod severity {
    pub const INDETERMINATE: &str = "INDETERMINATE";
    pub const CLEARED: &str = "CLEARED";
    pub const NORMAL: &str = "NORMAL";
    pub const WARNING: &str = "WARNING";
    pub const MINOR: &str = "MINOR";
    pub const MAJOR: &str = "MAJOR";
    pub const CRITICAL: &str = "CRITICAL";

    /// All known severities, least to most severe
    pub const ALL: &[&str] = &[
        INDETERMINATE,
        CLEARED,
        NORMAL,
        WARNING,
        MINOR,
        MAJOR,
        CRITICAL,
    ];
}
