//! Data models for outage feed processing
//!
//! This module contains the record type produced by the outage feed parser.
//! The feed regularly omits elements and real servers deliver malformed
//! values, so every field is optional: an unset field means "the feed did not
//! say" and is distinguishable from an empty string or zero.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One service outage parsed from the feed
///
/// A record is allocated when its `outage` element opens, filled in by child
/// elements, and becomes immutable once committed to the output list. Fields
/// that fail to parse are left unset rather than defaulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outage {
    /// Outage identifier from the `outage` element's `id` attribute
    pub id: Option<i32>,

    /// Address of the interface that lost service
    pub ip_address: Option<String>,

    /// Name of the monitored service
    pub service_name: Option<String>,

    /// When the service was lost
    pub if_lost_service: Option<DateTime<Utc>>,

    /// When the service came back; unset while the outage is ongoing
    pub if_regained_service: Option<DateTime<Utc>>,

    /// Event description; may carry feed markup, passed through verbatim
    pub description: Option<String>,

    /// Host that observed the outage
    pub host: Option<String>,

    /// Log message attached to the service-lost event
    pub log_message: Option<String>,

    /// Unique event identifier of the service-lost event
    pub uei: Option<String>,

    /// Severity of the service-lost event, from its `severity` attribute
    pub severity: Option<String>,

    /// Monitored node the outage belongs to; the deduplication key
    pub node_id: Option<i32>,
}

impl Outage {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the service has come back
    pub fn is_resolved(&self) -> bool {
        self.if_regained_service.is_some()
    }

    /// Outage length, when both endpoints are known
    pub fn duration(&self) -> Option<Duration> {
        match (self.if_lost_service, self.if_regained_service) {
            (Some(lost), Some(regained)) => Some(regained - lost),
            _ => None,
        }
    }
}

impl fmt::Display for Outage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Outage[id={},ipAddress={},host={},description={}]",
            display_opt(&self.id),
            display_opt(&self.ip_address),
            display_opt(&self.host),
            display_opt(&self.description),
        )
    }
}

fn display_opt<T: fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}
