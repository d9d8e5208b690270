//! Timestamp normalization for outage feed date fields
//!
//! Feed timestamps are nominally `YYYY-MM-DDThh:mm:ss±HHMM`, but servers in
//! the wild deliver a colon inside the UTC offset (`±HH:MM`, occasionally
//! with whitespace before the sign). The normalizer rewrites that form into
//! the canonical one before handing the string to the fixed-offset parser.

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::OnceLock;
use tracing::warn;

/// Canonical feed timestamp format
const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

fn offset_colon_re() -> &'static Regex {
    static OFFSET_COLON_RE: OnceLock<Regex> = OnceLock::new();
    OFFSET_COLON_RE.get_or_init(|| {
        Regex::new(r"^(\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}[+\-\s]*\d{2}):(\d{2})$")
            .expect("valid offset rewrite regex")
    })
}

/// Parse a feed timestamp, tolerating colon-separated UTC offsets
///
/// Returns `None` on any parse failure. The failure is reported exactly once
/// through the diagnostic sink and never propagated to the caller.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let rewritten = match offset_colon_re().captures(raw) {
        Some(caps) => format!("{}{}", &caps[1], &caps[2]),
        None => raw.to_string(),
    };

    match DateTime::parse_from_str(&rewritten, DATE_FORMAT) {
        Ok(instant) => Some(instant.with_timezone(&Utc)),
        Err(e) => {
            warn!("Unable to parse date '{}': {}", raw, e);
            None
        }
    }
}
