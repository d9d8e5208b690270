//! Parsing statistics and result structures for outage feed processing

use crate::app::models::Outage;

/// Parsing result with accepted records and basic statistics
///
/// `outages` preserves feed document order. The list is only handed out by a
/// clean `finish`; callers never observe a half-built sequence.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Accepted outage records, in document order
    pub outages: Vec<Outage>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Number of outage records accepted
    pub outages_parsed: usize,

    /// Number of records dropped by node deduplication
    pub duplicates_suppressed: usize,

    /// Number of field values that failed to parse (field left unset)
    pub field_errors: usize,

    /// Parse error descriptions for debugging
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            outages_parsed: 0,
            duplicates_suppressed: 0,
            field_errors: 0,
            errors: Vec::new(),
        }
    }

    /// Check whether the parse completed without degradation of any kind
    pub fn is_clean(&self) -> bool {
        self.field_errors == 0 && self.errors.is_empty()
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
