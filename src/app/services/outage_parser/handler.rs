//! Streaming record builder for the outage feed
//!
//! The handler consumes SAX-style element events in document order and owns
//! all per-parse state: the record currently being built, the text
//! accumulator, the node duplicate filter, and running statistics. Field
//! failures (bad integer text, unparseable timestamps) leave the field unset,
//! report a diagnostic, and never abort the parse; only the event source
//! itself can fail fatally, and that happens upstream of this type.

use std::collections::HashMap;
use tracing::{debug, warn};

use super::dedup::NodeDedupFilter;
use super::stats::{ParseResult, ParseStats};
use super::tags::OutageTag;
use super::timestamp::parse_timestamp;
use crate::app::models::Outage;
use crate::config::ParseConfig;

/// Push-driven builder turning element events into [`Outage`] records
///
/// Callers deliver `start_element` / `characters` / `end_element` in document
/// order from a single parse, then call `finish` to take the accepted
/// records. One handler serves exactly one parse.
#[derive(Debug)]
pub struct OutageHandler {
    outages: Vec<Outage>,
    dedup: NodeDedupFilter,
    current_outage: Option<Outage>,
    current_text: Option<String>,
    stats: ParseStats,
}

impl OutageHandler {
    pub fn new(config: &ParseConfig) -> Self {
        Self {
            outages: Vec::new(),
            dedup: NodeDedupFilter::new(config.allow_duplicate_nodes),
            current_outage: None,
            current_text: None,
            stats: ParseStats::new(),
        }
    }

    /// Element-open event
    ///
    /// Opens a fresh record on `outage`, captures the severity attribute on
    /// `serviceLostEvent`, and resets the text accumulator for every element.
    pub fn start_element(&mut self, name: &str, attributes: &HashMap<String, String>) {
        match OutageTag::from_name(name) {
            OutageTag::Outage => {
                let raw_id = attributes.get("id").map(String::as_str).unwrap_or_default();
                let id = self.parse_int(raw_id, "outage id");
                self.current_outage = Some(Outage {
                    id,
                    ..Outage::default()
                });
            }
            OutageTag::ServiceLostEvent => {
                if let Some(outage) = self.current_outage.as_mut() {
                    outage.severity = attributes.get("severity").cloned();
                }
            }
            _ => {}
        }

        self.current_text = Some(String::new());
    }

    /// Text event
    ///
    /// Chunks accumulate until the enclosing element closes; an element's
    /// text is the concatenation of every chunk delivered in between. Text
    /// arriving outside any capturing element is discarded.
    pub fn characters(&mut self, chunk: &str) {
        if let Some(text) = self.current_text.as_mut() {
            text.push_str(chunk);
        }
    }

    /// Element-close event
    ///
    /// Assigns the accumulated text to the matching record field, or commits
    /// the record on `outage`. The text accumulator is cleared either way.
    pub fn end_element(&mut self, name: &str) {
        let current_text = self.current_text.take().unwrap_or_default();
        let tag = OutageTag::from_name(name);

        if tag == OutageTag::Outage {
            self.commit_current();
            return;
        }

        if self.current_outage.is_none() {
            return;
        }

        match tag {
            OutageTag::IpAddress => self.assign(|o, v| o.ip_address = Some(v), current_text),
            OutageTag::ServiceName => self.assign(|o, v| o.service_name = Some(v), current_text),
            OutageTag::Description => self.assign(|o, v| o.description = Some(v), current_text),
            OutageTag::Host => self.assign(|o, v| o.host = Some(v), current_text),
            OutageTag::LogMessage => self.assign(|o, v| o.log_message = Some(v), current_text),
            OutageTag::Uei => self.assign(|o, v| o.uei = Some(v), current_text),
            OutageTag::IfLostService => {
                let instant = self.parse_field_timestamp(&current_text);
                if let Some(outage) = self.current_outage.as_mut() {
                    outage.if_lost_service = instant;
                }
            }
            OutageTag::IfRegainedService => {
                let instant = self.parse_field_timestamp(&current_text);
                if let Some(outage) = self.current_outage.as_mut() {
                    outage.if_regained_service = instant;
                }
            }
            OutageTag::NodeId => {
                let node_id = self.parse_int(&current_text, "node id");
                if let Some(outage) = self.current_outage.as_mut() {
                    outage.node_id = node_id;
                }
            }
            OutageTag::Outage | OutageTag::ServiceLostEvent | OutageTag::Other => {}
        }
    }

    /// Consume the handler and hand back everything accepted so far
    ///
    /// A record whose `outage` element never closed is dropped, not
    /// committed.
    pub fn finish(self) -> ParseResult {
        if self.current_outage.is_some() {
            debug!("Dropping unterminated outage record at end of parse");
        }

        ParseResult {
            outages: self.outages,
            stats: self.stats,
        }
    }

    fn commit_current(&mut self) {
        let Some(outage) = self.current_outage.take() else {
            debug!("Ignoring outage close with no open record");
            return;
        };

        let node_id = outage.node_id;
        if self.dedup.admit(node_id) {
            self.stats.outages_parsed += 1;
            self.outages.push(outage);
        } else {
            self.stats.duplicates_suppressed += 1;
            debug!("Suppressed duplicate outage for node {:?}", node_id);
        }
    }

    fn assign(&mut self, set: impl FnOnce(&mut Outage, String), value: String) {
        if let Some(outage) = self.current_outage.as_mut() {
            set(outage, value);
        }
    }

    fn parse_int(&mut self, raw: &str, what: &str) -> Option<i32> {
        match raw.parse::<i32>() {
            Ok(value) => Some(value),
            Err(e) => {
                self.stats.field_errors += 1;
                warn!("Unable to parse {}: '{}' ({})", what, raw, e);
                None
            }
        }
    }

    fn parse_field_timestamp(&mut self, raw: &str) -> Option<chrono::DateTime<chrono::Utc>> {
        let instant = parse_timestamp(raw);
        if instant.is_none() {
            self.stats.field_errors += 1;
        }
        instant
    }
}
