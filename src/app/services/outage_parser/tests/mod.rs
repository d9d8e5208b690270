//! Tests for the outage feed parser components

pub mod dedup_tests;
pub mod handler_tests;

use std::collections::HashMap;

use super::handler::OutageHandler;
use crate::config::ParseConfig;

/// Build an attribute map from literal pairs
pub fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Handler with the default configuration (duplicates allowed)
pub fn default_handler() -> OutageHandler {
    OutageHandler::new(&ParseConfig::default())
}

/// Handler with node deduplication enabled
pub fn dedup_handler() -> OutageHandler {
    OutageHandler::new(&ParseConfig::new().with_node_deduplication())
}

/// Feed one element carrying text through a handler
pub fn push_text_element(handler: &mut OutageHandler, name: &str, text: &str) {
    handler.start_element(name, &attrs(&[]));
    handler.characters(text);
    handler.end_element(name);
}

/// Feed a minimal outage element through a handler
pub fn push_outage(handler: &mut OutageHandler, id: &str, node_id: Option<&str>) {
    handler.start_element("outage", &attrs(&[("id", id)]));
    if let Some(node_id) = node_id {
        push_text_element(handler, "nodeId", node_id);
    }
    handler.end_element("outage");
}

/// Two outages sharing node 7, the second with a distinct id and address
pub const SAMPLE_FEED: &str = r#"<outages>
  <outage id="1"><ipAddress>10.0.0.1</ipAddress><nodeId>7</nodeId>
    <ifLostService>2012-01-01T10:00:00-05:00</ifLostService></outage>
  <outage id="2"><ipAddress>10.0.0.2</ipAddress><nodeId>7</nodeId></outage>
</outages>"#;
