//! Tests for the streaming record builder

use super::{attrs, dedup_handler, default_handler, push_outage, push_text_element};
use chrono::{TimeZone, Utc};

#[test]
fn test_full_outage_record_assembled() {
    let mut handler = default_handler();

    handler.start_element("outage", &attrs(&[("id", "42")]));
    push_text_element(&mut handler, "ipAddress", "192.168.1.10");
    push_text_element(&mut handler, "name", "ICMP");
    push_text_element(&mut handler, "host", "gateway");
    push_text_element(&mut handler, "logMessage", "node down");
    push_text_element(&mut handler, "uei", "uei.opennms.org/nodes/nodeDown");
    push_text_element(&mut handler, "description", "gateway stopped responding");
    push_text_element(&mut handler, "nodeId", "7");
    push_text_element(&mut handler, "ifLostService", "2012-01-01T10:00:00-0500");
    handler.start_element("serviceLostEvent", &attrs(&[("severity", "MAJOR")]));
    handler.end_element("serviceLostEvent");
    handler.end_element("outage");

    let result = handler.finish();
    assert_eq!(result.outages.len(), 1);

    let outage = &result.outages[0];
    assert_eq!(outage.id, Some(42));
    assert_eq!(outage.ip_address.as_deref(), Some("192.168.1.10"));
    assert_eq!(outage.service_name.as_deref(), Some("ICMP"));
    assert_eq!(outage.host.as_deref(), Some("gateway"));
    assert_eq!(outage.log_message.as_deref(), Some("node down"));
    assert_eq!(
        outage.uei.as_deref(),
        Some("uei.opennms.org/nodes/nodeDown")
    );
    assert_eq!(
        outage.description.as_deref(),
        Some("gateway stopped responding")
    );
    assert_eq!(outage.node_id, Some(7));
    assert_eq!(outage.severity.as_deref(), Some("MAJOR"));
    assert_eq!(
        outage.if_lost_service,
        Some(Utc.with_ymd_and_hms(2012, 1, 1, 15, 0, 0).unwrap())
    );
    assert_eq!(outage.if_regained_service, None);
    assert!(result.stats.is_clean());
}

#[test]
fn test_text_chunks_concatenate() {
    let mut handler = default_handler();

    handler.start_element("outage", &attrs(&[("id", "1")]));
    handler.start_element("host", &attrs(&[]));
    handler.characters("data");
    handler.characters("center-");
    handler.characters("01");
    handler.end_element("host");
    handler.end_element("outage");

    let result = handler.finish();
    assert_eq!(result.outages[0].host.as_deref(), Some("datacenter-01"));
}

#[test]
fn test_malformed_outage_id_leaves_other_fields_intact() {
    let mut handler = default_handler();

    handler.start_element("outage", &attrs(&[("id", "abc")]));
    push_text_element(&mut handler, "ipAddress", "10.0.0.1");
    push_text_element(&mut handler, "nodeId", "5");
    handler.end_element("outage");

    let result = handler.finish();
    assert_eq!(result.outages.len(), 1);
    assert_eq!(result.outages[0].id, None);
    assert_eq!(result.outages[0].ip_address.as_deref(), Some("10.0.0.1"));
    assert_eq!(result.outages[0].node_id, Some(5));
    assert_eq!(result.stats.field_errors, 1);
}

#[test]
fn test_missing_outage_id_attribute_counts_as_field_error() {
    let mut handler = default_handler();
    handler.start_element("outage", &attrs(&[]));
    handler.end_element("outage");

    let result = handler.finish();
    assert_eq!(result.outages.len(), 1);
    assert_eq!(result.outages[0].id, None);
    assert_eq!(result.stats.field_errors, 1);
}

#[test]
fn test_malformed_node_id_leaves_record_undeduplicated() {
    let mut handler = dedup_handler();

    push_outage(&mut handler, "1", Some("not-a-number"));
    push_outage(&mut handler, "2", Some("not-a-number"));

    let result = handler.finish();
    // both node ids failed to parse, so neither record carries a dedup key
    assert_eq!(result.outages.len(), 2);
    assert_eq!(result.outages[0].node_id, None);
    assert_eq!(result.stats.duplicates_suppressed, 0);
}

#[test]
fn test_bad_timestamp_does_not_abort_record() {
    let mut handler = default_handler();

    handler.start_element("outage", &attrs(&[("id", "1")]));
    push_text_element(&mut handler, "ifLostService", "not-a-date");
    push_text_element(&mut handler, "ipAddress", "10.0.0.1");
    handler.end_element("outage");

    let result = handler.finish();
    assert_eq!(result.outages.len(), 1);
    assert_eq!(result.outages[0].if_lost_service, None);
    assert_eq!(result.outages[0].ip_address.as_deref(), Some("10.0.0.1"));
    assert_eq!(result.stats.field_errors, 1);
}

#[test]
fn test_duplicate_nodes_suppressed_when_dedup_enabled() {
    let mut handler = dedup_handler();

    push_outage(&mut handler, "1", Some("5"));
    push_outage(&mut handler, "2", Some("5"));
    push_outage(&mut handler, "3", Some("6"));

    let result = handler.finish();
    assert_eq!(result.outages.len(), 2);
    assert_eq!(result.outages[0].id, Some(1));
    assert_eq!(result.outages[1].id, Some(3));
    assert_eq!(result.stats.outages_parsed, 2);
    assert_eq!(result.stats.duplicates_suppressed, 1);
}

#[test]
fn test_duplicate_nodes_kept_by_default() {
    let mut handler = default_handler();

    push_outage(&mut handler, "1", Some("5"));
    push_outage(&mut handler, "2", Some("5"));

    let result = handler.finish();
    assert_eq!(result.outages.len(), 2);
    assert_eq!(result.stats.duplicates_suppressed, 0);
}

#[test]
fn test_records_without_node_id_never_suppress_each_other() {
    let mut handler = dedup_handler();

    push_outage(&mut handler, "1", None);
    push_outage(&mut handler, "2", None);
    push_outage(&mut handler, "3", None);

    let result = handler.finish();
    assert_eq!(result.outages.len(), 3);
    assert_eq!(result.stats.duplicates_suppressed, 0);
}

#[test]
fn test_document_order_preserved() {
    let mut handler = default_handler();
    for id in 1..=5 {
        push_outage(&mut handler, &id.to_string(), Some(&(id * 10).to_string()));
    }

    let result = handler.finish();
    let ids: Vec<Option<i32>> = result.outages.iter().map(|o| o.id).collect();
    assert_eq!(
        ids,
        vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
    );
}

#[test]
fn test_unterminated_outage_is_dropped() {
    let mut handler = default_handler();

    push_outage(&mut handler, "1", Some("5"));
    handler.start_element("outage", &attrs(&[("id", "2")]));
    push_text_element(&mut handler, "ipAddress", "10.0.0.2");
    // no matching end for the second outage

    let result = handler.finish();
    assert_eq!(result.outages.len(), 1);
    assert_eq!(result.outages[0].id, Some(1));
}

#[test]
fn test_unknown_tags_ignored() {
    let mut handler = default_handler();

    handler.start_element("outage", &attrs(&[("id", "1")]));
    push_text_element(&mut handler, "monitoredService", "ignored");
    push_text_element(&mut handler, "ipAddress", "10.0.0.1");
    handler.end_element("outage");

    let result = handler.finish();
    assert_eq!(result.outages.len(), 1);
    assert_eq!(result.outages[0].ip_address.as_deref(), Some("10.0.0.1"));
    assert!(result.stats.is_clean());
}

#[test]
fn test_namespace_prefixes_stripped() {
    let mut handler = default_handler();

    handler.start_element("ns2:outage", &attrs(&[("id", "1")]));
    push_text_element(&mut handler, "ns2:ipAddress", "10.0.0.1");
    handler.end_element("ns2:outage");

    let result = handler.finish();
    assert_eq!(result.outages.len(), 1);
    assert_eq!(result.outages[0].id, Some(1));
    assert_eq!(result.outages[0].ip_address.as_deref(), Some("10.0.0.1"));
}

#[test]
fn test_service_lost_event_without_open_record_is_ignored() {
    let mut handler = default_handler();

    handler.start_element("serviceLostEvent", &attrs(&[("severity", "MAJOR")]));
    handler.end_element("serviceLostEvent");

    let result = handler.finish();
    assert!(result.outages.is_empty());
    assert!(result.stats.is_clean());
}

#[test]
fn test_field_elements_without_open_record_are_ignored() {
    let mut handler = default_handler();

    push_text_element(&mut handler, "ipAddress", "10.0.0.1");
    handler.end_element("outage");

    let result = handler.finish();
    assert!(result.outages.is_empty());
}

#[test]
fn test_text_outside_elements_is_discarded() {
    let mut handler = default_handler();

    handler.characters("stray prologue text");
    handler.start_element("outage", &attrs(&[("id", "1")]));
    handler.characters("\n  ");
    push_text_element(&mut handler, "host", "gateway");
    handler.characters("\n");
    handler.end_element("outage");

    let result = handler.finish();
    assert_eq!(result.outages.len(), 1);
    assert_eq!(result.outages[0].host.as_deref(), Some("gateway"));
}

#[test]
fn test_empty_element_text_is_empty_string_not_unset() {
    let mut handler = default_handler();

    handler.start_element("outage", &attrs(&[("id", "1")]));
    handler.start_element("description", &attrs(&[]));
    handler.end_element("description");
    handler.end_element("outage");

    let result = handler.finish();
    // an empty element was present, so the field is set to ""
    assert_eq!(result.outages[0].description.as_deref(), Some(""));
}
