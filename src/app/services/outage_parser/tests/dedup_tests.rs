//! Tests for node duplicate suppression

use crate::app::services::outage_parser::dedup::NodeDedupFilter;

#[test]
fn test_allow_duplicates_admits_everything() {
    let mut filter = NodeDedupFilter::new(true);

    assert!(filter.admit(Some(5)));
    assert!(filter.admit(Some(5)));
    assert!(filter.admit(None));
    assert!(filter.admit(Some(5)));
}

#[test]
fn test_repeat_node_id_rejected() {
    let mut filter = NodeDedupFilter::new(false);

    assert!(filter.admit(Some(5)));
    assert!(!filter.admit(Some(5)));
    assert!(!filter.admit(Some(5)));
}

#[test]
fn test_distinct_node_ids_admitted() {
    let mut filter = NodeDedupFilter::new(false);

    assert!(filter.admit(Some(1)));
    assert!(filter.admit(Some(2)));
    assert!(filter.admit(Some(3)));
}

#[test]
fn test_unset_node_id_always_admitted() {
    let mut filter = NodeDedupFilter::new(false);

    // absence of a key matches nothing previously seen
    assert!(filter.admit(None));
    assert!(filter.admit(None));
    assert!(filter.admit(None));
}

#[test]
fn test_unset_node_id_does_not_poison_seen_set() {
    let mut filter = NodeDedupFilter::new(false);

    assert!(filter.admit(None));
    assert!(filter.admit(Some(5)));
    assert!(!filter.admit(Some(5)));
    assert!(filter.admit(None));
}

#[test]
fn test_interleaved_nodes() {
    let mut filter = NodeDedupFilter::new(false);

    assert!(filter.admit(Some(1)));
    assert!(filter.admit(Some(2)));
    assert!(!filter.admit(Some(1)));
    assert!(filter.admit(Some(3)));
    assert!(!filter.admit(Some(2)));
}
