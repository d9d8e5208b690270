//! Duplicate suppression for outage records sharing a node
//!
//! The feed often reports one outage per monitored service, which shows the
//! same node many times over. At record-completion time the filter decides
//! whether the completed record is kept, based on the node ids seen so far in
//! the same parse.

use std::collections::HashSet;

/// Node-keyed duplicate filter for a single parse
///
/// Records without a node id are never suppressed: an absent key matches
/// nothing previously seen. Feeds that omit `nodeId` elements therefore pass
/// through unfiltered even when deduplication is on.
#[derive(Debug)]
pub struct NodeDedupFilter {
    seen: HashSet<i32>,
    allow_duplicates: bool,
}

impl NodeDedupFilter {
    pub fn new(allow_duplicates: bool) -> Self {
        Self {
            seen: HashSet::new(),
            allow_duplicates,
        }
    }

    /// Decide whether a completed record is kept, then record its node id
    ///
    /// The id is recorded regardless of the decision; re-recording an already
    /// seen id is a no-op.
    pub fn admit(&mut self, node_id: Option<i32>) -> bool {
        let keep = self.allow_duplicates
            || match node_id {
                Some(id) => !self.seen.contains(&id),
                None => true,
            };

        if let Some(id) = node_id {
            self.seen.insert(id);
        }

        keep
    }
}
