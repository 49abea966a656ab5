use std::collections::BTreeMap;

use crate::statistic::Snapshot;

/// One row of a report, copied out of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub key: String,
    pub count: u64,
}

impl RankedEntry {
    pub fn new(key: impl Into<String>, count: u64) -> Self {
        RankedEntry {
            key: key.into(),
            count,
        }
    }
}

/// Top `limit` keys by count, highest first.
///
/// Keys are grouped by count; groups are emitted from the highest count down
/// and keys inside a group keep the snapshot's first-seen order. Truncation
/// applies to the whole sequence, so the last group may be cut short.
pub fn rank(snapshot: &Snapshot, limit: usize) -> Vec<RankedEntry> {
    if limit == 0 || snapshot.is_empty() {
        return Vec::new();
    }

    let mut by_count: BTreeMap<u64, Vec<&str>> = BTreeMap::new();
    for (key, count) in snapshot.iter() {
        by_count.entry(count).or_default().push(key);
    }

    by_count
        .iter()
        .rev()
        .flat_map(|(&count, keys)| keys.iter().map(move |&key| RankedEntry::new(key, count)))
        .take(limit)
        .collect()
}
