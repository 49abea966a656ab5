use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

/// Per-key hit counts in first-seen order. The index and the entries share
/// one allocation per key.
#[derive(Debug, Default)]
struct Hits {
    index: HashMap<Arc<str>, usize>,
    entries: Vec<(Arc<str>, u64)>,
}

impl Hits {
    fn add(&mut self, key: &str, hits: u64) {
        match self.index.get(key) {
            Some(&slot) => self.entries[slot].1 += hits,
            None => {
                let key: Arc<str> = Arc::from(key);
                self.index.insert(Arc::clone(&key), self.entries.len());
                self.entries.push((key, hits));
            }
        }
    }
}

/// Shared aggregator of hits per key.
///
/// Cloning gives another handle onto the same counts. Keys are never evicted,
/// so memory grows with the number of distinct keys seen during the run.
#[derive(Debug, Clone, Default)]
pub struct HitCounter {
    inner: Arc<Mutex<Hits>>,
}

impl HitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self, key: &str) {
        self.lock().add(key, 1);
    }

    /// Copies the current counts. Later increments do not show up in the copy.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            entries: self.lock().entries.clone(),
        }
    }

    // A panic elsewhere while holding the lock cannot leave a count half
    // applied, so the data behind a poisoned lock is still good.
    fn lock(&self) -> MutexGuard<'_, Hits> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Point-in-time copy of a [`HitCounter`], enumerated in first-seen order.
///
/// Counts are copied; key strings are shared with the counter.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Snapshot {
    entries: Vec<(Arc<str>, u64)>,
}

impl Snapshot {
    pub fn get(&self, key: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(k, _)| &**k == key)
            .map(|&(_, count)| count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, c)| (&**k, *c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_hits(&self) -> u64 {
        self.entries.iter().map(|(_, c)| c).sum()
    }
}

impl<K: AsRef<str>> FromIterator<(K, u64)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut hits = Hits::default();
        for (key, count) in iter {
            hits.add(key.as_ref(), count);
        }
        Snapshot {
            entries: hits.entries,
        }
    }
}
