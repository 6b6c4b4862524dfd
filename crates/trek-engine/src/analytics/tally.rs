use std::collections::HashMap;
use std::hash::Hash;

/// Counter that remembers the order keys were first seen in.
///
/// `leader` breaks ties in favour of the earliest key, so results do not
/// depend on hash iteration order.
#[derive(Debug, Clone)]
pub(crate) struct FirstSeenTally<K> {
    entries: Vec<(K, i64)>,
    slots: HashMap<K, usize>,
}

impl<K: Clone + Eq + Hash> FirstSeenTally<K> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            slots: HashMap::new(),
        }
    }

    pub(crate) fn add(&mut self, key: K, amount: i64) {
        if let Some(&slot) = self.slots.get(&key) {
            self.entries[slot].1 += amount;
        } else {
            self.slots.insert(key.clone(), self.entries.len());
            self.entries.push((key, amount));
        }
    }

    /// Key with the highest count; earliest key wins ties.
    pub(crate) fn leader(&self) -> Option<&K> {
        let mut best: Option<&(K, i64)> = None;
        for entry in &self.entries {
            if best.is_none_or(|current| entry.1 > current.1) {
                best = Some(entry);
            }
        }
        best.map(|(key, _)| key)
    }

    pub(crate) fn into_entries(self) -> Vec<(K, i64)> {
        self.entries
    }
}
