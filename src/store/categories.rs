//! Category index
//!
//! Derives the set of categories outside the primary filter set, for the
//! secondary-filter dropdown.

use std::collections::BTreeSet;

use crate::storage::StorageBackend;

use super::filters::PRIMARY_CATEGORIES;
use super::EventStore;

impl<S: StorageBackend> EventStore<S> {
    /// Distinct non-primary categories, lowercased and sorted.
    ///
    /// Recomputed from the live collection on every call; events may have
    /// been added, edited or deleted since the last one.
    pub fn other_categories(&self) -> Vec<String> {
        let keys: BTreeSet<String> = self
            .events
            .iter()
            .map(|e| e.category_key())
            .filter(|key| !PRIMARY_CATEGORIES.contains(&key.as_str()))
            .collect();
        keys.into_iter().collect()
    }
}
