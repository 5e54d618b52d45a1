//! Bundle comparison selection buffer
//!
//! Holds at most two bundle ids in selection order. Selecting a third
//! distinct bundle evicts the first-selected slot.

use serde::Serialize;

use super::bundle::BundleId;

/// Number of bundles compared side by side
pub const COMPARE_CAPACITY: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BundleSelection {
    ids: Vec<BundleId>,
}

impl BundleSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a buffer from ids in selection order.
    ///
    /// Duplicates are dropped and only the last two ids survive, which is
    /// the state the same sequence of toggles would have produced.
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = BundleId>,
    {
        let mut selection = Self::new();
        for id in ids {
            if !selection.contains(&id) {
                selection.toggle(id);
            }
        }
        selection
    }

    pub fn ids(&self) -> &[BundleId] {
        &self.ids
    }

    pub fn contains(&self, id: &BundleId) -> bool {
        self.ids.contains(id)
    }

    /// Toggle with replace-oldest semantics:
    /// - already selected: removed
    /// - below capacity: appended
    /// - at capacity: becomes `[second, id]`
    pub fn toggle(&mut self, id: BundleId) {
        if let Some(pos) = self.ids.iter().position(|selected| *selected == id) {
            self.ids.remove(pos);
        } else if self.ids.len() < COMPARE_CAPACITY {
            self.ids.push(id);
        } else {
            let second = self.ids[1].clone();
            self.ids = vec![second, id];
        }
    }

    /// The comparison panel renders only for a full buffer
    pub fn is_comparable(&self) -> bool {
        self.ids.len() == COMPARE_CAPACITY
    }

    /// Comma-separated ids, as carried in the `selected` query parameter
    pub fn to_query_value(&self) -> String {
        self.ids
            .iter()
            .map(BundleId::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Parse the `selected` query parameter
    pub fn parse_query_value(raw: &str) -> Self {
        Self::from_ids(
            raw.split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(BundleId::from),
        )
    }
}
