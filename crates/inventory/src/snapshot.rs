//! Point-in-time reads of the store.

use chrono::{DateTime, Utc};

use stockroom_core::{ItemName, Quantity};

/// One listed entry: normalized name and its quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotEntry {
    pub name: ItemName,
    pub quantity: Quantity,
}

/// Sorted, point-in-time read of the whole store plus aggregate metrics.
///
/// `entries` is ascending by name. `total_quantity` sums all quantities; in
/// presence mode every stored quantity is 1, so it equals `distinct_entries`.
/// Snapshots are disposable: render one, then throw it away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventorySnapshot {
    pub entries: Vec<SnapshotEntry>,
    pub total_quantity: u64,
    pub distinct_entries: usize,
    pub taken_at: DateTime<Utc>,
}

impl InventorySnapshot {
    /// True when nothing is in stock (the "inventory is empty" notice).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorted names, e.g. for populating a remove-selection control.
    pub fn names(&self) -> impl Iterator<Item = &ItemName> {
        self.entries.iter().map(|e| &e.name)
    }

    /// Quantity of one entry, if listed.
    pub fn quantity_of(&self, name: &ItemName) -> Option<Quantity> {
        self.entries
            .iter()
            .find(|e| &e.name == name)
            .map(|e| e.quantity)
    }
}
