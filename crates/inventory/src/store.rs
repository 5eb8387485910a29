use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use stockroom_core::{InventoryError, InventoryResult, ItemName, Quantity};

use crate::snapshot::{InventorySnapshot, SnapshotEntry};

/// Data-model variant of a store, fixed at construction.
///
/// The two variants mirror the two deployments of the original tool: a
/// quantity-tracked map and a presence-only set. A store never changes mode
/// after construction, and no merge semantics across modes are defined.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InventoryMode {
    /// Map of name → quantity; adding an existing key merges by sum.
    Quantity,
    /// Set of names; quantity is implicitly 1 and re-adding is a duplicate.
    Presence,
}

impl core::str::FromStr for InventoryMode {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quantity" => Ok(InventoryMode::Quantity),
            "presence" => Ok(InventoryMode::Presence),
            _ => Err(InventoryError::invalid_input(
                "mode must be one of: quantity, presence",
            )),
        }
    }
}

/// Outcome of a successful add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The key was new and has been inserted.
    Created { name: ItemName, quantity: Quantity },
    /// The key existed; its quantity was merged by sum (quantity mode only).
    Incremented {
        name: ItemName,
        added: Quantity,
        new_quantity: Quantity,
    },
}

/// Record of a successful remove: the whole entry, regardless of quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedEntry {
    pub name: ItemName,
    pub prior_quantity: Quantity,
}

/// In-memory inventory store: normalized item name → quantity.
///
/// One store lives for exactly one session. It is seeded at construction,
/// mutated only through [`InventoryStore::add`] and [`InventoryStore::remove`],
/// and discarded with the session. Every call either mutates and reports what
/// happened, or is rejected synchronously with the store left unchanged;
/// nothing is queued or deferred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryStore {
    mode: InventoryMode,
    entries: BTreeMap<ItemName, Quantity>,
    revision: u64,
}

impl InventoryStore {
    /// Create an empty store in the given mode.
    pub fn new(mode: InventoryMode) -> Self {
        Self {
            mode,
            entries: BTreeMap::new(),
            revision: 0,
        }
    }

    /// Create a store pre-populated with seed entries.
    ///
    /// Seed names arriving twice after normalization collapse; the last entry
    /// wins. In presence mode the stored quantity is pinned to 1 regardless
    /// of the seed amount.
    pub fn with_entries(
        mode: InventoryMode,
        seed: impl IntoIterator<Item = (ItemName, Quantity)>,
    ) -> Self {
        let mut store = Self::new(mode);
        for (name, quantity) in seed {
            let quantity = match mode {
                InventoryMode::Quantity => quantity,
                InventoryMode::Presence => Quantity::ONE,
            };
            store.entries.insert(name, quantity);
        }
        store
    }

    pub fn mode(&self) -> InventoryMode {
        self.mode
    }

    /// Count of successful mutations since construction.
    ///
    /// Rejected operations leave the revision untouched; tests use this to
    /// assert "store unchanged".
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &ItemName) -> bool {
        self.entries.contains_key(name)
    }

    pub fn quantity_of(&self, name: &ItemName) -> Option<Quantity> {
        self.entries.get(name).copied()
    }

    /// Add an entry, merging with an existing one according to the mode.
    ///
    /// Quantity mode: a new key is inserted with the given quantity; an
    /// existing key has its quantity incremented by that amount
    /// (merge-by-sum). Presence mode: a new key is marked present with
    /// quantity 1 and the given amount is not recorded; an existing key is
    /// rejected as a duplicate.
    ///
    /// On any rejection the store is left unchanged.
    pub fn add(&mut self, name: ItemName, quantity: Quantity) -> InventoryResult<AddOutcome> {
        match self.mode {
            InventoryMode::Quantity => {
                if let Some(current) = self.entries.get_mut(&name) {
                    let merged = current.checked_add(quantity).ok_or_else(|| {
                        InventoryError::invalid_input(format!(
                            "quantity for {name} would overflow"
                        ))
                    })?;
                    *current = merged;
                    self.revision += 1;
                    Ok(AddOutcome::Incremented {
                        name,
                        added: quantity,
                        new_quantity: merged,
                    })
                } else {
                    self.entries.insert(name.clone(), quantity);
                    self.revision += 1;
                    Ok(AddOutcome::Created { name, quantity })
                }
            }
            InventoryMode::Presence => {
                if self.entries.contains_key(&name) {
                    return Err(InventoryError::duplicate(name));
                }
                self.entries.insert(name.clone(), Quantity::ONE);
                self.revision += 1;
                Ok(AddOutcome::Created {
                    name,
                    quantity: Quantity::ONE,
                })
            }
        }
    }

    /// Remove an entry entirely, regardless of its quantity.
    ///
    /// There is no partial-quantity decrement; the line item goes away as a
    /// whole. On a miss the store is left unchanged.
    pub fn remove(&mut self, name: &ItemName) -> InventoryResult<RemovedEntry> {
        match self.entries.remove(name) {
            Some(prior_quantity) => {
                self.revision += 1;
                Ok(RemovedEntry {
                    name: name.clone(),
                    prior_quantity,
                })
            }
            None => Err(InventoryError::not_found(name.clone())),
        }
    }

    /// Point-in-time read: entries in ascending key order plus aggregates.
    pub fn snapshot(&self) -> InventorySnapshot {
        let entries: Vec<SnapshotEntry> = self
            .entries
            .iter()
            .map(|(name, quantity)| SnapshotEntry {
                name: name.clone(),
                quantity: *quantity,
            })
            .collect();
        let total_quantity = entries.iter().map(|e| u64::from(e.quantity.get())).sum();

        InventorySnapshot {
            distinct_entries: entries.len(),
            total_quantity,
            entries,
            taken_at: Utc::now(),
        }
    }
}
