//! `stockroom-inventory` — the in-memory inventory store.
//!
//! Pure, deterministic domain logic: a session-scoped map (or set) of
//! normalized item names with synchronous mutation and point-in-time
//! snapshot reads. No IO and no logging happen here; the session layer
//! owns those concerns.

pub mod snapshot;
pub mod store;

pub use snapshot::{InventorySnapshot, SnapshotEntry};
pub use store::{AddOutcome, InventoryMode, InventoryStore, RemovedEntry};
