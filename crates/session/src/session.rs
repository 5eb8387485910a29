use chrono::{DateTime, Utc};

use stockroom_core::{InventoryError, ItemName, Quantity, SessionId};
use stockroom_inventory::{InventoryMode, InventorySnapshot, InventoryStore};

use crate::config::SessionConfig;
use crate::status::StatusMessage;

/// Result of one submission: what happened plus the state after it.
///
/// Every submission returns a fresh snapshot so callers can always re-render
/// the full listing without a second read.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub status: StatusMessage,
    pub snapshot: InventorySnapshot,
}

/// One user's inventory session: an identity, a start time, and a private
/// in-memory store.
///
/// The store lives and dies with the session; nothing is shared between
/// sessions and nothing survives the session ending. Raw user input enters
/// through [`Session::submit_add`] and [`Session::submit_remove`], which
/// normalize it and translate both outcomes and rejections into
/// [`StatusMessage`] values instead of surfacing errors to the caller.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    started_at: DateTime<Utc>,
    store: InventoryStore,
}

impl Session {
    /// Start a session, seeding the store from the config.
    ///
    /// Seed entries that fail validation are skipped with a warning; a bad
    /// seed line never prevents the session from starting. Seed names that
    /// collide after normalization collapse, last entry wins.
    pub fn new(config: SessionConfig) -> Self {
        let id = SessionId::new();
        let mut seed: Vec<(ItemName, Quantity)> = Vec::with_capacity(config.seed.len());
        for entry in &config.seed {
            match validate_seed_entry(config.mode, &entry.name, entry.quantity) {
                Ok(pair) => seed.push(pair),
                Err(e) => {
                    tracing::warn!("session {id}: skipping seed entry {:?}: {e}", entry.name);
                }
            }
        }

        let store = InventoryStore::with_entries(config.mode, seed);
        tracing::info!(
            "session {id} started: {:?} mode, {} seeded entries",
            config.mode,
            store.len()
        );

        Self {
            id,
            started_at: Utc::now(),
            store,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn mode(&self) -> InventoryMode {
        self.store.mode()
    }

    /// Submit an add from raw input.
    ///
    /// The name is trimmed and uppercased before lookup. In quantity mode the
    /// amount must be positive and merges by sum with an existing entry; in
    /// presence mode the amount is ignored and re-adding an existing name is
    /// rejected as a duplicate.
    pub fn submit_add(&mut self, raw_name: &str, quantity: u32) -> SubmitOutcome {
        let name: ItemName = match raw_name.parse() {
            Ok(name) => name,
            Err(e) => return self.rejected(e),
        };
        let quantity = match self.store.mode() {
            InventoryMode::Quantity => match Quantity::new(quantity) {
                Ok(quantity) => quantity,
                Err(e) => return self.rejected(e),
            },
            InventoryMode::Presence => Quantity::ONE,
        };

        match self.store.add(name, quantity) {
            Ok(outcome) => self.accepted(StatusMessage::for_add(self.store.mode(), &outcome)),
            Err(e) => self.rejected(e),
        }
    }

    /// Submit a remove from raw input. Deletes the whole entry on a hit.
    pub fn submit_remove(&mut self, raw_name: &str) -> SubmitOutcome {
        let name: ItemName = match raw_name.parse() {
            Ok(name) => name,
            Err(e) => return self.rejected(e),
        };

        match self.store.remove(&name) {
            Ok(removed) => self.accepted(StatusMessage::for_remove(self.store.mode(), &removed)),
            Err(e) => self.rejected(e),
        }
    }

    /// Current listing, sorted ascending by name, with totals.
    pub fn get_snapshot(&self) -> InventorySnapshot {
        self.store.snapshot()
    }

    fn accepted(&self, status: StatusMessage) -> SubmitOutcome {
        tracing::debug!("session {}: {}", self.id, status.text);
        SubmitOutcome {
            status,
            snapshot: self.store.snapshot(),
        }
    }

    fn rejected(&self, error: InventoryError) -> SubmitOutcome {
        tracing::warn!("session {}: submission rejected: {error}", self.id);
        SubmitOutcome {
            status: StatusMessage::for_error(&error),
            snapshot: self.store.snapshot(),
        }
    }
}

fn validate_seed_entry(
    mode: InventoryMode,
    raw_name: &str,
    quantity: u32,
) -> Result<(ItemName, Quantity), InventoryError> {
    let name: ItemName = raw_name.parse()?;
    let quantity = match mode {
        InventoryMode::Quantity => Quantity::new(quantity)?,
        InventoryMode::Presence => Quantity::ONE,
    };
    Ok((name, quantity))
}
