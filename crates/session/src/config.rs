use serde::{Deserialize, Serialize};

use stockroom_inventory::InventoryMode;

/// Environment variable selecting the store mode for a deployment.
pub const MODE_ENV_VAR: &str = "INVENTORY_MODE";

/// Raw seed entry, unvalidated. Names are normalized and quantities checked
/// when the session is constructed; invalid entries are skipped with a
/// warning rather than failing the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedEntry {
    pub name: String,
    pub quantity: u32,
}

impl SeedEntry {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// Configuration for one session: the store mode plus initial contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub mode: InventoryMode,
    pub seed: Vec<SeedEntry>,
}

impl SessionConfig {
    /// Config with the stock demo seed.
    pub fn new(mode: InventoryMode) -> Self {
        Self {
            mode,
            seed: example_seed(),
        }
    }

    /// Config starting from an empty store.
    pub fn empty(mode: InventoryMode) -> Self {
        Self {
            mode,
            seed: Vec::new(),
        }
    }

    pub fn with_seed(mode: InventoryMode, seed: Vec<SeedEntry>) -> Self {
        Self { mode, seed }
    }

    /// Read the mode from `INVENTORY_MODE`, defaulting to quantity mode.
    ///
    /// An unrecognized value falls back to quantity mode with a warning
    /// instead of refusing to start.
    pub fn from_env() -> Self {
        let mode = match std::env::var(MODE_ENV_VAR) {
            Ok(raw) => raw.parse::<InventoryMode>().unwrap_or_else(|_| {
                tracing::warn!(
                    "unrecognized {MODE_ENV_VAR}={raw:?}, falling back to quantity mode"
                );
                InventoryMode::Quantity
            }),
            Err(_) => InventoryMode::Quantity,
        };
        Self::new(mode)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(InventoryMode::Quantity)
    }
}

fn example_seed() -> Vec<SeedEntry> {
    vec![
        SeedEntry::new("LAPTOP", 5),
        SeedEntry::new("MONITOR", 10),
        SeedEntry::new("KLAWIATURA", 2),
    ]
}
