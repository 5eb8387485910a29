//! Normalized item names, the uniqueness key of the store.

use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::InventoryError;

/// Normalized item name (value object).
///
/// Normalization strips surrounding whitespace and upper-cases the rest, and
/// the normalized form is the uniqueness key: `" laptop "` and `"LAPTOP"`
/// collapse to the same entry. Construction goes through [`FromStr`], which
/// rejects names that normalize to nothing, so an `ItemName` is always
/// non-empty and already normalized.
///
/// Ordered lexicographically; snapshot listings sort ascending by this order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ItemName {
    type Err = InventoryError;

    /// Normalize a raw name into the uniqueness key.
    ///
    /// Idempotent: parsing an already-normalized name yields the same key.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(InventoryError::invalid_input("item name cannot be empty"));
        }
        Ok(Self(normalized))
    }
}

impl<'de> Deserialize<'de> for ItemName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Funnel through FromStr so the normalization invariant survives serde.
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
