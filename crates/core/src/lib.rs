//! `stockroom-core` — domain foundation building blocks.
//!
//! Pure domain primitives only: the error model, the session identifier, and
//! the value objects the store is keyed on. No infrastructure concerns.

pub mod error;
pub mod id;
pub mod name;
pub mod quantity;

pub use error::{InventoryError, InventoryResult};
pub use id::SessionId;
pub use name::ItemName;
pub use quantity::Quantity;
