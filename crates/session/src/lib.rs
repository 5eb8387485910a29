//! `stockroom-session` — session lifecycle over the inventory store.
//!
//! The application-facing layer: raw user input goes in, status messages and
//! snapshots come out. One [`Session`] wraps one private store; dropping the
//! session drops the inventory.

pub mod config;
pub mod dto;
pub mod session;
pub mod status;

pub use config::{MODE_ENV_VAR, SeedEntry, SessionConfig};
pub use session::{Session, SubmitOutcome};
pub use status::{StatusLevel, StatusMessage};
