use serde::Serialize;

use stockroom_core::InventoryError;
use stockroom_inventory::{AddOutcome, InventoryMode, RemovedEntry};

/// Display severity of a status message, from most to least positive.
///
/// Maps one-to-one onto the banner styles of the frontends: success and info
/// confirm a mutation, warning flags a rejected-but-harmless submission,
/// error flags bad input.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// Human-readable result of a submission, paired with a stable code.
///
/// The code is the machine-facing contract; the text is free-form and may
/// change wording between releases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub code: &'static str,
    pub text: String,
}

impl StatusMessage {
    pub(crate) fn for_add(mode: InventoryMode, outcome: &AddOutcome) -> Self {
        match outcome {
            AddOutcome::Created { name, quantity } => {
                let text = match mode {
                    InventoryMode::Quantity => format!("Added {name} (quantity {quantity})"),
                    InventoryMode::Presence => format!("Added {name}"),
                };
                Self {
                    level: StatusLevel::Success,
                    code: "created",
                    text,
                }
            }
            AddOutcome::Incremented {
                name,
                added,
                new_quantity,
            } => Self {
                level: StatusLevel::Success,
                code: "incremented",
                text: format!("Incremented {name} by {added} (now {new_quantity})"),
            },
        }
    }

    pub(crate) fn for_remove(mode: InventoryMode, removed: &RemovedEntry) -> Self {
        let text = match mode {
            InventoryMode::Quantity => format!(
                "Removed {} (prior quantity {})",
                removed.name, removed.prior_quantity
            ),
            InventoryMode::Presence => format!("Removed {}", removed.name),
        };
        Self {
            level: StatusLevel::Info,
            code: "removed",
            text,
        }
    }

    pub(crate) fn for_error(error: &InventoryError) -> Self {
        match error {
            InventoryError::InvalidInput(message) => Self {
                level: StatusLevel::Error,
                code: "invalid_input",
                text: message.clone(),
            },
            InventoryError::Duplicate(name) => Self {
                level: StatusLevel::Warning,
                code: "duplicate",
                text: format!("{name} is already in the inventory"),
            },
            InventoryError::NotFound(name) => Self {
                level: StatusLevel::Warning,
                code: "not_found",
                text: format!("{name} not found in the inventory"),
            },
        }
    }
}
