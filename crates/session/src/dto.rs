use stockroom_inventory::InventorySnapshot;

use crate::session::SubmitOutcome;
use crate::status::StatusMessage;

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn snapshot_to_json(snapshot: &InventorySnapshot) -> serde_json::Value {
    serde_json::json!({
        "entries": snapshot.entries.iter().map(|e| serde_json::json!({
            "name": e.name.as_str(),
            "quantity": e.quantity.get(),
        })).collect::<Vec<_>>(),
        "total_quantity": snapshot.total_quantity,
        "distinct_entries": snapshot.distinct_entries,
        "is_empty": snapshot.is_empty(),
        "taken_at": snapshot.taken_at.to_rfc3339(),
    })
}

pub fn status_to_json(status: &StatusMessage) -> serde_json::Value {
    serde_json::json!({
        "level": format!("{:?}", status.level).to_lowercase(),
        "code": status.code,
        "message": status.text,
    })
}

pub fn outcome_to_json(outcome: &SubmitOutcome) -> serde_json::Value {
    serde_json::json!({
        "status": status_to_json(&outcome.status),
        "snapshot": snapshot_to_json(&outcome.snapshot),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::session::Session;
    use stockroom_inventory::InventoryMode;

    #[test]
    fn snapshot_json_lists_entries_in_order_with_totals() {
        let session = Session::new(SessionConfig::new(InventoryMode::Quantity));
        let value = snapshot_to_json(&session.get_snapshot());

        assert_eq!(value["entries"][0]["name"], "KLAWIATURA");
        assert_eq!(value["entries"][0]["quantity"], 2);
        assert_eq!(value["entries"][1]["name"], "LAPTOP");
        assert_eq!(value["entries"][2]["name"], "MONITOR");
        assert_eq!(value["total_quantity"], 17);
        assert_eq!(value["distinct_entries"], 3);
        assert_eq!(value["is_empty"], false);
        assert!(value["taken_at"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn outcome_json_nests_status_and_snapshot() {
        let mut session = Session::new(SessionConfig::new(InventoryMode::Quantity));
        let value = outcome_to_json(&session.submit_add("laptop", 3));

        assert_eq!(value["status"]["level"], "success");
        assert_eq!(value["status"]["code"], "incremented");
        assert!(value["status"]["message"]
            .as_str()
            .unwrap()
            .contains("LAPTOP"));
        assert_eq!(value["snapshot"]["total_quantity"], 20);
    }

    #[test]
    fn rejection_json_carries_the_error_level() {
        let mut session = Session::new(SessionConfig::new(InventoryMode::Quantity));
        let value = outcome_to_json(&session.submit_add("   ", 1));

        assert_eq!(value["status"]["level"], "error");
        assert_eq!(value["status"]["code"], "invalid_input");
    }
}
