//! # Side Panels
//!
//! Static content of the panels left of the chat pane: network and time,
//! wallet status, and recent activity. The clock value is rendered live by the
//! page and only its label lives here.

use crate::node_status::{StatusRow, Tone};

pub const NETWORK_ROW: StatusRow = StatusRow::live("Network", "Mainnet", Tone::Positive);
pub const CLOCK_LABEL: &str = "Time (UTC)";
pub const SERVICE_ROW: StatusRow = StatusRow::live("Status", "Active", Tone::Positive);

pub const WALLET_STATUS_TITLE: &str = "Wallet Status";
pub const RECENT_ACTIVITY_TITLE: &str = "Recent Activity";
pub const NO_ACTIVITY: &str = "No recent activity";

/// Connection line of the wallet status panel.
///
/// Always reports `Disconnected`: a successful provider connection is not
/// recorded anywhere yet (tracked as an open product question).
pub fn wallet_connection_row() -> StatusRow {
    StatusRow::live("Connection", "Disconnected", Tone::Negative)
}

/// Entry in the recent activity feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityItem {
    pub title: String,
    pub detail: String,
}

/// Recent activity panel. Nothing populates it yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityFeed {
    items: Vec<ActivityItem>,
}

impl ActivityFeed {
    pub fn items(&self) -> &[ActivityItem] {
        &self.items
    }

    /// Text to show instead of the list, if the feed is empty.
    pub fn empty_state(&self) -> Option<&'static str> {
        self.items.is_empty().then_some(NO_ACTIVITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_panel_reports_disconnected() {
        let row = wallet_connection_row();
        assert_eq!(row.value, "Disconnected");
        assert_eq!(row.tone, Tone::Negative);
    }

    #[test]
    fn test_empty_activity_feed() {
        let feed = ActivityFeed::default();
        assert!(feed.items().is_empty());
        assert_eq!(feed.empty_state(), Some("No recent activity"));
    }
}
