//! Node status panel content.

/// Color treatment for a status value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Info,
    Negative,
}

/// One label/value line in a side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusRow {
    pub label: &'static str,
    pub value: &'static str,
    pub tone: Tone,
    /// Render a pulsing dot ahead of the value
    pub indicator: bool,
}

impl StatusRow {
    pub const fn plain(label: &'static str, value: &'static str, tone: Tone) -> Self {
        Self {
            label,
            value,
            tone,
            indicator: false,
        }
    }

    pub const fn live(label: &'static str, value: &'static str, tone: Tone) -> Self {
        Self {
            label,
            value,
            tone,
            indicator: true,
        }
    }
}

pub const NODE_STATUS_TITLE: &str = "Node Status";

const NODE_STATUS_ROWS: [StatusRow; 3] = [
    StatusRow::live("Status", "Online", Tone::Positive),
    StatusRow::plain("Latency", "45ms", Tone::Info),
    StatusRow::plain("Uptime", "99.9%", Tone::Info),
];

/// The fixed node status rows.
pub fn node_status_rows() -> &'static [StatusRow] {
    &NODE_STATUS_ROWS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_status_rows() {
        let rows = node_status_rows();
        let pairs: Vec<_> = rows.iter().map(|r| (r.label, r.value)).collect();
        assert_eq!(
            pairs,
            vec![("Status", "Online"), ("Latency", "45ms"), ("Uptime", "99.9%")]
        );
        assert!(rows[0].indicator);
        assert_eq!(rows[0].tone, Tone::Positive);
    }
}
