//! CSS class composition for the terminal view

use lib_terminal::node_status::Tone;
use shared::dto::chat::MessageKind;

/// Off-stage position an element starts from before the entrance animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offstage {
    /// Transparent only
    Fade,
    /// Slightly zoomed in
    Zoomed,
    /// Shifted above its final position
    Above,
    /// Shifted below its final position
    Below,
}

impl Offstage {
    fn class(self) -> &'static str {
        match self {
            Offstage::Fade => "offstage-fade",
            Offstage::Zoomed => "offstage-zoomed",
            Offstage::Above => "offstage-above",
            Offstage::Below => "offstage-below",
        }
    }
}

/// Classes for an element taking part in the entrance animation.
pub fn reveal(base: &str, loaded: bool, offstage: Offstage) -> String {
    let state = if loaded { "onstage" } else { offstage.class() };
    format!("{} reveal {}", base, state)
}

/// Row alignment for a chat message: bot messages sit left, user messages right.
pub fn message_row(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Bot => "message-row message-row-bot",
        MessageKind::User => "message-row message-row-user",
    }
}

pub fn tone(tone: Tone) -> &'static str {
    match tone {
        Tone::Positive => "tone-positive",
        Tone::Info => "tone-info",
        Tone::Negative => "tone-negative",
    }
}

pub fn connect_button(disabled: bool) -> &'static str {
    if disabled {
        "connect-button connect-button-busy"
    } else {
        "connect-button"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_before_and_after_load() {
        assert_eq!(reveal("nav", false, Offstage::Above), "nav reveal offstage-above");
        assert_eq!(reveal("nav", true, Offstage::Above), "nav reveal onstage");
    }

    #[test]
    fn test_message_row_alignment() {
        assert!(message_row(MessageKind::Bot).ends_with("bot"));
        assert!(message_row(MessageKind::User).ends_with("user"));
    }

    #[test]
    fn test_connect_button_busy_state() {
        assert_eq!(connect_button(false), "connect-button");
        assert!(connect_button(true).contains("busy"));
    }
}
