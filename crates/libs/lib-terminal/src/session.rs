//! # Terminal Session State
//!
//! Transient state of one rendered terminal view: the chat message log, the
//! input text, and the typing / loaded / connecting flags. Everything here is
//! discarded on navigation or reload.
//!
//! The session is a plain value (`Send + Sync`) so the page can hold it in a
//! reactive signal and tests can inspect it directly.

use shared::dto::chat::{ChatRequest, Message, MessageId, MessageKind};

use crate::chat::{ChatBackend, ChatStatus};
use crate::config::TerminalConfig;

/// Entrance animation state. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    NotLoaded,
    Loaded,
}

/// Append-only, insertion-ordered chat log with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageLog {
    messages: Vec<Message>,
    next_id: u64,
    revision: u64,
}

impl MessageLog {
    /// A log holding the single bot welcome message (id `"0"`).
    pub fn seeded(welcome: impl Into<String>) -> Self {
        let mut log = Self {
            messages: Vec::new(),
            next_id: 0,
            revision: 0,
        };
        log.push(MessageKind::Bot, welcome);
        log
    }

    /// Append a message, assigning the next id.
    pub fn push(&mut self, kind: MessageKind, content: impl Into<String>) -> &Message {
        let id = MessageId::new(self.next_id.to_string());
        self.next_id += 1;
        self.revision += 1;
        self.messages.push(Message::new(id, kind, content));
        &self.messages[self.messages.len() - 1]
    }

    /// Messages in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Message> + '_ {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Most recent message, the scroll target after any change.
    pub fn latest(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Bumped on every append; views scroll to [`MessageLog::latest`] when it changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// What a submit attempt produced. Submitting never touches the message log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input is gated; nothing happened.
    Disabled,
    /// Backend ready but the input was blank.
    Empty,
    /// Request ready to hand to the backend.
    Request(ChatRequest),
}

/// Which label the connect button shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectButton {
    Idle,
    Connecting,
}

impl ConnectButton {
    pub fn label(self) -> &'static str {
        match self {
            ConnectButton::Idle => "Connect Wallet",
            ConnectButton::Connecting => "Connecting...",
        }
    }

    pub fn is_disabled(self) -> bool {
        self == ConnectButton::Connecting
    }
}

/// State of the terminal root view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalSession {
    messages: MessageLog,
    input: String,
    typing: bool,
    phase: LoadPhase,
    connecting: bool,
}

impl TerminalSession {
    pub fn new(config: &TerminalConfig) -> Self {
        Self {
            messages: MessageLog::seeded(config.welcome_message.clone()),
            input: String::new(),
            typing: false,
            phase: LoadPhase::NotLoaded,
            connecting: false,
        }
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loaded(&self) -> bool {
        self.phase == LoadPhase::Loaded
    }

    /// Complete the entrance transition. Returns `true` only the first time.
    pub fn mark_loaded(&mut self) -> bool {
        if self.phase == LoadPhase::Loaded {
            return false;
        }
        self.phase = LoadPhase::Loaded;
        true
    }

    pub fn is_connecting(&self) -> bool {
        self.connecting
    }

    pub fn set_connecting(&mut self, connecting: bool) {
        self.connecting = connecting;
    }

    pub fn connect_button(&self) -> ConnectButton {
        if self.connecting {
            ConnectButton::Connecting
        } else {
            ConnectButton::Idle
        }
    }

    /// Handle the input form's submit event.
    ///
    /// The form stays gated until a backend reports [`ChatStatus::Ready`]; with
    /// the offline backend this is always [`SubmitOutcome::Disabled`].
    pub fn submit(&self, backend: &dyn ChatBackend) -> SubmitOutcome {
        let status = backend.status();
        if status != ChatStatus::Ready {
            tracing::debug!(?status, "Submit ignored, chat input is disabled");
            return SubmitOutcome::Disabled;
        }

        let content = self.input.trim();
        if content.is_empty() {
            return SubmitOutcome::Empty;
        }

        SubmitOutcome::Request(ChatRequest {
            content: content.to_string(),
            wallet_address: None,
        })
    }
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new(&TerminalConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::OfflineChat;
    use crate::config::DEFAULT_WELCOME_MESSAGE;
    use crate::error::ChatError;
    use async_trait::async_trait;
    use shared::dto::chat::ChatResponse;
    use std::collections::HashSet;

    struct ReadyChat;

    #[async_trait(?Send)]
    impl ChatBackend for ReadyChat {
        fn status(&self) -> ChatStatus {
            ChatStatus::Ready
        }

        async fn send(&self, _request: ChatRequest) -> Result<ChatResponse, ChatError> {
            Err(ChatError::Transport("not wired in tests".to_string()))
        }
    }

    #[test]
    fn test_new_session_has_single_welcome_message() {
        let session = TerminalSession::default();
        let messages: Vec<_> = session.messages().iter().collect();

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id.as_str(), "0");
        assert_eq!(messages[0].kind, MessageKind::Bot);
        assert_eq!(messages[0].content, DEFAULT_WELCOME_MESSAGE);
        assert!(!session.is_typing());
        assert!(!session.is_connecting());
        assert_eq!(session.phase(), LoadPhase::NotLoaded);
    }

    #[test]
    fn test_log_ids_unique_and_ordered() {
        let mut log = MessageLog::seeded("hi");
        log.push(MessageKind::User, "buy SOL");
        log.push(MessageKind::Bot, "connect a wallet first");

        let ids: HashSet<_> = log.iter().map(|m| m.id.clone()).collect();
        assert_eq!(ids.len(), 3);

        let contents: Vec<_> = log.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["hi", "buy SOL", "connect a wallet first"]);
        assert_eq!(log.latest().map(|m| m.content.as_str()), Some("connect a wallet first"));
        assert_eq!(log.revision(), 3);
    }

    #[test]
    fn test_submit_with_offline_backend_is_noop() {
        let mut session = TerminalSession::default();
        session.set_input("swap 1 SOL to USDC");
        let before = session.clone();

        assert_eq!(session.submit(&OfflineChat), SubmitOutcome::Disabled);
        assert_eq!(session, before);
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_submit_when_ready_builds_request_without_appending() {
        let mut session = TerminalSession::default();
        assert_eq!(session.submit(&ReadyChat), SubmitOutcome::Empty);

        session.set_input("  price of SOL?  ");
        let outcome = session.submit(&ReadyChat);
        assert_eq!(
            outcome,
            SubmitOutcome::Request(ChatRequest {
                content: "price of SOL?".to_string(),
                wallet_address: None,
            })
        );
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_mark_loaded_only_once() {
        let mut session = TerminalSession::default();
        assert!(session.mark_loaded());
        assert!(!session.mark_loaded());
        assert!(session.is_loaded());
    }

    #[test]
    fn test_connect_button_labels() {
        let mut session = TerminalSession::default();
        assert_eq!(session.connect_button().label(), "Connect Wallet");
        assert!(!session.connect_button().is_disabled());

        session.set_connecting(true);
        assert_eq!(session.connect_button().label(), "Connecting...");
        assert!(session.connect_button().is_disabled());
    }
}
