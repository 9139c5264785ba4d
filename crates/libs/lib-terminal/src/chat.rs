//! # Chat Backend Contract
//!
//! The message exchange the terminal input will drive once a backend exists.
//! A backend reports whether it can take messages and answers a
//! [`ChatRequest`] with a [`ChatResponse`] or a [`ChatError`].
//!
//! This release ships only [`OfflineChat`], which keeps the input gated.

use async_trait::async_trait;
use shared::dto::chat::{ChatRequest, ChatResponse};

use crate::error::ChatError;

/// Whether the chat input may be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatStatus {
    /// Accepting messages.
    Ready,
    /// Waiting for the user to connect a wallet.
    AwaitingWallet,
    /// No backend reachable.
    Offline,
}

impl ChatStatus {
    pub fn input_enabled(self) -> bool {
        self == ChatStatus::Ready
    }

    /// Placeholder text for the input field.
    pub fn placeholder(self) -> &'static str {
        match self {
            ChatStatus::Ready => "Ask about markets, swaps or your portfolio",
            ChatStatus::AwaitingWallet => "Connect your wallet to start trading",
            ChatStatus::Offline => "Terminal is offline",
        }
    }
}

/// Chat backend seam.
#[async_trait(?Send)]
pub trait ChatBackend {
    fn status(&self) -> ChatStatus;

    async fn send(&self, request: ChatRequest) -> Result<ChatResponse, ChatError>;
}

/// Backend used until message exchange is wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineChat;

#[async_trait(?Send)]
impl ChatBackend for OfflineChat {
    fn status(&self) -> ChatStatus {
        ChatStatus::AwaitingWallet
    }

    async fn send(&self, _request: ChatRequest) -> Result<ChatResponse, ChatError> {
        Err(ChatError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offline_chat_keeps_input_gated() {
        let status = OfflineChat.status();
        assert!(!status.input_enabled());
        assert_eq!(status.placeholder(), "Connect your wallet to start trading");
    }

    #[tokio::test]
    async fn test_offline_chat_send_is_unavailable() {
        let request = ChatRequest {
            content: "hello".to_string(),
            wallet_address: None,
        };
        assert_eq!(OfflineChat.send(request).await, Err(ChatError::Unavailable));
    }
}
