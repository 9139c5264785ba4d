//! # Common Error Types
//!
//! Consolidated error handling for the terminal core.
//!
//! ## Error Categories
//!
//! - **Wallet**: a browser wallet provider call failed, or the install page could not be opened
//! - **Chat**: the chat backend is unavailable or refused a message
//! - **Config**: page configuration failed to parse or validate
//!
//! Wallet errors never reach the user interface. The connection flow logs them
//! and carries on; see [`crate::wallet::WalletConnector::connect_wallet`].

use thiserror::Error;

use crate::wallet::WalletKind;

/// Failure reported by a browser wallet integration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// The provider rejected or threw during connect / account request.
    #[error("Failed to connect to {wallet} wallet: {message}")]
    Rejected { wallet: WalletKind, message: String },

    /// The install page could not be opened in a new browsing context.
    #[error("Failed to open {url}: {message}")]
    LaunchFailed { url: String, message: String },
}

impl WalletError {
    pub fn rejected(wallet: WalletKind, message: impl Into<String>) -> Self {
        WalletError::Rejected {
            wallet,
            message: message.into(),
        }
    }
}

/// Failure reported by a chat backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    /// No backend is reachable (the page ships without one).
    #[error("Chat backend is unavailable")]
    Unavailable,

    /// The backend refused the message.
    #[error("Chat request rejected: {0}")]
    Rejected(String),

    /// The request could not be delivered.
    #[error("Chat transport error: {0}")]
    Transport(String),
}

/// Core-wide error type.
///
/// ```rust
/// use lib_terminal::error::{AppError, ChatError};
///
/// let err: AppError = ChatError::Unavailable.into();
/// assert_eq!(err.to_string(), "Chat error: Chat backend is unavailable");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Wallet error: {0}")]
    Wallet(#[from] WalletError),

    #[error("Chat error: {0}")]
    Chat(#[from] ChatError),

    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_error_messages() {
        let err = WalletError::rejected(WalletKind::Solana, "User rejected the request.");
        assert_eq!(
            err.to_string(),
            "Failed to connect to Phantom wallet: User rejected the request."
        );

        let app: AppError = err.into();
        assert!(matches!(app, AppError::Wallet(WalletError::Rejected { .. })));
    }

    #[test]
    fn test_launch_failed_message() {
        let err = WalletError::LaunchFailed {
            url: "https://phantom.app/".to_string(),
            message: "popup blocked".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to open https://phantom.app/: popup blocked");
    }
}
