//! # Wallet Connection
//!
//! Browser wallet integration expressed as injected capabilities:
//!
//! - [`WalletProvider`] - one injected provider (Phantom on Solana, an Ethereum-compatible wallet)
//! - [`ExternalLauncher`] - opens a URL in a new browsing context
//! - [`WalletConnector`] - the connect flow over both
//!
//! ## Supported Providers
//!
//! | Kind | Injected global | Request |
//! |------|-----------------|---------|
//! | [`WalletKind::Solana`] | `window.solana` | `connect()` |
//! | [`WalletKind::Ethereum`] | `window.ethereum` | `request({ method: 'eth_requestAccounts' })` |

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod connect;
pub mod provider;

pub use connect::{ConnectReport, ConnectingState, ProviderOutcome, WalletConnector};
pub use provider::{ExternalLauncher, ProviderSet, WalletProvider};

/// Wallet network a provider speaks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletKind {
    Solana,
    Ethereum,
}

impl WalletKind {
    /// Wallet name used in user-facing and log text.
    pub fn wallet_name(self) -> &'static str {
        match self {
            WalletKind::Solana => "Phantom",
            WalletKind::Ethereum => "Brave",
        }
    }

    /// Name of the global the browser injects for this kind.
    pub fn injected_global(self) -> &'static str {
        match self {
            WalletKind::Solana => "solana",
            WalletKind::Ethereum => "ethereum",
        }
    }
}

impl fmt::Display for WalletKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wallet_name())
    }
}
