//! Provider and launcher capabilities.

use async_trait::async_trait;
use std::rc::Rc;

use super::WalletKind;
use crate::error::WalletError;

/// An injected wallet provider.
///
/// `connect` resolves to the account the wallet exposed, if it reported one.
#[async_trait(?Send)]
pub trait WalletProvider {
    fn kind(&self) -> WalletKind;

    async fn connect(&self) -> Result<Option<String>, WalletError>;
}

/// Opens external pages (the wallet install page).
pub trait ExternalLauncher {
    fn open(&self, url: &str) -> Result<(), WalletError>;
}

/// Providers present in the environment at the moment of a connect attempt.
#[derive(Clone, Default)]
pub struct ProviderSet {
    pub solana: Option<Rc<dyn WalletProvider>>,
    pub ethereum: Option<Rc<dyn WalletProvider>>,
}

impl ProviderSet {
    pub fn new(
        solana: Option<Rc<dyn WalletProvider>>,
        ethereum: Option<Rc<dyn WalletProvider>>,
    ) -> Self {
        Self { solana, ethereum }
    }

    pub fn is_empty(&self) -> bool {
        self.solana.is_none() && self.ethereum.is_none()
    }

    /// Present providers, Solana first.
    pub fn present(&self) -> impl Iterator<Item = &Rc<dyn WalletProvider>> + '_ {
        self.solana.iter().chain(self.ethereum.iter())
    }
}

impl std::fmt::Debug for ProviderSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSet")
            .field("solana", &self.solana.is_some())
            .field("ethereum", &self.ethereum.is_some())
            .finish()
    }
}
