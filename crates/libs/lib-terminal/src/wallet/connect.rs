//! # Connect Wallet Flow
//!
//! Runs when the user presses "Connect Wallet":
//!
//! 1. Raise the connecting flag (lowered again on every exit path).
//! 2. If a Solana provider is injected, ask it to connect. Failures are logged.
//! 3. Independently, if an Ethereum provider is injected, request accounts. Failures are logged.
//! 4. If neither is injected, open the wallet install page.
//!
//! The flow never returns an error. A successful connection is reported back
//! in the [`ConnectReport`] but not stored in any wallet state.

use std::rc::Rc;

use shared::utils::truncate_address;

use super::provider::{ExternalLauncher, ProviderSet, WalletProvider};
use super::WalletKind;
use crate::error::{AppError, Result, WalletError};

/// Receiver of the connecting flag (a UI signal, a test recorder).
pub trait ConnectingState {
    fn set_connecting(&self, connecting: bool);
}

impl<F> ConnectingState for F
where
    F: Fn(bool),
{
    fn set_connecting(&self, connecting: bool) {
        self(connecting)
    }
}

/// Holds the connecting flag up for its own lifetime.
struct ConnectingGuard<'a, S: ConnectingState + ?Sized> {
    state: &'a S,
}

impl<'a, S: ConnectingState + ?Sized> ConnectingGuard<'a, S> {
    fn engage(state: &'a S) -> Self {
        state.set_connecting(true);
        Self { state }
    }
}

impl<S: ConnectingState + ?Sized> Drop for ConnectingGuard<'_, S> {
    fn drop(&mut self) {
        self.state.set_connecting(false);
    }
}

/// Result of asking one provider to connect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderOutcome {
    Connected { account: Option<String> },
    Failed(WalletError),
}

impl ProviderOutcome {
    pub fn is_connected(&self) -> bool {
        matches!(self, ProviderOutcome::Connected { .. })
    }
}

/// What a connect attempt did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectReport {
    /// `None` when no Solana provider was injected
    pub solana: Option<ProviderOutcome>,
    /// `None` when no Ethereum provider was injected
    pub ethereum: Option<ProviderOutcome>,
    pub opened_install_page: bool,
    /// Failure swallowed by the outer handler
    pub error: Option<String>,
}

impl ConnectReport {
    pub fn any_connected(&self) -> bool {
        self.solana
            .iter()
            .chain(self.ethereum.iter())
            .any(ProviderOutcome::is_connected)
    }

    fn outcome_mut(&mut self, kind: WalletKind) -> &mut Option<ProviderOutcome> {
        match kind {
            WalletKind::Solana => &mut self.solana,
            WalletKind::Ethereum => &mut self.ethereum,
        }
    }
}

/// Connect flow bound to the providers found for one attempt.
pub struct WalletConnector {
    providers: ProviderSet,
    launcher: Rc<dyn ExternalLauncher>,
    install_url: String,
}

impl WalletConnector {
    pub fn new(
        providers: ProviderSet,
        launcher: Rc<dyn ExternalLauncher>,
        install_url: impl Into<String>,
    ) -> Self {
        Self {
            providers,
            launcher,
            install_url: install_url.into(),
        }
    }

    pub fn providers(&self) -> &ProviderSet {
        &self.providers
    }

    /// Run the connect flow. Never fails; see the module docs.
    pub async fn connect_wallet<S>(&self, state: &S) -> ConnectReport
    where
        S: ConnectingState + ?Sized,
    {
        let _connecting = ConnectingGuard::engage(state);

        match self.attempt().await {
            Ok(report) => report,
            Err(err) => {
                tracing::error!(error = %err, "Wallet connection error");
                ConnectReport {
                    error: Some(err.to_string()),
                    ..ConnectReport::default()
                }
            }
        }
    }

    async fn attempt(&self) -> Result<ConnectReport> {
        let mut report = ConnectReport::default();

        for provider in self.providers.present() {
            let kind = provider.kind();
            let outcome = request_connection(provider.as_ref()).await;
            *report.outcome_mut(kind) = Some(outcome);
        }

        if self.providers.is_empty() {
            tracing::info!(url = %self.install_url, "No wallet provider found, opening install page");
            self.launcher.open(&self.install_url).map_err(AppError::from)?;
            report.opened_install_page = true;
        }

        Ok(report)
    }
}

async fn request_connection(provider: &dyn WalletProvider) -> ProviderOutcome {
    let kind = provider.kind();
    match provider.connect().await {
        Ok(account) => {
            tracing::info!(
                wallet = %kind,
                account = %account.as_deref().map(truncate_address).unwrap_or_default(),
                "Wallet provider connected"
            );
            ProviderOutcome::Connected { account }
        }
        Err(err) => {
            tracing::error!(wallet = %kind, error = %err, "Failed to connect wallet provider");
            ProviderOutcome::Failed(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};

    struct FakeProvider {
        kind: WalletKind,
        result: std::result::Result<Option<String>, String>,
        calls: Cell<u32>,
    }

    impl FakeProvider {
        fn accepting(kind: WalletKind, account: &str) -> Rc<Self> {
            Rc::new(Self {
                kind,
                result: Ok(Some(account.to_string())),
                calls: Cell::new(0),
            })
        }

        fn rejecting(kind: WalletKind) -> Rc<Self> {
            Rc::new(Self {
                kind,
                result: Err("User rejected the request.".to_string()),
                calls: Cell::new(0),
            })
        }
    }

    #[async_trait(?Send)]
    impl WalletProvider for FakeProvider {
        fn kind(&self) -> WalletKind {
            self.kind
        }

        async fn connect(&self) -> std::result::Result<Option<String>, WalletError> {
            self.calls.set(self.calls.get() + 1);
            self.result
                .clone()
                .map_err(|message| WalletError::rejected(self.kind, message))
        }
    }

    #[derive(Default)]
    struct FakeLauncher {
        opened: RefCell<Vec<String>>,
        fail: bool,
    }

    impl ExternalLauncher for FakeLauncher {
        fn open(&self, url: &str) -> std::result::Result<(), WalletError> {
            self.opened.borrow_mut().push(url.to_string());
            if self.fail {
                return Err(WalletError::LaunchFailed {
                    url: url.to_string(),
                    message: "popup blocked".to_string(),
                });
            }
            Ok(())
        }
    }

    const INSTALL_URL: &str = "https://phantom.app/";

    fn recorder() -> (Rc<RefCell<Vec<bool>>>, impl Fn(bool)) {
        let flags = Rc::new(RefCell::new(Vec::new()));
        let sink = flags.clone();
        (flags, move |value| sink.borrow_mut().push(value))
    }

    #[tokio::test]
    async fn test_no_provider_opens_install_page_once() {
        let launcher = Rc::new(FakeLauncher::default());
        let connector = WalletConnector::new(ProviderSet::default(), launcher.clone(), INSTALL_URL);
        let (flags, state) = recorder();

        let report = connector.connect_wallet(&state).await;

        assert_eq!(*launcher.opened.borrow(), vec![INSTALL_URL.to_string()]);
        assert!(report.opened_install_page);
        assert!(report.error.is_none());
        assert_eq!(*flags.borrow(), vec![true, false]);
    }

    #[tokio::test]
    async fn test_rejection_is_logged_and_flag_resets() {
        let solana = FakeProvider::rejecting(WalletKind::Solana);
        let launcher = Rc::new(FakeLauncher::default());
        let connector = WalletConnector::new(
            ProviderSet::new(Some(solana.clone()), None),
            launcher.clone(),
            INSTALL_URL,
        );
        let (flags, state) = recorder();

        let report = connector.connect_wallet(&state).await;

        assert_eq!(solana.calls.get(), 1);
        assert!(matches!(
            report.solana,
            Some(ProviderOutcome::Failed(WalletError::Rejected { wallet: WalletKind::Solana, .. }))
        ));
        assert!(report.ethereum.is_none());
        assert!(!report.opened_install_page);
        assert!(launcher.opened.borrow().is_empty());
        assert_eq!(*flags.borrow(), vec![true, false]);
    }

    #[tokio::test]
    async fn test_both_providers_are_tried_independently() {
        let solana = FakeProvider::rejecting(WalletKind::Solana);
        let ethereum = FakeProvider::accepting(
            WalletKind::Ethereum,
            "0x52908400098527886E0F7030069857D2E4169EE7",
        );
        let connector = WalletConnector::new(
            ProviderSet::new(Some(solana.clone()), Some(ethereum.clone())),
            Rc::new(FakeLauncher::default()),
            INSTALL_URL,
        );
        let (_flags, state) = recorder();

        let report = connector.connect_wallet(&state).await;

        assert_eq!(solana.calls.get(), 1);
        assert_eq!(ethereum.calls.get(), 1);
        assert!(!report.solana.as_ref().is_some_and(ProviderOutcome::is_connected));
        assert_eq!(
            report.ethereum,
            Some(ProviderOutcome::Connected {
                account: Some("0x52908400098527886E0F7030069857D2E4169EE7".to_string()),
            })
        );
        assert!(report.any_connected());
    }

    #[tokio::test]
    async fn test_successful_solana_connect_reports_account() {
        let solana = FakeProvider::accepting(
            WalletKind::Solana,
            "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL",
        );
        let launcher = Rc::new(FakeLauncher::default());
        let connector = WalletConnector::new(
            ProviderSet::new(Some(solana), None),
            launcher.clone(),
            INSTALL_URL,
        );
        let connecting = Cell::new(false);

        let report = connector.connect_wallet(&|v| connecting.set(v)).await;

        assert!(report.any_connected());
        assert!(!connecting.get());
        assert!(launcher.opened.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_launcher_failure_is_swallowed() {
        let launcher = Rc::new(FakeLauncher {
            fail: true,
            ..FakeLauncher::default()
        });
        let connector = WalletConnector::new(ProviderSet::default(), launcher.clone(), INSTALL_URL);
        let (flags, state) = recorder();

        let report = connector.connect_wallet(&state).await;

        assert_eq!(launcher.opened.borrow().len(), 1);
        assert!(!report.opened_install_page);
        assert_eq!(
            report.error.as_deref(),
            Some("Wallet error: Failed to open https://phantom.app/: popup blocked")
        );
        assert_eq!(*flags.borrow(), vec![true, false]);
    }
}
