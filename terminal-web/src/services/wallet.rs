//! Browser Wallet Providers via wasm-bindgen
//!
//! Exposes the wallet objects extensions inject into `window` as
//! [`WalletProvider`]s, and `window.open` as the [`ExternalLauncher`].
//!
//! Presence is read at call time, so a wallet installed after page load is
//! picked up by the next connect attempt.

use async_trait::async_trait;
use lib_terminal::error::WalletError;
use lib_terminal::wallet::{ExternalLauncher, ProviderSet, WalletKind, WalletProvider};
use std::rc::Rc;
use wasm_bindgen::prelude::*;

use crate::utils::constants::NEW_TAB_TARGET;

#[wasm_bindgen(inline_js = "
export function isInjected(name) {
    return typeof window[name] !== 'undefined';
}

export async function solanaConnect() {
    const response = await window.solana.connect();
    const key = (response && response.publicKey) || window.solana.publicKey;
    return key ? key.toString() : null;
}

export async function ethereumRequestAccounts() {
    const accounts = await window.ethereum.request({ method: 'eth_requestAccounts' });
    return Array.isArray(accounts) && accounts.length > 0 ? String(accounts[0]) : null;
}
")]
extern "C" {
    /// Whether `window[name]` is defined
    #[wasm_bindgen(js_name = isInjected)]
    fn is_injected(name: &str) -> bool;

    /// `window.solana.connect()`, resolving to the public key string
    #[wasm_bindgen(js_name = solanaConnect, catch)]
    async fn solana_connect() -> Result<JsValue, JsValue>;

    /// `eth_requestAccounts`, resolving to the first account
    #[wasm_bindgen(js_name = ethereumRequestAccounts, catch)]
    async fn ethereum_request_accounts() -> Result<JsValue, JsValue>;
}

/// Pull a readable message out of a rejected promise value.
fn js_error_message(err: &JsValue) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

/// A provider object injected by a browser extension.
#[derive(Debug, Clone, Copy)]
pub struct InjectedProvider {
    kind: WalletKind,
}

impl InjectedProvider {
    /// The provider for `kind`, if the browser injected one.
    pub fn detect(kind: WalletKind) -> Option<Self> {
        is_injected(kind.injected_global()).then_some(Self { kind })
    }
}

#[async_trait(?Send)]
impl WalletProvider for InjectedProvider {
    fn kind(&self) -> WalletKind {
        self.kind
    }

    async fn connect(&self) -> Result<Option<String>, WalletError> {
        let response = match self.kind {
            WalletKind::Solana => solana_connect().await,
            WalletKind::Ethereum => ethereum_request_accounts().await,
        };

        response
            .map(|account| account.as_string())
            .map_err(|err| WalletError::rejected(self.kind, js_error_message(&err)))
    }
}

/// Providers injected right now.
pub fn detect_providers() -> ProviderSet {
    let found = |kind| {
        InjectedProvider::detect(kind).map(|provider| Rc::new(provider) as Rc<dyn WalletProvider>)
    };
    ProviderSet::new(found(WalletKind::Solana), found(WalletKind::Ethereum))
}

/// Opens pages in a new tab via `window.open`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLauncher;

impl ExternalLauncher for BrowserLauncher {
    fn open(&self, url: &str) -> Result<(), WalletError> {
        let launch_failed = |message: String| WalletError::LaunchFailed {
            url: url.to_string(),
            message,
        };

        let window = web_sys::window().ok_or_else(|| launch_failed("no window".to_string()))?;
        window
            .open_with_url_and_target(url, NEW_TAB_TARGET)
            .map(|_| ())
            .map_err(|err| launch_failed(js_error_message(&err)))
    }
}
