//! Connect Wallet button

use leptos::prelude::*;
use lib_terminal::terminal_config;
use lib_terminal::wallet::{ExternalLauncher, WalletConnector};
use std::rc::Rc;

use crate::services::{detect_providers, BrowserLauncher};
use crate::state::terminal::use_terminal_context;
use crate::utils::classes;

#[component]
pub fn ConnectWalletButton() -> impl IntoView {
    let ctx = use_terminal_context();
    let button = move || ctx.session.with(|session| session.connect_button());

    let on_click = move |_| {
        if button().is_disabled() {
            return;
        }

        leptos::task::spawn_local(async move {
            let launcher: Rc<dyn ExternalLauncher> = Rc::new(BrowserLauncher);
            let connector = WalletConnector::new(
                detect_providers(),
                launcher,
                terminal_config().wallet_install_url.clone(),
            );
            log::debug!("Connecting wallet with providers {:?}", connector.providers());

            let report = connector
                .connect_wallet(&|connecting| ctx.set_connecting(connecting))
                .await;
            log::debug!("Connect wallet finished: {:?}", report);
        });
    };

    view! {
        <button
            class=move || classes::connect_button(button().is_disabled())
            disabled=move || button().is_disabled()
            on:click=on_click
        >
            {move || button().label()}
        </button>
    }
}
