//! Terminal Page - chat pane with status side panels
//!
//! Owns the session context and the entrance animation. The clock keeps its
//! own timer inside the network panel.

use leptos::prelude::*;
use leptos_router::components::A;
use lib_terminal::entrance::Entrance;
use lib_terminal::terminal_config;

use crate::components::{
    ChatInput, ChevronLeftIcon, ConnectWalletButton, Logo, MessageList, NetworkPanel, NodeStatus,
    RecentActivityPanel, WalletStatusPanel,
};
use crate::services::GlooScheduler;
use crate::state::terminal::provide_terminal_context;
use crate::utils::classes::{reveal, Offstage};
use crate::utils::constants::{BACK_LABEL, HOME_ROUTE};

#[component]
pub fn TerminalPage() -> impl IntoView {
    let config = terminal_config();
    let ctx = provide_terminal_context(config);

    let entrance = Entrance::start(&GlooScheduler, config.entrance_delay(), move || ctx.mark_loaded());
    let entrance = StoredValue::new_local(entrance);
    on_cleanup(move || entrance.dispose());

    let loaded = move || ctx.is_loaded();
    let brand = config.brand.clone();

    view! {
        <div class="terminal-page">
            <div class=move || reveal("backdrop", loaded(), Offstage::Fade)>
                <div class=move || reveal("backdrop-grid", loaded(), Offstage::Zoomed)></div>
                <div class=move || reveal("orb orb-blue", loaded(), Offstage::Below)></div>
                <div class=move || reveal("orb orb-purple delay-300", loaded(), Offstage::Above)></div>
            </div>

            <div class=move || reveal("top-bar", loaded(), Offstage::Above)>
                <A href=HOME_ROUTE>
                    <span class="back-link">
                        <ChevronLeftIcon/>
                        <span>{BACK_LABEL}</span>
                    </span>
                </A>
                <ConnectWalletButton/>
            </div>

            <div class=move || reveal("terminal-layout delay-200", loaded(), Offstage::Below)>
                <aside class="side-column">
                    <section class="panel"><NodeStatus/></section>
                    <section class="panel"><NetworkPanel/></section>
                    <section class="panel"><WalletStatusPanel/></section>
                    <section class="panel"><RecentActivityPanel/></section>
                </aside>

                <section class="terminal-window">
                    <header class="terminal-header">
                        <Logo class="header-logo"/>
                        <h2>{brand}</h2>
                    </header>
                    <MessageList/>
                    <ChatInput/>
                </section>
            </div>
        </div>
    }
}
