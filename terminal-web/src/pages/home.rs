//! Home Page - entry point linking into the terminal

use leptos::prelude::*;
use leptos_router::components::A;
use lib_terminal::terminal_config;

use crate::components::{ArrowRightIcon, Logo};
use crate::utils::constants::TERMINAL_ROUTE;

#[component]
pub fn HomePage() -> impl IntoView {
    let brand = terminal_config().brand.clone();

    view! {
        <div class="centered">
            <div class="card home-card">
                <Logo class="home-logo"/>
                <h1 class="home-title">{brand}</h1>
                <p class="muted">"Your AI trading assistant for on-chain markets."</p>
                <A href=TERMINAL_ROUTE>
                    <span class="btn">
                        "Open Terminal"
                        <ArrowRightIcon class="btn-icon"/>
                    </span>
                </A>
            </div>
        </div>
    }
}
