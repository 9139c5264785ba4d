//! Router and top-level layout

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::pages::{HomePage, TerminalPage};
use crate::utils::constants::HOME_ROUTE;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="app-container">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/terminal") view=TerminalPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="centered">
            <div class="card not-found">
                <h1>"404 - Page Not Found"</h1>
                <p class="muted">"The page you're looking for doesn't exist."</p>
                <A href=HOME_ROUTE>
                    <span class="btn">"Go to Home"</span>
                </A>
            </div>
        </div>
    }
}
