//! Chat input form, gated until a chat backend is available

use leptos::{ev::SubmitEvent, prelude::*};
use lib_terminal::chat::{ChatBackend, OfflineChat};

use super::ArrowRightIcon;
use crate::state::terminal::use_terminal_context;

#[component]
pub fn ChatInput() -> impl IntoView {
    let ctx = use_terminal_context();
    let backend = OfflineChat;
    let status = backend.status();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let outcome = ctx.session.with_untracked(|session| session.submit(&backend));
        log::debug!("Chat submit: {:?}", outcome);
    };

    view! {
        <form class="chat-form" on:submit=on_submit>
            <div class="chat-input-wrap">
                <input
                    type="text"
                    class="chat-input"
                    prop:value=move || ctx.session.with(|session| session.input().to_string())
                    placeholder=status.placeholder()
                    disabled=!status.input_enabled()
                />
                <button type="submit" class="chat-submit" disabled=!status.input_enabled()>
                    <ArrowRightIcon/>
                </button>
            </div>
        </form>
    }
}
