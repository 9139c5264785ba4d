//! Chat message list with scroll-to-latest

use leptos::{html, prelude::*};
use shared::dto::chat::{Message, MessageKind};

use super::{Logo, UserIcon};
use crate::state::terminal::use_terminal_context;
use crate::utils::classes;

#[component]
pub fn MessageList() -> impl IntoView {
    let ctx = use_terminal_context();
    let session = ctx.session;
    let messages_end = NodeRef::<html::Div>::new();

    // Re-runs whenever the log grows (and once the sentinel mounts).
    Effect::new(move || {
        let revision = session.with(|session| session.messages().revision());
        if let Some(end) = messages_end.get() {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            end.scroll_into_view_with_scroll_into_view_options(&options);
            log::trace!("Scrolled to latest message (revision {})", revision);
        }
    });

    view! {
        <div class="messages">
            <For
                each=move || session.with(|session| session.messages().iter().cloned().collect::<Vec<_>>())
                key=|message| message.id.clone()
                children=|message| view! { <MessageRow message=message/> }
            />
            <div node_ref=messages_end></div>
            <Show when=move || session.with(|session| session.is_typing())>
                <div class="typing-indicator">
                    <span class="pulse-dot"></span>
                    <span class="pulse-dot delay-75"></span>
                    <span class="pulse-dot delay-150"></span>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn MessageRow(message: Message) -> impl IntoView {
    let row_class = classes::message_row(message.kind);

    match message.kind {
        MessageKind::Bot => view! {
            <div class=row_class>
                <div class="avatar">
                    <Logo class="avatar-logo"/>
                </div>
                <div class="bubble bubble-bot">
                    <p>{message.content}</p>
                </div>
            </div>
        }
        .into_any(),
        MessageKind::User => view! {
            <div class=row_class>
                <div class="bubble bubble-user">
                    <p>{message.content}</p>
                </div>
                <div class="avatar">
                    <UserIcon class="avatar-user"/>
                </div>
            </div>
        }
        .into_any(),
    }
}
