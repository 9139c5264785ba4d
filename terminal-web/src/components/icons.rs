//! Inline stroke icons

use leptos::prelude::*;

#[component]
pub fn ChevronLeftIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg class=format!("icon {}", class) viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="m15 18-6-6 6-6"/>
        </svg>
    }
}

#[component]
pub fn UserIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg class=format!("icon {}", class) viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/>
            <circle cx="12" cy="7" r="4"/>
        </svg>
    }
}

#[component]
pub fn ArrowRightIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg class=format!("icon {}", class) viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M5 12h14"/>
            <path d="m12 5 7 7-7 7"/>
        </svg>
    }
}
