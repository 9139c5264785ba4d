//! Verbot brand mark

use leptos::prelude::*;

#[component]
pub fn Logo(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg class=format!("logo {}", class) viewBox="0 0 32 32" fill="none" aria-label="Verbot">
            <rect x="2" y="2" width="28" height="28" rx="8" fill="#1e3a8a" fill-opacity="0.6"/>
            <path d="M9 10 L16 23 L23 10" stroke="#60a5fa" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round"/>
            <circle cx="16" cy="9" r="1.8" fill="#a78bfa"/>
        </svg>
    }
}
