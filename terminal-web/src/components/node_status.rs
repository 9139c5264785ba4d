//! Node status panel

use leptos::prelude::*;
use lib_terminal::node_status::{node_status_rows, StatusRow, NODE_STATUS_TITLE};

use crate::utils::classes;

/// A label on the left, a colored value on the right.
#[component]
pub fn StatusLine(row: StatusRow) -> impl IntoView {
    view! {
        <div class="status-line">
            <span class="status-label">{row.label}</span>
            <span class=format!("status-value {}", classes::tone(row.tone))>
                {row.indicator.then(|| view! { <span class="pulse-dot"></span> })}
                {row.value}
            </span>
        </div>
    }
}

#[component]
pub fn NodeStatus() -> impl IntoView {
    view! {
        <div class="panel-body">
            <h3 class="panel-title">{NODE_STATUS_TITLE}</h3>
            {node_status_rows()
                .iter()
                .map(|row| view! { <StatusLine row=*row/> })
                .collect_view()}
        </div>
    }
}
