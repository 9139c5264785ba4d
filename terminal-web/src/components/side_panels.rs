//! Network, wallet and activity panels

use leptos::prelude::*;
use lib_terminal::panels::{
    wallet_connection_row, ActivityFeed, CLOCK_LABEL, NETWORK_ROW, RECENT_ACTIVITY_TITLE,
    SERVICE_ROW, WALLET_STATUS_TITLE,
};

use super::{ClockDisplay, StatusLine};

#[component]
pub fn NetworkPanel() -> impl IntoView {
    view! {
        <div class="panel-body">
            <StatusLine row=NETWORK_ROW/>
            <div class="status-line">
                <span class="status-label">{CLOCK_LABEL}</span>
                <ClockDisplay/>
            </div>
            <StatusLine row=SERVICE_ROW/>
        </div>
    }
}

#[component]
pub fn WalletStatusPanel() -> impl IntoView {
    view! {
        <div class="panel-body">
            <h3 class="panel-title">{WALLET_STATUS_TITLE}</h3>
            <StatusLine row=wallet_connection_row()/>
        </div>
    }
}

#[component]
pub fn RecentActivityPanel() -> impl IntoView {
    let feed = ActivityFeed::default();

    view! {
        <div class="panel-body">
            <h3 class="panel-title">{RECENT_ACTIVITY_TITLE}</h3>
            {match feed.empty_state() {
                Some(text) => view! { <div class="empty-state">{text}</div> }.into_any(),
                None => feed
                    .items()
                    .iter()
                    .map(|item| view! {
                        <div class="activity-item">
                            <span class="activity-title">{item.title.clone()}</span>
                            <span class="activity-detail">{item.detail.clone()}</span>
                        </div>
                    })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
