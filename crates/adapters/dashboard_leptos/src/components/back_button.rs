//! Button stepping back one entry in the browser history.

use leptos::prelude::*;
use repohelper_app::services::navigation_service::NavigationService;

use crate::navigation::BrowserHistory;

/// "Back" button. Each click calls `history.back()` once.
#[component]
pub fn BackButton() -> impl IntoView {
    let navigation = NavigationService::new(BrowserHistory);

    let on_click = move |_| {
        if let Err(err) = navigation.go_back() {
            tracing::warn!(error = %err, "unable to navigate back");
        }
    };

    view! {
        <button type="button" class="back-button" on:click=on_click>
            "\u{2190} Back"
        </button>
    }
}
