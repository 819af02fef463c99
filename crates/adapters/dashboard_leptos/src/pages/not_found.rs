use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::BackButton;

/// 404 page displayed when no route matches.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1 class="display">"404"</h1>
            <b>"Page Not Found"</b>
            <p class="lead">
                "The page you are looking for might have been removed, had its name changed, or is temporarily unavailable."
            </p>
            <p>"Please try the following:"</p>
            <ul class="suggestions">
                <li>
                    "If you typed the page address in the address bar, make sure that it is spelled correctly."
                </li>
                <li>
                    "Open the " <A href="/">"home page"</A>
                    ", and then look for links to the information you want."
                </li>
                <li>"Click the " <BackButton/> " button to try another link."</li>
            </ul>
        </div>
    }
}
