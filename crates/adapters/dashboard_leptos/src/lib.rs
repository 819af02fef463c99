//! # repohelper-adapter-dashboard-leptos
//!
//! Client-side rendered front-end.
//!
//! `/` renders the landing form; every other path renders the 404 page.
//! The view is picked with [`Route::resolve`], the same rule the static host
//! uses to pick its status code.

use leptos::prelude::*;
use leptos_router::components::Router;
use leptos_router::hooks::use_location;
use repohelper_domain::route::Route;

mod components;
pub mod navigation;
mod pages;
pub mod routing;
pub mod state;

use pages::{Landing, NotFound};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <CurrentView/>
        </Router>
    }
}

/// Renders exactly one view for the current location.
#[component]
fn CurrentView() -> impl IntoView {
    let pathname = use_location().pathname;
    let route = routing::route_for(move || pathname.get());

    move || match route.get() {
        Route::Landing => view! { <Landing/> }.into_any(),
        Route::NotFound => view! { <NotFound/> }.into_any(),
    }
}

/// Install panic and tracing hooks, then mount [`App`] on `<body>`.
pub fn start() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();

    tracing::info!("mounting repohelper front-end");
    leptos::mount::mount_to_body(App);
}
