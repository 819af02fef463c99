use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use repohelper_app::services::landing_service::LandingService;

use crate::components::ModeSelector;
use crate::state::LandingFormState;

/// Landing page: repository link, mode, prompt, and a submit button.
///
/// Form state is local to this mount and is dropped when navigating away.
#[component]
pub fn Landing() -> impl IntoView {
    let form = LandingFormState::new();
    let service = LandingService::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let outcome = service.submit(&form.submission());
        tracing::debug!(?outcome, "landing form submitted");
    };

    view! {
        <div class="container">
            <header class="header">
                <h1>"GitHub Helper"</h1>
            </header>
            <main class="main-content">
                <h2>"Welcome to GitHub Helper"</h2>
                <p>"Ask questions about any GitHub repo or visualize its structure."</p>
                <form class="landing-form" on:submit=on_submit>
                    <label for="repo-link">"Repository link"</label>
                    <input
                        id="repo-link"
                        type="text"
                        placeholder="Enter GitHub repo link"
                        prop:value=move || form.link_text()
                        on:input=move |ev| form.set_link_text(event_target_value(&ev))
                    />
                    <ModeSelector form/>
                    <label for="prompt">{move || form.mode().prompt_label()}</label>
                    <input
                        id="prompt"
                        type="text"
                        placeholder=move || form.mode().prompt_placeholder()
                        prop:value=move || form.prompt_text()
                        on:input=move |ev| form.set_prompt_text(event_target_value(&ev))
                    />
                    <button type="submit">{move || form.mode().submit_label()}</button>
                </form>
            </main>
            <footer class="footer">
                <p>"\u{00A9} 2023 GitHub Helper"</p>
            </footer>
        </div>
    }
}
