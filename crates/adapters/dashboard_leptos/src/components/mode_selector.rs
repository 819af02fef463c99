//! Drop-down for switching between question and flowchart mode.

use leptos::prelude::*;
use repohelper_domain::mode::Mode;

use crate::state::LandingFormState;

/// A `<select>` bound to the form's mode.
#[component]
pub fn ModeSelector(
    /// Form whose mode is edited.
    form: LandingFormState,
) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        match value.parse::<Mode>() {
            Ok(mode) => form.set_mode(mode),
            Err(err) => tracing::warn!(error = %err, "ignoring mode selection"),
        }
    };

    view! {
        <label for="mode">"Mode"</label>
        <select id="mode" name="mode" on:change=on_change>
            {Mode::all()
                .iter()
                .map(|&mode| {
                    view! {
                        <option value=mode.as_str() prop:selected=move || form.mode() == mode>
                            {mode.display_name()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
