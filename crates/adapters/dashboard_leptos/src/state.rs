//! Reactive wrapper around the landing form.

use leptos::prelude::*;
use repohelper_domain::form::{LandingForm, Submission};
use repohelper_domain::mode::Mode;

/// Signal-backed [`LandingForm`], scoped to one mount of the landing page.
///
/// `Copy` so it can be moved into every event handler and reactive closure
/// of the view. Getters track the signal; setters notify subscribers.
#[derive(Clone, Copy)]
pub struct LandingFormState {
    form: RwSignal<LandingForm>,
}

impl Default for LandingFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl LandingFormState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(LandingForm::new()),
        }
    }

    #[must_use]
    pub fn link_text(&self) -> String {
        self.form.with(|form| form.link_text().to_string())
    }

    #[must_use]
    pub fn prompt_text(&self) -> String {
        self.form.with(|form| form.prompt_text().to_string())
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.form.with(LandingForm::mode)
    }

    pub fn set_link_text(&self, text: String) {
        self.form.update(|form| form.set_link_text(text));
    }

    pub fn set_prompt_text(&self, text: String) {
        self.form.update(|form| form.set_prompt_text(text));
    }

    pub fn set_mode(&self, mode: Mode) {
        self.form.update(|form| form.set_mode(mode));
    }

    /// Snapshot for the submit handler. Does not track.
    #[must_use]
    pub fn submission(&self) -> Submission {
        self.form.with_untracked(LandingForm::submission)
    }

    /// Untracked copy of the whole form.
    #[must_use]
    pub fn snapshot(&self) -> LandingForm {
        self.form.get_untracked()
    }
}
