//! Landing form — the three fields a visitor fills in before submitting.

use serde::{Deserialize, Serialize};

use crate::mode::Mode;

/// Ephemeral state of the landing form.
///
/// Lives only as long as the landing view is mounted. None of the fields
/// are validated: the link is whatever the visitor typed, and the prompt is
/// free-form text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LandingForm {
    link_text: String,
    mode: Mode,
    prompt_text: String,
}

impl LandingForm {
    /// Create an empty form in the default [`Mode`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn link_text(&self) -> &str {
        &self.link_text
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn prompt_text(&self) -> &str {
        &self.prompt_text
    }

    /// Replace the repository link verbatim.
    pub fn set_link_text(&mut self, text: impl Into<String>) {
        self.link_text = text.into();
    }

    /// Switch mode. The link and prompt are left untouched.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Replace the prompt verbatim.
    pub fn set_prompt_text(&mut self, text: impl Into<String>) {
        self.prompt_text = text.into();
    }

    /// Label of the prompt field for the current mode.
    #[must_use]
    pub fn prompt_label(&self) -> &'static str {
        self.mode.prompt_label()
    }

    /// Label of the submit button for the current mode.
    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        self.mode.submit_label()
    }

    /// Snapshot the form as it stands at submit time.
    #[must_use]
    pub fn submission(&self) -> Submission {
        Submission {
            link: self.link_text.clone(),
            mode: self.mode,
            prompt: self.prompt_text.clone(),
        }
    }
}

/// Owned snapshot of a [`LandingForm`] handed to the submit use-case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub link: String,
    pub mode: Mode,
    pub prompt: String,
}
