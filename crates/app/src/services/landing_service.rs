//! Landing service — what happens when the landing form is submitted.

use repohelper_domain::form::Submission;
use repohelper_domain::mode::Mode;

/// Result of submitting the landing form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing is wired behind this mode yet; the submission was dropped.
    NotImplemented { mode: Mode },
}

/// Application service behind the landing form's submit button.
#[derive(Debug, Clone, Copy, Default)]
pub struct LandingService;

impl LandingService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Dispatch a submission on its mode.
    ///
    /// Neither branch has an effect: no request is sent and no state is
    /// touched. The returned outcome says which branch was taken.
    #[must_use]
    pub fn submit(&self, submission: &Submission) -> SubmitOutcome {
        match submission.mode {
            Mode::Question => {
                tracing::debug!(link = %submission.link, "question mode submitted");
            }
            Mode::Flowchart => {
                tracing::debug!(link = %submission.link, "flowchart mode submitted");
            }
        }
        SubmitOutcome::NotImplemented {
            mode: submission.mode,
        }
    }
}
