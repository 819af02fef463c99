//! Mode — what the landing form is asking for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RepoHelperError, ValidationError};

/// User-selected framing of the landing form.
///
/// The mode only changes the text around the prompt field and the submit
/// button; neither action is wired to anything yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Ask a free-form question about the repository.
    #[default]
    Question,
    /// Request a flowchart of (part of) the repository.
    Flowchart,
}

impl Mode {
    /// Every mode, in the order they are offered to the user.
    #[must_use]
    pub fn all() -> &'static [Mode] {
        &[Mode::Question, Mode::Flowchart]
    }

    /// Stable lowercase spelling, also used as the `<option>` value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Flowchart => "flowchart",
        }
    }

    /// Human-readable name shown in the mode selector.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Question => "Question",
            Self::Flowchart => "Flowchart",
        }
    }

    /// Label of the prompt field.
    #[must_use]
    pub fn prompt_label(self) -> &'static str {
        match self {
            Self::Question => "Your question",
            Self::Flowchart => "Flowchart focus",
        }
    }

    /// Placeholder of the prompt field.
    #[must_use]
    pub fn prompt_placeholder(self) -> &'static str {
        match self {
            Self::Question => "What would you like to know about this repo?",
            Self::Flowchart => "Which part of the repo should the flowchart cover?",
        }
    }

    /// Label of the submit button.
    #[must_use]
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Question => "Ask Question",
            Self::Flowchart => "Display Flowchart",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = RepoHelperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "question" => Ok(Self::Question),
            "flowchart" => Ok(Self::Flowchart),
            other => Err(ValidationError::UnknownMode(other.to_string()).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_question() {
        assert_eq!(Mode::default(), Mode::Question);
    }

    #[test]
    fn should_parse_every_mode_from_its_own_spelling() {
        for mode in Mode::all() {
            assert_eq!(mode.as_str().parse::<Mode>().unwrap(), *mode);
        }
    }

    #[test]
    fn should_reject_unknown_mode() {
        let result = "diagram".parse::<Mode>();
        assert!(matches!(
            result,
            Err(RepoHelperError::Validation(ValidationError::UnknownMode(ref s))) if s == "diagram"
        ));
    }

    #[test]
    fn should_be_case_sensitive_when_parsing() {
        assert!("Question".parse::<Mode>().is_err());
        assert!(" flowchart".parse::<Mode>().is_err());
    }

    #[test]
    fn should_use_distinct_labels_per_mode() {
        assert_ne!(
            Mode::Question.prompt_label(),
            Mode::Flowchart.prompt_label()
        );
        assert_ne!(
            Mode::Question.submit_label(),
            Mode::Flowchart.submit_label()
        );
        assert_eq!(Mode::Question.submit_label(), "Ask Question");
        assert_eq!(Mode::Flowchart.submit_label(), "Display Flowchart");
    }

    #[test]
    fn should_serialize_as_lowercase_string() {
        let json = serde_json::to_string(&Mode::Flowchart).unwrap();
        assert_eq!(json, "\"flowchart\"");
        let parsed: Mode = serde_json::from_str("\"question\"").unwrap();
        assert_eq!(parsed, Mode::Question);
    }

    #[test]
    fn should_display_as_str() {
        assert_eq!(Mode::Question.to_string(), "question");
    }
}
