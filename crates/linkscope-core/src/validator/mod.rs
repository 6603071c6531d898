//! URL classification.
//!
//! Every input string maps to exactly one [`ValidationState`]; classification
//! never fails. The same web-URL pattern backs [`looks_like_url`], which the
//! outline builder uses to decide whether a parameter value is a link.

mod pattern;

use serde::Serialize;

pub use pattern::matches_web_url;

/// Outcome of classifying one input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationState {
    /// Zero-length input.
    Empty,
    /// Does not match the general web-URL syntax.
    Invalid,
    /// Matches the syntax but does not start with `http://` or `https://`.
    MissingScheme,
    /// Matches the syntax and has an `http`/`https` scheme.
    Valid,
}

impl ValidationState {
    /// Key used to look up the human-readable name in [`crate::labels::Labels`].
    pub fn label_key(self) -> &'static str {
        match self {
            ValidationState::Empty => "empty",
            ValidationState::Invalid => "invalid",
            ValidationState::MissingScheme => "missing_scheme",
            ValidationState::Valid => "ok",
        }
    }

    pub fn is_valid(self) -> bool {
        self == ValidationState::Valid
    }

    /// Which host actions are available for input in this state.
    pub fn actions(self) -> Actions {
        Actions {
            open: self == ValidationState::Valid,
            clear: self != ValidationState::Empty,
        }
    }
}

/// Enablement of the host's "open" and "clear" actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Actions {
    pub open: bool,
    pub clear: bool,
}

/// Classifies `input` into one of the four states.
pub fn classify(input: &str) -> ValidationState {
    let state = if input.is_empty() {
        ValidationState::Empty
    } else if !looks_like_url(input) {
        ValidationState::Invalid
    } else if has_web_scheme(input) {
        ValidationState::Valid
    } else {
        ValidationState::MissingScheme
    };
    tracing::debug!(length = input.chars().count(), ?state, "classified input");
    state
}

/// Scheme-optional link test used for parameter values.
pub fn looks_like_url(input: &str) -> bool {
    matches_web_url(input)
}

/// Case-insensitive `http://` or `https://` prefix test.
pub fn has_web_scheme(input: &str) -> bool {
    starts_with_ignore_case(input, "http://") || starts_with_ignore_case(input, "https://")
}

fn starts_with_ignore_case(input: &str, prefix: &str) -> bool {
    input
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
