//! User-facing strings, supplied by the host as a key → template mapping.
//!
//! Templates may contain `{length}` or `{state}` placeholders. Any key missing
//! from the `[labels]` config table falls back to the built-in default.

use serde::{Deserialize, Serialize};

use crate::validator::ValidationState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Input length line; `{length}` is the character count.
    pub length: String,
    /// State line; `{state}` is one of the state names below.
    pub state: String,
    pub ok: String,
    pub invalid: String,
    pub missing_scheme: String,
    pub empty: String,
    /// Shown instead of an outline when there is none.
    pub no_parameters: String,
    /// Shown when the host was started without any URL.
    pub no_input: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            length: "Length: {length}".to_string(),
            state: "State: {state}".to_string(),
            ok: "OK".to_string(),
            invalid: "Invalid URL".to_string(),
            missing_scheme: "Missing URI scheme (http:// or https://)".to_string(),
            empty: "Empty".to_string(),
            no_parameters: "No parameters to display.".to_string(),
            no_input: "Please open this app with a link.".to_string(),
        }
    }
}

impl Labels {
    /// Human-readable name for `state`.
    pub fn state_name(&self, state: ValidationState) -> &str {
        match state {
            ValidationState::Valid => &self.ok,
            ValidationState::Invalid => &self.invalid,
            ValidationState::MissingScheme => &self.missing_scheme,
            ValidationState::Empty => &self.empty,
        }
    }

    pub fn length_line(&self, length: usize) -> String {
        self.length.replace("{length}", &length.to_string())
    }

    pub fn state_line(&self, state: ValidationState) -> String {
        self.state.replace("{state}", self.state_name(state))
    }
}
