//! Synchronous request/response boundary for hosts.
//!
//! A host (terminal, batch script, request handler) hands over the current
//! input text and gets back everything it needs to display: length, state,
//! action enablement, and the outline when the input is valid.

use serde::Serialize;

use crate::outline::{OutlineBuilder, OutlineNode};
use crate::validator::{self, Actions, ValidationState};

/// Result of inspecting one input string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspection {
    pub input: String,
    /// Length in characters.
    pub length: usize,
    pub state: ValidationState,
    pub actions: Actions,
    /// Present only for valid input that is hierarchical.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<OutlineNode>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Inspector {
    builder: OutlineBuilder,
}

impl Inspector {
    pub fn new(builder: OutlineBuilder) -> Self {
        Self { builder }
    }

    pub fn inspect(&self, input: &str) -> Inspection {
        let state = validator::classify(input);
        let outline = if state.is_valid() {
            self.builder.build(input)
        } else {
            None
        };
        Inspection {
            input: input.to_string(),
            length: input.chars().count(),
            state,
            actions: state.actions(),
            outline,
        }
    }
}
