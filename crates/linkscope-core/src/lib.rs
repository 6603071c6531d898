//! linkscope: classify a URL and outline its host and query parameters,
//! recursing into parameter values that are URLs themselves.

pub mod config;
pub mod inspect;
pub mod labels;
pub mod logging;
pub mod outline;
pub mod render;
pub mod uri;
pub mod validator;

pub use inspect::{Inspection, Inspector};
pub use outline::{build_outline, OutlineBuilder, OutlineNode, ParameterEntry};
pub use validator::{classify, Actions, ValidationState};
