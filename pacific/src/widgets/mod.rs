//! Built-in widgets.
//!
//! Each widget is a builder that produces a `webdom::Element`. Widgets hold
//! no state between renders; a new builder is made for every render pass.

pub mod text_input;

use thiserror::Error;

pub use text_input::{InputType, TextInput, TextInputConfig, Width};

/// Errors from parsing widget option strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown input type '{0}' (expected email, number, password, search, tel, text or url)")]
    InputType(String),

    #[error("unknown width '{0}' (expected default or full)")]
    Width(String),
}
