//! Navigator link error types

use thiserror::Error;

/// Errors that can occur while building a Navigator deep link
#[derive(Debug, Error)]
pub enum NavigatorLinkError {
    /// A text field could not be percent-encoded for the URL query
    #[error("Cannot encode {text:?} for a Navigator link")]
    Unencodable {
        /// The original string that failed to encode
        text: String,
    },

    /// The assembled link did not parse as a URL
    #[error("Generated link is not a valid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    InvalidConfiguration(String),
}

impl NavigatorLinkError {
    /// The string that failed to encode, if this is an encoding failure
    #[must_use]
    pub fn unencodable_text(&self) -> Option<&str> {
        match self {
            Self::Unencodable { text } => Some(text),
            _ => None,
        }
    }
}
