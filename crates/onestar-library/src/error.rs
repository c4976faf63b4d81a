//! # Design
//!
//! - Every variant here is fatal to a run; per-item deletion failures live in
//!   the fsops crate.
//! - Keep messages constant and carry context in fields.

use thiserror::Error;

/// Result type for library access.
pub type LibraryResult<T> = Result<T, LibraryError>;

/// Errors produced while fetching or interpreting the library listing.
#[derive(Debug, Error)]
pub enum LibraryError {
    /// The HTTP request failed or returned an error status.
    #[error("library request failed")]
    Http {
        /// Endpoint that was requested.
        url: String,
        /// Underlying HTTP client error.
        source: reqwest::Error,
    },
    /// The listing is not well-formed XML.
    #[error("library listing is not well-formed")]
    Xml {
        /// Underlying XML error.
        source: quick_xml::Error,
    },
    /// The listing parsed but its structure is unusable.
    #[error("library listing is malformed: {reason}")]
    Malformed {
        /// Static reason for the failure.
        reason: &'static str,
    },
    /// A one-star video lacked an attribute needed to act on it.
    #[error("one-star video is missing its {field} attribute")]
    MissingAttribute {
        /// Attribute that was missing.
        field: &'static str,
        /// Position of the video in the listing, starting at one.
        position: u64,
        /// Title of the video when known.
        title: Option<String>,
    },
    /// The file-name pattern used for directory derivation failed to compile.
    #[error("failed to compile file name pattern")]
    Pattern {
        /// Underlying regex error.
        source: regex::Error,
    },
}

impl From<quick_xml::Error> for LibraryError {
    fn from(source: quick_xml::Error) -> Self {
        Self::Xml { source }
    }
}

impl From<quick_xml::events::attributes::AttrError> for LibraryError {
    fn from(source: quick_xml::events::attributes::AttrError) -> Self {
        Self::Xml {
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn missing_attribute_names_the_field() {
        let err = LibraryError::MissingAttribute {
            field: "file",
            position: 3,
            title: Some("Old Show".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "one-star video is missing its file attribute"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn malformed_includes_reason() {
        let err = LibraryError::Malformed {
            reason: "unclosed element",
        };
        assert_eq!(
            err.to_string(),
            "library listing is malformed: unclosed element"
        );
    }
}
