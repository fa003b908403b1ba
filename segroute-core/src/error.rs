//! Error types for segroute.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`RouterError`] - Top-level error type for all segroute operations
//! - [`DefineError`] - Errors while parsing a route definition
//! - [`MatchError`] - Errors while decoding an input path

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all segroute operations.
#[derive(Error, Debug)]
pub enum RouterError {
    /// A route definition could not be parsed.
    #[error("define error: {0}")]
    Define(#[from] DefineError),

    /// An input path could not be decoded.
    #[error("match error: {0}")]
    Match(#[from] MatchError),

    /// A value is already bound to the route.
    #[error("route already exists: {0}")]
    AlreadyExists(String),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors that can occur while defining a route.
///
/// Definition is all-or-nothing: when one of these is returned, no node was
/// added to the trie.
#[derive(Error, Debug)]
pub enum DefineError {
    /// The regex body of a `:name(pattern)` segment failed to compile.
    #[error("invalid pattern in segment `{segment}`")]
    Regex {
        /// The raw segment text.
        segment: String,
        /// The underlying compiler error.
        #[source]
        source: regex::Error,
    },

    /// A `:` segment without a parameter name.
    #[error("missing parameter name in segment `{segment}`")]
    EmptyParameterName {
        /// The raw segment text.
        segment: String,
    },

    /// A parameter slot already holds a parameter with a different name.
    #[error("parameter `{name}` conflicts with existing `{existing}`")]
    ConflictingParameter {
        /// Route string of the node already occupying the slot.
        existing: String,
        /// The name the new definition asked for.
        name: String,
    },

    /// A `(a|b)` segment with an empty alternative.
    #[error("empty alternative in segment `{segment}`")]
    EmptyAlternation {
        /// The raw segment text.
        segment: String,
    },
}

/// Errors that can occur while matching a path.
///
/// Not finding a route is not an error; see [`Trie::find`](crate::Trie::find).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// A `%` not followed by two hex digits.
    #[error("malformed percent escape at byte {offset} of segment `{segment}`")]
    MalformedEscape {
        /// The raw segment text.
        segment: String,
        /// Byte offset of the offending `%`.
        offset: usize,
    },

    /// The decoded bytes are not valid UTF-8.
    #[error("segment `{segment}` does not decode to valid UTF-8")]
    InvalidUtf8 {
        /// The raw segment text.
        segment: String,
    },
}

// Convenience conversions
impl From<BoxError> for RouterError {
    fn from(err: BoxError) -> Self {
        RouterError::Custom(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_error_display() {
        let err = MatchError::MalformedEscape {
            segment: "%%%".to_string(),
            offset: 0,
        };
        assert_eq!(
            err.to_string(),
            "malformed percent escape at byte 0 of segment `%%%`"
        );
    }

    #[test]
    fn test_router_error_from_match_error() {
        let err: RouterError = MatchError::InvalidUtf8 {
            segment: "%ff".to_string(),
        }
        .into();
        assert!(matches!(err, RouterError::Match(_)));
        assert_eq!(
            err.to_string(),
            "match error: segment `%ff` does not decode to valid UTF-8"
        );
    }

    #[test]
    fn test_define_error_keeps_source() {
        use std::error::Error as _;

        let source = regex::Regex::new("(").unwrap_err();
        let err = DefineError::Regex {
            segment: ":id(()".to_string(),
            source,
        };
        assert!(err.source().is_some());
    }
}
