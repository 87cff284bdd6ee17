//! Error types.

use crate::form::FormField;
use alloc::{string::String, vec::Vec};
use thiserror::Error;

/// Text was rejected because it contains banned terms.
///
/// The `Display` implementation renders the message shown to the user who submitted the text.
///
/// # Example
/// ```
/// use fuzzy_word_filter::{start_filtering, Vocabulary};
///
/// let vocabulary = Vocabulary::new(&["zebra", "apple"]).unwrap();
/// let error = start_filtering("apple and zebra", &vocabulary).unwrap_err();
///
/// assert_eq!(error.to_string(), "Forbidden words used: apple, zebra.");
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Forbidden words used: {}.", .terms.join(", "))]
pub struct ValidationRejected {
    terms: Vec<String>,
}

impl ValidationRejected {
    /// Creates a rejection listing `terms`, which are sorted and de-duplicated.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut terms = terms.into_iter().map(Into::into).collect::<Vec<_>>();
        terms.sort_unstable();
        terms.dedup();
        Self { terms }
    }

    /// The matched banned terms, sorted lexicographically.
    #[inline]
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

/// A form field was rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{field}: {source}")]
pub struct FieldRejected {
    pub field: FormField,
    #[source]
    pub source: ValidationRejected,
}

/// A banned-term vocabulary could not be loaded.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum VocabularyError {
    #[error("banned term at position {index} is empty")]
    EmptyTerm { index: usize },
}

/// A filter configuration could not be loaded.
#[cfg(feature = "config")]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse filter configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("tolerance denominator must not be zero")]
    ZeroDenominator,
    #[error("grapheme segmentation requires the `unicode-segmentation` feature")]
    GraphemesUnavailable,
    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),
}

#[cfg(test)]
mod tests {
    use super::{FieldRejected, ValidationRejected, VocabularyError};
    use crate::form::FormField;
    use std::error::Error;

    #[test]
    fn rejection_message() {
        assert_eq!(
            ValidationRejected::new(["spam"]).to_string(),
            "Forbidden words used: spam."
        );
    }

    #[test]
    fn rejection_terms_sorted_and_distinct() {
        let rejection = ValidationRejected::new(["zebra", "apple", "zebra"]);

        assert_eq!(rejection.terms(), ["apple", "zebra"]);
        assert_eq!(rejection.to_string(), "Forbidden words used: apple, zebra.");
    }

    #[test]
    fn field_rejection_has_source() {
        let error = FieldRejected {
            field: FormField::Comment,
            source: ValidationRejected::new(["spam"]),
        };

        assert_eq!(error.to_string(), "comment: Forbidden words used: spam.");
        assert!(error.source().is_some());
    }

    #[test]
    fn empty_term_message() {
        assert_eq!(
            VocabularyError::EmptyTerm { index: 2 }.to_string(),
            "banned term at position 2 is empty"
        );
    }
}
