//! A fuzzy filter for banned words.
//!
//! Text is normalized before it is checked: it is lowercased, stripped of whitespace, and every
//! look-alike variant registered in a [`SubstitutionTable`] is collapsed onto its canonical
//! character. Each banned term is then compared against every fragment of the normalized text
//! spanning as many units as the term, and the term matches if any fragment is within
//! [`Tolerance`] edits of it.
//!
//! Normalization only serves matching. Accepted text is always handed back exactly as it was
//! submitted.
//!
//! # Example
//! ```
//! use fuzzy_word_filter::{start_filtering, Vocabulary};
//!
//! let vocabulary = Vocabulary::new(&["spam"]).unwrap();
//!
//! assert_eq!(start_filtering("Totally clean text", &vocabulary), Ok("Totally clean text"));
//! assert_eq!(
//!     start_filtering("This is not SP@M at all", &vocabulary).unwrap_err().terms(),
//!     ["spam"],
//! );
//! ```

extern crate alloc;

pub mod levenshtein;
pub mod scan;

mod builder;
#[cfg(feature = "config")]
mod config;
mod error;
mod form;
mod normalize;
mod shared;
mod substitution;
mod vocabulary;

pub use builder::FuzzyFilterBuilder;
#[cfg(feature = "config")]
pub use config::{Alphabet, FilterConfig, SubstitutionConfig, ToleranceConfig};
#[cfg(feature = "config")]
pub use error::ConfigError;
pub use error::{FieldRejected, ValidationRejected, VocabularyError};
pub use form::FormField;
pub use levenshtein::levenshtein;
pub use normalize::{normalize, NormalizeFlags};
pub use scan::Tolerance;
pub use shared::SharedVocabulary;
pub use substitution::{Substitution, SubstitutionTable};
pub use vocabulary::Vocabulary;

use alloc::{string::String, vec::Vec};
use std::sync::OnceLock;
use tracing::{debug, trace};
#[cfg(feature = "unicode-segmentation")]
use unicode_segmentation::UnicodeSegmentation;

/// The outcome of checking a piece of text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterResult<'t, 'v> {
    /// No banned term matched. Holds the original, unnormalized text.
    Accepted(&'t str),
    /// Banned terms matched. Holds the distinct matched terms, sorted lexicographically. Never
    /// empty.
    Rejected(Vec<&'v str>),
}

impl<'t, 'v> FilterResult<'t, 'v> {
    #[inline]
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, FilterResult::Accepted(_))
    }

    #[inline]
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        !self.is_accepted()
    }

    /// Converts into a `Result`, turning a rejection into a [`ValidationRejected`] error.
    pub fn into_result(self) -> Result<&'t str, ValidationRejected> {
        match self {
            FilterResult::Accepted(text) => Ok(text),
            FilterResult::Rejected(terms) => Err(ValidationRejected::new(terms)),
        }
    }
}

/// A configured fuzzy filter.
///
/// A `FuzzyFilter` holds no banned terms itself. The [`Vocabulary`] is passed to every check, so a
/// single filter can serve any number of vocabularies and vocabulary snapshots.
///
/// Construct one with a [`FuzzyFilterBuilder`], or use [`FuzzyFilter::default()`] for the Latin
/// substitution table and a quarter-length tolerance.
#[derive(Clone, Debug)]
pub struct FuzzyFilter {
    table: SubstitutionTable,
    tolerance: Tolerance,
    flags: NormalizeFlags,
    graphemes: bool,
}

impl FuzzyFilter {
    #[inline]
    #[must_use]
    pub fn table(&self) -> &SubstitutionTable {
        &self.table
    }

    #[inline]
    #[must_use]
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    #[inline]
    #[must_use]
    pub fn flags(&self) -> NormalizeFlags {
        self.flags
    }

    /// Whether lengths are measured in grapheme clusters rather than `char`s.
    #[inline]
    #[must_use]
    pub fn graphemes(&self) -> bool {
        self.graphemes
    }

    /// Normalizes `text` using this filter's table and flags.
    #[inline]
    #[must_use]
    pub fn normalize(&self, text: &str) -> String {
        normalize::normalize(text, &self.table, self.flags)
    }

    /// Returns the terms of `vocabulary` matched by already-normalized text.
    ///
    /// The returned terms are distinct and sorted lexicographically.
    #[must_use]
    pub fn matches<'v>(&self, normalized: &str, vocabulary: &'v Vocabulary) -> Vec<&'v str> {
        #[cfg(feature = "unicode-segmentation")]
        {
            if self.graphemes {
                let units = normalized.graphemes(true).collect::<Vec<_>>();
                return self.matches_in(&units, vocabulary, |term| term.graphemes(true).collect());
            }
        }
        let units = normalized.chars().collect::<Vec<_>>();
        self.matches_in(&units, vocabulary, |term| term.chars().collect())
    }

    fn matches_in<'v, T, F>(&self, text: &[T], vocabulary: &'v Vocabulary, split: F) -> Vec<&'v str>
    where
        T: PartialEq,
        F: Fn(&'v str) -> Vec<T>,
    {
        let mut matched = Vec::new();
        for term in vocabulary {
            let term_units = split(term);
            if let Some(fragment) = scan::closest(text, &term_units) {
                if self.tolerance.accepts(term_units.len(), fragment.distance) {
                    trace!(
                        term,
                        offset = fragment.offset,
                        distance = fragment.distance,
                        "banned term matched"
                    );
                    matched.push(term);
                }
            }
        }
        matched.sort_unstable();
        matched.dedup();
        matched
    }

    /// Returns the terms of `vocabulary` found in `text`.
    ///
    /// # Example
    /// ```
    /// use fuzzy_word_filter::{FuzzyFilter, Vocabulary};
    ///
    /// let filter = FuzzyFilter::default();
    /// let vocabulary = Vocabulary::new(&["zebra", "apple", "melon"]).unwrap();
    ///
    /// assert_eq!(filter.find("a zebr4 ate an @pple", &vocabulary), ["apple", "zebra"]);
    /// ```
    #[must_use]
    pub fn find<'v>(&self, text: &str, vocabulary: &'v Vocabulary) -> Vec<&'v str> {
        self.matches(&self.normalize(text), vocabulary)
    }

    /// Checks whether `text` contains any term of `vocabulary`.
    #[must_use]
    pub fn check(&self, text: &str, vocabulary: &Vocabulary) -> bool {
        !self.find(text, vocabulary).is_empty()
    }

    /// Decides whether `text` is accepted.
    ///
    /// # Example
    /// ```
    /// use fuzzy_word_filter::{FilterResult, FuzzyFilter, Vocabulary};
    ///
    /// let filter = FuzzyFilter::default();
    /// let vocabulary = Vocabulary::new(&["bad"]).unwrap();
    ///
    /// assert_eq!(filter.censor("Hello World", &vocabulary), FilterResult::Accepted("Hello World"));
    /// assert_eq!(filter.censor("b a d", &vocabulary), FilterResult::Rejected(vec!["bad"]));
    /// ```
    pub fn censor<'t, 'v>(&self, text: &'t str, vocabulary: &'v Vocabulary) -> FilterResult<'t, 'v> {
        let matched = self.find(text, vocabulary);
        if matched.is_empty() {
            FilterResult::Accepted(text)
        } else {
            debug!(terms = ?matched, "text rejected");
            FilterResult::Rejected(matched)
        }
    }

    /// Filters `text`, returning it unchanged if no term of `vocabulary` matches.
    ///
    /// # Errors
    /// Returns [`ValidationRejected`] listing every matched term if any term matches.
    pub fn start_filtering<'t>(
        &self,
        text: &'t str,
        vocabulary: &Vocabulary,
    ) -> Result<&'t str, ValidationRejected> {
        self.censor(text, vocabulary).into_result()
    }
}

impl Default for FuzzyFilter {
    fn default() -> Self {
        FuzzyFilterBuilder::new().build()
    }
}

fn default_filter() -> &'static FuzzyFilter {
    static DEFAULT: OnceLock<FuzzyFilter> = OnceLock::new();
    DEFAULT.get_or_init(FuzzyFilter::default)
}

/// Filters `text` with the default [`FuzzyFilter`].
///
/// # Errors
/// Returns [`ValidationRejected`] listing every matched term if any term of `vocabulary` matches.
pub fn start_filtering<'t>(
    text: &'t str,
    vocabulary: &Vocabulary,
) -> Result<&'t str, ValidationRejected> {
    default_filter().start_filtering(text, vocabulary)
}

#[cfg(test)]
mod tests {
    use crate::{
        start_filtering, FilterResult, FuzzyFilter, FuzzyFilterBuilder, SubstitutionTable,
        Tolerance, Vocabulary,
    };

    #[test]
    fn find() {
        let vocabulary = Vocabulary::new(&["foo"]).unwrap();

        assert_eq!(FuzzyFilter::default().find("foo", &vocabulary), ["foo"]);
    }

    #[test]
    fn check() {
        let vocabulary = Vocabulary::new(&["spam"]).unwrap();

        assert!(FuzzyFilter::default().check("sp@m", &vocabulary));
        assert!(!FuzzyFilter::default().check("ham", &vocabulary));
    }

    #[test]
    fn censor_accepts_original_text() {
        let vocabulary = Vocabulary::new(&["spam"]).unwrap();

        assert_eq!(
            FuzzyFilter::default().censor("Hello World", &vocabulary),
            FilterResult::Accepted("Hello World")
        );
    }

    #[test]
    fn rejection_is_sorted() {
        let vocabulary = Vocabulary::new(&["zebra", "apple"]).unwrap();

        assert_eq!(
            FuzzyFilter::default().censor("zebra apple", &vocabulary),
            FilterResult::Rejected(vec!["apple", "zebra"])
        );
    }

    #[test]
    fn empty_vocabulary_accepts_everything() {
        assert_eq!(
            start_filtering("anything at all", &Vocabulary::default()),
            Ok("anything at all")
        );
    }

    #[test]
    fn empty_text_is_accepted() {
        let vocabulary = Vocabulary::new(&["a"]).unwrap();

        assert_eq!(start_filtering("", &vocabulary), Ok(""));
        assert_eq!(start_filtering(" \n\t ", &vocabulary), Ok(" \n\t "));
    }

    #[test]
    fn threshold_boundary_for_eight_characters() {
        let vocabulary = Vocabulary::new(&["abcdefgh"]).unwrap();
        let filter = FuzzyFilterBuilder::new()
            .table(SubstitutionTable::new())
            .build();

        // Two substitutions.
        assert!(filter.check("abXdeYgh", &vocabulary));
        // Three substitutions.
        assert!(!filter.check("abXdeYgZ", &vocabulary));
    }

    #[test]
    fn short_terms_match_exactly() {
        let vocabulary = Vocabulary::new(&["bad"]).unwrap();

        assert!(!FuzzyFilter::default().check("bed", &vocabulary));
        assert!(FuzzyFilter::default().check("xbadx", &vocabulary));
    }

    #[test]
    fn tail_fragment_matches() {
        let vocabulary = Vocabulary::new(&["spam"]).unwrap();

        // "spa" at the end is one edit away from "spam".
        assert!(FuzzyFilter::default().check("I went to the spa", &vocabulary));
    }

    #[test]
    fn custom_tolerance() {
        let vocabulary = Vocabulary::new(&["spam"]).unwrap();
        let filter = FuzzyFilterBuilder::new()
            .tolerance(Tolerance::new(1, 2))
            .build();

        assert!(filter.check("sxxm", &vocabulary));
        assert!(!FuzzyFilter::default().check("sxxm", &vocabulary));
    }

    #[test]
    fn into_result() {
        assert_eq!(FilterResult::Accepted("ok").into_result(), Ok("ok"));
        assert_eq!(
            FilterResult::Rejected(vec!["b", "a"])
                .into_result()
                .unwrap_err()
                .terms(),
            ["a", "b"]
        );
    }
}
