//! Banned-term vocabularies.
//!
//! A [`Vocabulary`] is an immutable, ordered snapshot of distinct lowercase banned terms. Malformed
//! entries are rejected here, when the vocabulary is loaded, so the filter itself never has to deal
//! with them.

use crate::error::VocabularyError;
use alloc::{string::String, vec::Vec};
use core::iter::FusedIterator;
use hashbrown::HashSet;

/// An ordered set of banned terms.
///
/// Terms are trimmed and lowercased when loaded. Duplicates keep their first position.
///
/// # Example
/// ```
/// use fuzzy_word_filter::Vocabulary;
///
/// let vocabulary = Vocabulary::new(&["Spam", "scam", "spam"]).unwrap();
///
/// assert_eq!(vocabulary.iter().collect::<Vec<_>>(), ["spam", "scam"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Vocabulary {
    /// Loads a vocabulary from `terms`.
    ///
    /// Fails on the first term that is empty after trimming.
    pub fn new<I, S>(terms: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut loader = Loader::default();
        for (index, term) in terms.into_iter().enumerate() {
            let term = term.as_ref().trim();
            if term.is_empty() {
                return Err(VocabularyError::EmptyTerm { index });
            }
            loader.push(term);
        }
        Ok(loader.finish())
    }

    /// Parses a vocabulary listing one term per line.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    ///
    /// # Example
    /// ```
    /// use fuzzy_word_filter::Vocabulary;
    ///
    /// let vocabulary = Vocabulary::from_lines("# spam words\nspam\n\n  Scam \n");
    ///
    /// assert_eq!(vocabulary.iter().collect::<Vec<_>>(), ["spam", "scam"]);
    /// ```
    #[must_use]
    pub fn from_lines(text: &str) -> Self {
        let mut loader = Loader::default();
        for line in text.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            loader.push(line);
        }
        loader.finish()
    }

    /// Number of distinct terms.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Whether `term` is in the vocabulary, compared case-insensitively.
    #[must_use]
    pub fn contains(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        self.terms.iter().any(|existing| *existing == term)
    }

    /// Iterates over the terms in load order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.terms.iter(),
        }
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the terms of a [`Vocabulary`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: core::slice::Iter<'a, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(String::as_str)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Accumulates distinct lowercase terms in order.
#[derive(Default)]
struct Loader {
    seen: HashSet<String>,
    terms: Vec<String>,
}

impl Loader {
    fn push(&mut self, term: &str) {
        let term = term.to_lowercase();
        if self.seen.insert(term.clone()) {
            self.terms.push(term);
        }
    }

    fn finish(self) -> Vocabulary {
        Vocabulary { terms: self.terms }
    }
}

#[cfg(test)]
mod tests {
    use super::Vocabulary;
    use crate::error::VocabularyError;
    use alloc::vec::Vec;
    use indoc::indoc;

    #[test]
    fn lowercases_and_trims() {
        let vocabulary = Vocabulary::new(&[" SPAM ", "Плохое"]).unwrap();

        assert_eq!(vocabulary.iter().collect::<Vec<_>>(), ["spam", "плохое"]);
    }

    #[test]
    fn deduplicates_keeping_first_position() {
        let vocabulary = Vocabulary::new(&["b", "a", "B", "c", "a"]).unwrap();

        assert_eq!(vocabulary.iter().collect::<Vec<_>>(), ["b", "a", "c"]);
        assert_eq!(vocabulary.len(), 3);
    }

    #[test]
    fn rejects_empty_term() {
        assert_eq!(
            Vocabulary::new(&["spam", "", "scam"]),
            Err(VocabularyError::EmptyTerm { index: 1 })
        );
    }

    #[test]
    fn rejects_whitespace_only_term() {
        assert_eq!(
            Vocabulary::new(&["  \t"]),
            Err(VocabularyError::EmptyTerm { index: 0 })
        );
    }

    #[test]
    fn empty_vocabulary() {
        let vocabulary = Vocabulary::new(Vec::<&str>::new()).unwrap();

        assert!(vocabulary.is_empty());
        assert_eq!(vocabulary, Vocabulary::default());
    }

    #[test]
    fn from_lines() {
        let vocabulary = Vocabulary::from_lines(indoc! {"
            # Moderation list
            spam

              Scam
            # trailing comment
            spam
        "});

        assert_eq!(vocabulary.iter().collect::<Vec<_>>(), ["spam", "scam"]);
    }

    #[test]
    fn contains_ignores_case() {
        let vocabulary = Vocabulary::new(&["spam"]).unwrap();

        assert!(vocabulary.contains("SPAM"));
        assert!(!vocabulary.contains("scam"));
    }
}
