//! Sliding-window fragment scanning.
//!
//! A banned term is compared against every fragment of the normalized text that starts at some
//! offset and spans as many units as the term. Fragments starting near the end of the text are
//! cut short rather than skipped, so a truncated term at the very end of the text is still
//! compared.

use crate::levenshtein;
use const_fn_assert::cfn_assert;

/// The closest fragment found for a term.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fragment {
    /// Offset of the fragment in the scanned units.
    pub offset: usize,
    /// Edit distance between the fragment and the term.
    pub distance: usize,
}

/// Returns the fragment of `text` closest to `term`.
///
/// The earliest fragment wins ties. Returns `None` if `text` is empty, since there are no
/// fragments to compare.
pub fn closest<T>(text: &[T], term: &[T]) -> Option<Fragment>
where
    T: PartialEq,
{
    let mut best: Option<Fragment> = None;

    for offset in 0..text.len() {
        let end = text.len().min(offset + term.len());
        let distance = levenshtein::distance(&text[offset..end], term);
        if best.map_or(true, |fragment| distance < fragment.distance) {
            best = Some(Fragment { offset, distance });
            if distance == 0 {
                break;
            }
        }
    }

    best
}

/// Returns the minimal edit distance between `term` and any fragment of `text`.
///
/// # Example
/// ```
/// use fuzzy_word_filter::scan::scan;
///
/// let text = "thisisnotspamatall".chars().collect::<Vec<_>>();
/// let term = "spam".chars().collect::<Vec<_>>();
///
/// assert_eq!(scan(&text, &term), Some(0));
/// assert_eq!(scan(&[], &term), None);
/// ```
#[inline]
pub fn scan<T>(text: &[T], term: &[T]) -> Option<usize>
where
    T: PartialEq,
{
    closest(text, term).map(|fragment| fragment.distance)
}

/// The share of a term's length that may be edited while still counting as a match.
///
/// The allowed distance for a term of length `len` is `floor(len * numerator / denominator)`,
/// computed with integer arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tolerance {
    numerator: usize,
    denominator: usize,
}

impl Tolerance {
    /// A quarter of the term's length.
    pub const QUARTER: Self = Self::new(1, 4);
    /// Only exact fragments match.
    pub const EXACT: Self = Self::new(0, 1);

    /// Creates a new `Tolerance` of `numerator / denominator`.
    ///
    /// A zero `denominator` fails to compile when evaluated in a const context, and panics
    /// otherwise. Use [`Tolerance::checked()`] for values that are not known ahead of time.
    pub const fn new(numerator: usize, denominator: usize) -> Self {
        cfn_assert!(denominator != 0);

        Self {
            numerator,
            denominator,
        }
    }

    /// Creates a new `Tolerance`, returning `None` if `denominator` is zero.
    pub const fn checked(numerator: usize, denominator: usize) -> Option<Self> {
        if denominator == 0 {
            None
        } else {
            Some(Self {
                numerator,
                denominator,
            })
        }
    }

    #[inline]
    #[must_use]
    pub const fn numerator(&self) -> usize {
        self.numerator
    }

    #[inline]
    #[must_use]
    pub const fn denominator(&self) -> usize {
        self.denominator
    }

    /// The largest edit distance accepted as a match for a term `len` units long.
    #[inline]
    #[must_use]
    pub const fn max_distance(&self, len: usize) -> usize {
        len.saturating_mul(self.numerator) / self.denominator
    }

    /// Whether `distance` is close enough for a term `len` units long.
    #[inline]
    #[must_use]
    pub const fn accepts(&self, len: usize, distance: usize) -> bool {
        distance <= self.max_distance(len)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::QUARTER
    }
}
