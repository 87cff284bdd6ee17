//! Classical Levenshtein edit distance.
//!
//! Insertions, deletions, and substitutions each cost `1`. The distance is computed over slices of
//! any comparable unit, which lets the same routine measure `char`s or grapheme clusters.
//!
//! Only two rows of the dynamic programming matrix are kept alive at any time, sized to the shorter
//! of the two inputs.

use alloc::vec::Vec;
use core::mem;

/// Computes the edit distance between two slices of units.
///
/// # Example
/// ```
/// use fuzzy_word_filter::levenshtein::distance;
///
/// assert_eq!(distance(&['k', 'i', 't', 't', 'e', 'n'], &['s', 'i', 't', 't', 'i', 'n', 'g']), 3);
/// ```
pub fn distance<T>(a: &[T], b: &[T]) -> usize
where
    T: PartialEq,
{
    // Keep the rows as narrow as possible.
    let (short, long) = if a.len() > b.len() { (b, a) } else { (a, b) };

    if short.is_empty() {
        return long.len();
    }

    let mut previous_row: Vec<usize> = (0..=short.len()).collect();
    let mut current_row = alloc::vec![0; short.len() + 1];

    for (i, long_unit) in long.iter().enumerate() {
        current_row[0] = i + 1;
        for (j, short_unit) in short.iter().enumerate() {
            let insertion = previous_row[j + 1] + 1;
            let deletion = current_row[j] + 1;
            let substitution = previous_row[j] + usize::from(short_unit != long_unit);
            current_row[j + 1] = insertion.min(deletion).min(substitution);
        }
        mem::swap(&mut previous_row, &mut current_row);
    }

    previous_row[short.len()]
}

/// Computes the edit distance between two strings, measured in `char`s.
///
/// # Example
/// ```
/// use fuzzy_word_filter::levenshtein;
///
/// assert_eq!(levenshtein("", "spam"), 4);
/// assert_eq!(levenshtein("sp4m", "spam"), 1);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a = a.chars().collect::<Vec<_>>();
    let b = b.chars().collect::<Vec<_>>();
    distance(&a, &b)
}
