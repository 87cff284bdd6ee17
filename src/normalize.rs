//! Normalization of text before it is scanned.
//!
//! Normalization folds case, drops whitespace, and collapses look-alike characters onto their
//! canonical form using a [`SubstitutionTable`]. The result is only ever used for matching; the
//! text a caller stores is never normalized.

use crate::substitution::SubstitutionTable;
use alloc::string::String;
use bitflags::bitflags;

bitflags! {
    /// Steps applied by [`normalize()`].
    ///
    /// Steps always run in the order lowercase, strip whitespace, substitute.
    pub struct NormalizeFlags: u8 {
        /// Lowercase the text using Unicode case folding.
        const LOWERCASE = 0b0000_0001;
        /// Remove every whitespace character.
        const STRIP_WHITESPACE = 0b0000_0010;
        /// Replace look-alike variants with their canonical characters.
        const SUBSTITUTE = 0b0000_0100;
    }
}

impl Default for NormalizeFlags {
    fn default() -> Self {
        Self::all()
    }
}

/// Normalizes `text` for matching.
///
/// Variants are replaced in the order returned by [`SubstitutionTable::replacements()`]. Every
/// pass works on the output of the previous pass.
///
/// # Example
/// ```
/// use fuzzy_word_filter::{normalize, NormalizeFlags, SubstitutionTable};
///
/// let normalized = normalize("Cl@ss Dismissed", &SubstitutionTable::latin(), NormalizeFlags::all());
///
/// assert_eq!(normalized, "classdismissed");
/// ```
#[must_use]
pub fn normalize(text: &str, table: &SubstitutionTable, flags: NormalizeFlags) -> String {
    let mut output = if flags.contains(NormalizeFlags::LOWERCASE) {
        text.to_lowercase()
    } else {
        text.into()
    };

    if flags.contains(NormalizeFlags::STRIP_WHITESPACE) {
        output.retain(|c| !c.is_whitespace());
    }

    if flags.contains(NormalizeFlags::SUBSTITUTE) {
        let mut buffer = [0; 4];
        for (variant, canonical) in table.replacements() {
            if output.contains(variant) {
                output = output.replace(variant, canonical.encode_utf8(&mut buffer));
            }
        }
    }

    output
}
