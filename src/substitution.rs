//! Tables of look-alike characters.
//!
//! A [`SubstitutionTable`] maps a canonical character to the strings considered equivalent to it.
//! During normalization every variant found in the text is replaced by its canonical character.
//!
//! Order is significant. Canonical characters are applied in the order they were declared, and
//! the variants of each canonical character are applied in the order they were declared within
//! it. Each replacement pass runs over the output of the previous one, so when two variants could
//! match at the same position, the one declared first wins.

use alloc::{
    borrow::ToOwned,
    string::{String, ToString},
    vec::Vec,
};
use core::slice;

/// A canonical character together with its registered variants.
///
/// The canonical character is always the first variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Substitution {
    canonical: char,
    variants: Vec<String>,
}

impl Substitution {
    fn new(canonical: char) -> Self {
        Self {
            canonical,
            variants: alloc::vec![canonical.to_string()],
        }
    }

    /// The character every variant normalizes to.
    #[inline]
    #[must_use]
    pub fn canonical(&self) -> char {
        self.canonical
    }

    /// All variants in declaration order, starting with the canonical character itself.
    #[inline]
    #[must_use]
    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    fn push_variant(&mut self, variant: &str) {
        if variant.is_empty() || self.variants.iter().any(|existing| existing == variant) {
            return;
        }
        self.variants.push(variant.to_owned());
    }
}

/// An ordered mapping from canonical characters to look-alike variants.
///
/// # Example
/// ```
/// use fuzzy_word_filter::SubstitutionTable;
///
/// let mut table = SubstitutionTable::new();
/// table.insert('a', &["@", "4"]);
///
/// assert_eq!(table.get('a').unwrap().variants(), ["a", "@", "4"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubstitutionTable {
    entries: Vec<Substitution>,
}

impl SubstitutionTable {
    /// Creates an empty table.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Look-alikes for a vocabulary written in the Latin alphabet.
    ///
    /// Only digits and symbols are registered as variants, so plain Latin words pass through the
    /// table unchanged. Multi-character variants are declared before the characters they contain
    /// (`|<` before `|`, `()` before `(`).
    #[must_use]
    pub fn latin() -> Self {
        Self::from_entries(&[
            ('k', &["|<", "|{"]),
            ('o', &["()", "0"]),
            ('a', &["@", "4"]),
            ('b', &["8"]),
            ('c', &["(", "¢"]),
            ('e', &["3", "€"]),
            ('g', &["9"]),
            ('h', &["#"]),
            ('i', &["1", "!", "|"]),
            ('s', &["$", "5", "§"]),
            ('t', &["7", "+"]),
            ('x', &["><"]),
        ])
    }

    /// Look-alikes for a vocabulary written in the Cyrillic alphabet.
    ///
    /// Latin letters, digits, and symbols resembling a Cyrillic letter in shape or sound are folded
    /// onto that letter.
    #[must_use]
    pub fn cyrillic() -> Self {
        Self::from_entries(&[
            ('а', &["a", "@"]),
            ('б', &["6", "b"]),
            ('в', &["b", "v"]),
            ('г', &["r", "g"]),
            ('д', &["d", "g"]),
            ('е', &["e", "ye"]),
            ('ё', &["e", "yo"]),
            ('ж', &["zh", "*"]),
            ('з', &["3", "z"]),
            ('и', &["u", "i"]),
            ('й', &["u", "i"]),
            ('к', &["k", "i{", "|{", "|["]),
            ('л', &["l", "ji"]),
            ('м', &["m"]),
            ('н', &["h", "n"]),
            ('о', &["o", "0"]),
            ('п', &["n", "p"]),
            ('р', &["r", "p"]),
            ('с', &["c", "s"]),
            ('т', &["m", "t"]),
            ('у', &["y", "u"]),
            ('ф', &["f"]),
            ('х', &["x", "h", "}{", "]["]),
            ('ц', &["c", "u,", "ts"]),
            ('ч', &["ch"]),
            ('ш', &["sh"]),
            ('щ', &["sch"]),
            ('ь', &["b"]),
            ('ы', &["bi"]),
            ('ъ', &[]),
            ('э', &["e"]),
            ('ю', &["io", "yu"]),
            ('я', &["ya"]),
        ])
    }

    fn from_entries(entries: &[(char, &[&str])]) -> Self {
        let mut table = Self::new();
        for (canonical, variants) in entries {
            table.insert(*canonical, variants.iter());
        }
        table
    }

    /// Registers `variants` for `canonical`.
    ///
    /// A canonical character seen for the first time is appended to the end of the table and
    /// registered as its own first variant. Variants for an existing canonical character are
    /// appended after its current variants. Empty and duplicate variants are ignored.
    pub fn insert<I, S>(&mut self, canonical: char, variants: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let index = match self
            .entries
            .iter()
            .position(|entry| entry.canonical == canonical)
        {
            Some(index) => index,
            None => {
                self.entries.push(Substitution::new(canonical));
                self.entries.len() - 1
            }
        };
        let entry = &mut self.entries[index];
        for variant in variants {
            entry.push_variant(variant.as_ref());
        }
        self
    }

    /// Returns the entry for `canonical`, if registered.
    #[must_use]
    pub fn get(&self, canonical: char) -> Option<&Substitution> {
        self.entries
            .iter()
            .find(|entry| entry.canonical == canonical)
    }

    /// Number of canonical characters in the table.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in declaration order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Substitution> {
        self.entries.iter()
    }

    /// Iterates over `(variant, canonical)` pairs in the order they are applied.
    ///
    /// The identity variant of each entry is skipped, since replacing a character with itself is a
    /// no-op.
    pub fn replacements(&self) -> impl Iterator<Item = (&str, char)> + '_ {
        self.entries.iter().flat_map(|entry| {
            entry
                .variants
                .iter()
                .skip(1)
                .map(move |variant| (variant.as_str(), entry.canonical))
        })
    }
}

impl<'a> IntoIterator for &'a SubstitutionTable {
    type Item = &'a Substitution;
    type IntoIter = slice::Iter<'a, Substitution>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::SubstitutionTable;
    use alloc::vec::Vec;

    #[test]
    fn every_entry_contains_itself() {
        for table in [SubstitutionTable::latin(), SubstitutionTable::cyrillic()] {
            for entry in &table {
                assert_eq!(entry.variants()[0], entry.canonical().to_string());
            }
        }
    }

    #[test]
    fn empty_variant_list_still_registers_canonical() {
        let table = SubstitutionTable::cyrillic();

        assert_eq!(table.get('ъ').unwrap().variants(), ["ъ"]);
    }

    #[test]
    fn insert_appends_to_existing_entry() {
        let mut table = SubstitutionTable::new();
        table.insert('a', &["@"]).insert('o', &["0"]).insert('a', &["4", "@", ""]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.get('a').unwrap().variants(), ["a", "@", "4"]);
    }

    #[test]
    fn replacements_follow_declaration_order() {
        let mut table = SubstitutionTable::new();
        table.insert('o', &["()", "0"]).insert('c', &["("]);

        assert_eq!(
            table.replacements().collect::<Vec<_>>(),
            [("()", 'o'), ("0", 'o'), ("(", 'c')]
        );
    }

    #[test]
    fn cyrillic_declaration_order() {
        let canonicals = SubstitutionTable::cyrillic()
            .iter()
            .map(|entry| entry.canonical())
            .collect::<alloc::string::String>();

        assert_eq!(canonicals, "абвгдеёжзийклмнопрстуфхцчшщьыъэюя");
    }
}
