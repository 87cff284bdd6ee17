use crate::{
    normalize::NormalizeFlags, scan::Tolerance, substitution::SubstitutionTable, FuzzyFilter,
};

/// A builder for a [`FuzzyFilter`].
///
/// The builder starts out with the Latin [`SubstitutionTable`], a [`Tolerance::QUARTER`]
/// tolerance, and every [`NormalizeFlags`] step enabled.
///
/// # Example
/// ```
/// use fuzzy_word_filter::{FuzzyFilterBuilder, Tolerance, Vocabulary};
///
/// let filter = FuzzyFilterBuilder::new()
///     .substitution('a', &["^"])
///     .tolerance(Tolerance::EXACT)
///     .build();
/// let vocabulary = Vocabulary::new(&["bad"]).unwrap();
///
/// assert!(filter.check("b^d", &vocabulary));
/// assert!(!filter.check("bod", &vocabulary));
/// ```
#[derive(Clone, Debug)]
pub struct FuzzyFilterBuilder {
    table: SubstitutionTable,
    tolerance: Tolerance,
    flags: NormalizeFlags,
    graphemes: bool,
}

impl FuzzyFilterBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: SubstitutionTable::latin(),
            tolerance: Tolerance::QUARTER,
            flags: NormalizeFlags::all(),
            graphemes: false,
        }
    }

    /// Replaces the whole substitution table.
    #[inline]
    pub fn table(&mut self, table: SubstitutionTable) -> &mut Self {
        self.table = table;
        self
    }

    /// Registers look-alike `variants` for `canonical` on the current table.
    #[inline]
    pub fn substitution<I, S>(&mut self, canonical: char, variants: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.table.insert(canonical, variants);
        self
    }

    /// Registers `(canonical, variant)` pairs on the current table.
    #[inline]
    pub fn substitutions<'b, I, S>(&mut self, substitutions: I) -> &mut Self
    where
        I: IntoIterator<Item = &'b (char, S)>,
        S: AsRef<str> + 'b,
    {
        for (canonical, variant) in substitutions {
            self.table.insert(*canonical, Some(variant));
        }
        self
    }

    #[inline]
    pub fn tolerance(&mut self, tolerance: Tolerance) -> &mut Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets which normalization steps run.
    #[inline]
    pub fn flags(&mut self, flags: NormalizeFlags) -> &mut Self {
        self.flags = flags;
        self
    }

    /// Measures terms and fragments in extended grapheme clusters instead of `char`s.
    ///
    /// # Example
    /// ```
    /// use fuzzy_word_filter::{FuzzyFilterBuilder, Vocabulary};
    ///
    /// // "bãr" spelled with a combining tilde.
    /// let vocabulary = Vocabulary::new(&["ba\u{303}r"]).unwrap();
    ///
    /// // Counted in chars the term is four units long, which allows one edit.
    /// assert!(FuzzyFilterBuilder::new().build().check("bar", &vocabulary));
    /// // Counted in graphemes it is three units long, which allows none.
    /// assert!(!FuzzyFilterBuilder::new().graphemes(true).build().check("bar", &vocabulary));
    /// ```
    #[cfg(feature = "unicode-segmentation")]
    #[inline]
    pub fn graphemes(&mut self, graphemes: bool) -> &mut Self {
        self.graphemes = graphemes;
        self
    }

    #[must_use]
    pub fn build(&self) -> FuzzyFilter {
        FuzzyFilter {
            table: self.table.clone(),
            tolerance: self.tolerance,
            flags: self.flags,
            graphemes: self.graphemes,
        }
    }
}

impl Default for FuzzyFilterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::FuzzyFilterBuilder;
    use crate::{NormalizeFlags, SubstitutionTable, Tolerance, Vocabulary};

    #[test]
    fn defaults() {
        let filter = FuzzyFilterBuilder::new().build();

        assert_eq!(filter.table(), &SubstitutionTable::latin());
        assert_eq!(filter.tolerance(), Tolerance::QUARTER);
        assert_eq!(filter.flags(), NormalizeFlags::all());
    }

    #[test]
    fn substitutions() {
        let filter = FuzzyFilterBuilder::new()
            .table(SubstitutionTable::new())
            .substitutions(&[('a', "^"), ('o', "*")])
            .build();

        assert_eq!(filter.normalize("B^D W*RD"), "badword");
    }

    #[test]
    fn flags() {
        let filter = FuzzyFilterBuilder::new()
            .flags(NormalizeFlags::LOWERCASE)
            .build();

        assert_eq!(filter.normalize("B @D"), "b @d");
    }

    #[test]
    fn builder_is_reusable() {
        let mut builder = FuzzyFilterBuilder::new();
        let loose = builder.build();
        let strict = builder.tolerance(Tolerance::EXACT).build();
        let vocabulary = Vocabulary::new(&["spam"]).unwrap();

        assert!(loose.check("spum", &vocabulary));
        assert!(!strict.check("spum", &vocabulary));
    }
}
