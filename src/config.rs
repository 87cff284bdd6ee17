//! Loading a filter and its vocabulary from TOML.
//!
//! ```toml
//! alphabet = "cyrillic"
//! banned_words = ["плохо", "спам"]
//!
//! [tolerance]
//! numerator = 1
//! denominator = 4
//!
//! [[substitutions]]
//! canonical = "а"
//! variants = ["^"]
//! ```

use crate::{
    builder::FuzzyFilterBuilder, error::ConfigError, scan::Tolerance,
    substitution::SubstitutionTable, vocabulary::Vocabulary, FuzzyFilter,
};
use alloc::{string::String, vec::Vec};
use serde::Deserialize;
use tracing::debug;

/// The built-in substitution table to start from.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    /// [`SubstitutionTable::latin()`].
    #[default]
    Latin,
    /// [`SubstitutionTable::cyrillic()`].
    Cyrillic,
    /// An empty table.
    None,
}

impl Alphabet {
    #[must_use]
    pub fn table(self) -> SubstitutionTable {
        match self {
            Alphabet::Latin => SubstitutionTable::latin(),
            Alphabet::Cyrillic => SubstitutionTable::cyrillic(),
            Alphabet::None => SubstitutionTable::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ToleranceConfig {
    pub numerator: usize,
    pub denominator: usize,
}

/// Extra variants registered on top of the chosen [`Alphabet`].
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SubstitutionConfig {
    pub canonical: char,
    pub variants: Vec<String>,
}

/// A deserialized filter configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    #[serde(default)]
    pub banned_words: Vec<String>,
    #[serde(default)]
    pub alphabet: Alphabet,
    #[serde(default)]
    pub tolerance: Option<ToleranceConfig>,
    #[serde(default)]
    pub substitutions: Vec<SubstitutionConfig>,
    #[serde(default)]
    pub graphemes: bool,
}

impl FilterConfig {
    /// Parses a configuration from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Creates a builder configured by everything except the banned words.
    pub fn builder(&self) -> Result<FuzzyFilterBuilder, ConfigError> {
        let mut builder = FuzzyFilterBuilder::new();
        builder.table(self.alphabet.table());
        for substitution in &self.substitutions {
            builder.substitution(substitution.canonical, &substitution.variants);
        }
        if let Some(tolerance) = self.tolerance {
            builder.tolerance(
                Tolerance::checked(tolerance.numerator, tolerance.denominator)
                    .ok_or(ConfigError::ZeroDenominator)?,
            );
        }
        if self.graphemes {
            #[cfg(feature = "unicode-segmentation")]
            builder.graphemes(true);
            #[cfg(not(feature = "unicode-segmentation"))]
            return Err(ConfigError::GraphemesUnavailable);
        }
        Ok(builder)
    }

    /// Loads the banned words.
    pub fn vocabulary(&self) -> Result<Vocabulary, ConfigError> {
        Ok(Vocabulary::new(&self.banned_words)?)
    }

    /// Builds the configured filter together with its vocabulary.
    pub fn build(&self) -> Result<(FuzzyFilter, Vocabulary), ConfigError> {
        let filter = self.builder()?.build();
        let vocabulary = self.vocabulary()?;
        debug!(
            alphabet = ?self.alphabet,
            terms = vocabulary.len(),
            "loaded filter configuration"
        );
        Ok((filter, vocabulary))
    }
}
