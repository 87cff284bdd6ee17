//! Validation of user-submitted form fields.

use crate::{error::FieldRejected, vocabulary::Vocabulary, FuzzyFilter};
use core::fmt;

/// A user-submitted text field checked before it is saved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    /// The title of a post.
    PostTitle,
    /// The body of a post.
    PostText,
    /// The body of a comment.
    Comment,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            FormField::PostTitle => "title",
            FormField::PostText => "text",
            FormField::Comment => "comment",
        })
    }
}

impl FuzzyFilter {
    /// Validates the contents of a form `field`.
    ///
    /// Returns `text` unchanged when it is accepted, so it can be saved as submitted.
    ///
    /// # Example
    /// ```
    /// use fuzzy_word_filter::{FormField, FuzzyFilter, Vocabulary};
    ///
    /// let filter = FuzzyFilter::default();
    /// let vocabulary = Vocabulary::new(&["spam"]).unwrap();
    ///
    /// assert_eq!(filter.validate_field(FormField::PostTitle, "My Post", &vocabulary), Ok("My Post"));
    /// assert_eq!(
    ///     filter.validate_field(FormField::Comment, "buy $pam", &vocabulary).unwrap_err().to_string(),
    ///     "comment: Forbidden words used: spam.",
    /// );
    /// ```
    pub fn validate_field<'t>(
        &self,
        field: FormField,
        text: &'t str,
        vocabulary: &Vocabulary,
    ) -> Result<&'t str, FieldRejected> {
        self.start_filtering(text, vocabulary)
            .map_err(|source| FieldRejected { field, source })
    }
}
