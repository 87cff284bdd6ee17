//! A vocabulary that can be refreshed while checks are in flight.

use crate::vocabulary::Vocabulary;
use arc_swap::ArcSwap;
use std::sync::Arc;
use tracing::debug;

/// Holds the current [`Vocabulary`] snapshot.
///
/// Readers take a snapshot with [`load()`] and keep checking against it for as long as they hold
/// it. [`replace()`] publishes a new snapshot atomically; a reader sees either the old snapshot or
/// the new one, never a mix.
///
/// [`load()`]: SharedVocabulary::load
/// [`replace()`]: SharedVocabulary::replace
///
/// # Example
/// ```
/// use fuzzy_word_filter::{SharedVocabulary, Vocabulary};
///
/// let shared = SharedVocabulary::new(Vocabulary::new(&["spam"]).unwrap());
/// let snapshot = shared.load();
///
/// shared.replace(Vocabulary::new(&["scam"]).unwrap());
///
/// assert!(snapshot.contains("spam"));
/// assert!(shared.load().contains("scam"));
/// ```
#[derive(Debug, Default)]
pub struct SharedVocabulary {
    current: ArcSwap<Vocabulary>,
}

impl SharedVocabulary {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            current: ArcSwap::from_pointee(vocabulary),
        }
    }

    /// Returns the current snapshot.
    #[inline]
    #[must_use]
    pub fn load(&self) -> Arc<Vocabulary> {
        self.current.load_full()
    }

    /// Publishes `vocabulary` as the current snapshot, returning the previous one.
    pub fn replace(&self, vocabulary: Vocabulary) -> Arc<Vocabulary> {
        debug!(terms = vocabulary.len(), "replacing banned-term vocabulary");
        self.current.swap(Arc::new(vocabulary))
    }
}

impl From<Vocabulary> for SharedVocabulary {
    fn from(vocabulary: Vocabulary) -> Self {
        Self::new(vocabulary)
    }
}

#[cfg(test)]
mod tests {
    use super::SharedVocabulary;
    use crate::vocabulary::Vocabulary;
    use std::{sync::Arc, thread};

    #[test]
    fn replace_returns_previous_snapshot() {
        let shared = SharedVocabulary::new(Vocabulary::new(&["spam"]).unwrap());

        let previous = shared.replace(Vocabulary::new(&["scam"]).unwrap());

        assert!(previous.contains("spam"));
        assert!(shared.load().contains("scam"));
        assert!(!shared.load().contains("spam"));
    }

    #[test]
    fn default_is_empty() {
        assert!(SharedVocabulary::default().load().is_empty());
    }

    #[test]
    fn snapshots_survive_concurrent_refresh() {
        let shared = Arc::new(SharedVocabulary::new(Vocabulary::new(&["a", "b"]).unwrap()));

        let readers = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for _ in 0..100 {
                        let snapshot = shared.load();
                        // Every published snapshot holds exactly two terms.
                        assert_eq!(snapshot.len(), 2);
                    }
                })
            })
            .collect::<Vec<_>>();

        for _ in 0..100 {
            shared.replace(Vocabulary::new(&["c", "d"]).unwrap());
            shared.replace(Vocabulary::new(&["a", "b"]).unwrap());
        }

        for reader in readers {
            reader.join().unwrap();
        }
    }
}
