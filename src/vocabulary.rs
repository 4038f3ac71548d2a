//! Vocabulary grouped by digit hash.

use rustc_hash::FxHashMap;

use crate::error::{PhonewordError, Result};
use crate::keypad::LetterMap;

/// Vocabulary words grouped into equivalence classes under a letter map.
///
/// Each key is a digit hash; its group holds every vocabulary word whose
/// uppercased form maps to that hash, sorted lexicographically and
/// deduplicated so generation output is reproducible across runs.
///
/// Construction is eager: any character of any word without a letter-map
/// entry fails immediately, so the engine never hits a lookup miss later.
/// An index is independent of any particular number and may be reused
/// across many generation calls.
#[derive(Debug, Clone, Default)]
pub struct VocabularyIndex {
    groups: FxHashMap<String, Vec<String>>,
    word_count: usize,
}

impl VocabularyIndex {
    /// Build an index from vocabulary words.
    ///
    /// Words are uppercased before hashing and storage. Empty tokens are
    /// rejected with [`PhonewordError::InvalidFormat`]; characters outside
    /// the letter map's domain (including non-alphabetic ones) fail with
    /// [`PhonewordError::UnmappedCharacter`]. An empty vocabulary yields an
    /// empty index, not an error.
    pub fn build<I, S>(words: I, letter_map: &LetterMap) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut groups: FxHashMap<String, Vec<String>> = FxHashMap::default();
        let mut word_count = 0;

        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                return Err(PhonewordError::InvalidFormat(
                    "vocabulary contains an empty token".to_string(),
                ));
            }
            let upper = word.to_ascii_uppercase();
            let hash = letter_map.digit_hash(&upper)?;
            groups.entry(hash).or_default().push(upper);
        }

        for group in groups.values_mut() {
            group.sort_unstable();
            group.dedup();
        }
        for group in groups.values() {
            word_count += group.len();
        }

        Ok(Self { groups, word_count })
    }

    /// Words whose hash equals `digits`, sorted, or `None`.
    pub fn words_for(&self, digits: &str) -> Option<&[String]> {
        self.groups.get(digits).map(Vec::as_slice)
    }

    /// Number of distinct (uppercased) words in the index.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Whether the index holds no words at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_hash() {
        let map = LetterMap::standard();
        let index = VocabularyIndex::build(["kars", "kids"], &map).unwrap();
        assert_eq!(index.words_for("5277").unwrap(), &["KARS"]);
        assert_eq!(index.words_for("5437").unwrap(), &["KIDS"]);
        assert!(index.words_for("1234").is_none());
        assert_eq!(index.word_count(), 2);
    }

    #[test]
    fn colliding_words_sorted() {
        // "bar" and "cap" share the hash 227 on the standard keypad.
        let map = LetterMap::standard();
        let index = VocabularyIndex::build(["cap", "bar", "bar"], &map).unwrap();
        assert_eq!(index.words_for("227").unwrap(), &["BAR", "CAP"]);
        assert_eq!(index.word_count(), 2);
    }

    #[test]
    fn empty_vocabulary_is_empty_index() {
        let map = LetterMap::standard();
        let index = VocabularyIndex::build(std::iter::empty::<&str>(), &map).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn unmapped_character_is_eager() {
        let map = LetterMap::standard();
        assert_eq!(
            VocabularyIndex::build(["ok", "na-n"], &map).unwrap_err(),
            PhonewordError::UnmappedCharacter('-')
        );
    }

    #[test]
    fn empty_token_rejected() {
        let map = LetterMap::standard();
        assert!(matches!(
            VocabularyIndex::build([""], &map),
            Err(PhonewordError::InvalidFormat(_))
        ));
    }
}
