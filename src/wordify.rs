//! The wordification engine: enumerate every phoneword of a number.
//!
//! The engine runs a right-to-left dynamic program over suffix start
//! positions of the base number. Each row entry pairs a partial rendering
//! of a suffix with its *wall*: the index where the rendering's leftmost
//! substitution begins (or the suffix start itself while the rendering is
//! all digits). Candidate substitutions at position `i` are restricted to
//! prefixes of the gap between `i` and the wall, so chosen spans can never
//! overlap and every rendering corresponds to a unique span set.

use std::collections::BTreeSet;

use smallvec::{smallvec, SmallVec};

use crate::error::{PhonewordError, Result};
use crate::format::{insert_dashes, SPACER};
use crate::substring::SubstringIndex;
use crate::template::{split_country_code, validate, NumberTemplate};
use crate::vocabulary::VocabularyIndex;

/// A partial rendering of a suffix of the base number, with the wall index
/// of its leftmost substitution.
type RowEntry = (String, usize);
type Row = SmallVec<[RowEntry; 8]>;

/// Phoneword generator over a prebuilt vocabulary index.
///
/// The index is borrowed, not owned: one index can serve many numbers.
/// Output cardinality is exponential in the number of overlapping
/// vocabulary matches, so a [`limit`](Wordifier::with_limit) is available
/// as a cooperative work bound for pathological vocabularies.
#[derive(Debug, Clone)]
pub struct Wordifier<'a> {
    vocab: &'a VocabularyIndex,
    limit: Option<usize>,
}

impl<'a> Wordifier<'a> {
    /// Create an engine over a vocabulary index.
    pub fn new(vocab: &'a VocabularyIndex) -> Self {
        Self { vocab, limit: None }
    }

    /// Bound the number of renderings kept in flight and returned.
    ///
    /// The bound is checked between position steps and truncates the
    /// working row deterministically, so a limited call always returns the
    /// same subset.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Enumerate every phoneword of `number`, shaped like `template`.
    ///
    /// The set always includes the unsubstituted number itself (unless
    /// truncated away by a limit). An empty number, an empty base (a
    /// country-code-only number), or an empty vocabulary yields the empty
    /// set, not an error.
    ///
    /// # Errors
    ///
    /// Validation errors from the number (`InvalidCharacter`,
    /// `InvalidFormat`) and shape disagreement with the template
    /// (`LengthMismatch`, `InvalidFormat` on a country-code length
    /// mismatch).
    pub fn wordify(&self, number: &str, template: &NumberTemplate) -> Result<BTreeSet<String>> {
        let number = validate(number)?;
        if number.is_empty() || self.vocab.is_empty() {
            return Ok(BTreeSet::new());
        }

        let (country_code, base) = split_country_code(&number);
        if base.is_empty() {
            return Ok(BTreeSet::new());
        }
        if country_code.len() != template.country_code_len() {
            return Err(PhonewordError::InvalidFormat(format!(
                "country code '{country_code}' does not fit template '{template}'"
            )));
        }
        let content_len = country_code.len() + base.len();
        if content_len != template.digit_count() {
            return Err(PhonewordError::LengthMismatch {
                expected: template.digit_count(),
                actual: content_len,
            });
        }

        let substrings = SubstringIndex::new(&base);
        let row = self.run_dp(&base, &substrings);

        let mut renderings = BTreeSet::new();
        for (partial, _) in row {
            let mut marked = String::with_capacity(country_code.len() + 1 + partial.len());
            marked.push_str(&country_code);
            marked.push(SPACER);
            marked.push_str(&partial);
            renderings.insert(insert_dashes(&marked, template)?);
        }
        if let Some(limit) = self.limit {
            while renderings.len() > limit {
                renderings.pop_last();
            }
        }
        Ok(renderings)
    }

    /// The dynamic program proper: fold rows from the empty suffix down to
    /// position 0. Only the previous row is ever read, so a single rolling
    /// row suffices.
    fn run_dp(&self, base: &str, substrings: &SubstringIndex) -> Row {
        let l0 = base.len();
        let mut row: Row = smallvec![(String::new(), l0)];

        for i in (0..l0).rev() {
            let mut next = Row::with_capacity(row.len());

            // Keep the digit at `i` raw; walls are unchanged.
            for (partial, wall) in &row {
                let mut extended = String::with_capacity(partial.len() + 1);
                extended.push_str(&base[i..=i]);
                extended.push_str(partial);
                next.push((extended, *wall));
            }

            // Substitute a word anchored at `i`, spanning some prefix of
            // the gap up to the previous wall.
            for (partial, wall) in &row {
                let gap_len = wall - i;
                for span in substrings.prefixes(i, gap_len) {
                    let Some(words) = self.vocab.words_for(span) else {
                        continue;
                    };
                    for word in words {
                        next.push((splice(word, partial, gap_len, *wall == l0), i));
                    }
                }
            }

            if let Some(limit) = self.limit {
                if next.len() > limit {
                    next.truncate(limit);
                }
            }
            row = next;
        }
        row
    }
}

/// Build a new rendering from `word` and the previous partial.
///
/// The partial's leading `word.len() - 1` characters are raw gap digits
/// now covered by the word and are stripped. A spacer is inserted only
/// when the word exactly fills the gap and substituted content follows
/// immediately; that is the one boundary the formatter could not
/// otherwise recover.
fn splice(word: &str, partial: &str, gap_len: usize, wall_at_end: bool) -> String {
    let remainder = &partial[word.len() - 1..];
    let mut rendering = String::with_capacity(word.len() + 1 + remainder.len());
    rendering.push_str(word);
    if word.len() == gap_len && !wall_at_end {
        rendering.push(SPACER);
    }
    rendering.push_str(remainder);
    rendering
}
