//! Translation of phonewords back to plain numbers.

use crate::error::{PhonewordError, Result};
use crate::format::insert_dashes;
use crate::keypad::LetterMap;
use crate::template::{NumberTemplate, SEPARATOR};

/// Reverses a phoneword to the digit string it dials.
///
/// Letters are mapped through the same letter map the phoneword was built
/// with; digit segments pass through unchanged. Output separators always
/// sit at the template's canonical positions, wherever the input put its
/// own.
///
/// When the letter map is not injective this is not a two-sided inverse:
/// an arbitrary phoneword recovers *a* number that dials it, not the word
/// chosen to write it. Composed after [`Wordifier`](crate::Wordifier) with
/// the same map and template, it recovers the original number exactly.
#[derive(Debug, Clone)]
pub struct Translator<'a> {
    letter_map: &'a LetterMap,
}

impl<'a> Translator<'a> {
    /// Create a translator over a letter map.
    pub fn new(letter_map: &'a LetterMap) -> Self {
        Self { letter_map }
    }

    /// Translate with an inferred template: every alphanumeric character
    /// of the phoneword becomes a digit placeholder, separators keep their
    /// positions.
    pub fn translate(&self, phoneword: &str) -> Result<String> {
        let cleaned = clean(phoneword)?;
        let template = NumberTemplate::infer(&cleaned)?;
        self.translate_cleaned(&cleaned, &template)
    }

    /// Translate against a caller-supplied template.
    ///
    /// The recovered digit string must fill the template; digits dialed
    /// past the template's capacity (vanity-number overflow, as in
    /// `1-877-KARS-4-KIDS` against the US shape) are trimmed, the way a
    /// switch ignores them.
    pub fn translate_with(&self, phoneword: &str, template: &NumberTemplate) -> Result<String> {
        let cleaned = clean(phoneword)?;
        self.translate_cleaned(&cleaned, template)
    }

    fn translate_cleaned(&self, phoneword: &str, template: &NumberTemplate) -> Result<String> {
        let mut digits = String::with_capacity(phoneword.len());
        for c in phoneword.chars() {
            if c == SEPARATOR {
                continue;
            }
            if c.is_ascii_digit() {
                digits.push(c);
            } else {
                digits.push(
                    self.letter_map
                        .digit(c)
                        .ok_or(PhonewordError::UnmappedCharacter(c))?,
                );
            }
        }

        if digits.len() < template.digit_count() {
            return Err(PhonewordError::LengthMismatch {
                expected: template.digit_count(),
                actual: digits.len(),
            });
        }
        digits.truncate(template.digit_count());

        insert_dashes(&digits, template)
    }
}

/// Strip whitespace and reject anything outside letters, digits, and
/// well-formed separator runs.
fn clean(phoneword: &str) -> Result<String> {
    let stripped: String = phoneword.chars().filter(|c| !c.is_whitespace()).collect();
    for c in stripped.chars() {
        if !c.is_ascii_alphanumeric() && c != SEPARATOR {
            return Err(PhonewordError::InvalidCharacter {
                found: c,
                context: "phoneword",
            });
        }
    }
    crate::template::check_separator_runs(&stripped, "phoneword")?;
    Ok(stripped)
}
