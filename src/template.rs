//! Number templates and raw-number validation.
//!
//! A [`NumberTemplate`] is the canonical shape of a phone number: digit
//! placeholders with separators at fixed positions, e.g. `0-000-000-0000`
//! for US numbers. The leading segment is the country code and is never
//! split by the formatter.

use crate::error::{PhonewordError, Result};

/// Separator character used in templates, numbers, and phonewords.
pub const SEPARATOR: char = '-';

/// Digit placeholder character used in templates.
pub const PLACEHOLDER: char = '0';

/// A validated number shape: placeholders and separators only, with no
/// doubled, leading, or trailing separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumberTemplate {
    raw: String,
    digit_count: usize,
    country_code_len: usize,
}

impl NumberTemplate {
    /// Parse a template string.
    ///
    /// The empty template is valid and describes the empty number.
    pub fn parse(raw: &str) -> Result<Self> {
        for c in raw.chars() {
            if c != PLACEHOLDER && c != SEPARATOR {
                return Err(PhonewordError::InvalidCharacter {
                    found: c,
                    context: "template",
                });
            }
        }
        check_separator_runs(raw, "template")?;

        let digit_count = raw.chars().filter(|&c| c == PLACEHOLDER).count();
        let country_code_len = raw.split(SEPARATOR).next().unwrap_or("").len();
        Ok(Self {
            raw: raw.to_string(),
            digit_count,
            country_code_len,
        })
    }

    /// The US template `0-000-000-0000`.
    pub fn us() -> Self {
        Self::parse("0-000-000-0000").expect("US template is well formed")
    }

    /// Infer a template from a phoneword: every alphanumeric character
    /// becomes a placeholder, separators keep their positions.
    pub fn infer(phoneword: &str) -> Result<Self> {
        let raw: String = phoneword
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { PLACEHOLDER } else { c })
            .collect();
        Self::parse(&raw)
    }

    /// Number of digit placeholders, country code included.
    pub fn digit_count(&self) -> usize {
        self.digit_count
    }

    /// Length of the leading country-code segment.
    pub fn country_code_len(&self) -> usize {
        self.country_code_len
    }

    /// The template string itself.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl std::fmt::Display for NumberTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Validate a raw phone number and return it with whitespace stripped.
///
/// Accepts digits and separators only; separator runs must be well formed
/// (no doubled, leading, or trailing separators). The empty string is
/// valid and passes through unchanged.
pub fn validate(number: &str) -> Result<String> {
    let stripped: String = number.chars().filter(|c| !c.is_whitespace()).collect();
    for c in stripped.chars() {
        if !c.is_ascii_digit() && c != SEPARATOR {
            return Err(PhonewordError::InvalidCharacter {
                found: c,
                context: "number",
            });
        }
    }
    check_separator_runs(&stripped, "number")?;
    Ok(stripped)
}

/// Split a dashed number into its country code and dashless base.
///
/// The country code is everything before the first separator; the base is
/// the remaining digits with separators removed. A number without any
/// separator is all country code.
pub fn split_country_code(number: &str) -> (String, String) {
    match number.split_once(SEPARATOR) {
        Some((cc, rest)) => {
            let base: String = rest.chars().filter(|&c| c != SEPARATOR).collect();
            (cc.to_string(), base)
        }
        None => (number.to_string(), String::new()),
    }
}

pub(crate) fn check_separator_runs(s: &str, context: &str) -> Result<()> {
    if s.starts_with(SEPARATOR) || s.ends_with(SEPARATOR) {
        return Err(PhonewordError::InvalidFormat(format!(
            "{context} '{s}' has a leading or trailing separator"
        )));
    }
    let doubled: String = [SEPARATOR, SEPARATOR].iter().collect();
    if s.contains(&doubled) {
        return Err(PhonewordError::InvalidFormat(format!(
            "{context} '{s}' contains doubled separators"
        )));
    }
    Ok(())
}
