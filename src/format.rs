//! Separator insertion for marked phoneword tokens.
//!
//! The wordification engine produces *marked tokens*: alphanumeric strings
//! in which a spacer character flags each boundary between two adjacent
//! substituted words (and between the country code and the rest). This
//! module renders a marked token into the final template shape, emitting
//! separators at the template's positions and at every digit/letter
//! transition, while keeping each substituted word unbroken.

use crate::error::{PhonewordError, Result};
use crate::template::{NumberTemplate, SEPARATOR};

/// Internal word-boundary marker used between adjacent substitutions.
pub(crate) const SPACER: char = '&';

/// Render a marked token into the shape of `template`.
///
/// The token may contain digits, uppercase letters, spacers, and
/// separators. Pre-existing separators are recoverable information: one
/// sitting between two letters marks a word boundary and is kept (as a
/// spacer), all others are dropped and re-derived from the template, so
/// re-rendering an already formatted phoneword is a no-op.
///
/// Rules, in order:
/// - a template separator becomes an output separator, except where the
///   token holds a spacer, which becomes exactly one separator itself;
/// - spacers falling between template placeholders are carried through;
/// - every digit↔letter transition outside the country-code segment gets a
///   separator (the country code is never split);
/// - separators strictly interior to a letter run are collapsed, so every
///   maximal letter run in the result is one substituted word.
///
/// # Errors
///
/// [`PhonewordError::InvalidCharacter`] on characters outside the token
/// alphabet, [`PhonewordError::LengthMismatch`] when the token's content
/// does not fill the template, [`PhonewordError::InvalidFormat`] on a
/// dangling trailing spacer.
pub fn insert_dashes(marked: &str, template: &NumberTemplate) -> Result<String> {
    for c in marked.chars() {
        let allowed =
            c.is_ascii_digit() || c.is_ascii_uppercase() || c == SPACER || c == SEPARATOR;
        if !allowed {
            return Err(PhonewordError::InvalidCharacter {
                found: c,
                context: "marked token",
            });
        }
    }

    let token = absorb_separators(marked);
    let content_len = token.iter().filter(|&&c| c != SPACER).count();
    if content_len != template.digit_count() {
        return Err(PhonewordError::LengthMismatch {
            expected: template.digit_count(),
            actual: content_len,
        });
    }

    let merged = merge_with_template(&token, template)?;

    // The country code and the boundary char right after it stay as-is.
    let prefix_len = (template.country_code_len() + 1).min(merged.len());
    let (prefix, base) = merged.split_at(prefix_len);

    let base = mark_transitions(base);
    let base = collapse_word_interiors(&base);

    Ok(prefix
        .iter()
        .chain(base.iter())
        .map(|&c| if c == SPACER { SEPARATOR } else { c })
        .collect())
}

/// Keep separators that sit between two letters (word boundaries, as
/// spacers); drop the rest.
fn absorb_separators(marked: &str) -> Vec<char> {
    let chars: Vec<char> = marked.chars().collect();
    let mut out = Vec::with_capacity(chars.len());
    for (k, &c) in chars.iter().enumerate() {
        if c == SEPARATOR {
            let between_letters = k > 0
                && k + 1 < chars.len()
                && chars[k - 1].is_ascii_uppercase()
                && chars[k + 1].is_ascii_uppercase();
            if between_letters {
                out.push(SPACER);
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Walk template and token in lockstep, consuming one content character per
/// placeholder. Spacers stay put: one replaces the separator the template
/// puts at its position, or is carried through where the template has none.
fn merge_with_template(token: &[char], template: &NumberTemplate) -> Result<Vec<char>> {
    let mut merged = Vec::with_capacity(template.as_str().len());
    let mut ti = 0;
    for tc in template.as_str().chars() {
        if tc == SEPARATOR {
            if token.get(ti) == Some(&SPACER) {
                merged.push(SPACER);
                ti += 1;
            } else {
                merged.push(SEPARATOR);
            }
        } else {
            if token.get(ti) == Some(&SPACER) {
                merged.push(SPACER);
                ti += 1;
            }
            merged.push(token[ti]);
            ti += 1;
        }
    }
    if ti < token.len() {
        // Content is accounted for, so leftovers can only be a spacer
        // dangling past the last placeholder.
        return Err(PhonewordError::InvalidFormat(
            "marked token has a trailing spacer".to_string(),
        ));
    }
    Ok(merged)
}

/// Insert a separator at every digit↔letter transition between adjacent
/// alphanumeric characters.
fn mark_transitions(base: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(base.len() * 2);
    for (k, &c) in base.iter().enumerate() {
        if k > 0 {
            let prev = base[k - 1];
            let adjacent = prev.is_ascii_alphanumeric() && c.is_ascii_alphanumeric();
            if adjacent && prev.is_ascii_digit() != c.is_ascii_digit() {
                out.push(SEPARATOR);
            }
        }
        out.push(c);
    }
    out
}

/// Drop separators strictly between two letters; those are interior to a
/// single substituted word (adjacent words are spacer-delimited instead).
fn collapse_word_interiors(base: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(base.len());
    for (k, &c) in base.iter().enumerate() {
        if c == SEPARATOR {
            let prev_letter = k > 0 && base[k - 1].is_ascii_uppercase();
            let next_letter = base.get(k + 1).is_some_and(|n| n.is_ascii_uppercase());
            if prev_letter && next_letter {
                continue;
            }
        }
        out.push(c);
    }
    out
}
