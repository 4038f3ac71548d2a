//! Letter-to-digit tables modeling a telephone keypad.

use crate::error::{PhonewordError, Result};

/// Mapping from uppercase ASCII letters to digits.
///
/// The map need not be injective (the standard keypad is not) and need not
/// cover all 26 letters; completeness over the letters a vocabulary actually
/// uses is enforced when a [`VocabularyIndex`](crate::VocabularyIndex) is
/// built, turning deferred lookup failures into eager construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterMap {
    digits: [Option<char>; 26],
}

impl LetterMap {
    /// The standard ITU E.161 keypad layout:
    /// 2=ABC, 3=DEF, 4=GHI, 5=JKL, 6=MNO, 7=PQRS, 8=TUV, 9=WXYZ.
    pub fn standard() -> Self {
        let groups: [(&str, char); 8] = [
            ("ABC", '2'),
            ("DEF", '3'),
            ("GHI", '4'),
            ("JKL", '5'),
            ("MNO", '6'),
            ("PQRS", '7'),
            ("TUV", '8'),
            ("WXYZ", '9'),
        ];
        let mut digits = [None; 26];
        for (letters, digit) in groups {
            for letter in letters.chars() {
                digits[(letter as u8 - b'A') as usize] = Some(digit);
            }
        }
        Self { digits }
    }

    /// Build a map from explicit `(letter, digit)` pairs.
    ///
    /// Letters are uppercased; a non-ASCII-alphabetic letter or a non-digit
    /// value is rejected. Later pairs overwrite earlier ones.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let mut digits = [None; 26];
        for (letter, digit) in pairs {
            let upper = letter.to_ascii_uppercase();
            if !upper.is_ascii_uppercase() {
                return Err(PhonewordError::InvalidCharacter {
                    found: letter,
                    context: "letter map key",
                });
            }
            if !digit.is_ascii_digit() {
                return Err(PhonewordError::InvalidCharacter {
                    found: digit,
                    context: "letter map value",
                });
            }
            digits[(upper as u8 - b'A') as usize] = Some(digit);
        }
        Ok(Self { digits })
    }

    /// Look up the digit for a character, if any.
    ///
    /// Lowercase letters are uppercased first; anything outside `A..=Z`
    /// has no entry.
    pub fn digit(&self, c: char) -> Option<char> {
        let upper = c.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            self.digits[(upper as u8 - b'A') as usize]
        } else {
            None
        }
    }

    /// Compute the digit hash of a word: the image of its uppercased form
    /// under this map.
    ///
    /// Fails with [`PhonewordError::UnmappedCharacter`] on any character,
    /// alphabetic or not, that has no entry.
    pub fn digit_hash(&self, word: &str) -> Result<String> {
        word.chars()
            .map(|c| self.digit(c).ok_or(PhonewordError::UnmappedCharacter(c)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_keypad_groups() {
        let map = LetterMap::standard();
        assert_eq!(map.digit('A'), Some('2'));
        assert_eq!(map.digit('c'), Some('2'));
        assert_eq!(map.digit('S'), Some('7'));
        assert_eq!(map.digit('Z'), Some('9'));
    }

    #[test]
    fn standard_keypad_hash() {
        let map = LetterMap::standard();
        assert_eq!(map.digit_hash("kars").unwrap(), "5277");
        assert_eq!(map.digit_hash("KIDS").unwrap(), "5437");
    }

    #[test]
    fn unmapped_character_fails() {
        let map = LetterMap::standard();
        assert_eq!(
            map.digit_hash("a-b"),
            Err(PhonewordError::UnmappedCharacter('-'))
        );
    }

    #[test]
    fn partial_map_from_pairs() {
        let map = LetterMap::from_pairs([('a', '1'), ('B', '1')]).unwrap();
        assert_eq!(map.digit('A'), Some('1'));
        assert_eq!(map.digit('b'), Some('1'));
        assert_eq!(map.digit('C'), None);
        assert_eq!(
            map.digit_hash("abc"),
            Err(PhonewordError::UnmappedCharacter('c'))
        );
    }

    #[test]
    fn bad_pairs_rejected() {
        assert!(LetterMap::from_pairs([('1', '2')]).is_err());
        assert!(LetterMap::from_pairs([('a', 'x')]).is_err());
    }
}
