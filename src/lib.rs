//! # phoneword
//!
//! Phoneword generation and translation over keypad letter maps.
//!
//! A *phoneword* renders a telephone number with some of its digit runs
//! replaced by vocabulary words that dial the same digits, like
//! `1-877-KARS-454` for `1-877-527-7454`. This crate enumerates every
//! such rendering of a number for a given vocabulary, formats them against
//! a number template, and translates phonewords back to plain numbers.
//!
//! ## Example
//!
//! ```rust,ignore
//! use phoneword::prelude::*;
//!
//! let keypad = LetterMap::standard();
//! let vocab = VocabularyIndex::build(["kars"], &keypad)?;
//! let template = NumberTemplate::us();
//!
//! for rendering in Wordifier::new(&vocab).wordify("1-877-527-7454", &template)? {
//!     println!("{rendering}");
//! }
//!
//! let number = Translator::new(&keypad).translate_with("1-877-KARS-454", &template)?;
//! assert_eq!(number, "1-877-527-7454");
//! ```
//!
//! All core components are pure functions over immutable inputs: the
//! vocabulary index is built once and reused across numbers, and nothing
//! here touches files or the network; vocabulary acquisition belongs to
//! callers (the `cli` feature ships one such caller).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod format;
pub mod keypad;
pub mod substring;
pub mod template;
pub mod translate;
pub mod vocabulary;
pub mod wordify;

/// CLI interface and vocabulary loading utilities
#[cfg(feature = "cli")]
pub mod cli;

pub use error::{PhonewordError, Result};
pub use keypad::LetterMap;
pub use substring::SubstringIndex;
pub use template::NumberTemplate;
pub use translate::Translator;
pub use vocabulary::VocabularyIndex;
pub use wordify::Wordifier;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::error::{PhonewordError, Result};
    pub use crate::keypad::LetterMap;
    pub use crate::template::{validate, NumberTemplate};
    pub use crate::translate::Translator;
    pub use crate::vocabulary::VocabularyIndex;
    pub use crate::wordify::Wordifier;
}
