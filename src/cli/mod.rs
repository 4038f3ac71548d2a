//! CLI interface for phoneword
//!
//! Provides command-line utilities for generating phonewords and
//! translating them back to numbers. Vocabulary acquisition lives here,
//! outside the core: a file is loaded once at startup into an immutable
//! [`VocabularyIndex`](crate::VocabularyIndex) handed to the engine.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
pub use commands::{load_vocabulary, run};
