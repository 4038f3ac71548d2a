//! Command handlers for the phoneword CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::cli::Commands;
use crate::keypad::LetterMap;
use crate::template::NumberTemplate;
use crate::translate::Translator;
use crate::vocabulary::VocabularyIndex;
use crate::wordify::Wordifier;

/// Load a vocabulary file: one word per line, blank lines and tokens with
/// non-alphabetic characters skipped.
pub fn load_vocabulary(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open vocabulary file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read vocabulary line")?;
        let word = line.trim();
        if !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()) {
            words.push(word.to_lowercase());
        }
    }
    Ok(words)
}

fn parse_template(template: Option<&str>) -> Result<NumberTemplate> {
    match template {
        Some(raw) => NumberTemplate::parse(raw).context("Invalid template"),
        None => Ok(NumberTemplate::us()),
    }
}

/// Dispatch a parsed command.
pub fn run(command: &Commands) -> Result<()> {
    let keypad = LetterMap::standard();

    match command {
        Commands::Wordify {
            number,
            vocab,
            template,
            limit,
        } => {
            let words = load_vocabulary(vocab)?;
            let index = VocabularyIndex::build(&words, &keypad)
                .context("Failed to index vocabulary")?;
            let template = parse_template(template.as_deref())?;

            let mut engine = Wordifier::new(&index);
            if let Some(limit) = limit {
                engine = engine.with_limit(*limit);
            }
            let renderings = engine
                .wordify(number, &template)
                .context("Wordification failed")?;

            for rendering in &renderings {
                println!("{rendering}");
            }
            eprintln!(
                "{} {} renderings from {} words",
                "Found".green(),
                renderings.len(),
                index.word_count()
            );
        }

        Commands::Translate {
            phoneword,
            template,
        } => {
            let translator = Translator::new(&keypad);
            let number = match template {
                Some(raw) => {
                    let template = NumberTemplate::parse(raw).context("Invalid template")?;
                    translator.translate_with(phoneword, &template)
                }
                None => translator.translate(phoneword),
            }
            .context("Translation failed")?;
            println!("{number}");
        }
    }
    Ok(())
}
