pub mod classifier;
pub mod dictionary;
pub mod engine;
pub mod misspellings;
pub mod resolver;
pub mod tokenizer;

use crate::logger::CorrectionLog;
use crate::{Config, Correction};
use anyhow::{Context, Result};
use dictionary::Dictionary;
use engine::{Corrector, EditEngine};
use misspellings::MisspellingMap;
use std::fs;
use std::path::Path;
use tokenizer::Token;

/// What happened to one input file.
#[derive(Debug)]
pub enum FileOutcome {
    /// Output was written; holds the substitutions that were applied.
    Converted(Vec<Correction>),
    /// Input had no content, so nothing was written.
    Empty,
}

pub struct SpellCorrector {
    dictionary: Dictionary,
    misspellings: MisspellingMap,
    engine: Box<dyn Corrector>,
}

impl SpellCorrector {
    pub fn new(config: &Config) -> Result<Self> {
        let dictionary = match &config.dictionary {
            Some(path) => Dictionary::load_from_path(path)?,
            None => Dictionary::load(&config.language)?,
        };

        let misspellings = MisspellingMap::load(config.misspellings.as_deref())?;

        Ok(Self {
            dictionary,
            misspellings,
            engine: Box::new(EditEngine),
        })
    }

    /// Assemble a corrector from already-loaded parts, with any fallback
    /// engine behind the seam.
    pub fn with_engine(
        dictionary: Dictionary,
        misspellings: MisspellingMap,
        engine: Box<dyn Corrector>,
    ) -> Self {
        Self {
            dictionary,
            misspellings,
            engine,
        }
    }

    /// Run the correction pass over a text blob. Returns the rebuilt text and
    /// the substitutions that were committed, in source order.
    pub fn correct_text(&self, text: &str) -> (String, Vec<Correction>) {
        self.correct_tokens(tokenizer::tokenize(text))
    }

    // The pass owns `tokens` exclusively; slots are rewritten in place and the
    // sequence is consumed to build the output.
    fn correct_tokens(&self, mut tokens: Vec<Token>) -> (String, Vec<Correction>) {
        let mut corrections = Vec::new();

        for token in &mut tokens {
            if !classifier::is_correctable(token, &self.dictionary) {
                continue;
            }

            let resolved = resolver::resolve(
                &token.text,
                &self.misspellings,
                self.engine.as_ref(),
                &self.dictionary,
            );

            if let Some(candidate) = resolved {
                corrections.push(Correction {
                    original: token.text.clone(),
                    corrected: candidate.clone(),
                });
                token.text = candidate;
            }
        }

        (tokenizer::rebuild(&tokens), corrections)
    }

    /// Correct one file: read it whole, run the pass, write the corrected
    /// copy, then append this file's records to the log in one batch.
    pub fn correct_file(
        &self,
        input: &Path,
        output: &Path,
        log: Option<&CorrectionLog>,
    ) -> Result<FileOutcome> {
        let content = fs::read_to_string(input)
            .with_context(|| format!("Failed to read input file: {}", input.display()))?;

        let tokens = tokenizer::tokenize(&content);
        if tokens.is_empty() {
            return Ok(FileOutcome::Empty);
        }

        let (corrected, corrections) = self.correct_tokens(tokens);

        fs::write(output, corrected)
            .with_context(|| format!("Failed to write output file: {}", output.display()))?;

        if let Some(log) = log {
            log.append(&corrections, input)?;
        }

        Ok(FileOutcome::Converted(corrections))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corrector::tokenizer::{tokenize, TokenKind};
    use std::collections::HashMap;
    use tempfile::tempdir;

    struct TableEngine(HashMap<String, String>);

    impl TableEngine {
        fn new(pairs: &[(&str, &str)]) -> Self {
            Self(
                pairs
                    .iter()
                    .map(|(from, to)| (from.to_string(), to.to_string()))
                    .collect(),
            )
        }
    }

    impl Corrector for TableEngine {
        fn correct(&self, word: &str, _dictionary: &Dictionary) -> String {
            self.0.get(word).cloned().unwrap_or_else(|| word.to_string())
        }
    }

    fn dictionary(words: &[&str]) -> Dictionary {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.dict");
        let words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        Dictionary::build_from_words(&words, &path).unwrap();
        Dictionary::load_from_path(&path).unwrap()
    }

    fn corrector() -> SpellCorrector {
        SpellCorrector::with_engine(
            dictionary(&["a", "is", "test", "this"]),
            MisspellingMap::from_pairs(&[("Ths", "This")]),
            Box::new(TableEngine::new(&[("tset", "test")])),
        )
    }

    #[test]
    fn test_scenario_passage() {
        let (text, corrections) = corrector().correct_text("Ths is a tset.");
        assert_eq!(text, "This is a test.");
        assert_eq!(
            corrections,
            vec![
                Correction {
                    original: "Ths".to_string(),
                    corrected: "This".to_string(),
                },
                Correction {
                    original: "tset".to_string(),
                    corrected: "test".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_clean_text_is_unchanged() {
        let input = "this is a test.\nthis is a test!";
        let (text, corrections) = corrector().correct_text(input);
        assert_eq!(text, input);
        assert!(corrections.is_empty());
    }

    #[test]
    fn test_capitalized_words_are_protected() {
        let (text, corrections) = corrector().correct_text("Johnson is a test.");
        assert_eq!(text, "Johnson is a test.");
        assert!(corrections.is_empty());
    }

    #[test]
    fn test_non_word_structure_is_preserved() {
        let input = "Ths, is -- a tset?! 42\n";
        let before = tokenize(input);
        let (output, _) = corrector().correct_text(input);
        let after = tokenize(&output);

        assert_eq!(before.len(), after.len());
        for (b, a) in before.iter().zip(&after) {
            assert_eq!(b.kind, a.kind);
            if b.kind != TokenKind::Word {
                assert_eq!(b.text, a.text);
            }
        }
    }

    #[test]
    fn test_empty_file_is_skipped() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("empty.txt");
        let output = dir.path().join("empty--CORRECTED.txt");
        std::fs::write(&input, "").unwrap();

        let outcome = corrector().correct_file(&input, &output, None).unwrap();
        assert!(matches!(outcome, FileOutcome::Empty));
        assert!(!output.exists());
    }

    #[test]
    fn test_file_roundtrip_with_log() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("in--CORRECTED.txt");
        let log_path = dir.path().join("correct_log.txt");
        std::fs::write(&input, "Ths is a tset.").unwrap();

        let log = CorrectionLog::new(&log_path);
        let outcome = corrector()
            .correct_file(&input, &output, Some(&log))
            .unwrap();

        assert!(matches!(outcome, FileOutcome::Converted(ref c) if c.len() == 2));
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "This is a test."
        );

        let logged = std::fs::read_to_string(&log_path).unwrap();
        assert_eq!(logged.lines().count(), 2);
        assert!(logged.contains("Ths\t>>>\tThis"));
    }
}
