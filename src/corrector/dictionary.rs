use anyhow::{Context, Result};
use fst::{Set, SetBuilder};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Immutable set of known-correct words, backed by an FST on disk. Loaded
/// once per process; membership checks are case-sensitive.
pub struct Dictionary {
    set: Set<Vec<u8>>,
}

impl Dictionary {
    /// Load the installed dictionary for `language`, bootstrapping a small
    /// embedded wordlist if none has been installed yet.
    pub fn load(language: &str) -> Result<Self> {
        let dict_path = Self::dictionary_path(language)?;

        if !dict_path.exists() {
            return Self::bootstrap_embedded(language);
        }

        Self::load_from_path(&dict_path)
    }

    /// Load a dictionary from an explicit FST file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read dictionary: {}", path.display()))?;

        let set = Set::new(bytes)
            .with_context(|| format!("Not a valid dictionary file: {}", path.display()))?;

        Ok(Self { set })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Build an FST dictionary file from a word list.
    pub fn build_from_words(words: &[String], output_path: &Path) -> Result<()> {
        let mut sorted = words.to_vec();
        sorted.sort();
        sorted.dedup();

        let file = File::create(output_path)
            .with_context(|| format!("Failed to create dictionary: {}", output_path.display()))?;

        let mut builder =
            SetBuilder::new(BufWriter::new(file)).context("Failed to start dictionary builder")?;

        for word in &sorted {
            builder
                .insert(word.as_bytes())
                .with_context(|| format!("Failed to insert word: {}", word))?;
        }

        builder.finish().context("Failed to finalize dictionary")?;

        Ok(())
    }

    /// Path of the installed dictionary file for `language`.
    pub fn dictionary_path(language: &str) -> Result<PathBuf> {
        let data_dir = crate::config::Config::data_dir().context("Failed to get data directory")?;

        fs::create_dir_all(&data_dir).context("Failed to create data directory")?;

        Ok(data_dir.join(format!("{}.dict", language)))
    }

    /// Write the embedded seed wordlist to the install location and load it.
    /// Keeps a fresh environment usable before `dict download` has run.
    fn bootstrap_embedded(language: &str) -> Result<Self> {
        let words: Vec<String> = SEED_WORDS.iter().map(|w| w.to_string()).collect();

        let dict_path = Self::dictionary_path(language)?;
        Self::build_from_words(&words, &dict_path)?;

        Self::load_from_path(&dict_path)
    }
}

/// Common English prose words, enough to keep everyday text from being
/// flagged wholesale when no full wordlist is installed.
const SEED_WORDS: &[&str] = &[
    "a", "about", "after", "again", "all", "also", "always", "an", "and", "another", "any", "are",
    "as", "ask", "at", "back", "be", "because", "been", "before", "between", "both", "but", "by",
    "came", "can", "come", "could", "day", "did", "do", "does", "down", "each", "end", "even",
    "every", "few", "find", "first", "for", "found", "from", "get", "give", "go", "good", "great",
    "had", "has", "have", "he", "her", "here", "him", "his", "home", "how", "i", "if", "in",
    "into", "is", "it", "its", "just", "keys", "know", "last", "left", "letter", "like", "line",
    "little", "long", "look", "made", "make", "man", "many", "may", "me", "men", "might", "more",
    "most", "much", "must", "my", "never", "new", "next", "no", "not", "now", "of", "off", "old",
    "on", "one", "only", "or", "other", "our", "out", "over", "own", "page", "part", "people",
    "place", "put", "read", "right", "said", "same", "say", "see", "she", "should", "so", "some",
    "spelling", "still", "such", "take", "test", "text", "than", "that", "the", "their", "them",
    "then", "there", "these", "they", "things", "think", "this", "those", "three", "through",
    "time", "to", "too", "two", "under", "until", "up", "us", "use", "used", "very", "want",
    "was", "way", "we", "well", "went", "were", "what", "when", "where", "which", "while", "who",
    "why", "will", "with", "word", "words", "work", "would", "write", "year", "you", "your",
];
