use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Immutable map from a known-misspelled word to its correct form. Entries
/// are curated, so a hit is taken at face value by the resolver.
pub struct MisspellingMap {
    entries: HashMap<String, String>,
}

impl MisspellingMap {
    /// Load the map: an explicit file wins, then an installed
    /// `misspellings.json` in the data directory, then the built-in seed set.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from_path(path);
        }

        if let Some(installed) = Self::installed_path() {
            if installed.exists() {
                return Self::load_from_path(&installed);
            }
        }

        Ok(Self::builtin())
    }

    /// Load a map from a JSON object file: `{"teh": "the", ...}`.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read misspellings map: {}", path.display()))?;

        let entries: HashMap<String, String> = serde_json::from_str(&raw)
            .with_context(|| format!("Not a valid misspellings map: {}", path.display()))?;

        Ok(Self { entries })
    }

    /// The built-in seed set of classic English misspellings.
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_MISSPELLINGS)
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let entries = pairs
            .iter()
            .map(|(wrong, right)| (wrong.to_string(), right.to_string()))
            .collect();
        Self { entries }
    }

    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn installed_path() -> Option<PathBuf> {
        crate::config::Config::data_dir().map(|dir| dir.join("misspellings.json"))
    }
}

const BUILTIN_MISSPELLINGS: &[(&str, &str)] = &[
    ("abscence", "absence"),
    ("accomodate", "accommodate"),
    ("acheive", "achieve"),
    ("adress", "address"),
    ("agressive", "aggressive"),
    ("apparant", "apparent"),
    ("basicly", "basically"),
    ("begining", "beginning"),
    ("beleive", "believe"),
    ("calender", "calendar"),
    ("cemetary", "cemetery"),
    ("definately", "definitely"),
    ("embarass", "embarrass"),
    ("enviroment", "environment"),
    ("existance", "existence"),
    ("familar", "familiar"),
    ("freind", "friend"),
    ("goverment", "government"),
    ("gaurd", "guard"),
    ("happend", "happened"),
    ("immediatly", "immediately"),
    ("independant", "independent"),
    ("neccessary", "necessary"),
    ("noticable", "noticeable"),
    ("occured", "occurred"),
    ("occurence", "occurrence"),
    ("publically", "publicly"),
    ("recieve", "receive"),
    ("reccomend", "recommend"),
    ("refered", "referred"),
    ("seperate", "separate"),
    ("succesful", "successful"),
    ("teh", "the"),
    ("tommorow", "tomorrow"),
    ("truely", "truly"),
    ("untill", "until"),
    ("wich", "which"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_lookup() {
        let map = MisspellingMap::builtin();
        assert_eq!(map.lookup("teh"), Some("the"));
        assert_eq!(map.lookup("recieve"), Some("receive"));
        assert_eq!(map.lookup("the"), None);
        assert!(!map.is_empty());
    }

    #[test]
    fn test_load_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"Ths": "This", "tset": "test"}}"#).unwrap();

        let map = MisspellingMap::load_from_path(file.path()).unwrap();
        assert_eq!(map.lookup("Ths"), Some("This"));
        assert_eq!(map.lookup("tset"), Some("test"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(MisspellingMap::load_from_path(file.path()).is_err());
    }
}
