use crate::Correction;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only record of every committed substitution. The file is never
/// truncated; a fresh run keeps appending to whatever is already there.
/// Delete it by hand to start over.
pub struct CorrectionLog {
    path: PathBuf,
}

impl CorrectionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record per correction, in one write per source file:
    /// `<original>\t>>>\t<corrected>\t|\tSource: <path>`.
    pub fn append(&self, corrections: &[Correction], source: &Path) -> Result<()> {
        if corrections.is_empty() {
            return Ok(());
        }

        let mut batch = String::new();
        for correction in corrections {
            batch.push_str(&format!(
                "{}\t>>>\t{}\t|\tSource: {}\n",
                correction.original,
                correction.corrected,
                source.display()
            ));
        }

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open correction log: {}", self.path.display()))?;

        file.write_all(batch.as_bytes())
            .with_context(|| format!("Failed to append to correction log: {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn correction(original: &str, corrected: &str) -> Correction {
        Correction {
            original: original.to_string(),
            corrected: corrected.to_string(),
        }
    }

    #[test]
    fn test_record_format() {
        let dir = tempdir().unwrap();
        let log = CorrectionLog::new(dir.path().join("correct_log.txt"));

        log.append(&[correction("teh", "the")], Path::new("input/a.txt"))
            .unwrap();

        let contents = std::fs::read_to_string(log.path()).unwrap();
        assert_eq!(contents, "teh\t>>>\tthe\t|\tSource: input/a.txt\n");
    }

    #[test]
    fn test_appends_across_runs() {
        let dir = tempdir().unwrap();
        let log = CorrectionLog::new(dir.path().join("correct_log.txt"));

        log.append(&[correction("teh", "the")], Path::new("a.txt"))
            .unwrap();
        log.append(
            &[correction("wich", "which"), correction("adress", "address")],
            Path::new("b.txt"),
        )
        .unwrap();

        let contents = std::fs::read_to_string(log.path()).unwrap();
        assert_eq!(contents.lines().count(), 3);
        assert!(contents.starts_with("teh\t>>>\tthe"));
    }

    #[test]
    fn test_empty_batch_writes_nothing() {
        let dir = tempdir().unwrap();
        let log = CorrectionLog::new(dir.path().join("correct_log.txt"));

        log.append(&[], Path::new("a.txt")).unwrap();
        assert!(!log.path().exists());
    }
}
