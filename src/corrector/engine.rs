use crate::corrector::dictionary::Dictionary;

/// The statistical fallback used for words the misspelling map doesn't cover.
/// Implementations take a single word and return its best-guess correctly
/// spelled form, or the word unchanged when nothing better is known.
pub trait Corrector {
    fn correct(&self, word: &str, dictionary: &Dictionary) -> String;
}

/// Edit-distance corrector: tries every single-edit variant of the word
/// against the dictionary, then every two-edit variant when no single-edit
/// candidate is known. Candidate selection is deterministic — closest edit
/// tier first, lexicographic within a tier.
pub struct EditEngine;

impl Corrector for EditEngine {
    fn correct(&self, word: &str, dictionary: &Dictionary) -> String {
        if dictionary.contains(word) {
            return word.to_string();
        }

        // Single letters are too ambiguous to respell.
        if word.chars().count() <= 1 {
            return word.to_string();
        }

        if let Some(best) = best_known(edits1(word), dictionary) {
            return best;
        }

        let mut two_edit = Vec::new();
        for edit in edits1(word) {
            two_edit.extend(edits1(&edit));
        }
        if let Some(best) = best_known(two_edit, dictionary) {
            return best;
        }

        word.to_string()
    }
}

/// All variants of `word` one edit away: deletions, adjacent transpositions,
/// replacements, and insertions over a-z.
fn edits1(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut edits = Vec::new();

    for i in 0..chars.len() {
        let mut variant = chars.clone();
        variant.remove(i);
        edits.push(variant.iter().collect());
    }

    for i in 0..chars.len().saturating_sub(1) {
        let mut variant = chars.clone();
        variant.swap(i, i + 1);
        edits.push(variant.iter().collect());
    }

    for i in 0..chars.len() {
        for letter in 'a'..='z' {
            if chars[i] == letter {
                continue;
            }
            let mut variant = chars.clone();
            variant[i] = letter;
            edits.push(variant.iter().collect());
        }
    }

    for i in 0..=chars.len() {
        for letter in 'a'..='z' {
            let mut variant = chars.clone();
            variant.insert(i, letter);
            edits.push(variant.iter().collect());
        }
    }

    edits
}

fn best_known(candidates: Vec<String>, dictionary: &Dictionary) -> Option<String> {
    let mut known: Vec<String> = candidates
        .into_iter()
        .filter(|candidate| dictionary.contains(candidate))
        .collect();
    known.sort();
    known.dedup();
    known.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn dictionary(words: &[&str]) -> Dictionary {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.dict");
        let words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        Dictionary::build_from_words(&words, &path).unwrap();
        Dictionary::load_from_path(&path).unwrap()
    }

    #[test]
    fn test_known_word_passes_through() {
        let dict = dictionary(&["test"]);
        assert_eq!(EditEngine.correct("test", &dict), "test");
    }

    #[test]
    fn test_transposition_is_one_edit() {
        let dict = dictionary(&["a", "is", "test", "this"]);
        assert_eq!(EditEngine.correct("tset", &dict), "test");
    }

    #[test]
    fn test_two_edits_as_fallback() {
        let dict = dictionary(&["spelling"]);
        assert_eq!(EditEngine.correct("speling", &dict), "spelling");
        assert_eq!(EditEngine.correct("spelng", &dict), "spelling");
    }

    #[test]
    fn test_unknown_word_is_unchanged() {
        let dict = dictionary(&["unrelated"]);
        assert_eq!(EditEngine.correct("zzzzqq", &dict), "zzzzqq");
    }

    #[test]
    fn test_single_letters_are_left_alone() {
        let dict = dictionary(&["a", "i"]);
        assert_eq!(EditEngine.correct("x", &dict), "x");
    }

    #[test]
    fn test_ties_break_lexicographically() {
        let dict = dictionary(&["cat", "cot"]);
        assert_eq!(EditEngine.correct("czt", &dict), "cat");
    }

    #[test]
    fn test_edits1_contains_all_edit_kinds() {
        let edits = edits1("tset");
        assert!(edits.contains(&"set".to_string())); // deletion
        assert!(edits.contains(&"test".to_string())); // transposition
        assert!(edits.contains(&"tsat".to_string())); // replacement
        assert!(edits.contains(&"tsets".to_string())); // insertion
    }
}
