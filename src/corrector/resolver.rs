use crate::corrector::dictionary::Dictionary;
use crate::corrector::engine::Corrector;
use crate::corrector::misspellings::MisspellingMap;

/// Produce the replacement for an eligible word, or `None` to leave it alone.
///
/// The misspelling map is authoritative: a hit is used as-is and the fallback
/// engine is never consulted for it. Words that start with an uppercase letter
/// and miss the map are left alone — they may name a person, place, or
/// company — so the engine only ever sees lowercase-initial words.
pub fn resolve(
    word: &str,
    misspellings: &MisspellingMap,
    engine: &dyn Corrector,
    dictionary: &Dictionary,
) -> Option<String> {
    if let Some(mapped) = misspellings.lookup(word) {
        if mapped != word {
            return Some(mapped.to_string());
        }
        return None;
    }

    if starts_uppercase(word) {
        return None;
    }

    let candidate = engine.correct(word, dictionary);
    if candidate != word {
        Some(candidate)
    } else {
        None
    }
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().map_or(false, char::is_uppercase)
}
