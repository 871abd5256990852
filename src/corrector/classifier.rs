use crate::corrector::dictionary::Dictionary;
use crate::corrector::tokenizer::Token;

/// Decide whether a token should be handed to the resolver. Whitespace and
/// punctuation are never candidates; neither is a word the dictionary
/// already knows (case-sensitive membership, checked here and nowhere else).
pub fn is_correctable(token: &Token, dictionary: &Dictionary) -> bool {
    if !token.is_word() {
        return false;
    }

    // Tokens built by hand may carry stray non-letters.
    if !token.text.chars().all(char::is_alphabetic) {
        return false;
    }

    !dictionary.contains(&token.text)
}
