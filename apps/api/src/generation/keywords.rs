//! Keyword extraction — turns a free-text persona description into up to five
//! capitalised topic words that feed template slots and custom hashtags.
//!
//! No failure path: degenerate input (empty, punctuation only, all short words)
//! yields an empty list, and every template slot has a literal fallback.

use std::collections::HashSet;

/// Maximum number of keywords returned per persona.
pub const MAX_KEYWORDS: usize = 5;

/// Tokens must be strictly longer than this to survive.
const MIN_EXCLUSIVE_LEN: usize = 4;

/// Articles, conjunctions and prepositions that carry no topic signal.
/// Words of four characters or fewer are listed for completeness even though
/// the length filter would drop them anyway.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "is", "are", "was", "were", "in", "on", "at", "to",
    "for", "of", "with", "by", "about", "above", "across", "after", "against", "along", "among",
    "around", "before", "behind", "below", "beneath", "beside", "between", "beyond", "during",
    "except", "inside", "outside", "since", "through", "toward", "towards", "under", "until",
    "unlike", "within", "without", "because", "although", "though", "unless", "whether", "while",
];

/// Extracts ordered, de-duplicated, capitalised keywords from persona text.
///
/// Algorithm:
/// 1. Lower-case, split on whitespace runs
/// 2. Drop tokens of length ≤ 4 and stop words
/// 3. Drop tokens that are not purely `[a-z]+` (attached punctuation, digits, other scripts)
/// 4. De-duplicate keeping first occurrence, take the first 5
/// 5. Upper-case the first character
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut seen: HashSet<&str> = HashSet::new();

    lowered
        .split_whitespace()
        .filter(|word| word.len() > MIN_EXCLUSIVE_LEN && !STOP_WORDS.contains(word))
        .filter(|word| word.bytes().all(|b| b.is_ascii_lowercase()))
        .filter(|word| seen.insert(*word))
        .take(MAX_KEYWORDS)
        .map(capitalize)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_keyword_shaped(k: &str) -> bool {
        let mut bytes = k.bytes();
        k.len() >= 5
            && bytes.next().is_some_and(|b| b.is_ascii_uppercase())
            && bytes.all(|b| b.is_ascii_lowercase())
    }

    #[test]
    fn test_sustainable_energy_persona() {
        let keywords = extract_keywords(
            "I am passionate about sustainable technology and renewable energy solutions",
        );
        assert_eq!(
            keywords,
            vec!["Passionate", "Sustainable", "Technology", "Renewable", "Energy"]
        );
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("   \n\t ").is_empty());
    }

    #[test]
    fn test_short_words_are_dropped() {
        assert!(extract_keywords("I am a big fan of cats and dogs").is_empty());
    }

    #[test]
    fn test_punctuation_and_digits_rejected() {
        let keywords = extract_keywords("leader, builder mentor. web3native founder 2024");
        assert_eq!(keywords, vec!["Builder", "Founder"]);
    }

    #[test]
    fn test_non_ascii_tokens_rejected() {
        let keywords = extract_keywords("café naïve résumé developer");
        assert_eq!(keywords, vec!["Developer"]);
    }

    #[test]
    fn test_dedup_is_case_insensitive_and_keeps_first_position() {
        let keywords = extract_keywords("Rustacean systems RUSTACEAN Systems compilers");
        assert_eq!(keywords, vec!["Rustacean", "Systems", "Compilers"]);
    }

    #[test]
    fn test_caps_at_five() {
        let keywords =
            extract_keywords("alpha bravo charlie delta echoes foxtrot golfer hotel india");
        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert_eq!(keywords[0], "Alpha");
        assert_eq!(keywords[4], "Echoes");
    }

    #[test]
    fn test_stop_words_longer_than_four_are_removed() {
        let keywords = extract_keywords("writing about design between meetings without coffee");
        assert_eq!(keywords, vec!["Writing", "Design", "Meetings", "Coffee"]);
    }

    #[test]
    fn test_every_keyword_is_well_formed() {
        let inputs = [
            "Growth hacker obsessed with analytics, funnels and experimentation!",
            "ML researcher | PhD | writes about transformers & diffusion models",
            "ciao sono uno sviluppatore appassionato di robotica",
            "teacher teacher teacher teacher",
        ];
        for input in inputs {
            let keywords = extract_keywords(input);
            assert!(keywords.len() <= MAX_KEYWORDS);
            for k in &keywords {
                assert!(is_keyword_shaped(k), "malformed keyword {k:?} from {input:?}");
            }
            let unique: HashSet<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
            assert_eq!(unique.len(), keywords.len(), "duplicates from {input:?}");
        }
    }
}
