use crate::{
    filters::{
        morphology::{is_base_form_with, WordStemmer},
        profanity::{contains_profanity, ProfanitySets},
    },
    INFLECTION_SUFFIXES, MIN_WORD_LENGTH,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use strum_macros::{Display, EnumIter, EnumProperty};

static DIGIT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("valid digit pattern"));
static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z]+$").expect("valid word pattern"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumProperty)]
pub enum RejectReason {
    #[strum(props(label = "shorter than three letters"))]
    TooShort,
    #[strum(props(label = "contains a digit"))]
    Digit,
    #[strum(props(label = "contains an apostrophe or hyphen"))]
    Punctuation,
    #[strum(props(label = "personal name"))]
    Name,
    #[strum(props(label = "non-letter characters"))]
    NonAlphabetic,
    #[strum(props(label = "not in base form"))]
    Inflected,
    #[strum(props(label = "profanity"))]
    Profanity,
    #[strum(props(label = "not in dictionary"))]
    NotInDictionary,
    #[strum(props(label = "stopword"))]
    Stopword,
}

/// Read-only word sets a candidate is checked against.
pub struct Validator<'a> {
    pub vocabulary: &'a HashSet<String>,
    pub names: &'a HashSet<String>,
    pub stemmer: &'a dyn WordStemmer,
    pub profanity: &'a ProfanitySets,
    pub suffixes: &'a [String],
}

impl Validator<'_> {
    pub fn check(&self, word: &str) -> Result<(), RejectReason> {
        check_word(word, self.vocabulary, self.names, self.stemmer, self.profanity, self.suffixes)
    }

    pub fn is_valid(&self, word: &str) -> bool {
        self.check(word).is_ok()
    }
}

/// Runs the cheap lexical checks first and the stemmer and set lookups last.
/// Returns the first rule the word breaks.
pub fn check_word<S: AsRef<str>>(
    word: &str,
    vocabulary: &HashSet<String>,
    names: &HashSet<String>,
    stemmer: &dyn WordStemmer,
    profanity: &ProfanitySets,
    suffixes: &[S],
) -> Result<(), RejectReason> {
    let word = word.to_lowercase();

    if word.chars().count() < MIN_WORD_LENGTH {
        return Err(RejectReason::TooShort);
    }
    if DIGIT_PATTERN.is_match(&word) {
        return Err(RejectReason::Digit);
    }
    if word.contains(['\'', '-']) {
        return Err(RejectReason::Punctuation);
    }
    if names.contains(&word) {
        return Err(RejectReason::Name);
    }
    if !WORD_PATTERN.is_match(&word) {
        return Err(RejectReason::NonAlphabetic);
    }
    if !is_base_form_with(&word, stemmer, suffixes) {
        return Err(RejectReason::Inflected);
    }
    if contains_profanity(&word, profanity) {
        return Err(RejectReason::Profanity);
    }
    if !vocabulary.contains(&word) {
        return Err(RejectReason::NotInDictionary);
    }
    Ok(())
}

pub fn is_valid_word(
    word: &str,
    vocabulary: &HashSet<String>,
    names: &HashSet<String>,
    stemmer: &dyn WordStemmer,
    profanity: &ProfanitySets,
) -> bool {
    check_word(word, vocabulary, names, stemmer, profanity, &INFLECTION_SUFFIXES).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{morphology::InflectionStemmer, profanity::PROFANITY};
    use strum::{EnumProperty, IntoEnumIterator};

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|word| (*word).to_string()).collect()
    }

    fn check(word: &str, vocabulary: &HashSet<String>) -> Result<(), RejectReason> {
        let names = set(&["mary", "john"]);
        check_word(word, vocabulary, &names, &InflectionStemmer, &PROFANITY, &INFLECTION_SUFFIXES)
    }

    #[test]
    fn accepts_clean_dictionary_word() {
        let vocabulary = set(&["apple"]);
        assert!(is_valid_word("apple", &vocabulary, &HashSet::new(), &InflectionStemmer, &PROFANITY));
        assert!(is_valid_word("Apple", &vocabulary, &HashSet::new(), &InflectionStemmer, &PROFANITY));
    }

    #[test]
    fn reports_first_broken_rule() {
        let vocabulary = set(&["ab", "word2", "o'clock", "mary", "café", "cats", "fuck", "hellscape"]);
        assert_eq!(check("ab", &vocabulary), Err(RejectReason::TooShort));
        assert_eq!(check("word2", &vocabulary), Err(RejectReason::Digit));
        assert_eq!(check("o'clock", &vocabulary), Err(RejectReason::Punctuation));
        assert_eq!(check("well-being", &vocabulary), Err(RejectReason::Punctuation));
        assert_eq!(check("Mary", &vocabulary), Err(RejectReason::Name));
        assert_eq!(check("café", &vocabulary), Err(RejectReason::NonAlphabetic));
        assert_eq!(check("cats", &vocabulary), Err(RejectReason::Inflected));
        assert_eq!(check("fuck", &vocabulary), Err(RejectReason::Profanity));
        assert_eq!(check("hellscape", &vocabulary), Err(RejectReason::Profanity));
        assert_eq!(check("banana", &vocabulary), Err(RejectReason::NotInDictionary));
    }

    #[test]
    fn validator_uses_configured_suffixes() {
        let vocabulary = set(&["bus"]);
        let names = HashSet::new();
        let suffixes = vec!["ing".to_string()];
        let validator = Validator {
            vocabulary: &vocabulary,
            names: &names,
            stemmer: &InflectionStemmer,
            profanity: &PROFANITY,
            suffixes: &suffixes,
        };
        assert!(validator.is_valid("bus"));
        assert!(!is_valid_word("bus", &vocabulary, &names, &InflectionStemmer, &PROFANITY));
    }

    #[test]
    fn every_reason_has_a_label() {
        for reason in RejectReason::iter() {
            assert!(reason.get_str("label").is_some(), "{reason}");
        }
    }
}
