use crate::INFLECTION_SUFFIXES;
use rust_stemmers::{Algorithm, Stemmer};
use std::borrow::Cow;
use strum_macros::{Display, EnumString};

const PLURAL_SUFFIXES: [&str; 3] = ["s", "es", "ies"];

pub trait WordStemmer {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str>;
}

impl WordStemmer for Stemmer {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        Stemmer::stem(self, word)
    }
}

/// Strips plural, past tense and gerund endings only. Unlike Snowball it
/// leaves derivational endings alone, so "apple" stays "apple".
#[derive(Clone, Copy, Debug, Default)]
pub struct InflectionStemmer;

impl WordStemmer for InflectionStemmer {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if word.len() <= 3 {
            return Cow::Borrowed(word);
        }

        if word.len() > 4 {
            if let Some(stem) = word.strip_suffix("ies") {
                return Cow::Owned(format!("{stem}y"));
            }
            if let Some(stem) = word.strip_suffix("ied") {
                return Cow::Owned(format!("{stem}y"));
            }
        }
        if let Some(stem) = word.strip_suffix("es") {
            if ["ss", "x", "z", "ch", "sh"].iter().any(|ending| stem.ends_with(ending)) {
                return Cow::Borrowed(stem);
            }
        }
        if word.ends_with('s') && !["ss", "us", "is"].iter().any(|ending| word.ends_with(ending)) {
            return Cow::Borrowed(&word[..word.len() - 1]);
        }
        for suffix in ["ing", "ed"] {
            if let Some(stem) = word.strip_suffix(suffix) {
                if stem.len() >= 3 && stem.chars().any(is_vowel) {
                    return Cow::Borrowed(undouble(stem));
                }
            }
        }

        Cow::Borrowed(word)
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

// "runn" -> "run", "stopp" -> "stop", but "fall" and "miss" keep their pair
fn undouble(stem: &str) -> &str {
    let mut chars = stem.chars().rev();
    match (chars.next(), chars.next()) {
        (Some(last), Some(prev)) if last == prev && !is_vowel(last) && !matches!(last, 'l' | 's' | 'z') => {
            &stem[..stem.len() - last.len_utf8()]
        }
        _ => stem,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum StemmerKind {
    #[default]
    Inflection,
    Snowball,
}

impl StemmerKind {
    pub fn build(self) -> Box<dyn WordStemmer> {
        match self {
            Self::Inflection => Box::new(InflectionStemmer),
            Self::Snowball => Box::new(Stemmer::create(Algorithm::English)),
        }
    }
}

pub fn is_base_form(word: &str, stemmer: &dyn WordStemmer) -> bool {
    is_base_form_with(word, stemmer, &INFLECTION_SUFFIXES)
}

/// A word is in base form when stemming leaves it untouched and it carries
/// none of the inflection suffixes, which catches what a lenient stemmer misses.
/// `InflectionStemmer` only rewrites words the suffix check already rejects,
/// so the stem comparison only decides anything under `StemmerKind::Snowball`.
pub fn is_base_form_with<S: AsRef<str>>(word: &str, stemmer: &dyn WordStemmer, suffixes: &[S]) -> bool {
    stemmer.stem(word) == word && !suffixes.iter().any(|suffix| word.ends_with(suffix.as_ref()))
}

pub fn is_plural(word: &str, stemmer: &dyn WordStemmer) -> bool {
    PLURAL_SUFFIXES.iter().any(|suffix| word.ends_with(suffix)) && stemmer.stem(word) != word
}
