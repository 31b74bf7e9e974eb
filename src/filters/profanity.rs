use once_cell::sync::Lazy;
use std::collections::HashSet;

const BASE_WORDS: [&str; 100] = [
    // Sexual terms
    "fuck", "shit", "cock", "dick", "penis", "pussy", "cunt", "vagina", "cum", "semen", "whore", "slut", "bitch", "hooker", "hoe",
    "skank", "queer", "fag", "dyke",
    // Excretory terms
    "piss", "poop", "crap", "ass", "arse", "butt",
    // Slurs
    "nigger", "nigga", "chink", "spic", "wetback", "kike", "kyke", "fagot", "faggot", "retard", "tard", "homo", "tranny", "twat",
    "paki", "gook", "honky", "wop", "dago", "raghead", "towelhead", "beaner", "gringo", "cracka", "cracker", "redneck", "whitey",
    "zipperhead", "wigger", "wigga", "wog", "yid",
    // Blasphemous
    "goddamn", "goddam", "damn", "hell", "bastard",
    // Body parts
    "tit", "tits", "titty", "boob", "knocker", "ballsack", "nuts", "nutsack",
    // Other insults
    "douche", "douchebag", "scumbag", "motherfucker", "fucker", "wanker", "bollocks", "prick", "schmuck", "asshole", "arsehole",
    "jackass", "dumbass", "dipshit", "cocksucker", "blowjob", "handjob", "rimjob", "jizz", "spunk", "dildo", "dong", "wang",
    "schlong", "dingus", "weiner", "wiener", "knob", "pecker", "chode",
];

const PREFIXES: [&str; 17] = [
    "dumb", "horse", "bull", "chicken", "jack", "ass", "mother", "dog", "pig", "dick", "cock", "pussy", "cunt", "butt", "cum",
    "jizz", "circle",
];

const SUFFIXES: [&str; 17] = [
    "hole", "head", "face", "wipe", "wad", "stain", "bag", "sucker", "licker", "lover", "fucker", "eating", "sucking", "jockey",
    "monkey", "breath", "brain",
];

const VARIATIONS: [&str; 10] = ["ing", "er", "ed", "y", "ier", "iest", "in", "ez", "es", "s"];

// Matched anywhere inside a word
const SUBSTRINGS: [&str; 18] = [
    "fuck", "shit", "cunt", "cock", "dick", "pussy", "whore", "slut", "bitch", "fag", "nigg", "spic", "dyke", "homo", "queer", "tard",
    "hell", "ass",
];

pub static PROFANITY: Lazy<ProfanitySets> = Lazy::new(build_profanity_sets);

/// Word lists the profanity closure is generated from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfanityRules {
    pub base: Vec<String>,
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
    pub variations: Vec<String>,
    pub substrings: Vec<String>,
}

impl Default for ProfanityRules {
    fn default() -> Self {
        let owned = |list: &[&str]| -> Vec<String> { list.iter().map(|s| (*s).to_string()).collect() };
        Self {
            base: owned(&BASE_WORDS),
            prefixes: owned(&PREFIXES),
            suffixes: owned(&SUFFIXES),
            variations: owned(&VARIATIONS),
            substrings: owned(&SUBSTRINGS),
        }
    }
}

#[derive(Debug)]
pub struct ProfanitySets {
    pub words: HashSet<String>,
    pub substrings: Vec<String>,
}

impl ProfanitySets {
    /// Expands the base words with every prefix, suffix and variation.
    /// Compounds are built from base words only, never from other compounds.
    pub fn build(rules: &ProfanityRules) -> Self {
        let mut words: HashSet<String> = rules.base.iter().cloned().collect();

        for base in &rules.base {
            words.extend(rules.prefixes.iter().map(|prefix| format!("{prefix}{base}")));
            words.extend(rules.suffixes.iter().map(|suffix| format!("{base}{suffix}")));
            words.extend(rules.variations.iter().map(|variation| format!("{base}{variation}")));
        }

        Self {
            words,
            substrings: rules.substrings.clone(),
        }
    }
}

pub fn build_profanity_sets() -> ProfanitySets {
    ProfanitySets::build(&ProfanityRules::default())
}

pub fn contains_profanity(word: &str, sets: &ProfanitySets) -> bool {
    let word = word.to_lowercase();
    if sets.words.contains(&word) {
        return true;
    }
    sets.substrings.iter().any(|substring| word.contains(substring.as_str()))
}
