use crate::{
    error::PipelineError,
    filters::{morphology::StemmerKind, profanity::ProfanityRules},
    CORPUS_FILE, DICTIONARY_FILE, DICTIONARY_URL, FREQUENCY_OUTPUT_FILE, HINTS_OUTPUT_FILE, INFLECTION_SUFFIXES, INPUT_DIR,
    NAMES_FILES, NUMBER_OF_WORDS, OUTPUT_DIR, REPORT_SIZE,
};
use anyhow::Result;
use std::{env, path::PathBuf, str::FromStr};

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub number_of_words: usize,
    pub report_size: usize,

    pub input_dir: PathBuf,
    pub output_dir: PathBuf,

    pub dictionary_url: String,
    pub corpus_path: PathBuf,
    pub names_paths: Vec<PathBuf>,
    pub stopwords_path: Option<PathBuf>,

    pub stemmer: StemmerKind,
    pub inflection_suffixes: Vec<String>,
    pub profanity: ProfanityRules,
}

impl Default for Config {
    fn default() -> Self {
        Self::with_input_dir(PathBuf::from(INPUT_DIR))
    }
}

impl Config {
    fn with_input_dir(input_dir: PathBuf) -> Self {
        Self {
            number_of_words: NUMBER_OF_WORDS,
            report_size: REPORT_SIZE,

            corpus_path: input_dir.join(CORPUS_FILE),
            names_paths: NAMES_FILES.iter().map(|file| input_dir.join(file)).collect(),
            stopwords_path: None,
            input_dir,
            output_dir: PathBuf::from(OUTPUT_DIR),

            dictionary_url: DICTIONARY_URL.to_string(),

            stemmer: StemmerKind::default(),
            inflection_suffixes: INFLECTION_SUFFIXES.iter().map(|s| (*s).to_string()).collect(),
            profanity: ProfanityRules::default(),
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Applies `HINTS_*` overrides on top of the defaults. Paths that live in
    /// the input directory follow `HINTS_INPUT_DIR` unless set themselves.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = lookup("HINTS_INPUT_DIR").map_or_else(Self::default, |dir| Self::with_input_dir(PathBuf::from(dir)));

        if let Some(value) = lookup("HINTS_NUMBER_OF_WORDS") {
            config.number_of_words = parse_value("HINTS_NUMBER_OF_WORDS", &value)?;
        }
        if let Some(value) = lookup("HINTS_REPORT_SIZE") {
            config.report_size = parse_value("HINTS_REPORT_SIZE", &value)?;
        }
        if let Some(value) = lookup("HINTS_STEMMER") {
            config.stemmer = parse_value("HINTS_STEMMER", &value)?;
        }
        if let Some(dir) = lookup("HINTS_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(url) = lookup("HINTS_DICTIONARY_URL") {
            config.dictionary_url = url;
        }
        if let Some(path) = lookup("HINTS_CORPUS") {
            config.corpus_path = PathBuf::from(path);
        }
        if let Some(paths) = lookup("HINTS_NAMES") {
            config.names_paths = paths
                .split(',')
                .map(str::trim)
                .filter(|path| !path.is_empty())
                .map(PathBuf::from)
                .collect();
        }
        if let Some(path) = lookup("HINTS_STOPWORDS") {
            config.stopwords_path = Some(PathBuf::from(path));
        }

        Ok(config)
    }

    pub fn dictionary_path(&self) -> PathBuf {
        self.input_dir.join(DICTIONARY_FILE)
    }

    pub fn frequency_output_path(&self) -> PathBuf {
        self.output_dir.join(FREQUENCY_OUTPUT_FILE)
    }

    pub fn hints_output_path(&self) -> PathBuf {
        self.output_dir.join(HINTS_OUTPUT_FILE)
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        PipelineError::Config {
            key: key.to_string(),
            value: value.to_string(),
        }
        .into()
    })
}
