pub mod config;
pub mod error;
pub mod filters;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod ranking;
pub mod sources;

pub const NUMBER_OF_WORDS: usize = 20000;
pub const REPORT_SIZE: usize = 20;

pub const INPUT_DIR: &str = "words/input";
pub const OUTPUT_DIR: &str = "words/output";

pub const DICTIONARY_FILE: &str = "sowpods.txt";
pub const DICTIONARY_URL: &str = "https://raw.githubusercontent.com/jesstess/Scrabble/master/scrabble/sowpods.txt";
pub const CORPUS_FILE: &str = "frequency.csv";
pub const NAMES_FILES: [&str; 2] = ["male.txt", "female.txt"];

pub const FREQUENCY_OUTPUT_FILE: &str = "frequencyList.csv";
pub const HINTS_OUTPUT_FILE: &str = "hintsList.csv";
pub const CSV_HEADER: &str = "word,frequency";

pub const INFLECTION_SUFFIXES: [&str; 5] = ["ed", "ing", "s", "es", "ies"];
pub const MIN_WORD_LENGTH: usize = 3;
