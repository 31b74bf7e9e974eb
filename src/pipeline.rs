use crate::{
    config::Config,
    filters::{
        morphology::is_plural,
        profanity::{ProfanityRules, ProfanitySets, PROFANITY},
        validator::{RejectReason, Validator},
    },
    output::write_csv,
    ranking::{rank, RankedList, Ranking},
    sources::{corpus::load_corpus, dictionary::load_dictionary, names::load_names, stopwords::load_stopwords},
    CSV_HEADER,
};
use anyhow::{Context, Result};
use std::fs;
use strum::{EnumProperty, IntoEnumIterator};

/// Loads every word source, ranks the corpus and writes both lists.
pub async fn run(config: &Config) -> Result<Ranking> {
    for dir in [&config.input_dir, &config.output_dir] {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let stopwords = load_stopwords(config.stopwords_path.as_deref())?;
    let names = load_names(&config.names_paths)?;
    let vocabulary = load_dictionary(&config.dictionary_path(), &config.dictionary_url).await?;
    log::info!(
        "Loaded {} stopwords, {} names and {} dictionary words",
        stopwords.len(),
        names.len(),
        vocabulary.len()
    );

    let stemmer = config.stemmer.build();
    let custom_profanity;
    let profanity = if config.profanity == ProfanityRules::default() {
        &*PROFANITY
    } else {
        custom_profanity = ProfanitySets::build(&config.profanity);
        &custom_profanity
    };
    let validator = Validator {
        vocabulary: &vocabulary,
        names: &names,
        stemmer: &*stemmer,
        profanity,
        suffixes: &config.inflection_suffixes,
    };

    let corpus = load_corpus(&config.corpus_path)?;
    log::info!("Ranking {} corpus entries with the {} stemmer", corpus.len(), config.stemmer);

    let mut plurals = 0;
    let ranking = rank(
        &corpus,
        |word| {
            let verdict = validator.check(word);
            if verdict == Err(RejectReason::Inflected) && is_plural(word, validator.stemmer) {
                plurals += 1;
            }
            verdict
        },
        &stopwords,
        config.number_of_words,
    );

    let frequency_path = config.frequency_output_path();
    write_csv(&frequency_path, CSV_HEADER, &ranking.raw)?;
    log::info!("Raw frequency list saved to: {}", frequency_path.display());

    let hints_path = config.hints_output_path();
    write_csv(&hints_path, CSV_HEADER, &ranking.filtered)?;
    log::info!("Filtered hints list saved to: {}", hints_path.display());

    report(&ranking, plurals, config.report_size);
    Ok(ranking)
}

fn report(ranking: &Ranking, plurals: usize, top: usize) {
    log::info!("Total raw words: {}", ranking.raw.len());
    log::info!("Total filtered words: {}", ranking.filtered.len());
    log::info!("Accepted {} of {} corpus entries", ranking.stats.accepted, ranking.stats.corpus_size);
    log::info!("  case duplicates merged: {}", ranking.stats.collapsed);
    for reason in RejectReason::iter() {
        let count = ranking.stats.rejected.get(&reason).copied().unwrap_or_default();
        log::info!("  rejected, {}: {count}", reason.get_str("label").unwrap_or_default());
    }
    log::info!("  of the inflected, plurals: {plurals}");

    log_top("raw", &ranking.raw, top);
    log_top("filtered", &ranking.filtered, top);
}

fn log_top(label: &str, list: &RankedList, top: usize) {
    log::info!("Top {top} most frequent words ({label}):");
    for entry in list.iter().take(top) {
        log::info!("{}: {}", entry.word, entry.frequency);
    }
}
