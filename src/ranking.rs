use crate::filters::validator::RejectReason;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FrequencyEntry {
    pub word: String,
    pub frequency: f64,
}

impl FrequencyEntry {
    pub fn new(word: impl Into<String>, frequency: f64) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }
}

/// Entries ordered by descending frequency, at most `limit` long.
pub type RankedList = Vec<FrequencyEntry>;

#[derive(Debug, Default)]
pub struct RankStats {
    pub corpus_size: usize,
    pub accepted: usize,
    pub collapsed: usize,
    pub rejected: BTreeMap<RejectReason, usize>,
}

#[derive(Debug)]
pub struct Ranking {
    pub raw: RankedList,
    pub filtered: RankedList,
    pub stats: RankStats,
}

/// Builds the unfiltered and filtered top lists from one pass over the corpus.
///
/// Filtered candidates are lowercased before checking. When two entries
/// collapse to the same word it keeps the position of the first and the
/// frequency of the last.
pub fn rank<F>(corpus: &[FrequencyEntry], mut predicate: F, stopwords: &HashSet<String>, limit: usize) -> Ranking
where
    F: FnMut(&str) -> Result<(), RejectReason>,
{
    let mut stats = RankStats {
        corpus_size: corpus.len(),
        ..RankStats::default()
    };

    let mut raw = corpus.to_vec();
    sort_and_truncate(&mut raw, limit);

    let mut filtered: RankedList = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    for entry in corpus {
        let word = entry.word.to_lowercase();
        let verdict = if stopwords.contains(&word) {
            Err(RejectReason::Stopword)
        } else {
            predicate(&word)
        };
        if let Err(reason) = verdict {
            log::trace!("Rejected '{word}': {reason}");
            *stats.rejected.entry(reason).or_default() += 1;
            continue;
        }

        if let Some(&index) = positions.get(&word) {
            filtered[index].frequency = entry.frequency;
            stats.collapsed += 1;
        } else {
            stats.accepted += 1;
            positions.insert(word.clone(), filtered.len());
            filtered.push(FrequencyEntry::new(word, entry.frequency));
        }
    }
    sort_and_truncate(&mut filtered, limit);

    Ranking { raw, filtered, stats }
}

// sort_by is stable, ties keep corpus order
fn sort_and_truncate(entries: &mut RankedList, limit: usize) {
    entries.sort_by(|a, b| b.frequency.total_cmp(&a.frequency));
    entries.truncate(limit);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        filters::{morphology::InflectionStemmer, profanity::PROFANITY, validator::check_word},
        INFLECTION_SUFFIXES,
    };

    fn words(list: &RankedList) -> Vec<&str> {
        list.iter().map(|entry| entry.word.as_str()).collect()
    }

    fn is_non_increasing(list: &RankedList) -> bool {
        list.windows(2).all(|pair| pair[0].frequency >= pair[1].frequency)
    }

    fn sample_corpus() -> Vec<FrequencyEntry> {
        vec![
            FrequencyEntry::new("the", 100.0),
            FrequencyEntry::new("cats", 90.0),
            FrequencyEntry::new("apple", 80.0),
            FrequencyEntry::new("fuck", 70.0),
            FrequencyEntry::new("xyz123", 60.0),
        ]
    }

    #[test]
    fn filters_sample_corpus_to_apple() {
        let vocabulary: HashSet<String> = ["apple", "cats"].iter().map(|s| (*s).to_string()).collect();
        let names = HashSet::new();
        let stopwords: HashSet<String> = ["the".to_string()].into_iter().collect();

        let ranking = rank(
            &sample_corpus(),
            |word| check_word(word, &vocabulary, &names, &InflectionStemmer, &PROFANITY, &INFLECTION_SUFFIXES),
            &stopwords,
            10,
        );

        assert_eq!(ranking.filtered, vec![FrequencyEntry::new("apple", 80.0)]);
        assert_eq!(words(&ranking.raw), ["the", "cats", "apple", "fuck", "xyz123"]);
        assert_eq!(ranking.stats.accepted, 1);
        assert_eq!(ranking.stats.rejected.get(&RejectReason::Stopword), Some(&1));
        assert_eq!(ranking.stats.rejected.get(&RejectReason::Inflected), Some(&1));
        assert_eq!(ranking.stats.rejected.get(&RejectReason::Profanity), Some(&1));
        assert_eq!(ranking.stats.rejected.get(&RejectReason::Digit), Some(&1));
    }

    #[test]
    fn sorts_descending_and_truncates() {
        let corpus: Vec<FrequencyEntry> = (0..50)
            .map(|i| FrequencyEntry::new(format!("word{i}"), f64::from((i * 37) % 11)))
            .collect();
        let ranking = rank(&corpus, |_| Ok(()), &HashSet::new(), 20);

        assert_eq!(ranking.raw.len(), 20);
        assert_eq!(ranking.filtered.len(), 20);
        assert!(is_non_increasing(&ranking.raw));
        assert!(is_non_increasing(&ranking.filtered));
        assert_eq!(ranking.raw[0].frequency, 10.0);
    }

    #[test]
    fn ties_keep_corpus_order() {
        let corpus = vec![
            FrequencyEntry::new("beta", 1.0),
            FrequencyEntry::new("alpha", 2.0),
            FrequencyEntry::new("gamma", 1.0),
            FrequencyEntry::new("delta", 1.0),
        ];
        let ranking = rank(&corpus, |_| Ok(()), &HashSet::new(), 10);
        assert_eq!(words(&ranking.raw), ["alpha", "beta", "gamma", "delta"]);
        assert_eq!(words(&ranking.filtered), ["alpha", "beta", "gamma", "delta"]);
    }

    #[test]
    fn case_duplicates_collapse_in_filtered_list_only() {
        let corpus = vec![
            FrequencyEntry::new("Rose", 5.0),
            FrequencyEntry::new("tulip", 4.0),
            FrequencyEntry::new("rose", 3.0),
        ];
        let ranking = rank(&corpus, |_| Ok(()), &HashSet::new(), 10);
        assert_eq!(words(&ranking.raw), ["Rose", "tulip", "rose"]);
        assert_eq!(ranking.filtered, vec![FrequencyEntry::new("tulip", 4.0), FrequencyEntry::new("rose", 3.0)]);
        assert_eq!(ranking.stats.accepted, 2);
        assert_eq!(ranking.stats.collapsed, 1);
    }

    #[test]
    fn stopwords_are_matched_after_lowercasing() {
        let corpus = vec![FrequencyEntry::new("The", 5.0), FrequencyEntry::new("river", 4.0)];
        let stopwords: HashSet<String> = ["the".to_string()].into_iter().collect();
        let ranking = rank(&corpus, |_| Ok(()), &stopwords, 10);
        assert_eq!(words(&ranking.filtered), ["river"]);
    }

    #[test]
    fn zero_limit_gives_empty_lists() {
        let ranking = rank(&sample_corpus(), |_| Ok(()), &HashSet::new(), 0);
        assert!(ranking.raw.is_empty());
        assert!(ranking.filtered.is_empty());
    }
}
