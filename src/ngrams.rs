use crate::frequency::{FrequencyCounter, FrequencyTable};
use crate::input::{self, Sentence};
use itertools::Itertools;
use std::collections::BTreeMap;

/// A contiguous sequence of lemmas.
pub type Ngram = Vec<String>;

/// One frequency table per n-gram length.
pub type NgramTable = BTreeMap<usize, FrequencyTable<Ngram>>;

/// Lemmas treated as punctuation and dropped before n-gram mining.
pub const PUNCT_LEMMAS: &[&str] = &[",", ".", "!", "?", ":", ";", "-", "_", "(", ")"];

fn is_punct_lemma(lemma: &str) -> bool {
    PUNCT_LEMMAS.contains(&lemma)
}

/// Corpus-wide lemma sequence with punctuation lemmas removed.
/// Sentence boundaries are not preserved, see [input::flat_lemmas].
pub fn punct_filtered_lemmas(sentences: &[Sentence]) -> Vec<&str> {
    input::flat_lemmas(sentences)
        .into_iter()
        .filter(|lemma| !is_punct_lemma(lemma))
        .collect_vec()
}

/// Counts every stride-1 window of each length in `min_len..=max_len`
/// over `lemmas`. Each length in the range gets a table, possibly an
/// empty one when `lemmas` is shorter than the length.
pub fn mine(lemmas: &[&str], min_len: usize, max_len: usize) -> NgramTable {
    debug_assert!(min_len >= 1);
    debug_assert!(min_len <= max_len);
    let mut tables = NgramTable::new();
    for n in min_len..=max_len {
        tables.insert(n, count_windows(lemmas, n));
    }
    tables
}

fn count_windows(lemmas: &[&str], n: usize) -> FrequencyTable<Ngram> {
    let mut counter = FrequencyCounter::new();
    for window in lemmas.windows(n) {
        counter.add(window);
    }
    counter
        .into_table()
        .map_keys(|window| window.iter().map(|&lemma| lemma.to_owned()).collect_vec())
}
