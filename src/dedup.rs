//! Cross-length pruning of n-gram tables.

use crate::frequency::FrequencyTable;
use crate::ngrams::NgramTable;
use itertools::Itertools;

/// Removes `(n-1)`-grams that are explained by a longer n-gram.
///
/// Lengths are processed in descending order. For each n-gram with
/// frequency `f`, every deletion candidate (the n-gram with one lemma
/// dropped) is looked up in the next shorter table; the first entry
/// with an equal key is removed when its frequency `f'` satisfies
/// `f' <= threshold * f`. At most one entry is removed per candidate.
///
/// The pass is greedy and order dependent: entries removed from a
/// table no longer act as removers when that table's own length is
/// processed later.
pub fn deduplicate(mut tables: NgramTable, threshold: f64) -> NgramTable {
    let lengths = tables.keys().copied().rev().collect_vec();
    for n in lengths {
        let Some(shorter_len) = n.checked_sub(1) else {
            continue;
        };
        let Some(shorter) = tables.remove(&shorter_len) else {
            continue;
        };
        let mut survivors = shorter.into_entries();
        for (ngram, freq) in tables[&n].iter() {
            for skip in 0..ngram.len() {
                let mut candidate = ngram.clone();
                candidate.remove(skip);
                let found = survivors.iter().position(|(key, _)| *key == candidate);
                if let Some(pos) = found {
                    if survivors[pos].1 as f64 <= threshold * *freq as f64 {
                        survivors.remove(pos);
                    }
                }
            }
        }
        tables.insert(shorter_len, FrequencyTable::from_entries(survivors));
    }
    tables
}
