//! Data structures for representing the output.

use crate::frequency::FrequencyTable;
use crate::ngrams::{Ngram, NgramTable};
use is_sorted::IsSorted;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Surface statistics of a corpus. Serialized field names follow the
/// established interchange format, so `nb_toks` becomes `nbToks` etc.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub nb_toks: u64,
    pub nb_sents: u64,
    pub nb_forms: u64,
    pub nb_puncts: u64,
    pub nb_types: u64,
    pub average_sent_length: f64,
    pub average_form_length: f64,
    pub noun2freq: FrequencyTable<String>,
    pub verb2freq: FrequencyTable<String>,
    pub adj2freq: FrequencyTable<String>,
    pub adv2freq: FrequencyTable<String>,
    pub lem2freq: FrequencyTable<String>,
}

/// Everything one run produces. The aggregate counts are flattened
/// into the top level; `patterns` is omitted from the serialized form
/// when no pattern collection was supplied.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct CorpusStats {
    #[serde(flatten)]
    pub aggregate: AggregateStats,
    pub ngrams: NgramTable,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patterns: Option<FrequencyTable<String>>,
    pub skipgrams: FrequencyTable<Ngram>,
}

#[derive(Serialize)]
pub struct ErrorReport {
    pub error: String,
}

pub fn pretty_avg(x: f64) -> String {
    format!("{x:.2}")
}

pub fn pretty_table_sizes(tables: &NgramTable) -> String {
    tables
        .iter()
        .map(|(n, table)| format!("{}: {}", n, table.len()))
        .join(", ")
}

/// Comma-separated preview of the most frequent entries.
pub fn pretty_top(table: &FrequencyTable<String>, limit: usize) -> String {
    debug_assert!(IsSorted::is_sorted_by_key(
        &mut table.iter(),
        |&(_, count)| Reverse(count)
    ));
    table
        .iter()
        .take(limit)
        .map(|(key, count)| format!("{key} ({count})"))
        .join(", ")
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::frequency::FrequencyCounter;
    use serde_json::json;

    fn count_all(keys: &[&str]) -> FrequencyTable<String> {
        let mut counter = FrequencyCounter::new();
        for &k in keys {
            counter.add(k.to_owned());
        }
        counter.into_table()
    }

    #[test]
    fn pretty_avg_basic() {
        assert_eq!(pretty_avg(4.0), "4.00");
        assert_eq!(pretty_avg(19.0 / 3.0), "6.33");
    }

    #[test]
    fn pretty_table_sizes_basic() {
        let mut ngrams = NgramTable::new();
        ngrams.insert(2, count_all(&["x", "x"]).map_keys(|k| vec![k]));
        ngrams.insert(3, FrequencyTable::new());
        assert_eq!(pretty_table_sizes(&ngrams), "2: 1, 3: 0");
    }

    #[test]
    fn pretty_top_basic() {
        let table = count_all(&["le", "le", "chat"]);
        assert_eq!(pretty_top(&table, 10), "le (2), chat (1)");
        assert_eq!(pretty_top(&table, 1), "le (2)");
        assert_eq!(pretty_top(&FrequencyTable::new(), 10), "");
    }

    #[test]
    fn aggregate_counts_are_flattened() {
        let stats = CorpusStats {
            aggregate: AggregateStats {
                nb_toks: 3,
                nb_sents: 1,
                nb_forms: 2,
                nb_puncts: 1,
                nb_types: 2,
                average_sent_length: 3.0,
                average_form_length: 3.5,
                noun2freq: count_all(&["chat"]),
                verb2freq: count_all(&[]),
                adj2freq: count_all(&[]),
                adv2freq: count_all(&[]),
                lem2freq: count_all(&["le", "chat"]),
            },
            ngrams: NgramTable::new(),
            patterns: None,
            skipgrams: FrequencyTable::new(),
        };
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["nbToks"], json!(3));
        assert_eq!(value["averageSentLength"], json!(3.0));
        assert_eq!(value["noun2freq"], json!([["chat", 1]]));
        assert_eq!(value["lem2freq"], json!([["le", 1], ["chat", 1]]));
        assert!(value.get("aggregate").is_none());
        assert!(value.get("patterns").is_none());
    }

    #[test]
    fn tables_serialize_by_length_and_pair() {
        let mut ngrams = NgramTable::new();
        ngrams.insert(
            2,
            FrequencyTable::from_entries(vec![(vec!["le".to_owned(), "chat".to_owned()], 2)]),
        );
        ngrams.insert(3, FrequencyTable::new());
        let stats = CorpusStats {
            aggregate: AggregateStats {
                nb_toks: 0,
                nb_sents: 0,
                nb_forms: 0,
                nb_puncts: 0,
                nb_types: 0,
                average_sent_length: 0.0,
                average_form_length: 0.0,
                noun2freq: FrequencyTable::new(),
                verb2freq: FrequencyTable::new(),
                adj2freq: FrequencyTable::new(),
                adv2freq: FrequencyTable::new(),
                lem2freq: FrequencyTable::new(),
            },
            ngrams,
            patterns: Some(count_all(&["le chat"])),
            skipgrams: FrequencyTable::from_entries(vec![(vec![".".to_owned()], 4)]),
        };
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["ngrams"], json!({"2": [[["le", "chat"], 2]], "3": []}));
        assert_eq!(value["patterns"], json!([["le chat", 1]]));
        assert_eq!(value["skipgrams"], json!([[["."], 4]]));
    }
}
