use crate::errors::{Result, invalid_input_ref};
use crate::frequency::FrequencyCounter;
use crate::input::Sentence;
use crate::output::AggregateStats;
use std::collections::HashSet;

/// Tokens with this part-of-speech tag are counted separately and
/// excluded from form, lemma, and type statistics.
pub const PUNCT_TAG: &str = "PUNCT";

/// Surface statistics over a corpus: token, sentence, and type counts,
/// average lengths, and per-tag lemma frequency tables.
///
/// Fails if the corpus has no sentences or no non-punctuation tokens,
/// since the averages are undefined in those cases.
pub fn summarize(sentences: &[Sentence]) -> Result<AggregateStats> {
    if sentences.is_empty() {
        return Err(invalid_input_ref("corpus contains no sentences"));
    }
    let mut nb_toks = 0;
    let mut nb_puncts = 0;
    let mut nb_forms = 0;
    let mut form_chars = 0;
    let mut types = HashSet::new();
    let mut nouns = FrequencyCounter::new();
    let mut verbs = FrequencyCounter::new();
    let mut adjs = FrequencyCounter::new();
    let mut advs = FrequencyCounter::new();
    let mut lemmas = FrequencyCounter::new();
    for sentence in sentences {
        for token in &sentence.tokens {
            nb_toks += 1;
            if token.upos == PUNCT_TAG {
                nb_puncts += 1;
                continue;
            }
            nb_forms += 1;
            form_chars += token.form.chars().count() as u64;
            types.insert(token.form.as_str());
            match token.upos.as_str() {
                "NOUN" => nouns.add(token.lemma.as_str()),
                "VERB" => verbs.add(token.lemma.as_str()),
                "ADJ" => adjs.add(token.lemma.as_str()),
                "ADV" => advs.add(token.lemma.as_str()),
                _ => (),
            }
            lemmas.add(token.lemma.as_str());
        }
    }
    if nb_forms == 0 {
        return Err(invalid_input_ref(
            "corpus contains no tokens other than punctuation",
        ));
    }
    let nb_sents = sentences.len() as u64;
    Ok(AggregateStats {
        nb_toks,
        nb_sents,
        nb_forms,
        nb_puncts,
        nb_types: types.len() as u64,
        average_sent_length: nb_toks as f64 / nb_sents as f64,
        average_form_length: form_chars as f64 / nb_forms as f64,
        noun2freq: nouns.into_table().map_keys(str::to_owned),
        verb2freq: verbs.into_table().map_keys(str::to_owned),
        adj2freq: adjs.into_table().map_keys(str::to_owned),
        adv2freq: advs.into_table().map_keys(str::to_owned),
        lem2freq: lemmas.into_table().map_keys(str::to_owned),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::input::Token;

    fn tok(form: &str, lemma: &str, upos: &str) -> Token {
        Token {
            id: "0".to_owned(),
            form: form.to_owned(),
            lemma: lemma.to_owned(),
            upos: upos.to_owned(),
            deprel: None,
        }
    }

    fn sent(tokens: Vec<Token>) -> Sentence {
        Sentence { tokens }
    }

    fn pairs(table: &crate::frequency::FrequencyTable<String>) -> Vec<(&str, u64)> {
        table.iter().map(|(k, count)| (k.as_str(), *count)).collect()
    }

    #[test]
    fn single_sentence() {
        let sentences = vec![sent(vec![
            tok("the", "the", "DET"),
            tok("cat", "cat", "NOUN"),
            tok("sat", "sit", "VERB"),
            tok(".", ".", "PUNCT"),
        ])];
        let stats = summarize(&sentences).unwrap();
        assert_eq!(stats.nb_toks, 4);
        assert_eq!(stats.nb_sents, 1);
        assert_eq!(stats.nb_puncts, 1);
        assert_eq!(stats.nb_forms, 3);
        assert_eq!(stats.nb_types, 3);
        assert_eq!(stats.average_sent_length, 4.0);
        assert_eq!(stats.average_form_length, 3.0);
        assert_eq!(pairs(&stats.noun2freq), [("cat", 1)]);
        assert_eq!(pairs(&stats.verb2freq), [("sit", 1)]);
        assert!(stats.adj2freq.is_empty());
        assert!(stats.adv2freq.is_empty());
        assert_eq!(pairs(&stats.lem2freq), [("the", 1), ("cat", 1), ("sit", 1)]);
    }

    #[test]
    fn punctuation_counts_toward_tokens_only() {
        let sentences = vec![
            sent(vec![
                tok("Oui", "oui", "ADV"),
                tok(",", ",", "PUNCT"),
                tok("oui", "oui", "ADV"),
                tok(".", ".", "PUNCT"),
            ]),
            sent(vec![tok("Non", "non", "ADV"), tok("!", "!", "PUNCT")]),
        ];
        let stats = summarize(&sentences).unwrap();
        assert_eq!(stats.nb_toks, 6);
        assert_eq!(stats.nb_sents, 2);
        assert_eq!(stats.nb_puncts, 3);
        assert_eq!(stats.nb_forms, 3);
        assert_eq!(pairs(&stats.adv2freq), [("oui", 2), ("non", 1)]);
        assert!(stats.lem2freq.get(",").is_none());
    }

    #[test]
    fn types_are_distinct_exact_forms() {
        let sentences = vec![sent(vec![
            tok("Le", "le", "DET"),
            tok("chat", "chat", "NOUN"),
            tok("aime", "aimer", "VERB"),
            tok("le", "le", "DET"),
            tok("chat", "chat", "NOUN"),
        ])];
        let stats = summarize(&sentences).unwrap();
        // "Le" and "le" are distinct types, the repeated "chat" is not
        assert_eq!(stats.nb_types, 4);
        assert_eq!(pairs(&stats.lem2freq), [("le", 2), ("chat", 2), ("aimer", 1)]);
    }

    #[test]
    fn form_length_counts_characters() {
        let sentences = vec![sent(vec![
            tok("été", "été", "NOUN"),
            tok("à", "à", "ADP"),
        ])];
        let stats = summarize(&sentences).unwrap();
        assert_eq!(stats.average_form_length, 2.0);
    }

    #[test]
    fn average_sent_length_recovers_token_count() {
        let sentences = vec![
            sent(vec![
                tok("a", "a", "X"),
                tok("b", "b", "X"),
                tok("c", "c", "X"),
            ]),
            sent(vec![tok("d", "d", "X"), tok("e", "e", "X")]),
            sent(vec![tok("f", "f", "X"), tok("g", "g", "X")]),
        ];
        let stats = summarize(&sentences).unwrap();
        assert_eq!(stats.average_sent_length, 7.0 / 3.0);
        let recovered = stats.average_sent_length * stats.nb_sents as f64;
        assert!((recovered - stats.nb_toks as f64).abs() < 1e-9);
    }

    #[test]
    fn empty_corpus_is_rejected() {
        assert!(summarize(&[]).is_err());
    }

    #[test]
    fn punctuation_only_corpus_is_rejected() {
        let sentences = vec![sent(vec![tok(".", ".", "PUNCT")])];
        assert!(summarize(&sentences).is_err());
    }
}
