use crate::input::Sentence;
use itertools::Itertools;
use log::info;
use std::collections::HashSet;

fn explain_tags(tags: &HashSet<&String>) -> String {
    tags.iter().sorted().join(", ")
}

pub fn statistics(sentences: &[Sentence]) {
    let mut lemmas = HashSet::new();
    let mut tags = HashSet::new();
    let mut tokencount = 0;
    for s in sentences {
        for t in &s.tokens {
            tokencount += 1;
            lemmas.insert(&t.lemma);
            tags.insert(&t.upos);
        }
    }
    info!("before filtering: sentences: {}", sentences.len());
    info!("before filtering: tokens: {}", tokencount);
    info!("before filtering: distinct lemmas: {}", lemmas.len());
    info!("part-of-speech tags: {}", explain_tags(&tags));
}

pub fn post_statistics(lemmas: &[&str]) {
    let distinct: HashSet<_> = lemmas.iter().collect();
    info!("after punctuation filtering: lemmas: {}", lemmas.len());
    info!(
        "after punctuation filtering: distinct lemmas: {}",
        distinct.len()
    );
}
