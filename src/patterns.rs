use crate::frequency::{FrequencyCounter, FrequencyTable};
use crate::input::Sentence;

/// An ordered sequence of part-of-speech tags to look for.
pub type Pattern = Vec<String>;

/// Counts exact tag-window matches of each pattern across the corpus.
///
/// Matches from all patterns land in one shared table keyed by the
/// matched lemmas joined with single spaces, so two patterns matching
/// the same lemma span accumulate under one key. Windows never cross
/// sentence boundaries, and punctuation tokens participate like any
/// other token. Empty patterns are ignored.
pub fn match_patterns(sentences: &[Sentence], patterns: &[Pattern]) -> FrequencyTable<String> {
    let mut counter = FrequencyCounter::new();
    for sentence in sentences {
        let lemmas = sentence.lemmas();
        let tags = sentence.tags();
        for pattern in patterns {
            let n = pattern.len();
            if n == 0 {
                continue;
            }
            for (tag_window, lemma_window) in tags.windows(n).zip(lemmas.windows(n)) {
                let hit = tag_window
                    .iter()
                    .zip(pattern)
                    .all(|(&tag, want)| tag == want.as_str());
                if hit {
                    counter.add(lemma_window.join(" "));
                }
            }
        }
    }
    counter.into_table()
}
