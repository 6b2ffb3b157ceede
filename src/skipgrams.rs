use crate::frequency::{FrequencyCounter, FrequencyTable};
use crate::ngrams::Ngram;
use itertools::Itertools;

/// Samples every stride-1 window of each length in `min_len..=max_len`
/// at stride `gap`, counting the sampled tuples in one combined table.
///
/// The stride stays inside the window: a window of width `L` yields a
/// tuple of `ceil(L / gap)` lemmas, so samples are shorter than `L`
/// whenever `gap > 1`, and the same sample can arise from windows of
/// different widths. Unlike n-gram mining, punctuation lemmas are not
/// filtered out.
pub fn generate(
    lemmas: &[&str],
    min_len: usize,
    max_len: usize,
    gap: usize,
) -> FrequencyTable<Ngram> {
    debug_assert!(min_len >= 1);
    debug_assert!(min_len <= max_len);
    debug_assert!(gap >= 1);
    let mut counter = FrequencyCounter::new();
    for length in min_len..=max_len {
        for window in lemmas.windows(length) {
            counter.add(window.iter().step_by(gap).copied().collect_vec());
        }
    }
    counter
        .into_table()
        .map_keys(|sample| sample.into_iter().map(str::to_owned).collect_vec())
}
