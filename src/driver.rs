//! Main entry point for calculating everything.

use crate::errors::{Result, invalid_argument};
use crate::input::{self, Sentence};
use crate::output::{self, CorpusStats};
use crate::patterns::{self, Pattern};
use crate::{aggregate, dedup, information, ngrams, skipgrams};
use log::{debug, info};

pub const DEFAULT_MIN_NGRAM_LEN: usize = 2;
pub const DEFAULT_MAX_NGRAM_LEN: usize = 6;
pub const DEFAULT_DEDUP_THRESHOLD: f64 = 1.3;
pub const DEFAULT_SKIPGRAM_GAP: usize = 1;

/// What to calculate?
pub struct DriverArgs {
    /// Shortest n-gram length to mine.
    /// The same value is used as the shortest skip-gram window width.
    pub min_ngram_len: usize,

    /// Longest n-gram length to mine, inclusive.
    /// The same value is used as the longest skip-gram window width.
    pub max_ngram_len: usize,

    /// Frequency ratio bounding the n-gram pruning pass.
    /// An `(n-1)`-gram is dropped when some containing n-gram with
    /// frequency `f` exists and the `(n-1)`-gram occurs at most
    /// `threshold * f` times, see [dedup::deduplicate].
    pub dedup_threshold: f64,

    /// Stride used when sampling skip-grams from a window.
    /// With a gap of 1 the samples are plain n-grams.
    pub skipgram_gap: usize,
}

impl Default for DriverArgs {
    fn default() -> Self {
        DriverArgs {
            min_ngram_len: DEFAULT_MIN_NGRAM_LEN,
            max_ngram_len: DEFAULT_MAX_NGRAM_LEN,
            dedup_threshold: DEFAULT_DEDUP_THRESHOLD,
            skipgram_gap: DEFAULT_SKIPGRAM_GAP,
        }
    }
}

fn check_args(args: &DriverArgs) -> Result<()> {
    if args.min_ngram_len < 1 {
        return Err(invalid_argument(format!(
            "minimum n-gram length must be at least 1, got {}",
            args.min_ngram_len
        )));
    }
    if args.max_ngram_len < args.min_ngram_len {
        return Err(invalid_argument(format!(
            "maximum n-gram length {} is smaller than minimum {}",
            args.max_ngram_len, args.min_ngram_len
        )));
    }
    if !args.dedup_threshold.is_finite() || args.dedup_threshold < 0.0 {
        return Err(invalid_argument(format!(
            "pruning threshold must be a finite nonnegative number, got {}",
            args.dedup_threshold
        )));
    }
    if args.skipgram_gap < 1 {
        return Err(invalid_argument(format!(
            "skip-gram gap must be at least 1, got {}",
            args.skipgram_gap
        )));
    }
    Ok(())
}

/// Calculate everything.
///
/// This is the main entry point for the library. Patterns are
/// optional; without them the result simply has no pattern table.
pub fn calc(
    args: &DriverArgs,
    sentences: &[Sentence],
    patterns: Option<&[Pattern]>,
) -> Result<CorpusStats> {
    check_args(args)?;
    information::statistics(sentences);
    let aggregate = aggregate::summarize(sentences)?;
    let filtered = ngrams::punct_filtered_lemmas(sentences);
    information::post_statistics(&filtered);
    info!(target: "lemgram", "mining n-grams of length {}..={}", args.min_ngram_len, args.max_ngram_len);
    let ngrams = ngrams::mine(&filtered, args.min_ngram_len, args.max_ngram_len);
    debug!(target: "lemgram", "mined n-grams: {}", output::pretty_table_sizes(&ngrams));
    let ngrams = dedup::deduplicate(ngrams, args.dedup_threshold);
    debug!(target: "lemgram", "after pruning: {}", output::pretty_table_sizes(&ngrams));
    let patterns = patterns.map(|patterns| {
        let table = patterns::match_patterns(sentences, patterns);
        info!(target: "lemgram", "patterns: {} distinct matches", table.len());
        table
    });
    let lemmas = input::flat_lemmas(sentences);
    let skipgrams = skipgrams::generate(
        &lemmas,
        args.min_ngram_len,
        args.max_ngram_len,
        args.skipgram_gap,
    );
    debug!(target: "lemgram", "skip-grams: {} distinct samples", skipgrams.len());
    Ok(CorpusStats {
        aggregate,
        ngrams,
        patterns,
        skipgrams,
    })
}
