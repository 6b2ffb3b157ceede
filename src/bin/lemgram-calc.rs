use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use lemgram::driver::{self, DriverArgs};
use lemgram::errors::Result;
use lemgram::output::ErrorReport;
use lemgram::patterns::Pattern;
use lemgram::{conllu, export};
use log::{error, info, warn};
use std::path::Path;
use std::{error, fs, io, process};

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Input file (CoNLL-U)
    infile: String,
    /// Output file (JSON)
    outfile: String,
    /// Pattern file (JSON list of tag sequences)
    #[arg(long)]
    patterns: Option<String>,
    /// Smallest n-gram length
    #[arg(long, default_value_t = driver::DEFAULT_MIN_NGRAM_LEN)]
    min_ngram_len: usize,
    /// Largest n-gram length
    #[arg(long, default_value_t = driver::DEFAULT_MAX_NGRAM_LEN)]
    max_ngram_len: usize,
    /// Prune a shorter n-gram when its frequency is at most this ratio
    /// times the frequency of a containing longer n-gram
    #[arg(long, default_value_t = driver::DEFAULT_DEDUP_THRESHOLD)]
    dedup_threshold: f64,
    /// Skip-gram sampling stride
    #[arg(long, default_value_t = driver::DEFAULT_SKIPGRAM_GAP)]
    skipgram_gap: usize,
    /// Also write the results as an xlsx workbook
    #[arg(long)]
    xlsx: Option<String>,
    /// Report errors as a JSON file
    #[arg(long)]
    error_file: Option<String>,
    /// Produce compact JSON files
    #[arg(long)]
    compact: bool,
    /// Verbosity
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn try_load_patterns(path: &str) -> Result<Vec<Pattern>> {
    let text = fs::read_to_string(path)?;
    let patterns = serde_json::from_str(&text)?;
    Ok(patterns)
}

fn load_patterns(path: &str) -> Option<Vec<Pattern>> {
    match try_load_patterns(path) {
        Ok(mut patterns) => {
            let all = patterns.len();
            patterns.retain(|pattern| !pattern.is_empty());
            if patterns.len() < all {
                warn!(target: "lemgram", "ignoring {} empty patterns in {}", all - patterns.len(), path);
            }
            info!(target: "lemgram", "patterns: {} loaded from {}", patterns.len(), path);
            Some(patterns)
        }
        Err(e) => {
            warn!(target: "lemgram", "cannot use pattern file {path}: {e}");
            None
        }
    }
}

fn process(args: &Args) -> Result<()> {
    info!(target: "lemgram", "read: {}", args.infile);
    let text = fs::read_to_string(&args.infile)?;
    let sentences = conllu::parse(&text);
    conllu::validate(&sentences)?;
    let patterns = args.patterns.as_deref().and_then(load_patterns);
    let driver_args = DriverArgs {
        min_ngram_len: args.min_ngram_len,
        max_ngram_len: args.max_ngram_len,
        dedup_threshold: args.dedup_threshold,
        skipgram_gap: args.skipgram_gap,
    };
    let stats = driver::calc(&driver_args, &sentences, patterns.as_deref())?;
    info!(target: "lemgram", "write: {}", args.outfile);
    let file = fs::File::create(&args.outfile)?;
    let writer = io::BufWriter::new(file);
    if args.compact {
        serde_json::to_writer(writer, &stats)?;
    } else {
        serde_json::to_writer_pretty(writer, &stats)?;
    }
    if let Some(xlsx) = &args.xlsx {
        info!(target: "lemgram", "write: {}", xlsx);
        export::write_xlsx(&stats, Path::new(xlsx))?;
    }
    Ok(())
}

fn store_error(error_file: &str, e: &dyn error::Error) -> Result<()> {
    let error = ErrorReport {
        error: format!("{e}"),
    };
    let file = fs::File::create(error_file)?;
    let writer = io::BufWriter::new(file);
    serde_json::to_writer(writer, &error)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    pretty_env_logger::formatted_timed_builder()
        .filter_level(args.verbose.log_level_filter())
        .init();
    match process(&args) {
        Ok(()) => (),
        Err(e) => {
            match args.error_file {
                Some(filename) => match store_error(&filename, &*e) {
                    Ok(()) => {
                        info!(target: "lemgram", "error reported: {e}");
                    }
                    Err(e2) => {
                        error!(target: "lemgram", "{e}");
                        error!(target: "lemgram", "{e2}");
                    }
                },
                None => error!(target: "lemgram", "{e}"),
            }
            process::exit(1);
        }
    }
}
