use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use lemgram::errors::Result;
use lemgram::input::Sentence;
use lemgram::{aggregate, conllu, output};
use log::{error, info};
use std::{fs, process};

const DEFAULT_TOP: usize = 10;

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Input file (CoNLL-U)
    infile: String,
    /// How many entries to show per frequency table
    #[arg(long, default_value_t = DEFAULT_TOP)]
    top: usize,
    /// Verbosity
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn stat(args: &Args, sentences: &[Sentence]) -> Result<()> {
    let stats = aggregate::summarize(sentences)?;
    println!("corpus: {}", args.infile);
    println!("- sentences: {}", stats.nb_sents);
    println!("- tokens: {}", stats.nb_toks);
    println!("- punctuation tokens: {}", stats.nb_puncts);
    println!("- forms: {}", stats.nb_forms);
    println!("- types: {}", stats.nb_types);
    println!("- average sentence length: {}", output::pretty_avg(stats.average_sent_length));
    println!("- average form length: {}", output::pretty_avg(stats.average_form_length));
    println!("top lemmas: {}", output::pretty_top(&stats.lem2freq, args.top));
    println!("top nouns: {}", output::pretty_top(&stats.noun2freq, args.top));
    println!("top verbs: {}", output::pretty_top(&stats.verb2freq, args.top));
    println!("top adjectives: {}", output::pretty_top(&stats.adj2freq, args.top));
    println!("top adverbs: {}", output::pretty_top(&stats.adv2freq, args.top));
    Ok(())
}

fn process(args: &Args) -> Result<()> {
    info!(target: "lemgram", "read: {}", args.infile);
    let text = fs::read_to_string(&args.infile)?;
    let sentences = conllu::parse(&text);
    conllu::validate(&sentences)?;
    stat(args, &sentences)?;
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
            error!(target: "lemgram", "{e}");
            process::exit(1);
        }
    }
}
