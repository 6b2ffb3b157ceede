use anyhow::{Context, Result};
use clap::Parser;
use cliclack::log;
use itertools::Itertools;
use lemgram::conllu;
use lemgram::input::Sentence;
use lemgram::output;
use lemgram::patterns::{self, Pattern};
use std::collections::HashMap;
use std::{fs, io, slice};

/// Build tag pattern files
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Input file (CoNLL-U)
    infile: String,
    /// Output file (JSON)
    outfile: String,
}

#[derive(Clone, PartialEq, Eq)]
enum Action {
    Add,
    Undo,
    Save,
    Quit,
}

fn summarize(sentences: &[Sentence]) -> String {
    let nsentences = sentences.len();
    let ntokens: usize = sentences.iter().map(|s| s.tokens.len()).sum();
    format!("{ntokens} tokens in {nsentences} sentences")
}

fn describe(sentences: &[Sentence], pattern: &Pattern) -> String {
    let table = patterns::match_patterns(sentences, slice::from_ref(pattern));
    let total: u64 = table.iter().map(|&(_, count)| count).sum();
    let mut line = format!("{} matches ← pattern '{}'", total, pattern.join(" "));
    if !table.is_empty() {
        line.push_str(&format!(": {}", output::pretty_top(&table, 3)));
    }
    line
}

fn build_pattern(sentences: &[Sentence]) -> Result<Option<Pattern>> {
    let ntokens: usize = sentences.iter().map(|s| s.tokens.len()).sum();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for sentence in sentences {
        for token in &sentence.tokens {
            *counts.entry(&token.upos).or_default() += 1;
        }
    }
    let mut items = vec![];
    items.push((None, "Finish this pattern".to_owned(), ""));
    for (&tag, &count) in counts.iter().sorted() {
        items.push((Some(tag), format!("{tag} ({count}/{ntokens} tokens)"), ""));
    }
    let mut pattern: Pattern = vec![];
    loop {
        let choice = cliclack::select("Append which tag?").items(&items).interact()?;
        match choice {
            None => {
                if pattern.is_empty() {
                    return Ok(None);
                }
                return Ok(Some(pattern));
            }
            Some(tag) => {
                pattern.push(tag.to_owned());
                log::info(format!("pattern so far: {}", pattern.join(" ")))?;
            }
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    cliclack::intro("lemgram-patterns")?;
    log::info(format!("Reading {}...", args.infile))?;
    let text =
        fs::read_to_string(&args.infile).with_context(|| format!("cannot read {}", args.infile))?;
    let sentences = conllu::parse(&text);
    if sentences.is_empty() {
        log::warning(format!("no sentences found in {}", args.infile))?;
        cliclack::outro("Bye!")?;
        return Ok(());
    }
    let mut collected: Vec<Pattern> = vec![];
    loop {
        let mut stack = vec![];
        let options = textwrap::Options::new(70).subsequent_indent(" ");
        stack.push(format!("{} ← input", summarize(&sentences)));
        for pattern in &collected {
            let line = describe(&sentences, pattern);
            stack.push(textwrap::fill(&line, &options));
        }

        cliclack::note("Patterns", stack.join("\n"))?;

        let mut items = vec![];
        if !collected.is_empty() {
            items.push((Action::Undo, "Remove last pattern", ""));
        }
        items.push((Action::Add, "Build a new tag pattern", ""));
        items.push((Action::Save, "Write current patterns to the output file", ""));
        items.push((Action::Quit, "Quit", ""));
        let choice = cliclack::select("Action?").items(&items).interact()?;
        match choice {
            Action::Quit => break,
            Action::Undo => {
                collected.pop();
            }
            Action::Save => {
                let filename: String = cliclack::input("file name")
                    .default_input(&args.outfile)
                    .interact()?;
                let file = fs::File::create(&filename)?;
                let writer = io::BufWriter::new(file);
                serde_json::to_writer_pretty(writer, &collected)?;
                log::info(format!("Wrote to {}", filename))?;
            }
            Action::Add => match build_pattern(&sentences)? {
                None => (),
                Some(pattern) => collected.push(pattern),
            },
        }
    }
    cliclack::outro("Bye!")?;
    Ok(())
}
