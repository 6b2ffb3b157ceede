//! Spreadsheet export of the calculated statistics.

use crate::errors::Result;
use crate::frequency::FrequencyTable;
use crate::ngrams::Ngram;
use crate::output::CorpusStats;
use rust_xlsxwriter::{Workbook, Worksheet};
use std::path::Path;

fn write_pairs<I>(worksheet: &mut Worksheet, header: &str, pairs: I) -> Result<()>
where
    I: IntoIterator<Item = (String, u64)>,
{
    worksheet.write_string(0, 0, header)?;
    worksheet.write_string(0, 1, "count")?;
    for (i, (key, count)) in pairs.into_iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, key)?;
        worksheet.write_number(row, 1, count as f64)?;
    }
    Ok(())
}

fn joined(table: &FrequencyTable<Ngram>) -> impl Iterator<Item = (String, u64)> + '_ {
    table.iter().map(|(ngram, count)| (ngram.join(" "), *count))
}

/// Writes one workbook with a summary sheet plus one sheet per
/// frequency table.
pub fn write_xlsx(stats: &CorpusStats, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name("summary")?;
    let agg = &stats.aggregate;
    let summary = [
        ("tokens", agg.nb_toks as f64),
        ("sentences", agg.nb_sents as f64),
        ("forms", agg.nb_forms as f64),
        ("punctuation", agg.nb_puncts as f64),
        ("types", agg.nb_types as f64),
        ("average sentence length", agg.average_sent_length),
        ("average form length", agg.average_form_length),
    ];
    for (i, (label, value)) in summary.iter().enumerate() {
        let row = i as u32;
        worksheet.write_string(row, 0, *label)?;
        worksheet.write_number(row, 1, *value)?;
    }

    let tag_tables = [
        ("nouns", &agg.noun2freq),
        ("verbs", &agg.verb2freq),
        ("adjectives", &agg.adj2freq),
        ("adverbs", &agg.adv2freq),
        ("lemmas", &agg.lem2freq),
    ];
    for (name, table) in tag_tables {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(name)?;
        write_pairs(
            worksheet,
            "lemma",
            table.iter().map(|(key, count)| (key.clone(), *count)),
        )?;
    }

    let worksheet = workbook.add_worksheet();
    worksheet.set_name("ngrams")?;
    worksheet.write_string(0, 0, "length")?;
    worksheet.write_string(0, 1, "ngram")?;
    worksheet.write_string(0, 2, "count")?;
    let mut row = 1u32;
    for (n, table) in &stats.ngrams {
        for (ngram, count) in table.iter() {
            worksheet.write_number(row, 0, *n as f64)?;
            worksheet.write_string(row, 1, ngram.join(" "))?;
            worksheet.write_number(row, 2, *count as f64)?;
            row += 1;
        }
    }

    if let Some(patterns) = &stats.patterns {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("patterns")?;
        write_pairs(
            worksheet,
            "match",
            patterns.iter().map(|(key, count)| (key.clone(), *count)),
        )?;
    }

    let worksheet = workbook.add_worksheet();
    worksheet.set_name("skipgrams")?;
    write_pairs(worksheet, "sample", joined(&stats.skipgrams))?;

    workbook.save(path)?;
    Ok(())
}
