//! Reading CoNLL-U corpora into the token stream model.

use crate::errors::{Result, invalid_input};
use crate::input::{Sentence, Token};
use itertools::Itertools;

/// Parses CoNLL-U text into sentences.
///
/// `# text` comment lines are skipped, a blank line ends the current
/// sentence, and any other line with at least four tab-separated
/// fields becomes a token. Everything else (other comments, malformed
/// lines) is dropped silently. The deprel column is kept verbatim
/// when present, including the `_` placeholder.
pub fn parse(text: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut current = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.starts_with("# text") {
            continue;
        }
        if line.is_empty() {
            if !current.is_empty() {
                sentences.push(Sentence {
                    tokens: std::mem::take(&mut current),
                });
            }
        } else {
            let parts = line.split('\t').collect_vec();
            if parts.len() >= 4 {
                current.push(Token {
                    id: parts[0].to_owned(),
                    form: parts[1].to_owned(),
                    lemma: parts[2].to_owned(),
                    upos: parts[3].to_owned(),
                    deprel: parts.get(7).map(|&deprel| deprel.to_owned()),
                });
            }
        }
    }
    if !current.is_empty() {
        sentences.push(Sentence { tokens: current });
    }
    sentences
}

/// Checks that every token has its mandatory fields populated.
pub fn validate(sentences: &[Sentence]) -> Result<()> {
    for sentence in sentences {
        for token in &sentence.tokens {
            let ok = !token.id.is_empty()
                && !token.form.is_empty()
                && !token.lemma.is_empty()
                && !token.upos.is_empty();
            if !ok {
                return Err(invalid_input(format!(
                    "token with id '{}' has an empty mandatory field",
                    token.id
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sentences_are_split_on_blank_lines() {
        let text = "1\tLe\tle\tDET\n2\tchat\tchat\tNOUN\n\n1\tNon\tnon\tADV\n";
        let sentences = parse(text);
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].tokens.len(), 2);
        assert_eq!(sentences[0].tokens[1].form, "chat");
        assert_eq!(sentences[1].tokens[0].lemma, "non");
    }

    #[test]
    fn trailing_sentence_is_kept() {
        let sentences = parse("1\tLe\tle\tDET");
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].tokens[0].id, "1");
    }

    #[test]
    fn full_rows_carry_the_deprel_column() {
        let text = "1\tchats\tchat\tNOUN\t_\tNumber=Plur\t0\tnsubj\t_\t_";
        let sentences = parse(text);
        let token = &sentences[0].tokens[0];
        assert_eq!(token.upos, "NOUN");
        assert_eq!(token.deprel.as_deref(), Some("nsubj"));
    }

    #[test]
    fn short_rows_have_no_deprel() {
        let sentences = parse("1\tchats\tchat\tNOUN");
        assert_eq!(sentences[0].tokens[0].deprel, None);
        let sentences = parse("1\tchats\tchat\tNOUN\t_\t_\t0\t_");
        assert_eq!(sentences[0].tokens[0].deprel.as_deref(), Some("_"));
    }

    #[test]
    fn comments_and_malformed_lines_are_dropped() {
        // the text comment has enough tabs to look like a token row
        let text = "# sent_id = fr-1\n# text = Le\tchat\tdort\t.\n1\tLe\tle\tDET\nmalformed line\n2\tchat\tchat\tNOUN\n";
        let sentences = parse(text);
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].tokens.len(), 2);
        assert_eq!(sentences[0].tokens[0].id, "1");
    }

    #[test]
    fn range_ids_are_ordinary_tokens() {
        let sentences = parse("1-2\tdu\tde\tADP");
        assert_eq!(sentences[0].tokens[0].id, "1-2");
    }

    #[test]
    fn repeated_blank_lines_make_no_empty_sentences() {
        let text = "\n\n1\tLe\tle\tDET\n\n\n\n1\tNon\tnon\tADV\n\n";
        assert_eq!(parse(text).len(), 2);
    }

    #[test]
    fn validate_rejects_empty_fields() {
        let good = parse("1\tLe\tle\tDET");
        assert!(validate(&good).is_ok());
        let bad = parse("1\t\tle\tDET");
        assert!(validate(&bad).is_err());
    }
}
