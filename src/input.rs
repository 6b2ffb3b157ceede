use serde::{Deserialize, Serialize};

/// One annotated token of a sentence.
///
/// The four string fields are mandatory and non-empty in a well-formed
/// corpus (see [crate::conllu::validate]); `deprel` is carried through
/// when the annotation has it but is not consumed by any statistic.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Token {
    pub id: String,
    pub form: String,
    pub lemma: String,
    pub upos: String,
    pub deprel: Option<String>,
}

/// One sentence: an ordered run of tokens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Sentence {
    pub tokens: Vec<Token>,
}

impl Sentence {
    /// Lemmas of this sentence, in token order.
    pub fn lemmas(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.lemma.as_str()).collect()
    }

    /// Part-of-speech tags of this sentence, index-aligned with
    /// [Sentence::lemmas].
    pub fn tags(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.upos.as_str()).collect()
    }
}

/// Lemmas of the whole corpus as one flat sequence, in corpus order.
///
/// Sentence boundaries are not preserved: windows taken from this
/// sequence can span two adjacent sentences. N-gram and skip-gram
/// mining depend on exactly this flattening.
pub fn flat_lemmas(sentences: &[Sentence]) -> Vec<&str> {
    sentences
        .iter()
        .flat_map(|s| s.tokens.iter().map(|t| t.lemma.as_str()))
        .collect()
}
