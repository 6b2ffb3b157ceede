pub mod aggregate;
pub mod conllu;
pub mod dedup;
pub mod driver;
pub mod errors;
pub mod export;
pub mod frequency;
mod information;
pub mod input;
pub mod ngrams;
pub mod output;
pub mod patterns;
pub mod skipgrams;
