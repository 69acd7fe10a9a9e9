pub mod keywords;
pub mod lexicon;
pub mod mood;
pub mod stress;
pub mod tokens;
