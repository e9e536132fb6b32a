//! # Bigram collocations in Rust
//! Counting, filtering and ranking adjacent word pairs of plain-text corpora by statistical
//! association measures.

#![deny(
  missing_docs,
  trivial_casts,
  trivial_numeric_casts,
  unused_import_braces,
  unused_qualifications
)]

pub mod collocations;
pub mod corpus;
pub mod errors;
pub mod ngrams;
pub mod stopwords;
pub mod tokenizer;
pub mod util;
