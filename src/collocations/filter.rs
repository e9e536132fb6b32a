//! Word-level filters deciding which tokens keep a bigram out of the ranking
use std::collections::HashSet;

use crate::stopwords;

/// Excludes tokens that are too short or listed as stopwords
#[derive(Debug, Clone, Default)]
pub struct WordFilter {
  /// tokens with fewer characters than this are excluded
  pub min_length: usize,
  /// tokens in this set are excluded
  pub stopwords: HashSet<String>,
}

impl WordFilter {
  /// A filter that excludes nothing
  pub fn none() -> Self { WordFilter::default() }

  /// Tokens shorter than 3 characters, and the English stopwords
  pub fn english() -> Self {
    WordFilter {
      min_length: 3,
      stopwords: stopwords::load().into_iter().map(String::from).collect(),
    }
  }

  /// Also exclude the given words
  pub fn with_stopwords<I, S>(mut self, words: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.stopwords.extend(words.into_iter().map(Into::into));
    self
  }

  /// true if `word` must be excluded
  pub fn excludes(&self, word: &str) -> bool {
    (self.min_length > 0 && word.chars().count() < self.min_length) || self.stopwords.contains(word)
  }
}
