//! Bigram collocations: adjacent word pairs that co-occur more often than chance predicts
//!
//! A `BigramCollocationFinder` counts the unigrams and bigrams of a token sequence once.
//! Filters only shrink the set of candidate bigrams, the frequency tables keep describing the
//! whole sequence. Candidates are then scored under an `AssociationMeasure` and ranked.

pub mod filter;
pub mod measures;
pub mod parameters;
pub mod report;

pub use self::filter::WordFilter;
pub use self::measures::{AssociationMeasure, Marginals};
pub use self::parameters::CollocationParameters;
pub use self::report::{CollocationRecord, OutputFormat};

use log::debug;
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;

use crate::errors::{Error, Result};
use crate::ngrams::{BigramRecord, FrequencyTables};

/// An ordered pair of adjacent tokens
pub type Bigram = (String, String);

/// Finds and ranks the bigram collocations of a single token sequence
#[derive(Debug, Clone)]
pub struct BigramCollocationFinder {
  tables: FrequencyTables,
  /// surviving candidates, in order of first occurrence
  candidates: Vec<BigramRecord>,
}

impl BigramCollocationFinder {
  /// Count the words of a sequence. Every distinct bigram starts out as a candidate
  pub fn from_words<I, S>(words: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let tables = FrequencyTables::from_words(words);
    let candidates: Vec<BigramRecord> = tables.bigrams.iter().copied().collect();
    debug!(
      "-- counted {} tokens ({} distinct), {} bigrams ({} distinct)",
      tables.unigrams.total(),
      tables.dictionary.count(),
      tables.bigrams.total(),
      candidates.len()
    );
    BigramCollocationFinder { tables, candidates }
  }

  /// Count the words of a fallible token source.
  /// Fails with `Error::InvalidInput` if the source yields an error
  pub fn try_from_words<I, S, E>(words: I) -> Result<Self>
  where
    I: IntoIterator<Item = std::result::Result<S, E>>,
    S: AsRef<str>,
    E: fmt::Display,
  {
    let mut materialized = Vec::new();
    for (position, each) in words.into_iter().enumerate() {
      let word = each.map_err(|e| {
        Error::InvalidInput(format!("token source failed at position {}: {}", position, e))
      })?;
      materialized.push(word);
    }
    Ok(BigramCollocationFinder::from_words(materialized))
  }

  /// Remove candidates containing a word for which `filter` is true
  pub fn apply_word_filter<F>(&mut self, filter: F)
  where F: Fn(&str) -> bool {
    let dictionary = &self.tables.dictionary;
    // decide once per distinct word
    let excluded: Vec<bool> = (0..dictionary.count())
      .map(|index| dictionary.word(index).map(|word| filter(word)).unwrap_or(false))
      .collect();
    let before = self.candidates.len();
    self
      .candidates
      .retain(|record| !excluded[record.pair.0] && !excluded[record.pair.1]);
    debug!(
      "-- word filter kept {} of {} candidates",
      self.candidates.len(),
      before
    );
  }

  /// Remove candidates seen fewer than `min_freq` times
  pub fn apply_freq_filter(&mut self, min_freq: usize) {
    let before = self.candidates.len();
    self.candidates.retain(|record| record.count >= min_freq);
    debug!(
      "-- frequency filter kept {} of {} candidates",
      self.candidates.len(),
      before
    );
  }

  /// Remove candidates for which `filter(w1, w2)` is true
  pub fn apply_ngram_filter<F>(&mut self, filter: F)
  where F: Fn(&str, &str) -> bool {
    let dictionary = &self.tables.dictionary;
    self.candidates.retain(|record| {
      match (dictionary.word(record.pair.0), dictionary.word(record.pair.1)) {
        (Some(first), Some(second)) => !filter(first, second),
        _ => true,
      }
    });
  }

  /// The counts `measure` scores a candidate from
  fn marginals(&self, record: &BigramRecord) -> Marginals {
    Marginals {
      joint: record.count,
      first: self.tables.unigrams.get(record.pair.0),
      second: self.tables.unigrams.get(record.pair.1),
      total: self.tables.bigrams.total(),
    }
  }

  /// Every candidate with its score, best first.
  /// Equal scores keep the order in which the bigrams first occurred
  pub fn score_ngrams(&self, measure: AssociationMeasure) -> Vec<(Bigram, f64)> {
    let mut scored: Vec<(&BigramRecord, f64)> = self
      .candidates
      .iter()
      .map(|record| (record, measure.score(&self.marginals(record))))
      .collect();
    scored.sort_by(|a, b| {
      b.1
        .partial_cmp(&a.1)
        .unwrap_or(Ordering::Equal)
        .then(a.0.first_position.cmp(&b.0.first_position))
    });
    scored
      .into_iter()
      .map(|(record, score)| (self.tables.words_of(record.pair), score))
      .collect()
  }

  /// The `n` best candidates
  pub fn nbest(&self, measure: AssociationMeasure, n: usize) -> Vec<Bigram> {
    let mut scored = self.score_ngrams(measure);
    scored.truncate(n);
    scored.into_iter().map(|(bigram, _)| bigram).collect()
  }

  /// The candidates scoring strictly above `min_score`, best first
  pub fn above_score(&self, measure: AssociationMeasure, min_score: f64) -> Vec<Bigram> {
    self
      .score_ngrams(measure)
      .into_iter()
      .take_while(|(_, score)| *score > min_score)
      .map(|(bigram, _)| bigram)
      .collect()
  }

  /// Number of tokens counted
  pub fn word_count(&self) -> usize { self.tables.unigrams.total() }

  /// Number of adjacent pairs counted
  pub fn bigram_count(&self) -> usize { self.tables.bigrams.total() }

  /// Number of candidates surviving the filters applied so far
  pub fn candidate_count(&self) -> usize { self.candidates.len() }

  /// Occurrences of `word` in the sequence, filtered or not
  pub fn unigram_frequency(&self, word: &str) -> usize {
    self
      .tables
      .dictionary
      .index(word)
      .map(|index| self.tables.unigrams.get(index))
      .unwrap_or(0)
  }

  /// Adjacent occurrences of `first second` in the sequence, filtered or not
  pub fn bigram_frequency(&self, first: &str, second: &str) -> usize {
    let dictionary = &self.tables.dictionary;
    match (dictionary.index(first), dictionary.index(second)) {
      (Some(first), Some(second)) => self.tables.bigrams.get((first, second)),
      _ => 0,
    }
  }
}

/// Convert a requested result count, rejecting negative values
pub fn checked_count(n: isize) -> Result<usize> {
  if n < 0 {
    Err(Error::InvalidArgument(format!(
      "the number of results must not be negative, got {}",
      n
    )))
  } else {
    Ok(n as usize)
  }
}

/// Rank the bigrams of `tokens` under `measure` and return the best `n`, with their scores.
///
/// Bigrams containing a token for which `filter` is true are left out, but such tokens are
/// still counted. Equal scores are ordered by first occurrence in `tokens`.
pub fn rank<S: AsRef<str>>(
  tokens: &[S],
  filter: Option<&dyn Fn(&str) -> bool>,
  measure: AssociationMeasure,
  n: isize,
) -> Result<Vec<(Bigram, f64)>> {
  let n = checked_count(n)?;
  let mut finder = BigramCollocationFinder::try_from_words(
    tokens
      .iter()
      .map(|token| Ok::<&str, Infallible>(token.as_ref())),
  )?;
  if let Some(filter) = filter {
    finder.apply_word_filter(filter);
  }
  let mut scored = finder.score_ngrams(measure);
  scored.truncate(n);
  Ok(scored)
}
