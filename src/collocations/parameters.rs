//! The `collocations::parameters` submodule provides data structures for configuring a collocation run

use log::warn;

use super::filter::WordFilter;
use super::measures::AssociationMeasure;

/// Parameters for filtering and ranking bigram collocations
#[derive(Debug, Clone)]
pub struct CollocationParameters {
  /// tokens shorter than this many characters are excluded from candidates
  pub min_length: usize,
  /// exclude the English stopwords from candidates
  pub use_stopwords: bool,
  /// additional words to exclude
  pub extra_stopwords: Vec<String>,
  /// bigrams seen fewer times are excluded from candidates
  pub min_freq: usize,
  /// how many bigrams to report per measure
  pub top: usize,
  /// the measures to rank by, in reporting order
  pub measures: Vec<AssociationMeasure>,
}

impl Default for CollocationParameters {
  /// Stopword-filtered bigrams, ranked first by likelihood ratio and then by raw frequency
  fn default() -> CollocationParameters {
    CollocationParameters {
      min_length: 3,
      use_stopwords: true,
      extra_stopwords: Vec::new(),
      min_freq: 1,
      top: 20,
      measures: vec![AssociationMeasure::LikelihoodRatio, AssociationMeasure::RawFreq],
    }
  }
}

impl CollocationParameters {
  /// Keep every bigram, rank by raw frequency only
  pub fn unfiltered() -> CollocationParameters {
    CollocationParameters {
      min_length: 0,
      use_stopwords: false,
      measures: vec![AssociationMeasure::RawFreq],
      ..Default::default()
    }
  }

  /// The word filter these parameters describe
  pub fn word_filter(&self) -> WordFilter {
    let filter = if self.use_stopwords {
      WordFilter::english()
    } else {
      WordFilter::none()
    };
    WordFilter {
      min_length: self.min_length,
      ..filter
    }
    .with_stopwords(self.extra_stopwords.iter().cloned())
  }

  /// Logs warnings, if the parameter settings don't make sense.
  /// Doesn't check for every possible stupidity
  pub fn check(&self) {
    if self.top == 0 {
      warn!("collocations: Parameter option top is 0, nothing will be reported");
    }
    if self.measures.is_empty() {
      warn!("collocations: No association measures selected, nothing will be reported");
    }
    if self.min_freq == 0 {
      warn!("collocations: Parameter option min_freq 0 has the same effect as 1");
    }
    for (index, measure) in self.measures.iter().enumerate() {
      if self.measures[..index].contains(measure) {
        warn!("collocations: Measure {} is requested more than once", measure);
      }
    }
  }
}
