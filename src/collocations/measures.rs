//! Association measures for bigrams, scored from the bigram's 2x2 contingency table
//!
//! For a bigram `(w1, w2)` the table counts, over all adjacent pairs of the sequence:
//!
//! |               | `w2`  | not `w2` |
//! |---------------|-------|----------|
//! | **`w1`**      | a     | b        |
//! | **not `w1`**  | c     | d        |
use std::fmt;
use std::str::FromStr;

use crate::errors::Error;

/// The supported scoring formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssociationMeasure {
  /// The co-occurrence count itself
  RawFreq,
  /// Dunning's log-likelihood ratio (G²) against the independence assumption
  LikelihoodRatio,
  /// Pointwise mutual information, in bits
  Pmi,
  /// Student's t statistic
  StudentT,
  /// Pearson's chi-square statistic
  ChiSq,
  /// Dice coefficient
  Dice,
}

impl AssociationMeasure {
  /// Every supported measure
  pub const ALL: [AssociationMeasure; 6] = [
    AssociationMeasure::RawFreq,
    AssociationMeasure::LikelihoodRatio,
    AssociationMeasure::Pmi,
    AssociationMeasure::StudentT,
    AssociationMeasure::ChiSq,
    AssociationMeasure::Dice,
  ];

  /// The stable name of the measure, as accepted by `FromStr`
  pub fn name(self) -> &'static str {
    match self {
      AssociationMeasure::RawFreq => "raw_freq",
      AssociationMeasure::LikelihoodRatio => "likelihood_ratio",
      AssociationMeasure::Pmi => "pmi",
      AssociationMeasure::StudentT => "student_t",
      AssociationMeasure::ChiSq => "chi_sq",
      AssociationMeasure::Dice => "dice",
    }
  }

  /// Score a bigram given its counts
  pub fn score(self, marginals: &Marginals) -> f64 {
    match self {
      AssociationMeasure::RawFreq => marginals.joint as f64,
      AssociationMeasure::LikelihoodRatio => likelihood_ratio(&marginals.contingency()),
      AssociationMeasure::Pmi => pmi(marginals),
      AssociationMeasure::StudentT => student_t(marginals),
      AssociationMeasure::ChiSq => chi_sq(&marginals.contingency(), marginals.total),
      AssociationMeasure::Dice => dice(marginals),
    }
  }
}

impl fmt::Display for AssociationMeasure {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(self.name()) }
}

impl FromStr for AssociationMeasure {
  type Err = Error;
  fn from_str(name: &str) -> Result<Self, Error> {
    let normalized = name.trim().to_lowercase().replace('-', "_");
    AssociationMeasure::ALL
      .iter()
      .copied()
      .find(|measure| measure.name() == normalized)
      .ok_or_else(|| Error::UnsupportedMeasure(name.to_string()))
  }
}

/// The counts a bigram is scored from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marginals {
  /// how often `w1 w2` occurs
  pub joint: usize,
  /// unigram frequency of `w1`
  pub first: usize,
  /// unigram frequency of `w2`
  pub second: usize,
  /// number of adjacent pairs in the sequence
  pub total: usize,
}

impl Marginals {
  /// The cells `[a, b, c, d]` of the contingency table.
  /// Unigram counts include the last token, which starts no pair, so cells are clamped at zero.
  pub fn contingency(&self) -> [f64; 4] {
    let joint = self.joint as i64;
    let first = self.first as i64;
    let second = self.second as i64;
    let total = self.total as i64;
    let clamp = |cell: i64| cell.max(0) as f64;
    [
      clamp(joint),
      clamp(first - joint),
      clamp(second - joint),
      clamp(total - first - second + joint),
    ]
  }
}

/// Expected cell counts under independence of the row and column events
fn expected(cells: &[f64; 4]) -> [f64; 4] {
  let [a, b, c, d] = *cells;
  let n = a + b + c + d;
  if n == 0.0 {
    return [0.0; 4];
  }
  [
    (a + b) * (a + c) / n,
    (a + b) * (b + d) / n,
    (c + d) * (a + c) / n,
    (c + d) * (b + d) / n,
  ]
}

fn likelihood_ratio(cells: &[f64; 4]) -> f64 {
  let expected = expected(cells);
  2.0
    * cells
      .iter()
      .zip(expected.iter())
      .filter(|(observed, expected)| **observed > 0.0 && **expected > 0.0)
      .map(|(observed, expected)| observed * (observed / expected).ln())
      .sum::<f64>()
}

/// Pearson's statistic, scaled by the number of adjacent pairs rather than the cell sum
fn chi_sq(cells: &[f64; 4], total: usize) -> f64 {
  let [a, b, c, d] = *cells;
  let denominator = (a + b) * (a + c) * (b + d) * (c + d);
  if denominator == 0.0 {
    return 0.0;
  }
  total as f64 * (a * d - b * c).powi(2) / denominator
}

fn pmi(marginals: &Marginals) -> f64 {
  if marginals.joint == 0 || marginals.first == 0 || marginals.second == 0 {
    return 0.0;
  }
  let joint = marginals.joint as f64;
  let total = marginals.total as f64;
  (joint * total / (marginals.first as f64 * marginals.second as f64)).log2()
}

fn student_t(marginals: &Marginals) -> f64 {
  if marginals.joint == 0 || marginals.total == 0 {
    return 0.0;
  }
  let joint = marginals.joint as f64;
  let independent = marginals.first as f64 * marginals.second as f64 / marginals.total as f64;
  (joint - independent) / joint.sqrt()
}

fn dice(marginals: &Marginals) -> f64 {
  let sum = marginals.first + marginals.second;
  if sum == 0 {
    return 0.0;
  }
  2.0 * marginals.joint as f64 / sum as f64
}
