//! A small ngram library
//! ngrams are sequences of n consecutive words

use std::collections::HashMap;

/// Records single words, in order of appearance
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
  /// hashmap for the records
  pub map: HashMap<String, usize>,
  /// the recorded words, at the index of their first appearance
  words: Vec<String>,
}

impl Dictionary {
  /// insert a new word into the dictionary (if it hasn't been inserted yet), returning its index
  pub fn insert(&mut self, word: &str) -> usize {
    // Only record if new
    if let Some(index) = self.map.get(word) {
      return *index;
    }
    let index = self.words.len();
    self.words.push(word.to_string());
    self.map.insert(word.to_string(), index);
    index
  }
  /// get the index of a recorded word
  pub fn index(&self, word: &str) -> Option<usize> { self.map.get(word).copied() }
  /// get the word recorded at `index`
  pub fn word(&self, index: usize) -> Option<&str> { self.words.get(index).map(String::as_str) }
  /// get the number of entries in the dictionary
  pub fn count(&self) -> usize { self.words.len() }
}

/// Records the frequencies of single words, keyed by their `Dictionary` index
#[derive(Debug, Clone, Default)]
pub struct Unigrams {
  counts: Vec<usize>,
  total: usize,
}

impl Unigrams {
  /// Get the word count
  pub fn get(&self, index: usize) -> usize { self.counts.get(index).copied().unwrap_or(0) }
  /// insert a word
  pub fn insert(&mut self, index: usize) {
    if index >= self.counts.len() {
      self.counts.resize(index + 1, 0);
    }
    self.counts[index] += 1;
    self.total += 1;
  }
  /// get the number of words inserted, repetitions included
  pub fn total(&self) -> usize { self.total }
}

/// A pair of adjacent words, as `Dictionary` indices
pub type IndexPair = (usize, usize);

/// Frequency record of a single bigram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BigramRecord {
  /// the word indices of the pair
  pub pair: IndexPair,
  /// number of adjacent co-occurrences
  pub count: usize,
  /// position of the first word of the first occurrence in the token sequence
  pub first_position: usize,
}

/// Records the frequencies of adjacent word pairs, in order of first appearance
#[derive(Debug, Clone, Default)]
pub struct Bigrams {
  map: HashMap<IndexPair, usize>,
  records: Vec<BigramRecord>,
  total: usize,
}

impl Bigrams {
  /// insert a pair, first seen at `position`
  pub fn insert(&mut self, pair: IndexPair, position: usize) {
    let records = &mut self.records;
    let slot = *self.map.entry(pair).or_insert_with(|| {
      records.push(BigramRecord {
        pair,
        count: 0,
        first_position: position,
      });
      records.len() - 1
    });
    self.records[slot].count += 1;
    self.total += 1;
  }
  /// Get the pair count
  pub fn get(&self, pair: IndexPair) -> usize {
    match self.map.get(&pair) {
      Some(slot) => self.records[*slot].count,
      None => 0,
    }
  }
  /// iterate over the records, in order of first appearance
  pub fn iter(&self) -> std::slice::Iter<'_, BigramRecord> { self.records.iter() }
  /// get the number of different pairs inserted
  pub fn count(&self) -> usize { self.records.len() }
  /// get the number of pairs inserted, repetitions included
  pub fn total(&self) -> usize { self.total }
}

/// Unigram and bigram frequencies of one token sequence, built in a single pass
#[derive(Debug, Clone, Default)]
pub struct FrequencyTables {
  /// token interning
  pub dictionary: Dictionary,
  /// single word frequencies
  pub unigrams: Unigrams,
  /// adjacent pair frequencies
  pub bigrams: Bigrams,
}

impl FrequencyTables {
  /// Count the unigrams and adjacent bigrams of `words`
  pub fn from_words<I, S>(words: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut tables = FrequencyTables::default();
    let mut previous: Option<usize> = None;
    for (position, word) in words.into_iter().enumerate() {
      let index = tables.dictionary.insert(word.as_ref());
      tables.unigrams.insert(index);
      if let Some(previous_index) = previous {
        tables.bigrams.insert((previous_index, index), position - 1);
      }
      previous = Some(index);
    }
    tables
  }

  /// Resolve a pair of indices back into words
  pub fn words_of(&self, pair: IndexPair) -> (String, String) {
    (
      self.dictionary.word(pair.0).unwrap_or_default().to_string(),
      self.dictionary.word(pair.1).unwrap_or_default().to_string(),
    )
  }
}
