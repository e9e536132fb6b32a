//! Tests for bigram collocation ranking

extern crate collocations;

use collocations::collocations::{
  rank, AssociationMeasure, BigramCollocationFinder, CollocationParameters, WordFilter,
};
use collocations::errors::Error;

fn tokens(text: &str) -> Vec<String> { text.split_whitespace().map(String::from).collect() }

fn bigram(first: &str, second: &str) -> (String, String) { (first.to_string(), second.to_string()) }

fn sample_sequences() -> Vec<Vec<String>> {
  vec![
    tokens("the cat sat on the mat the cat ran"),
    tokens("a b a b a c"),
    tokens("of the cat sat of the dog ran the of cow the new york of a the dog of the new york cat the of"),
    tokens("x x x x y x y"),
  ]
}

#[test]
fn short_sequences_rank_nothing() {
  let english = WordFilter::english();
  let exclude = |word: &str| english.excludes(word);
  for sequence in &[tokens(""), tokens("lonely")] {
    for measure in AssociationMeasure::ALL.iter() {
      assert!(rank(sequence, None, *measure, 10).unwrap().is_empty());
      assert!(rank(sequence, Some(&exclude), *measure, 10).unwrap().is_empty());
    }
  }
}

#[test]
fn filtered_cat_scenario() {
  let sequence = tokens("the cat sat on the mat the cat ran");
  let exclude = |word: &str| word == "the" || word == "on";
  let ranked = rank(&sequence, Some(&exclude), AssociationMeasure::RawFreq, 2).unwrap();
  assert_eq!(
    ranked,
    vec![(bigram("cat", "sat"), 1.0), (bigram("cat", "ran"), 1.0)]
  );

  // the stopword list plus minimum length does the same job
  let english = WordFilter::english();
  let exclude = |word: &str| english.excludes(word);
  let ranked = rank(&sequence, Some(&exclude), AssociationMeasure::RawFreq, 10).unwrap();
  let bigrams: Vec<_> = ranked.into_iter().map(|(bigram, _)| bigram).collect();
  assert_eq!(bigrams, vec![bigram("cat", "sat"), bigram("cat", "ran")]);
}

#[test]
fn most_frequent_pair_wins_ties_by_first_occurrence() {
  let sequence = tokens("a b a b a c");
  let ranked = rank(&sequence, None, AssociationMeasure::RawFreq, 1).unwrap();
  assert_eq!(ranked, vec![(bigram("a", "b"), 2.0)]);

  let all = rank(&sequence, None, AssociationMeasure::RawFreq, 10).unwrap();
  assert_eq!(
    all,
    vec![
      (bigram("a", "b"), 2.0),
      (bigram("b", "a"), 2.0),
      (bigram("a", "c"), 1.0),
    ]
  );
}

#[test]
fn zero_results_requested() {
  for sequence in sample_sequences() {
    for measure in AssociationMeasure::ALL.iter() {
      assert!(rank(&sequence, None, *measure, 0).unwrap().is_empty());
    }
  }
}

#[test]
fn negative_count_is_invalid() {
  for sequence in sample_sequences() {
    match rank(&sequence, None, AssociationMeasure::LikelihoodRatio, -1) {
      Err(Error::InvalidArgument(_)) => {},
      other => panic!("expected an invalid argument error, got {:?}", other),
    }
  }
}

#[test]
fn empty_tokens_are_counted_like_any_other() {
  let sequence = vec!["a", "", "b"];
  let ranked = rank(&sequence, None, AssociationMeasure::RawFreq, 5).unwrap();
  assert_eq!(ranked, vec![(bigram("a", ""), 1.0), (bigram("", "b"), 1.0)]);
}

#[test]
fn chi_square_uses_the_pair_count() {
  let sequence = tokens("a a");
  let ranked = rank(&sequence, None, AssociationMeasure::ChiSq, 5).unwrap();
  assert_eq!(ranked.len(), 1);
  assert_eq!(ranked[0].0, bigram("a", "a"));
  assert!((ranked[0].1 - 0.25).abs() < 1e-9, "got {}", ranked[0].1);
}

#[test]
fn failing_token_source_is_invalid_input() {
  let source: Vec<Result<&str, String>> = vec![Ok("a"), Ok("b"), Err("stream closed".to_string())];
  match BigramCollocationFinder::try_from_words(source) {
    Err(Error::InvalidInput(info)) => assert!(info.contains("stream closed"), "got {}", info),
    other => panic!("expected an invalid input error, got {:?}", other),
  }
}

#[test]
fn truncation_is_a_prefix() {
  for sequence in sample_sequences() {
    for measure in AssociationMeasure::ALL.iter() {
      let full = rank(&sequence, None, *measure, 1000).unwrap();
      for n in 0..=full.len() + 1 {
        let partial = rank(&sequence, None, *measure, n as isize).unwrap();
        assert_eq!(partial.len(), n.min(full.len()));
        assert_eq!(&full[..partial.len()], &partial[..], "{} with n={}", measure, n);
      }
    }
  }
}

#[test]
fn raw_frequency_scores_are_counts() {
  for sequence in sample_sequences() {
    let finder = BigramCollocationFinder::from_words(&sequence);
    let ranked = rank(&sequence, None, AssociationMeasure::RawFreq, 1000).unwrap();
    assert_eq!(ranked.len(), finder.candidate_count());
    for ((first, second), score) in ranked.iter() {
      assert_eq!(*score, finder.bigram_frequency(first, second) as f64);
    }
    for pair in ranked.windows(2) {
      assert!(pair[0].1 >= pair[1].1, "raw frequency order is non-increasing");
    }
  }
}

#[test]
fn filtered_words_never_appear() {
  let exclude = |word: &str| word == "the" || word == "x" || word == "a";
  for sequence in sample_sequences() {
    for measure in AssociationMeasure::ALL.iter() {
      for ((first, second), _) in rank(&sequence, Some(&exclude), *measure, 1000).unwrap() {
        assert!(
          !exclude(first.as_str()) && !exclude(second.as_str()),
          "{} {} survived",
          first,
          second
        );
      }
    }
  }
}

#[test]
fn ranking_is_deterministic() {
  for sequence in sample_sequences() {
    for measure in AssociationMeasure::ALL.iter() {
      assert_eq!(
        rank(&sequence, None, *measure, 50).unwrap(),
        rank(&sequence, None, *measure, 50).unwrap()
      );
    }
  }
}

#[test]
fn filtering_keeps_the_counts() {
  let sequence = tokens("the cat sat on the mat the cat ran");
  let mut finder = BigramCollocationFinder::from_words(&sequence);
  assert_eq!(finder.word_count(), 9);
  assert_eq!(finder.bigram_count(), 8);
  assert_eq!(finder.candidate_count(), 7);
  finder.apply_word_filter(|word| word == "the");
  assert_eq!(finder.candidate_count(), 3);
  assert_eq!(finder.unigram_frequency("the"), 3);
  assert_eq!(finder.bigram_frequency("the", "cat"), 2);
  assert_eq!(finder.word_count(), 9);
  assert_eq!(finder.bigram_count(), 8);
}

#[test]
fn likelihood_ratio_prefers_surprising_pairs() {
  let sequence = sample_sequences().remove(2);
  let finder = BigramCollocationFinder::from_words(&sequence);
  assert_eq!(finder.nbest(AssociationMeasure::RawFreq, 1), vec![bigram("of", "the")]);
  assert_eq!(
    finder.nbest(AssociationMeasure::LikelihoodRatio, 1),
    vec![bigram("new", "york")]
  );
  let scored = finder.score_ngrams(AssociationMeasure::LikelihoodRatio);
  let score_of = |first: &str, second: &str| {
    scored
      .iter()
      .find(|(bigram, _)| bigram.0 == first && bigram.1 == second)
      .map(|(_, score)| *score)
      .unwrap()
  };
  assert!((score_of("new", "york") - 13.768_127).abs() < 1e-5);
  assert!(score_of("new", "york") > score_of("of", "the"));
}

#[test]
fn frequency_and_ngram_filters() {
  let sequence = sample_sequences().remove(2);
  let mut finder = BigramCollocationFinder::from_words(&sequence);
  finder.apply_freq_filter(2);
  let survivors = finder.nbest(AssociationMeasure::RawFreq, 100);
  assert!(survivors
    .iter()
    .all(|(first, second)| finder.bigram_frequency(first, second) >= 2));
  assert_eq!(
    survivors,
    vec![
      bigram("of", "the"),
      bigram("the", "dog"),
      bigram("the", "of"),
      bigram("the", "new"),
      bigram("new", "york"),
    ]
  );
  finder.apply_ngram_filter(|first, _| first == "the");
  assert_eq!(
    finder.nbest(AssociationMeasure::RawFreq, 100),
    vec![bigram("of", "the"), bigram("new", "york")]
  );
}

#[test]
fn above_score_threshold() {
  let sequence = sample_sequences().remove(2);
  let finder = BigramCollocationFinder::from_words(&sequence);
  assert_eq!(
    finder.above_score(AssociationMeasure::RawFreq, 2.0),
    vec![bigram("of", "the")]
  );
  assert_eq!(
    finder.above_score(AssociationMeasure::LikelihoodRatio, 10.0),
    vec![bigram("new", "york")]
  );
  assert!(finder
    .above_score(AssociationMeasure::LikelihoodRatio, 1000.0)
    .is_empty());
}

#[test]
fn default_parameters() {
  let parameters = CollocationParameters::default();
  assert_eq!(
    parameters.measures,
    vec![AssociationMeasure::LikelihoodRatio, AssociationMeasure::RawFreq]
  );
  assert_eq!(parameters.top, 20);
  let filter = parameters.word_filter();
  assert!(filter.excludes("the"));
  assert!(filter.excludes("ox"));
  assert!(!filter.excludes("cat"));

  let unfiltered = CollocationParameters::unfiltered().word_filter();
  assert!(!unfiltered.excludes("the"));
  assert!(!unfiltered.excludes("ox"));

  let extra = CollocationParameters {
    extra_stopwords: vec!["cat".to_string()],
    ..CollocationParameters::default()
  };
  assert!(extra.word_filter().excludes("cat"));
}
