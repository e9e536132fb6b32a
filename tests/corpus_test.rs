extern crate collocations;

use collocations::collocations::{AssociationMeasure, BigramCollocationFinder, WordFilter};
use collocations::corpus::Corpus;
use collocations::errors::Error;
use collocations::util::test::RESOURCE_DOCUMENTS;

fn resource_corpus() -> Corpus { Corpus::new("tests/resources".to_string()) }

fn bigram(first: &str, second: &str) -> (String, String) { (first.to_string(), second.to_string()) }

#[test]
fn can_list_fileids() {
  let fileids = resource_corpus().fileids().unwrap();
  assert_eq!(fileids, *RESOURCE_DOCUMENTS);
  assert_eq!(fileids, vec!["firefox.txt", "overheard.txt", "wine.txt"]);
}

#[test]
fn can_select_other_extensions() {
  let corpus = Corpus {
    extension: Some(".md".to_string()),
    ..resource_corpus()
  };
  assert_eq!(corpus.fileids().unwrap(), vec!["README.md"]);
}

#[test]
fn can_load_file_words() {
  let words = resource_corpus().file_words("firefox.txt").unwrap();
  assert_eq!(&words[..4], &["cookie", "manager", ":", "\""]);
  assert!(words.iter().all(|word| *word == word.to_lowercase()));
}

#[test]
fn can_iterate_corpus_words() {
  let corpus = resource_corpus();
  let words = corpus.words().unwrap();
  let mut expected = Vec::new();
  for fileid in corpus.fileids().unwrap() {
    expected.extend(corpus.file_words(&fileid).unwrap());
  }
  assert_eq!(words, expected, "corpus words keep the file order");
  assert!(
    words.len() > 200,
    "expected more than 200 words, found {}",
    words.len()
  );
}

#[test]
fn missing_corpus_is_an_io_error() {
  let corpus = Corpus::new("tests/no-such-corpus".to_string());
  match corpus.fileids() {
    Err(Error::Io(_)) => {},
    other => panic!("expected an IO error, got {:?}", other),
  }
  assert!(corpus.words().is_err());
}

#[test]
fn can_rank_corpus_collocations() {
  let words = resource_corpus().words().unwrap();
  let mut finder = BigramCollocationFinder::from_words(&words);
  let filter = WordFilter::english();
  finder.apply_word_filter(|word| filter.excludes(word));

  assert_eq!(
    finder.nbest(AssociationMeasure::RawFreq, 4),
    vec![
      bigram("bookmarks", "toolbar"),
      bigram("ice", "cream"),
      bigram("new", "york"),
      bigram("red", "fruit"),
    ]
  );
  assert_eq!(
    finder.nbest(AssociationMeasure::LikelihoodRatio, 4),
    vec![
      bigram("bookmarks", "toolbar"),
      bigram("ice", "cream"),
      bigram("red", "fruit"),
      bigram("new", "york"),
    ]
  );
  // "new" also opens "new browser window", so its pair is less surprising
  assert_eq!(finder.unigram_frequency("new"), 4);
  assert_eq!(finder.bigram_frequency("new", "york"), 3);
}
