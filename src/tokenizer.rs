//! Provides functionality for tokenizing plain text into words and punctuation
use lazy_static::lazy_static;
use regex::Regex;
use unidecode::unidecode;

lazy_static! {
  // Runs of word characters, or runs of anything else that is not whitespace
  static ref WORD_OR_PUNCT: Regex = Regex::new(r"\w+|[^\w\s]+").unwrap();
}

/// Configures how raw text is turned into tokens
#[derive(Debug, Clone)]
pub struct Tokenizer {
  /// Move to lowercase
  pub convert_to_lowercase: bool,
  /// Replace unicode characters by the ascii code representation
  pub normalize_unicode: bool,
}

impl Default for Tokenizer {
  fn default() -> Tokenizer {
    Tokenizer {
      convert_to_lowercase: true,
      normalize_unicode: false,
    }
  }
}

impl Tokenizer {
  /// returns the words and punctuation runs of a text, in order, without any normalization
  pub fn words(&self, text: &str) -> Vec<String> {
    WORD_OR_PUNCT
      .find_iter(text)
      .map(|found| found.as_str().to_string())
      .collect()
  }

  /// normalizes a single token according to the tokenizer settings
  pub fn normalize(&self, word: &str) -> String {
    let folded = if self.normalize_unicode {
      unidecode(word)
    } else {
      word.to_string()
    };
    if self.convert_to_lowercase {
      folded.to_lowercase()
    } else {
      folded
    }
  }

  /// returns the normalized words and punctuation runs of a text.
  /// Ascii folding can introduce whitespace ("北京" becomes "Bei Jing "), so the folded text is
  /// split again; symbols that fold to nothing are dropped.
  pub fn normalized_words(&self, text: &str) -> Vec<String> {
    if self.normalize_unicode {
      self.words(&self.normalize(text))
    } else {
      self.words(text).into_iter().map(|word| self.normalize(&word)).collect()
    }
  }
}
