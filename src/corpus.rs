//! A plain-text corpus: a directory of text files, read as sequences of normalized words
use log::{debug, info, warn};
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

use crate::errors::{Error, Result};
use crate::tokenizer::Tokenizer;

/// An iterable Corpus of plain text documents
#[derive(Debug, Clone)]
pub struct Corpus {
  /// root directory
  pub path: String,
  /// word tokenizer, lowercasing by default
  pub tokenizer: Tokenizer,
  /// Extension of corpus files, defaults to selecting .txt files
  pub extension: Option<String>,
}

impl Default for Corpus {
  fn default() -> Corpus {
    Corpus {
      path: ".".to_string(),
      tokenizer: Tokenizer::default(),
      extension: None,
    }
  }
}

impl Corpus {
  /// Create a new corpus with the base directory `dirpath`
  pub fn new(dirpath: String) -> Self {
    Corpus {
      path: dirpath,
      ..Corpus::default()
    }
  }

  fn selected(&self, file_name: &str) -> bool {
    if let Some(ref extension) = self.extension {
      file_name.ends_with(extension)
    } else {
      file_name.ends_with(".txt")
    }
  }

  /// The identifiers of the corpus files: their paths relative to the root, `/`-separated, sorted
  pub fn fileids(&self) -> Result<Vec<String>> {
    let root = Path::new(&self.path);
    if !root.is_dir() {
      return Err(Error::Io(io::Error::new(
        io::ErrorKind::NotFound,
        format!("corpus root {:?} is not a directory", self.path),
      )));
    }
    let mut fileids = Vec::new();
    for each in WalkDir::new(root) {
      match each {
        Ok(entry) => {
          if !entry.file_type().is_file() {
            continue;
          }
          let file_name = entry.file_name().to_str().unwrap_or("");
          if !self.selected(file_name) {
            continue;
          }
          if let Ok(relative) = entry.path().strip_prefix(root) {
            let fileid = relative
              .components()
              .map(|component| component.as_os_str().to_string_lossy().into_owned())
              .collect::<Vec<_>>()
              .join("/");
            fileids.push(fileid);
          }
        },
        Err(e) => warn!("-- Error while walking for entry: {}", e),
      }
    }
    fileids.sort();
    debug!("-- corpus {:?} has {} files", self.path, fileids.len());
    Ok(fileids)
  }

  /// The normalized words of a single corpus file
  pub fn file_words(&self, fileid: &str) -> Result<Vec<String>> {
    let bytes = fs::read(Path::new(&self.path).join(fileid))?;
    let text = String::from_utf8(bytes)
      .map_err(|e| Error::InvalidInput(format!("{} is not valid UTF-8: {}", fileid, e)))?;
    Ok(self.tokenizer.normalized_words(&text))
  }

  /// The normalized words of the whole corpus, file after file in `fileids` order.
  /// Files are tokenized in parallel.
  pub fn words(&self) -> Result<Vec<String>> {
    let fileids = self.fileids()?;
    info!("-- tokenizing {} files under {:?}", fileids.len(), self.path);
    let per_file = fileids
      .par_iter()
      .map(|fileid| self.file_words(fileid))
      .collect::<Result<Vec<Vec<String>>>>()?;
    let words: Vec<String> = per_file.into_iter().flatten().collect();
    info!("-- corpus {:?} has {} words", self.path, words.len());
    Ok(words)
  }
}
