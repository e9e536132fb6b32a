//! Output records of a collocation run, one row per ranked bigram, written as tsv, csv or json

use serde::Serialize;
use std::io::Write;
use std::str::FromStr;

use super::measures::AssociationMeasure;
use super::{checked_count, Bigram};
use crate::errors::{Error, Result};

/// One ranked bigram, as printed by the `collocations` binary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollocationRecord<'a> {
  /// name of the measure the bigram was ranked under
  pub measure: &'a str,
  /// 1-based position in that ranking
  pub rank: usize,
  /// first word of the bigram
  pub first: &'a str,
  /// second word of the bigram
  pub second: &'a str,
  /// association score
  pub score: f64,
}

/// The supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
  /// tab separated, no header, scores with four decimals
  Tsv,
  /// comma separated, with a header row
  Csv,
  /// a pretty-printed array of objects
  Json,
}

impl Default for OutputFormat {
  fn default() -> Self { OutputFormat::Tsv }
}

impl FromStr for OutputFormat {
  type Err = Error;
  fn from_str(name: &str) -> Result<Self> {
    match name.trim().to_lowercase().as_str() {
      "tsv" => Ok(OutputFormat::Tsv),
      "csv" => Ok(OutputFormat::Csv),
      "json" => Ok(OutputFormat::Json),
      _ => Err(Error::InvalidArgument(format!(
        "unknown output format {:?}, expected tsv, csv or json",
        name
      ))),
    }
  }
}

/// The records of one ranking, numbered from 1
pub fn records<'a>(
  measure: AssociationMeasure,
  scored: &'a [(Bigram, f64)],
) -> Vec<CollocationRecord<'a>> {
  scored
    .iter()
    .enumerate()
    .map(|(index, ((first, second), score))| CollocationRecord {
      measure: measure.name(),
      rank: index + 1,
      first,
      second,
      score: *score,
    })
    .collect()
}

/// Parse a non-negative count argument named `name`
pub fn parse_count(value: &str, name: &str) -> Result<usize> {
  let parsed = value.trim().parse::<isize>().map_err(|e| {
    Error::InvalidArgument(format!("--{} expects an integer, got {:?}: {}", name, value, e))
  })?;
  checked_count(parsed)
}

/// Write `records` to `out` in the given format
pub fn write_records<W: Write>(
  mut out: W,
  records: &[CollocationRecord],
  format: OutputFormat,
) -> Result<()> {
  match format {
    OutputFormat::Csv => {
      let mut csv_writer = csv::Writer::from_writer(out);
      for record in records {
        csv_writer.serialize(record)?;
      }
      csv_writer.flush()?;
    },
    OutputFormat::Json => {
      serde_json::to_writer_pretty(&mut out, records)?;
      writeln!(out)?;
    },
    OutputFormat::Tsv => {
      for record in records {
        writeln!(
          out,
          "{}\t{}\t{}\t{}\t{:.4}",
          record.measure, record.rank, record.first, record.second, record.score
        )?;
      }
    },
  }
  Ok(())
}

/// Write the first `count` of `words` on one line, or all of them if there are fewer
pub fn write_words<W: Write>(mut out: W, words: &[String], count: usize) -> Result<()> {
  writeln!(out, "{:?}", &words[..count.min(words.len())])?;
  Ok(())
}
