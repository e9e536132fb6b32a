//! Rank the bigram collocations of a plain-text corpus
//!
//! Every `.txt` file under the corpus directory is tokenized and lower-cased, the bigrams are
//! counted over the whole corpus, stopwords and short tokens are filtered out, and the best
//! bigrams are printed once per requested association measure.
//!
//! ```text
//! RUST_LOG=info collocations -n 20 -m likelihood_ratio -m raw_freq path/to/webtext
//! ```

// argument parsing
#[macro_use]
extern crate clap;
// logging
#[macro_use]
extern crate log;

use clap::Arg;
use std::io::{self, Write};
use std::process;
use std::time::Instant;

use collocations::collocations::report::{self, parse_count};
use collocations::collocations::{
  AssociationMeasure, BigramCollocationFinder, CollocationParameters, OutputFormat,
};
use collocations::corpus::Corpus;
use collocations::errors::Result;
use collocations::tokenizer::Tokenizer;

pub fn main() {
  env_logger::init();
  if let Err(e) = inner_main() {
    error!("{}", e);
    process::exit(1);
  }
}

fn inner_main() -> Result<()> {
  let args = app_from_crate!()
    .arg(
      Arg::with_name("corpus")
        .required(true)
        .help("directory of plain text files"),
    )
    .arg(
      Arg::with_name("top")
        .short("n")
        .long("top")
        .takes_value(true)
        .allow_hyphen_values(true)
        .help("how many bigrams to list per measure [default: 20]"),
    )
    .arg(
      Arg::with_name("measure")
        .short("m")
        .long("measure")
        .takes_value(true)
        .multiple(true)
        .number_of_values(1)
        .help(
          "association measure: raw_freq, likelihood_ratio, pmi, student_t, chi_sq or dice \
           [default: likelihood_ratio and raw_freq]",
        ),
    )
    .arg(
      Arg::with_name("min-length")
        .long("min-length")
        .takes_value(true)
        .help("exclude tokens shorter than this many characters [default: 3]"),
    )
    .arg(
      Arg::with_name("no-stopwords")
        .long("no-stopwords")
        .help("keep the English stopwords"),
    )
    .arg(
      Arg::with_name("stopword")
        .long("stopword")
        .takes_value(true)
        .multiple(true)
        .number_of_values(1)
        .help("an additional word to exclude"),
    )
    .arg(
      Arg::with_name("min-freq")
        .long("min-freq")
        .takes_value(true)
        .help("exclude bigrams seen fewer times [default: 1]"),
    )
    .arg(
      Arg::with_name("extension")
        .long("extension")
        .takes_value(true)
        .help("extension of the corpus files [default: .txt]"),
    )
    .arg(
      Arg::with_name("ascii")
        .long("ascii")
        .help("fold unicode characters to their ascii representation"),
    )
    .arg(
      Arg::with_name("format")
        .long("format")
        .takes_value(true)
        .possible_values(&["tsv", "csv", "json"])
        .default_value("tsv")
        .help("output format"),
    )
    .arg(
      Arg::with_name("fileids")
        .long("fileids")
        .help("list the corpus file identifiers and exit"),
    )
    .arg(
      Arg::with_name("words")
        .long("words")
        .takes_value(true)
        .help("list the first K corpus words and exit"),
    )
    .get_matches();

  let corpus = Corpus {
    path: args.value_of("corpus").unwrap_or(".").to_string(),
    tokenizer: Tokenizer {
      normalize_unicode: args.is_present("ascii"),
      ..Tokenizer::default()
    },
    extension: args.value_of("extension").map(String::from),
  };

  if args.is_present("fileids") {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for fileid in corpus.fileids()? {
      writeln!(out, "{}", fileid)?;
    }
    return Ok(());
  }
  if let Some(count) = args.value_of("words") {
    let count = parse_count(count, "words")?;
    let words = corpus.words()?;
    let stdout = io::stdout();
    return report::write_words(stdout.lock(), &words, count);
  }

  let mut parameters = CollocationParameters::default();
  if let Some(top) = args.value_of("top") {
    parameters.top = parse_count(top, "top")?;
  }
  if let Some(min_length) = args.value_of("min-length") {
    parameters.min_length = parse_count(min_length, "min-length")?;
  }
  if let Some(min_freq) = args.value_of("min-freq") {
    parameters.min_freq = parse_count(min_freq, "min-freq")?;
  }
  if let Some(measures) = args.values_of("measure") {
    parameters.measures = measures
      .map(str::parse::<AssociationMeasure>)
      .collect::<Result<Vec<_>>>()?;
  }
  if let Some(extra) = args.values_of("stopword") {
    parameters.extra_stopwords = extra.map(str::to_lowercase).collect();
  }
  parameters.use_stopwords = !args.is_present("no-stopwords");
  parameters.check();

  let start = Instant::now();
  let words = corpus.words()?;
  let mut finder = BigramCollocationFinder::from_words(&words);
  let filter = parameters.word_filter();
  finder.apply_word_filter(|word| filter.excludes(word));
  if parameters.min_freq > 1 {
    finder.apply_freq_filter(parameters.min_freq);
  }
  info!(
    "-- {} candidate bigrams out of {} adjacent pairs",
    finder.candidate_count(),
    finder.bigram_count()
  );

  let mut ranked = Vec::new();
  for measure in parameters.measures.iter() {
    let mut scored = finder.score_ngrams(*measure);
    scored.truncate(parameters.top);
    ranked.push((*measure, scored));
  }
  let records: Vec<_> = ranked
    .iter()
    .flat_map(|(measure, scored)| report::records(*measure, scored))
    .collect();
  let format = match args.value_of("format") {
    Some(format) => format.parse::<OutputFormat>()?,
    None => OutputFormat::default(),
  };
  let stdout = io::stdout();
  report::write_records(stdout.lock(), &records, format)?;
  info!("-- ranking took {:?}ms", start.elapsed().as_millis());
  Ok(())
}
