//! Errors raised while loading corpora and ranking collocations
use std::error;
use std::fmt;
use std::io;
use std::result;

/// Type alias for collocation errors
pub type Result<X> = result::Result<X, Error>;

/// Wrapper for the kinds of errors occuring while finding collocations
#[derive(Debug)]
pub enum Error {
  /// The token source failed before yielding its complete sequence
  InvalidInput(String),
  /// A parameter was outside of its domain, e.g. a negative result count
  InvalidArgument(String),
  /// The requested association measure is not implemented
  UnsupportedMeasure(String),
  /// Reading a corpus file failed
  Io(io::Error),
  /// Writing CSV output failed
  Csv(csv::Error),
  /// Writing JSON output failed
  Json(serde_json::Error),
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      Error::InvalidInput(ref info) => write!(f, "Invalid input: {}", info),
      Error::InvalidArgument(ref info) => write!(f, "Invalid argument: {}", info),
      Error::UnsupportedMeasure(ref name) => write!(
        f,
        "Unsupported association measure {:?}, expected one of raw_freq, likelihood_ratio, pmi, \
         student_t, chi_sq, dice",
        name
      ),
      Error::Io(ref err) => write!(f, "IO error: {}", err),
      Error::Csv(ref err) => write!(f, "CSV error: {}", err),
      Error::Json(ref err) => write!(f, "JSON error: {}", err),
    }
  }
}

impl error::Error for Error {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match *self {
      Error::InvalidInput(_) => None,
      Error::InvalidArgument(_) => None,
      Error::UnsupportedMeasure(_) => None,
      Error::Io(ref err) => Some(err),
      Error::Csv(ref err) => Some(err),
      Error::Json(ref err) => Some(err),
    }
  }
}

//
// Convert everything else into Error
//
impl From<io::Error> for Error {
  fn from(err: io::Error) -> Self { Error::Io(err) }
}
impl From<csv::Error> for Error {
  fn from(err: csv::Error) -> Self { Error::Csv(err) }
}
impl From<serde_json::Error> for Error {
  fn from(err: serde_json::Error) -> Self { Error::Json(err) }
}
