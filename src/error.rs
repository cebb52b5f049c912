// src/error.rs
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreetError {
  #[error("IO Error: {0}")]
  Io(#[from] std::io::Error),

  #[error("parsing {token:?}: {source}")]
  IntParse {
    token: String,
    #[source]
    source: ParseIntError,
  },

  #[error("invalid number of arguments")]
  ArgumentCount,

  #[error("must specify a number greater than 0")]
  Validation,

  #[error("you didn't enter your name")]
  MissingInput,
}
