// src/run.rs
use std::io::{BufRead, Write};

use log::debug;

use crate::config::Config;
use crate::error::GreetError;

pub const USAGE: &str = "Usage: greet <integer> : print a greeting that many times.\n\
-h : print this help message.\n";

const PROMPT: &str = "Your name please? Press the return key when done.\n";

/// Executes a validated `Config` against the given streams: either prints
/// the usage text, or prompts for a name and greets it `num_times` times.
///
/// Streams are injected rather than taken from the process so tests can
/// substitute in-memory buffers.
pub fn run_cmd<R: BufRead, W: Write>(
  reader: R,
  mut writer: W,
  c: &Config,
) -> Result<(), GreetError> {
  if c.print_usage {
    writer.write_all(USAGE.as_bytes())?;
    return Ok(());
  }

  writer.write_all(PROMPT.as_bytes())?;
  writer.flush()?;

  let name = read_name(reader)?;
  debug!("greeting {:?} {} times", name, c.num_times);

  for _ in 0..c.num_times {
    writeln!(writer, "Nice to meet you {}", name)?;
  }

  Ok(())
}

/// Reads one line from the reader and strips its line ending. An empty
/// line (or immediate end of stream) is an error.
fn read_name<R: BufRead>(mut reader: R) -> Result<String, GreetError> {
  let mut line = String::new();
  reader.read_line(&mut line)?;

  let name = line.trim_end_matches(['\r', '\n']);
  if name.is_empty() {
    return Err(GreetError::MissingInput);
  }
  Ok(name.to_string())
}
