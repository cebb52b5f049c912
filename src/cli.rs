// src/cli.rs
use crate::config::Config;
use crate::error::GreetError;

/// Parses the argument list (excluding the program name) into a `Config`.
///
/// A leading `-h` (or `--help`) wins regardless of anything after it.
/// Otherwise exactly one argument is accepted and parsed as a base-10
/// integer. Pure function over its input.
pub fn parse_args(args: &[String]) -> Result<Config, GreetError> {
  if let Some(first) = args.first() {
    if first == "-h" || first == "--help" {
      return Ok(Config {
        print_usage: true,
        num_times: 0,
      });
    }
  }

  if args.len() != 1 {
    return Err(GreetError::ArgumentCount);
  }

  let num_times = args[0].parse::<i64>().map_err(|e| GreetError::IntParse {
    token: args[0].clone(),
    source: e,
  })?;

  Ok(Config {
    print_usage: false,
    num_times,
  })
}
