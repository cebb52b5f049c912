// src/main.rs
mod cli;
mod config;
mod error;
mod run;
mod validate;

use std::env;
use std::io;
use std::process;

use error::GreetError;

fn main() {
  // RUST_LOG controls verbosity; logs go to stderr and never mix with the
  // prompt/greeting protocol on stdout.
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

  if let Err(err) = try_main() {
    eprintln!("{}", err);
    process::exit(1);
  }
}

fn try_main() -> Result<(), GreetError> {
  let args: Vec<String> = env::args().skip(1).collect();
  log::debug!("CLI args: {:?}", args);

  let config = cli::parse_args(&args)?;
  validate::validate_args(&config)?;

  let stdin = io::stdin();
  let stdout = io::stdout();
  run::run_cmd(stdin.lock(), stdout.lock(), &config)
}
