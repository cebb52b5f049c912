// src/config.rs

/// The parsed run options. Built once from the argument list, immutable
/// afterwards, consumed by the runner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
  /// True if help was requested; `num_times` is not consulted in that case.
  pub print_usage: bool,
  /// Requested number of greeting repetitions. Must be strictly positive
  /// before the runner executes.
  pub num_times: i64,
}
