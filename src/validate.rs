// src/validate.rs
use crate::config::Config;
use crate::error::GreetError;

/// Checks that a parsed `Config` is runnable. A usage request always
/// passes; otherwise the repetition count must be strictly positive.
pub fn validate_args(c: &Config) -> Result<(), GreetError> {
  if c.print_usage {
    return Ok(());
  }
  if c.num_times <= 0 {
    return Err(GreetError::Validation);
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn non_positive_counts_are_rejected() {
    for num_times in [0, -1] {
      let c = Config {
        print_usage: false,
        num_times,
      };
      let err = validate_args(&c).unwrap_err();
      assert_eq!(err.to_string(), "must specify a number greater than 0");
    }
  }

  #[test]
  fn positive_count_passes() {
    let c = Config {
      print_usage: false,
      num_times: 10,
    };
    assert!(validate_args(&c).is_ok());
  }

  #[test]
  fn usage_request_skips_the_count_check() {
    let c = Config {
      print_usage: true,
      num_times: 0,
    };
    assert!(validate_args(&c).is_ok());
  }
}
