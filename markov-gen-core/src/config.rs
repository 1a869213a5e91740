//! Generation parameters.
//!
//! Defaults mirror the command-line behaviour: one passage of ten sentences, an
//! entropy-seeded random source and a handful of restarts for unseen contexts.

use thiserror::Error;

/// Hard upper bound on the number of tokens in a generated passage.
pub const SAFETY_CAP: usize = 2000;

pub const DEFAULT_PASSAGE_COUNT: usize = 1;
pub const DEFAULT_SENTENCES_PER_PASSAGE: usize = 10;
pub const DEFAULT_MAX_RESTARTS: usize = 8;

/// Errors produced when parsing or validating generation parameters.
///
/// # Variants
/// - `Parse`: a numeric option could not be parsed (ex. `"ten"` for a passage count).
/// - `Validation`: values parsed fine but are out of range.
///
/// Both are fatal at startup and never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
	#[error("invalid numeric value {value:?}: {message}")]
	Parse { value: String, message: String },

	#[error("config validation: {0}")]
	Validation(String),
}

/// Parameters driving passage generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
	/// Number of passages to generate.
	pub passage_count: usize,

	/// Number of sentence-ending marks after which a passage is complete.
	pub sentences_per_passage: usize,

	/// Seed for the random source. `None` draws from OS entropy.
	pub seed: Option<u64>,

	/// Extra attempts, each from a fresh starter, after a passage hits an unseen context.
	pub max_restarts: usize,
}

impl Default for GenerationConfig {
	fn default() -> Self {
		Self {
			passage_count: DEFAULT_PASSAGE_COUNT,
			sentences_per_passage: DEFAULT_SENTENCES_PER_PASSAGE,
			seed: None,
			max_restarts: DEFAULT_MAX_RESTARTS,
		}
	}
}

impl GenerationConfig {
	/// Checks that the values make sense together.
	///
	/// # Errors
	/// Returns `ConfigError::Validation` if `sentences_per_passage` is zero.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.sentences_per_passage == 0 {
			return Err(ConfigError::Validation(
				"sentences_per_passage must be greater than 0".to_owned(),
			));
		}
		Ok(())
	}
}

/// Parses a non-negative count such as a passage or sentence count.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
/// Returns `ConfigError::Parse` with the offending text if it is not a valid `usize`.
pub fn parse_count(value: &str) -> Result<usize, ConfigError> {
	value.trim().parse::<usize>().map_err(|e| ConfigError::Parse {
		value: value.to_owned(),
		message: e.to_string(),
	})
}

/// Parses a seed for the random source.
///
/// # Errors
/// Returns `ConfigError::Parse` if the text is not a valid `u64`.
pub fn parse_seed(value: &str) -> Result<u64, ConfigError> {
	value.trim().parse::<u64>().map_err(|e| ConfigError::Parse {
		value: value.to_owned(),
		message: e.to_string(),
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_config_is_valid() {
		let config = GenerationConfig::default();
		assert_eq!(config.passage_count, 1);
		assert_eq!(config.sentences_per_passage, 10);
		assert_eq!(config.seed, None);
		assert!(config.validate().is_ok());
	}

	#[test]
	fn validate_rejects_zero_sentences() {
		let config = GenerationConfig {
			sentences_per_passage: 0,
			..GenerationConfig::default()
		};
		assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
	}

	#[test]
	fn zero_passages_is_allowed() {
		let config = GenerationConfig {
			passage_count: 0,
			..GenerationConfig::default()
		};
		assert!(config.validate().is_ok());
	}

	#[test]
	fn parse_count_accepts_integers() {
		assert_eq!(parse_count("3"), Ok(3));
		assert_eq!(parse_count(" 12 "), Ok(12));
		assert_eq!(parse_count("0"), Ok(0));
	}

	#[test]
	fn parse_count_rejects_malformed_values() {
		for bad in ["ten", "-1", "1.5", ""] {
			match parse_count(bad) {
				Err(ConfigError::Parse { value, .. }) => assert_eq!(value, bad),
				other => panic!("expected parse error for {bad:?}, got {other:?}"),
			}
		}
	}

	#[test]
	fn parse_seed_round_trips_u64() {
		assert_eq!(parse_seed("18446744073709551615"), Ok(u64::MAX));
		assert!(parse_seed("seed").is_err());
	}

	#[test]
	fn config_error_display() {
		let err = parse_count("abc").unwrap_err();
		assert!(err.to_string().contains("\"abc\""));
		let err = ConfigError::Validation("sentences_per_passage must be greater than 0".to_owned());
		assert!(err.to_string().starts_with("config validation"));
	}
}
