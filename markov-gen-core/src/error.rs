use std::fmt;

use thiserror::Error;

use crate::config::ConfigError;
use crate::model::Token;

/// A context the generator had to sample but that was never observed during training.
///
/// The context holds 0 to 3 tokens. An empty context stands for the sentence-starter
/// distribution, so an empty training set surfaces here too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnseenContext {
	pub context: Vec<Token>,
}

impl UnseenContext {
	pub fn new(context: &[Token]) -> Self {
		Self { context: context.to_vec() }
	}

	/// Order of the missing context (0 for sentence starters).
	pub fn order(&self) -> usize {
		self.context.len()
	}
}

impl fmt::Display for UnseenContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.context.is_empty() {
			return write!(f, "no sentence starters available");
		}
		write!(f, "order-{} context {:?} was never observed", self.order(), self.context)
	}
}

/// Errors produced while reading input, training a model or generating passages.
#[derive(Error, Debug)]
pub enum Error {
	/// No training text at all. Fatal, no model is built.
	#[error("no training text available")]
	EmptyInput,

	/// Generation reached a context with no recorded successors.
	#[error("unseen context: {0}")]
	UnseenContext(UnseenContext),

	#[error(transparent)]
	Config(#[from] ConfigError),

	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_display() {
		let err = Error::EmptyInput;
		assert!(err.to_string().contains("no training text"));

		let err = Error::UnseenContext(UnseenContext::new(&["the".to_owned(), "cat".to_owned()]));
		assert!(err.to_string().contains("order-2"));
		assert!(err.to_string().contains("cat"));

		let err = Error::UnseenContext(UnseenContext::new(&[]));
		assert!(err.to_string().contains("no sentence starters"));
	}

	#[test]
	fn test_io_error_conversion() {
		let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
		let err: Error = io.into();
		assert!(matches!(err, Error::Io(_)));
		assert!(err.to_string().contains("missing.txt"));
	}
}
