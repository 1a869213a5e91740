use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{GenerationConfig, SAFETY_CAP};
use crate::error::{Error, Result};
use crate::text::{SENTENCE_END, format_passage};

use super::Token;
use super::markov_model::MarkovModel;

/// One generated passage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Passage {
	tokens: Vec<Token>,
	sentences: usize,
}

impl Passage {
	pub fn tokens(&self) -> &[Token] {
		&self.tokens
	}

	/// Sentence-ending marks produced while extending the passage.
	pub fn sentences(&self) -> usize {
		self.sentences
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	pub fn into_tokens(self) -> Vec<Token> {
		self.tokens
	}
}

impl fmt::Display for Passage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&format_passage(&self.tokens))
	}
}

/// Steps of a single passage attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
	PickStarter,
	PickSecond,
	PickThird,
	Extend,
	Done,
}

/// Random walk over a trained `MarkovModel`.
///
/// # Responsibilities
/// - Pick a sentence starter, then a second and third token from the
///   order-1 and order-2 tables
/// - Extend with the order-3 table over a sliding window of the last three
///   tokens until enough sentences were produced or `SAFETY_CAP` is reached
/// - Restart from a fresh starter when a context was never observed
///
/// The model is borrowed read-only. Each passage owns its own buffer, so
/// passages are independent apart from the shared random source.
pub struct Generator<'m, R> {
	model: &'m MarkovModel,
	rng: R,
	sentences_per_passage: usize,
	max_restarts: usize,
}

impl<'m> Generator<'m, StdRng> {
	/// Creates a generator backed by a `StdRng`.
	///
	/// Uses `config.seed` when set, OS entropy otherwise.
	pub fn from_config(model: &'m MarkovModel, config: &GenerationConfig) -> Self {
		let rng = match config.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		};
		Self::new(model, rng, config)
	}
}

impl<'m, R: Rng> Generator<'m, R> {
	pub fn new(model: &'m MarkovModel, rng: R, config: &GenerationConfig) -> Self {
		Self {
			model,
			rng,
			sentences_per_passage: config.sentences_per_passage,
			max_restarts: config.max_restarts,
		}
	}

	/// Makes a single attempt at generating a passage.
	///
	/// # Returns
	/// - `Ok(Passage)` once `sentences_per_passage` sentence ends were sampled
	///   or the passage holds `SAFETY_CAP` tokens.
	/// - `Err(Error::UnseenContext)` as soon as a context has no distribution.
	pub fn generate_passage(&mut self) -> Result<Passage> {
		let mut tokens: Vec<Token> = Vec::new();
		let mut sentences = 0;
		let mut stage = Stage::PickStarter;

		loop {
			stage = match stage {
				Stage::PickStarter => {
					let first = self.model.next_token(&[], &mut self.rng)?;
					tokens.push(first);
					Stage::PickSecond
				}
				Stage::PickSecond => {
					let second = self.model.next_token(&tokens[..1], &mut self.rng)?;
					tokens.push(second);
					Stage::PickThird
				}
				Stage::PickThird => {
					let third = self.model.next_token(&tokens[..2], &mut self.rng)?;
					tokens.push(third);
					Stage::Extend
				}
				Stage::Extend if sentences >= self.sentences_per_passage || tokens.len() >= SAFETY_CAP => Stage::Done,
				Stage::Extend => {
					let window = &tokens[tokens.len() - 3..];
					let next = self.model.next_token(window, &mut self.rng)?;
					if next == SENTENCE_END {
						sentences += 1;
					}
					tokens.push(next);
					Stage::Extend
				}
				Stage::Done => return Ok(Passage { tokens, sentences }),
			};
		}
	}

	/// Generates a passage, restarting from a fresh starter on unseen contexts.
	///
	/// # Behavior
	/// - Up to `max_restarts` extra attempts are made, each logged as a warning.
	/// - An empty starter distribution is returned at once, since no restart
	///   can get past it.
	///
	/// # Errors
	/// Returns the last `Error::UnseenContext` once every attempt missed.
	pub fn next_passage(&mut self) -> Result<Passage> {
		let mut restarts = 0;
		loop {
			match self.generate_passage() {
				Err(Error::UnseenContext(unseen)) if unseen.order() > 0 && restarts < self.max_restarts => {
					restarts += 1;
					log::warn!("{unseen}, restarting passage ({restarts}/{})", self.max_restarts);
				}
				result => return result,
			}
		}
	}

	/// Lazily generates `count` passages.
	///
	/// A failed passage does not stop the iteration.
	pub fn passages(&mut self, count: usize) -> impl Iterator<Item = Result<Passage>> + '_ {
		(0..count).map(move |_| self.next_passage())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::UnseenContext;

	fn config(sentences_per_passage: usize) -> GenerationConfig {
		GenerationConfig {
			sentences_per_passage,
			seed: Some(11),
			max_restarts: 2,
			..GenerationConfig::default()
		}
	}

	fn tokens(text: &str) -> Vec<Token> {
		text.split_whitespace().map(str::to_owned).collect()
	}

	#[test]
	fn stops_after_target_sentences() {
		let model = MarkovModel::from_text(&"The cat sat. The dog ran. ".repeat(10)).unwrap();
		let mut generator = Generator::from_config(&model, &config(3));

		let passage = generator.next_passage().unwrap();
		assert_eq!(passage.sentences(), 3);
		assert_eq!(passage.tokens().last().map(String::as_str), Some(SENTENCE_END));
		assert_eq!(passage.tokens().iter().filter(|t| *t == SENTENCE_END).count(), 3);
	}

	#[test]
	fn cycle_without_sentence_end_hits_safety_cap() {
		let model = MarkovModel::from_text("a b c a b c a b c").unwrap();
		let mut generator = Generator::from_config(&model, &config(1));

		let passage = generator.next_passage().unwrap();
		assert_eq!(passage.len(), SAFETY_CAP);
		assert_eq!(passage.sentences(), 0);
	}

	#[test]
	fn unseen_triple_fails_the_attempt() {
		// Pair (Hi, there) is followed by the terminator, which the flat stream never saw.
		let model = MarkovModel::from_text("Hi there.").unwrap();
		let mut generator = Generator::from_config(&model, &config(1));

		match generator.generate_passage() {
			Err(Error::UnseenContext(unseen)) => {
				let expected = ["Hi".to_owned(), "there".to_owned(), "\n".to_owned()];
				assert_eq!(unseen, UnseenContext::new(&expected));
			}
			other => panic!("expected unseen context, got {other:?}"),
		}
		assert!(matches!(generator.next_passage(), Err(Error::UnseenContext(_))));
	}

	#[test]
	fn unseen_single_fails_at_second_token() {
		// A one-word sentence never trains the order-1 table.
		let model = MarkovModel::from_text("Hi.").unwrap();
		let mut generator = Generator::from_config(&model, &config(1));

		match generator.next_passage() {
			Err(Error::UnseenContext(unseen)) => assert_eq!(unseen.context, tokens("Hi")),
			other => panic!("expected unseen context, got {other:?}"),
		}
	}

	#[test]
	fn restart_recovers_from_dead_end_starter() {
		// "Hi there" dead-ends, "The cat sat" always completes.
		let model = MarkovModel::from_text(&"Hi there. The cat sat. ".repeat(20)).unwrap();
		let generous = GenerationConfig {
			max_restarts: 200,
			..config(1)
		};
		let mut generator = Generator::from_config(&model, &generous);

		for passage in generator.passages(5) {
			let passage = passage.unwrap();
			assert_eq!(passage.tokens()[0], "The");
		}
	}

	#[test]
	fn passages_yields_requested_count() {
		let model = MarkovModel::from_text(&"The cat sat. ".repeat(5)).unwrap();
		let mut generator = Generator::from_config(&model, &config(1));
		assert_eq!(generator.passages(4).count(), 4);
		assert_eq!(generator.passages(0).count(), 0);
	}

	#[test]
	fn display_formats_prose() {
		let model = MarkovModel::from_text(&"The cat sat. ".repeat(5)).unwrap();
		let mut generator = Generator::from_config(&model, &config(2));
		let passage = generator.next_passage().unwrap();
		assert_eq!(passage.to_string(), "The cat sat. The cat sat.");
	}
}
