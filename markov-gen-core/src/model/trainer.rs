use crate::text::{Corpus, Sentence};

use super::Token;
use super::markov_model::MarkovModel;
use super::ngram_model::NGramModel;
use super::starter_model::StarterModel;

/// Frequency tables under construction.
///
/// Tables are filled by two independent passes:
/// - `train_sentences`: sentence starters, then the order-1 and order-2
///   tables from a scan inside each sentence
/// - `train_stream`: the order-3 table from the flat token stream of the
///   whole input, across sentence boundaries
///
/// `finish` converts everything into a read-only `MarkovModel`.
#[derive(Clone, Debug, Default)]
pub struct Trainer {
	starters: StarterModel,
	singles: NGramModel<1>,
	pairs: NGramModel<2>,
	triples: NGramModel<3>,
}

impl Trainer {
	pub fn new() -> Self {
		Self::default()
	}

	/// Runs both training passes over a corpus.
	pub fn train(&mut self, corpus: &Corpus) {
		self.train_sentences(corpus.sentences());
		self.train_stream(corpus.tokens());
	}

	/// Trains the starter, order-1 and order-2 tables from sentences.
	///
	/// # Behavior
	/// - Every sentence contributes its first non-empty token as a starter.
	/// - Then, within each sentence, the first position `i` whose token opened
	///   *some* training sentence, and for which `i + 2` is still inside the
	///   sentence, records `(t[i]) -> t[i+1]` and `(t[i], t[i+1]) -> t[i+2]`.
	///   Later positions of that sentence are ignored.
	///
	/// # Notes
	/// - Starters are all counted before the scan, so a token can qualify
	///   because it opened a sentence appearing later in the input.
	pub fn train_sentences(&mut self, sentences: &[Sentence]) {
		for sentence in sentences {
			match sentence.iter().find(|token| !token.trim().is_empty()) {
				Some(first) => self.starters.record_sentence_start(first),
				None => log::debug!("skipping sentence without tokens"),
			}
		}

		for sentence in sentences {
			self.record_first_starter_match(sentence);
		}
	}

	fn record_first_starter_match(&mut self, sentence: &[Token]) {
		if sentence.len() < 3 {
			return;
		}

		let Some(i) = (0..sentence.len() - 2).find(|&i| self.starters.contains(&sentence[i])) else {
			return;
		};

		let (first, second, third) = (&sentence[i], &sentence[i + 1], &sentence[i + 2]);
		self.singles.record([first.clone()], second);
		self.pairs.record([first.clone(), second.clone()], third);
	}

	/// Trains the order-3 table from the whole token stream.
	///
	/// Every position `i` with `i + 3` in range records
	/// `(t[i], t[i+1], t[i+2]) -> t[i+3]`, regardless of sentence boundaries.
	pub fn train_stream(&mut self, tokens: &[Token]) {
		for window in tokens.windows(4) {
			let context: [Token; 3] = std::array::from_fn(|k| window[k].clone());
			self.triples.record(context, &window[3]);
		}
	}

	pub fn starters(&self) -> &StarterModel {
		&self.starters
	}

	pub fn singles(&self) -> &NGramModel<1> {
		&self.singles
	}

	pub fn pairs(&self) -> &NGramModel<2> {
		&self.pairs
	}

	pub fn triples(&self) -> &NGramModel<3> {
		&self.triples
	}

	/// Converts every frequency table into a probability distribution.
	pub fn finish(&self) -> MarkovModel {
		log::debug!(
			"converting {} starters, {} single, {} pair and {} triple contexts",
			self.starters.counts().len(),
			self.singles.len(),
			self.pairs.len(),
			self.triples.len()
		);
		MarkovModel::new(
			self.starters.finalize(),
			self.singles.finalize(),
			self.pairs.finalize(),
			self.triples.finalize(),
		)
	}
}
