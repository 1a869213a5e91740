use rand::Rng;

use crate::error::{Error, Result, UnseenContext};
use crate::text::Corpus;

use super::Token;
use super::distribution::ProbabilityDistribution;
use super::ngram_model::ContextDistributions;
use super::sampler;
use super::trainer::Trainer;

/// A trained word-level Markov chain.
///
/// This struct holds:
/// - `starters`: distribution of sentence-opening tokens (order 0)
/// - `singles`, `pairs`, `triples`: successor distributions keyed by the
///   1, 2 or 3 preceding tokens
///
/// Built once per corpus and never mutated afterwards, so a single model can
/// back any number of generators.
#[derive(Clone, Debug, Default)]
pub struct MarkovModel {
	starters: ProbabilityDistribution,
	singles: ContextDistributions<1>,
	pairs: ContextDistributions<2>,
	triples: ContextDistributions<3>,
}

impl MarkovModel {
	pub(crate) fn new(
		starters: ProbabilityDistribution,
		singles: ContextDistributions<1>,
		pairs: ContextDistributions<2>,
		triples: ContextDistributions<3>,
	) -> Self {
		Self { starters, singles, pairs, triples }
	}

	/// Trains a model from a tokenized corpus.
	///
	/// Both training passes run to completion before any distribution is
	/// derived; no partially trained model is ever returned.
	pub fn train(corpus: &Corpus) -> Self {
		let mut trainer = Trainer::new();
		trainer.train(corpus);
		let model = trainer.finish();
		log::info!(
			"model: {} starters, {} single, {} pair and {} triple contexts",
			model.starters.len(),
			model.singles.len(),
			model.pairs.len(),
			model.triples.len()
		);
		model
	}

	/// Tokenizes raw text and trains a model from it.
	///
	/// # Errors
	/// Returns `Error::EmptyInput` if the text holds no token.
	pub fn from_text(text: &str) -> Result<Self> {
		let corpus = Corpus::parse(text)?;
		Ok(Self::train(&corpus))
	}

	pub fn starters(&self) -> &ProbabilityDistribution {
		&self.starters
	}

	pub fn singles(&self) -> &ContextDistributions<1> {
		&self.singles
	}

	pub fn pairs(&self) -> &ContextDistributions<2> {
		&self.pairs
	}

	pub fn triples(&self) -> &ContextDistributions<3> {
		&self.triples
	}

	/// Distribution of tokens that may follow `context`.
	///
	/// The context length selects the table: 0 for sentence starters, then
	/// 1, 2 or 3 preceding tokens. Longer contexts are never observed.
	pub fn distribution(&self, context: &[Token]) -> Option<&ProbabilityDistribution> {
		match context.len() {
			0 => Some(&self.starters),
			1 => self.singles.get(context),
			2 => self.pairs.get(context),
			3 => self.triples.get(context),
			_ => None,
		}
	}

	/// Samples the token following `context`.
	///
	/// # Errors
	/// Returns `Error::UnseenContext` if the context was never observed or its
	/// distribution is empty.
	pub fn next_token<R: Rng + ?Sized>(&self, context: &[Token], rng: &mut R) -> Result<Token> {
		self.distribution(context)
			.and_then(|distribution| sampler::sample(distribution, rng))
			.cloned()
			.ok_or_else(|| Error::UnseenContext(UnseenContext::new(context)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn tokens(text: &str) -> Vec<Token> {
		text.split_whitespace().map(str::to_owned).collect()
	}

	#[test]
	fn degenerate_corpus_has_single_starter() {
		let model = MarkovModel::from_text(&"The cat sat. ".repeat(50)).unwrap();

		assert_eq!(model.starters().len(), 1);
		assert!((model.starters().probability("The") - 1.0).abs() < 1e-9);
	}

	#[test]
	fn every_distribution_sums_to_one() {
		let text = "The cat sat on the mat. The dog sat on the cat! A bird flew over the dog. \
			The mat was red, the cat was not. A dog barked? The bird sang.";
		let model = MarkovModel::from_text(text).unwrap();

		let check = |d: &ProbabilityDistribution| assert!((d.total_probability() - 1.0).abs() < 1e-6);
		check(model.starters());
		for context in tokens("The A") {
			if let Some(d) = model.distribution(&[context]) {
				check(d);
			}
		}
		let corpus = Corpus::parse(text).unwrap();
		for window in corpus.tokens().windows(3) {
			if let Some(d) = model.distribution(window) {
				check(d);
			}
		}
	}

	#[test]
	fn next_token_reports_unseen_context() {
		let model = MarkovModel::from_text("The cat sat. The dog ran.").unwrap();
		let mut rng = StdRng::seed_from_u64(1);

		let unknown = tokens("purple cat sat");
		match model.next_token(&unknown, &mut rng) {
			Err(Error::UnseenContext(unseen)) => {
				assert_eq!(unseen.order(), 3);
				assert_eq!(unseen.context, unknown);
			}
			other => panic!("expected unseen context, got {other:?}"),
		}
	}

	#[test]
	fn empty_starters_report_unseen_context() {
		// Only sentence marks: tokens exist but no sentence does.
		let model = MarkovModel::from_text("... !?").unwrap();
		assert!(model.starters().is_empty());

		let mut rng = StdRng::seed_from_u64(1);
		match model.next_token(&[], &mut rng) {
			Err(Error::UnseenContext(unseen)) => assert_eq!(unseen.order(), 0),
			other => panic!("expected unseen context, got {other:?}"),
		}
	}

	#[test]
	fn empty_text_is_rejected() {
		assert!(matches!(MarkovModel::from_text("   "), Err(Error::EmptyInput)));
	}

	#[test]
	fn next_token_returns_known_successors() {
		let model = MarkovModel::from_text("The cat sat. The dog ran.").unwrap();
		let mut rng = StdRng::seed_from_u64(9);
		for _ in 0..50 {
			let next = model.next_token(&tokens("The"), &mut rng).unwrap();
			assert!(next == "cat" || next == "dog");
		}
	}
}
