use super::Token;
use super::distribution::ProbabilityDistribution;
use super::frequency::FrequencyTable;

/// Counts of tokens observed as the first token of a training sentence.
///
/// Its key set also acts as the "starter vocabulary" consulted when the
/// order-1 and order-2 tables are trained.
#[derive(Clone, Debug, Default)]
pub struct StarterModel {
	counts: FrequencyTable,
}

impl StarterModel {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records `first_token` as the start of one sentence.
	pub fn record_sentence_start(&mut self, first_token: &Token) {
		self.counts.record(first_token);
	}

	/// Whether `token` opened at least one training sentence.
	pub fn contains(&self, token: &str) -> bool {
		self.counts.contains(token)
	}

	pub fn counts(&self) -> &FrequencyTable {
		&self.counts
	}

	/// Converts the starter counts into a distribution.
	pub fn finalize(&self) -> ProbabilityDistribution {
		ProbabilityDistribution::from_frequencies(&self.counts)
	}
}
