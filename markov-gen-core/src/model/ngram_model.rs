use std::collections::HashMap;

use super::Token;
use super::distribution::ProbabilityDistribution;
use super::frequency::FrequencyTable;

/// Successor counts keyed by a context of `N` preceding tokens.
///
/// The context is a fixed-size array, so keys are immutable values compared
/// and hashed element-wise. Lookups accept a plain `&[Token]` slice of
/// length `N`.
///
/// # Responsibilities
/// - Accumulate `context -> next token` counts during training
/// - Convert every context's counts into a distribution once training is over
///
/// # Invariants
/// - `N` is 1, 2 or 3 in this crate
/// - Every stored `FrequencyTable` holds at least one entry
#[derive(Clone, Debug)]
pub struct NGramModel<const N: usize> {
	tables: HashMap<[Token; N], FrequencyTable>,
}

impl<const N: usize> Default for NGramModel<N> {
	fn default() -> Self {
		Self { tables: HashMap::new() }
	}
}

impl<const N: usize> NGramModel<N> {
	/// Number of context tokens.
	pub const ORDER: usize = N;

	pub fn new() -> Self {
		Self::default()
	}

	/// Increments `count[context][next]`, creating the inner table if absent.
	pub fn record(&mut self, context: [Token; N], next: &Token) {
		match self.tables.get_mut(context.as_slice()) {
			Some(table) => table.record(next),
			None => {
				let mut table = FrequencyTable::new();
				table.record(next);
				self.tables.insert(context, table);
			}
		}
	}

	/// Successor counts recorded after `context`.
	pub fn get(&self, context: &[Token]) -> Option<&FrequencyTable> {
		self.tables.get(context)
	}

	/// Number of distinct contexts.
	pub fn len(&self) -> usize {
		self.tables.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tables.is_empty()
	}

	pub fn contexts(&self) -> impl Iterator<Item = &[Token; N]> {
		self.tables.keys()
	}

	/// Converts every context's counts into a distribution.
	pub fn finalize(&self) -> ContextDistributions<N> {
		let distributions = self
			.tables
			.iter()
			.map(|(context, table)| (context.clone(), ProbabilityDistribution::from_frequencies(table)))
			.collect();
		ContextDistributions { distributions }
	}
}

/// Read-only successor distributions keyed by an `N`-token context.
#[derive(Clone, Debug)]
pub struct ContextDistributions<const N: usize> {
	distributions: HashMap<[Token; N], ProbabilityDistribution>,
}

impl<const N: usize> Default for ContextDistributions<N> {
	fn default() -> Self {
		Self { distributions: HashMap::new() }
	}
}

impl<const N: usize> ContextDistributions<N> {
	/// Distribution of tokens following `context`, `None` if it was never observed.
	pub fn get(&self, context: &[Token]) -> Option<&ProbabilityDistribution> {
		self.distributions.get(context)
	}

	pub fn len(&self) -> usize {
		self.distributions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.distributions.is_empty()
	}
}
