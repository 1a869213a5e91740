use std::collections::HashMap;

use super::Token;

/// Successor counts observed after one context.
///
/// Conceptually, this is the set of outgoing edges of a node in the Markov
/// chain, each edge weighted by how many times it was observed.
///
/// ## Invariants
/// - Every stored count is >= 1 (entries are only created by `record`)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
	/// Example: { "sat" => 42, "ran" => 3 }
	counts: HashMap<Token, usize>,
}

impl FrequencyTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one occurrence of `token`.
	///
	/// - If the token was already seen, its count is increased.
	/// - Otherwise, a new entry is created with a count of 1.
	pub fn record(&mut self, token: &str) {
		match self.counts.get_mut(token) {
			Some(count) => *count += 1,
			None => {
				self.counts.insert(token.to_owned(), 1);
			}
		}
	}

	/// Count recorded for `token`, 0 if it was never seen.
	pub fn count(&self, token: &str) -> usize {
		self.counts.get(token).copied().unwrap_or(0)
	}

	pub fn contains(&self, token: &str) -> bool {
		self.counts.contains_key(token)
	}

	/// Sum of all counts.
	pub fn total(&self) -> usize {
		self.counts.values().sum()
	}

	/// Number of distinct tokens.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Iterates over `(token, count)` pairs in no particular order.
	pub fn iter(&self) -> impl Iterator<Item = (&Token, usize)> {
		self.counts.iter().map(|(token, count)| (token, *count))
	}
}
