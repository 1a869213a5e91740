use super::Token;
use super::frequency::FrequencyTable;

/// Probabilities of the tokens that may follow one context.
///
/// Built once from a `FrequencyTable` and read-only afterwards. Entries are
/// kept sorted by token so that enumeration order, and therefore sampling
/// with a seeded random source, is reproducible.
///
/// # Invariants
/// - Every probability is in (0, 1]
/// - Probabilities sum to 1.0 within floating-point tolerance, unless the
///   distribution is empty ("no data")
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProbabilityDistribution {
	entries: Vec<(Token, f64)>,
}

impl ProbabilityDistribution {
	/// Converts successor counts into probabilities.
	///
	/// Each probability is `count / total`. An empty table gives an empty
	/// distribution instead of dividing by zero. The table is left untouched.
	pub fn from_frequencies(table: &FrequencyTable) -> Self {
		let total = table.total();
		if total == 0 {
			return Self::default();
		}

		let mut entries: Vec<(Token, f64)> = table
			.iter()
			.map(|(token, count)| (token.clone(), count as f64 / total as f64))
			.collect();
		entries.sort_by(|a, b| a.0.cmp(&b.0));

		Self { entries }
	}

	/// Probability of `token`, 0.0 if it never followed the context.
	pub fn probability(&self, token: &str) -> f64 {
		self.entries
			.binary_search_by(|(t, _)| t.as_str().cmp(token))
			.map(|i| self.entries[i].1)
			.unwrap_or(0.0)
	}

	pub fn contains(&self, token: &str) -> bool {
		self.entries.binary_search_by(|(t, _)| t.as_str().cmp(token)).is_ok()
	}

	/// Sum of all probabilities (1.0 modulo rounding, 0.0 when empty).
	pub fn total_probability(&self) -> f64 {
		self.entries.iter().map(|(_, p)| p).sum()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over `(token, probability)` in token order.
	pub fn iter(&self) -> impl Iterator<Item = (&Token, f64)> {
		self.entries.iter().map(|(token, p)| (token, *p))
	}
}

impl From<&FrequencyTable> for ProbabilityDistribution {
	fn from(table: &FrequencyTable) -> Self {
		Self::from_frequencies(table)
	}
}
