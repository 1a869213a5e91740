use rand::Rng;

use super::Token;
use super::distribution::ProbabilityDistribution;

/// Picks a token for a given uniform draw `r` in [0, 1).
///
/// Walks the entries in enumeration order, accumulating probabilities, and
/// returns the first token whose running sum reaches `r`.
///
/// Probabilities may sum to slightly less than 1.0. If the running sum never
/// reaches `r`, the last enumerated token is returned instead of nothing.
///
/// Returns `None` only for an empty distribution.
pub fn sample_at(distribution: &ProbabilityDistribution, r: f64) -> Option<&Token> {
	let mut running = 0.0;
	let mut fallback: Option<&Token> = None;
	for (token, probability) in distribution.iter() {
		running += probability;
		if running >= r {
			return Some(token);
		}
		fallback = Some(token);
	}

	// Rounding left the sum just below `r`.
	fallback
}

/// Draws one token from `distribution` using a single value from `rng`.
///
/// Returns `None` if the distribution is empty.
pub fn sample<'d, R: Rng + ?Sized>(distribution: &'d ProbabilityDistribution, rng: &mut R) -> Option<&'d Token> {
	if distribution.is_empty() {
		return None;
	}
	let r: f64 = rng.random();
	sample_at(distribution, r)
}
