use crate::model::Token;

use super::tokenizer::SENTENCE_TERMINATOR;

/// Tokens written directly after the previous token, without a space.
const ATTACHED: [&str; 8] = [",", ")", ";", ":", "-", ".", "!", "?"];

const OPENING: &str = "(";

/// Re-assembles a token sequence into a line of prose.
///
/// - Punctuation in `ATTACHED` is glued to the preceding token
/// - The token after an opening parenthesis is glued to it
/// - Every other token is preceded by a single space
/// - Output stops at the first `SENTENCE_TERMINATOR`
pub fn format_passage(tokens: &[Token]) -> String {
	let mut prose = String::new();
	let mut previous: Option<&str> = None;
	for token in tokens {
		if token == SENTENCE_TERMINATOR {
			break;
		}
		let glued = ATTACHED.contains(&token.as_str()) || previous == Some(OPENING);
		if previous.is_some() && !glued {
			prose.push(' ');
		}
		prose.push_str(token);
		previous = Some(token.as_str());
	}
	prose
}
