use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::model::Token;

/// Token appended to every training sentence to mark where it ends.
pub const SENTENCE_TERMINATOR: &str = "\n";

/// Punctuation token counted as the end of a sentence during generation.
pub const SENTENCE_END: &str = ".";

/// Characters that split raw text into sentences. They are consumed by the split.
const SENTENCE_MARKS: [char; 3] = ['.', '!', '?'];

/// Every ASCII punctuation character is a token of its own. Runs of other
/// non-space characters form word tokens.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"[[:punct:]]|[^\s[:punct:]]+").expect("token pattern is valid")
});

/// An ordered sequence of tokens ending with `SENTENCE_TERMINATOR`.
pub type Sentence = Vec<Token>;

/// Splits text into word and punctuation tokens.
///
/// Examples:
/// - `"The cat sat."` → `["The", "cat", "sat", "."]`
/// - `"don't, ok"` → `["don", "'", "t", ",", "ok"]`
pub fn tokenize(text: &str) -> Vec<Token> {
	TOKEN_RE
		.find_iter(text)
		.map(|m| m.as_str())
		.filter(|token| !token.is_empty())
		.map(str::to_owned)
		.collect()
}

/// Splits text into sentences on `.`, `!` and `?`.
///
/// Each sentence is tokenized, stripped of leading empty tokens and terminated
/// with `SENTENCE_TERMINATOR`. Pieces without any token are dropped, so every
/// returned sentence starts with a real token.
pub fn split_sentences(text: &str) -> Vec<Sentence> {
	text.split(SENTENCE_MARKS)
		.filter_map(|piece| {
			let mut sentence: Sentence = tokenize(piece)
				.into_iter()
				.skip_while(|token| token.trim().is_empty())
				.collect();
			if sentence.is_empty() {
				return None;
			}
			sentence.push(SENTENCE_TERMINATOR.to_owned());
			Some(sentence)
		})
		.collect()
}

/// Tokenized training text.
///
/// Holds both views the trainer needs: the flat token stream of the whole
/// input (sentence boundaries ignored) and the list of sentences.
#[derive(Debug, Clone)]
pub struct Corpus {
	tokens: Vec<Token>,
	sentences: Vec<Sentence>,
}

impl Corpus {
	/// Tokenizes raw text into a corpus.
	///
	/// # Errors
	/// Returns `Error::EmptyInput` if the text contains no token at all.
	pub fn parse(text: &str) -> Result<Self> {
		let tokens = tokenize(text);
		if tokens.is_empty() {
			return Err(Error::EmptyInput);
		}
		let sentences = split_sentences(text);
		log::info!("corpus: {} tokens, {} sentences", tokens.len(), sentences.len());
		Ok(Self { tokens, sentences })
	}

	/// The whole input as one token stream.
	pub fn tokens(&self) -> &[Token] {
		&self.tokens
	}

	pub fn sentences(&self) -> &[Sentence] {
		&self.sentences
	}
}
