//! Text collaborators around the model: turning raw text into tokens and
//! sentences, and turning generated tokens back into prose.

/// Whitespace/punctuation tokenizer, sentence splitting and the `Corpus` container.
pub mod tokenizer;

/// Re-assembly of a token sequence into punctuated prose.
pub mod format;

pub use format::format_passage;
pub use tokenizer::{Corpus, SENTENCE_END, SENTENCE_TERMINATOR, Sentence, split_sentences, tokenize};
