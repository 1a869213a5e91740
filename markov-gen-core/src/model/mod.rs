//! Word-level Markov chain of orders 0 through 3.
//!
//! This module provides:
//! - Frequency accumulation during training (`FrequencyTable`, `StarterModel`, `NGramModel`)
//! - The one-shot count to probability transform (`ProbabilityDistribution`)
//! - Weighted sampling over a distribution (`sampler`)
//! - The trained, read-only model (`MarkovModel`) and the passage `Generator`

/// An immutable word or punctuation atom, compared and hashed by content.
pub type Token = String;

/// Successor counts for a single context.
///
/// Stores how often each token followed the context during training.
/// Not exposed outside the model module.
mod frequency;

/// Normalized successor probabilities derived from a `FrequencyTable`.
pub mod distribution;

/// Single-draw weighted sampling over a `ProbabilityDistribution`.
pub mod sampler;

/// Counts of tokens that open a sentence.
pub mod starter_model;

/// Fixed-order context tables (`N` = 1, 2 or 3 preceding tokens).
pub mod ngram_model;

/// Training passes that fill every table from a `Corpus`.
pub mod trainer;

/// The trained model: one starter distribution and three context tables.
pub mod markov_model;

/// Passage generation state machine over a trained `MarkovModel`.
pub mod generator;

pub use distribution::ProbabilityDistribution;
pub use frequency::FrequencyTable;
pub use generator::{Generator, Passage};
pub use markov_model::MarkovModel;
pub use ngram_model::{ContextDistributions, NGramModel};
pub use starter_model::StarterModel;
pub use trainer::Trainer;
