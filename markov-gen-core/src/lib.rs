//! Word-level Markov chain text generation library.
//!
//! This crate provides:
//! - Tokenization of raw text into a flat token stream and sentences
//! - Frequency tables for sentence starters and 1, 2 and 3 token contexts
//! - Count to probability conversion and weighted sampling
//! - A passage generator driven by an injectable random source
//!
//! Training is a one-shot batch: build a `Corpus`, train a `MarkovModel`,
//! then generate as many passages as needed from the read-only model.

/// N-gram tables, trained model and passage generation.
pub mod model;

/// Tokenizer, sentence splitting and prose formatting.
pub mod text;

/// Generation parameters and their parsing.
pub mod config;

/// Error types shared by the whole crate.
pub mod error;

/// Input helpers (files, standard input).
pub mod io;

pub use config::{ConfigError, GenerationConfig, SAFETY_CAP};
pub use error::{Error, Result, UnseenContext};
pub use model::{Generator, MarkovModel, Passage, Token};
pub use text::Corpus;
