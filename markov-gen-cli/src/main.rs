use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::warn;

use markov_gen_core::config::{
	DEFAULT_MAX_RESTARTS, DEFAULT_PASSAGE_COUNT, DEFAULT_SENTENCES_PER_PASSAGE, GenerationConfig, parse_count, parse_seed,
};
use markov_gen_core::io::{read_sources, read_stdin};
use markov_gen_core::{Corpus, Generator, MarkovModel};

/// Generate text passages from a word-level Markov chain trained on the input.
#[derive(Parser, Debug)]
#[command(name = "markov-gen", author, version, about, long_about = None)]
struct Cli {
	/// Number of passages to generate
	#[arg(value_name = "PASSAGES", env = "MARKOV_GEN_PASSAGES", value_parser = parse_count,
		default_value_t = DEFAULT_PASSAGE_COUNT)]
	passages: usize,

	/// Sentence ends after which a passage is complete
	#[arg(value_name = "SENTENCES", env = "MARKOV_GEN_SENTENCES", value_parser = parse_count,
		default_value_t = DEFAULT_SENTENCES_PER_PASSAGE)]
	sentences: usize,

	/// Training text file (repeat flag); reads standard input when omitted
	#[arg(short, long = "input", value_name = "FILE")]
	inputs: Vec<PathBuf>,

	/// Seed for reproducible output
	#[arg(long, env = "MARKOV_GEN_SEED", value_parser = parse_seed)]
	seed: Option<u64>,

	/// Fresh-starter retries after an unseen context
	#[arg(long, value_name = "COUNT", value_parser = parse_count, default_value_t = DEFAULT_MAX_RESTARTS)]
	max_restarts: usize,
}

impl Cli {
	fn generation_config(&self) -> GenerationConfig {
		GenerationConfig {
			passage_count: self.passages,
			sentences_per_passage: self.sentences,
			seed: self.seed,
			max_restarts: self.max_restarts,
		}
	}
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

	let cli = Cli::parse();
	let config = cli.generation_config();
	config.validate()?;

	// Concatenate every input, then train once
	let text = if cli.inputs.is_empty() { read_stdin()? } else { read_sources(&cli.inputs)? };
	let corpus = Corpus::parse(&text)?;
	let model = MarkovModel::train(&corpus);

	let mut generator = Generator::from_config(&model, &config);
	let mut out = std::io::stdout().lock();
	for (i, passage) in generator.passages(config.passage_count).enumerate() {
		match passage {
			Ok(passage) => writeln!(out, "{passage}\n")?,
			Err(e) => warn!("passage {} skipped: {e}", i + 1),
		}
	}

	Ok(())
}
