use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Reads a whole text file into memory.
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Reads every given file and concatenates their contents.
///
/// - Files are joined with a single space so the last word of one file
///   never fuses with the first word of the next
/// - Order of `paths` is preserved
pub fn read_sources<P: AsRef<Path>>(paths: &[P]) -> io::Result<String> {
	let mut text = String::new();
	for path in paths {
		let contents = read_file(path)?;
		log::debug!("read {} bytes from {}", contents.len(), path.as_ref().display());
		if !text.is_empty() {
			text.push(' ');
		}
		text.push_str(&contents);
	}
	Ok(text)
}

/// Reads all of standard input.
pub fn read_stdin() -> io::Result<String> {
	let mut text = String::new();
	io::stdin().lock().read_to_string(&mut text)?;
	Ok(text)
}
