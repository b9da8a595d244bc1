use std::fs;
use std::path::Path;

use paramdoc::param::{ParamDocument, ParseOptions, Result};

/// Read a parameter-code list file: one code per line, blank lines skipped.
pub(crate) fn load_param_codes(path: &Path) -> Result<Vec<String>> {
	let text = fs::read_to_string(path)?;
	Ok(parse_param_codes(&text))
}

pub(crate) fn parse_param_codes(text: &str) -> Vec<String> {
	text.lines().map(str::trim).filter(|line| !line.is_empty()).map(str::to_owned).collect()
}

/// Parse options with an optional depth override.
pub(crate) fn parse_options(max_depth: Option<u32>) -> ParseOptions {
	let mut options = ParseOptions::default();
	if let Some(value) = max_depth {
		options.max_depth = value;
	}
	options
}

/// Open a document and fail early when any requested code is absent.
pub(crate) fn open_with_codes(path: &Path, codes: &[String]) -> Result<ParamDocument> {
	let doc = ParamDocument::open(path)?;
	for code in codes {
		doc.require(code)?;
	}
	Ok(doc)
}

/// Pretty-print a serializable value as JSON on stdout.
pub(crate) fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
	match serde_json::to_string_pretty(value) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: json encode failed: {err}"),
	}
}

#[cfg(test)]
mod tests;
