use std::path::PathBuf;

use paramdoc::param::{ParamDocument, ParamError};
use serde::Serialize;

use crate::cmd::table::format_table;
use crate::cmd::util::{parse_options, print_json};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ListRow {
	pub code: String,
	pub kind: &'static str,
	pub leaves: usize,
	/// `None` when a scalar inside the value is not numeric.
	pub has_data: Option<bool>,
}

/// List every parameter code with its kind, leaf count, and data flag.
pub fn run(args: Args) -> paramdoc::param::Result<()> {
	let doc = ParamDocument::open(&args.file)?;
	let rows = list_rows(&doc, args.max_depth)?;

	if args.json {
		print_json(&rows);
		return Ok(());
	}

	println!("path: {}", args.file.display());
	println!("parameters: {}", rows.len());
	if rows.is_empty() {
		return Ok(());
	}

	let mut table = vec![vec!["code".to_owned(), "kind".to_owned(), "leaves".to_owned(), "data".to_owned()]];
	for row in &rows {
		let data = match row.has_data {
			Some(true) => "yes",
			Some(false) => "no",
			None => "invalid",
		};
		table.push(vec![row.code.clone(), row.kind.to_owned(), row.leaves.to_string(), data.to_owned()]);
	}
	println!("{}", format_table(&table));

	Ok(())
}

pub(crate) fn list_rows(doc: &ParamDocument, max_depth: Option<u32>) -> paramdoc::param::Result<Vec<ListRow>> {
	let options = parse_options(max_depth);
	let mut rows = Vec::with_capacity(doc.len());
	for entry in doc.entries() {
		let value = entry.parse(&options)?;
		let has_data = match value.has_data() {
			Ok(flag) => Some(flag),
			Err(ParamError::Format { .. }) => None,
			Err(err) => return Err(err),
		};
		rows.push(ListRow {
			code: entry.code.to_string(),
			kind: value.kind(),
			leaves: value.leaf_count(),
			has_data,
		});
	}
	Ok(rows)
}
