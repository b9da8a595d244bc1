use std::path::PathBuf;

use paramdoc::param::{IndexPath, ParamError, Parameter};

use crate::cmd::util::{open_with_codes, parse_options};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	/// Parameter code holding the array.
	#[arg(short = 'p', long = "param")]
	pub param: String,
	/// Index path to a nested array inside the parameter.
	#[arg(long)]
	pub path: Option<String>,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
}

/// Render a two-dimensional array parameter as an aligned table.
pub fn run(args: Args) -> paramdoc::param::Result<()> {
	let doc = open_with_codes(&args.file, std::slice::from_ref(&args.param))?;
	let value = doc.require(&args.param)?.parse(&parse_options(args.max_depth))?;

	let target = match &args.path {
		Some(expr) => {
			let path = IndexPath::parse(expr)?;
			value.get_path(&path).ok_or_else(|| ParamError::PathNotFound {
				code: args.param.clone(),
				path: path.to_string(),
			})?
		}
		None => &value,
	};

	let rows = table_rows(target).ok_or_else(|| ParamError::NotTabular { code: args.param.clone() })?;
	println!("{}", format_table(&rows));
	Ok(())
}

/// Rows of rendered leaves for an array of leaf arrays.
pub(crate) fn table_rows(value: &Parameter) -> Option<Vec<Vec<String>>> {
	let Parameter::Matrix(outer) = value else {
		return None;
	};
	if !outer.is_nested() {
		return None;
	}

	outer
		.items()
		.iter()
		.map(|row| match row {
			Parameter::Matrix(inner) if !inner.is_nested() => Some(inner.items().iter().map(ToString::to_string).collect()),
			_ => None,
		})
		.collect()
}

/// Join rows into text, padding each column to two more than its widest cell.
///
/// Only as many columns as the shortest row has are padded; extra cells are appended as-is.
pub(crate) fn format_table(rows: &[Vec<String>]) -> String {
	let columns = rows.iter().map(Vec::len).min().unwrap_or(0);
	let widths: Vec<usize> = (0..columns)
		.map(|col| 2 + rows.iter().map(|row| row[col].chars().count()).max().unwrap_or(0))
		.collect();

	let mut out = Vec::with_capacity(rows.len());
	for row in rows {
		let mut line = String::new();
		for (col, cell) in row.iter().enumerate() {
			match widths.get(col) {
				Some(&width) => line.push_str(&format!("{cell:<width$}")),
				None => line.push_str(cell),
			}
		}
		out.push(line);
	}
	out.join("\n")
}

#[cfg(test)]
mod tests;
