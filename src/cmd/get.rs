use std::path::PathBuf;

use paramdoc::param::{IndexPath, ParamError, Parameter, ReportLine};

use crate::cmd::util::{open_with_codes, parse_options, print_json};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(short = 'p', long = "param")]
	pub param: String,
	/// Comma-separated index path, e.g. `gains,2`.
	#[arg(long)]
	pub path: Option<String>,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
}

/// Print every leaf of one parameter, or of the value found at `--path`.
pub fn run(args: Args) -> paramdoc::param::Result<()> {
	let doc = open_with_codes(&args.file, std::slice::from_ref(&args.param))?;
	let value = doc.require(&args.param)?.parse(&parse_options(args.max_depth))?;
	let prefix = match &args.path {
		Some(expr) => IndexPath::parse(expr)?,
		None => IndexPath::default(),
	};

	let lines = lookup_lines(&args.param, &value, &prefix)?;
	if args.json {
		print_json(&lines);
	} else {
		for line in &lines {
			println!("{line}");
		}
	}
	Ok(())
}

/// Report lines for the value at `prefix`, including leaves without data.
pub(crate) fn lookup_lines(code: &str, value: &Parameter, prefix: &IndexPath) -> paramdoc::param::Result<Vec<ReportLine>> {
	let target = value.get_path(prefix).ok_or_else(|| ParamError::PathNotFound {
		code: code.to_owned(),
		path: prefix.to_string(),
	})?;

	let Some(container) = target.as_container() else {
		return Ok(vec![ReportLine {
			parameter: code.to_owned(),
			path: (!prefix.is_empty()).then(|| prefix.clone()),
			value: target.to_string(),
		}]);
	};

	Ok(container
		.leaves()
		.map(|(path, leaf)| {
			let mut full = prefix.clone();
			full.0.extend(path.0);
			ReportLine {
				parameter: code.to_owned(),
				path: Some(full),
				value: leaf.to_string(),
			}
		})
		.collect())
}
