use std::collections::HashMap;
use std::path::PathBuf;

use paramdoc::param::{ParamError, Parameter, ReportLine, ShowOptions, report_parameter};

use crate::cmd::util::{load_param_codes, open_with_codes, parse_options, print_json};

#[derive(clap::Args)]
pub struct Args {
	/// Parameter document (XML).
	pub file: PathBuf,
	/// File listing parameter codes to display, one per line.
	pub param_file: Option<PathBuf>,
	/// Parameter code to display; may be repeated.
	#[arg(short = 'p', long = "param")]
	pub params: Vec<String>,
	/// Display all parameter values, including 0.
	#[arg(short = 'z', long = "all", visible_alias = "nonzero")]
	pub all: bool,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
}

/// Print `CODE: value` / `CODE: [path] = value` lines for selected parameters.
pub fn run(args: Args) -> paramdoc::param::Result<()> {
	let Args {
		file,
		param_file,
		params,
		all,
		json,
		max_depth,
	} = args;

	// A code file switches filtering on even when it lists nothing.
	let filtered = param_file.is_some() || !params.is_empty();
	let mut codes = match &param_file {
		Some(path) => load_param_codes(path)?,
		None => Vec::new(),
	};
	codes.extend(params);

	let doc = open_with_codes(&file, &codes)?;
	let parsed = doc.parse_all(&parse_options(max_depth))?;
	let selection = filtered.then_some(codes.as_slice());
	let lines = collect_lines(&parsed, selection, ShowOptions { include_empty: all })?;

	if json {
		print_json(&lines);
	} else {
		for line in &lines {
			println!("{line}");
		}
	}

	Ok(())
}

/// Build report lines for `codes` in list order, or for every parameter when no filter is given.
pub(crate) fn collect_lines(parsed: &[(Box<str>, Parameter)], codes: Option<&[String]>, options: ShowOptions) -> paramdoc::param::Result<Vec<ReportLine>> {
	let selected: Vec<(&str, &Parameter)> = match codes {
		None => parsed.iter().map(|(code, value)| (code.as_ref(), value)).collect(),
		Some(codes) => {
			let by_code: HashMap<&str, &Parameter> = parsed.iter().map(|(code, value)| (code.as_ref(), value)).collect();
			codes
				.iter()
				.map(|code| {
					by_code
						.get(code.as_str())
						.map(|value| (code.as_str(), *value))
						.ok_or_else(|| ParamError::ParameterNotFound { code: code.clone() })
				})
				.collect::<paramdoc::param::Result<_>>()?
		}
	};

	let mut lines = Vec::new();
	for (code, value) in selected {
		let rows = report_parameter(code, value, options).map_err(|source| ParamError::InParameter {
			code: code.to_owned(),
			source: Box::new(source),
		})?;
		lines.extend(rows);
	}
	Ok(lines)
}
