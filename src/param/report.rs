use std::fmt;

use serde::Serialize;

use crate::param::{IndexPath, Parameter, Result};

/// Display filtering for reported parameter values.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowOptions {
	/// Report values without data (zero, empty, false) as well.
	pub include_empty: bool,
}

/// One reported value: a whole leaf parameter, or one leaf inside a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
	/// Parameter code.
	pub parameter: String,
	/// Leaf location for container parameters.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub path: Option<IndexPath>,
	/// Rendered leaf payload.
	pub value: String,
}

impl fmt::Display for ReportLine {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.path {
			Some(path) => write!(f, "{}: [{}] = {}", self.parameter, path, self.value),
			None => write!(f, "{}: {}", self.parameter, self.value),
		}
	}
}

/// Collect report lines for one parameter.
///
/// Nothing is reported for a parameter without data unless `include_empty` is set;
/// container leaves are filtered the same way. Data checks always run, so a malformed
/// scalar fails here even when every value is requested.
pub fn report_parameter(code: &str, parameter: &Parameter, options: ShowOptions) -> Result<Vec<ReportLine>> {
	let has_data = parameter.has_data()?;
	if !has_data && !options.include_empty {
		return Ok(Vec::new());
	}

	let Some(container) = parameter.as_container() else {
		return Ok(vec![ReportLine {
			parameter: code.to_owned(),
			path: None,
			value: parameter.to_string(),
		}]);
	};

	let mut lines = Vec::new();
	for (path, leaf) in container.leaves() {
		let has_data = leaf.has_data()?;
		if has_data || options.include_empty {
			lines.push(ReportLine {
				parameter: code.to_owned(),
				path: Some(path),
				value: leaf.to_string(),
			});
		}
	}
	Ok(lines)
}
