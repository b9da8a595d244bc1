use std::fmt;

use serde::Serialize;

use crate::param::{ParamError, Result};

/// One segment of an index path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum PathStep {
	/// Zero-based position inside an array.
	Index(usize),
	/// Field name inside a struct.
	Key(Box<str>),
}

impl fmt::Display for PathStep {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Index(index) => write!(f, "{index}"),
			Self::Key(key) => f.write_str(key),
		}
	}
}

impl From<usize> for PathStep {
	fn from(value: usize) -> Self {
		Self::Index(value)
	}
}

impl From<&str> for PathStep {
	fn from(value: &str) -> Self {
		Self::Key(value.into())
	}
}

/// Location of a leaf inside nested containers, outermost level first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IndexPath(pub Vec<PathStep>);

impl IndexPath {
	/// Parse comma-separated segments; all-digit segments become indices.
	pub fn parse(input: &str) -> Result<Self> {
		let invalid = || ParamError::InvalidPath { path: input.to_owned() };
		if input.trim().is_empty() {
			return Err(invalid());
		}

		let mut steps = Vec::new();
		for segment in input.split(',') {
			let segment = segment.trim();
			if segment.is_empty() {
				return Err(invalid());
			}
			if segment.bytes().all(|byte| byte.is_ascii_digit()) {
				let index = segment.parse::<usize>().map_err(|_| invalid())?;
				steps.push(PathStep::Index(index));
			} else {
				steps.push(PathStep::Key(segment.into()));
			}
		}

		Ok(Self(steps))
	}

	/// Ordered path segments.
	pub fn steps(&self) -> &[PathStep] {
		&self.0
	}

	/// Number of segments.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Whether the path has no segments.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Display for IndexPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (pos, step) in self.0.iter().enumerate() {
			if pos > 0 {
				f.write_str(",")?;
			}
			write!(f, "{step}")?;
		}
		Ok(())
	}
}

impl<S: Into<PathStep>> FromIterator<S> for IndexPath {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self(iter.into_iter().map(Into::into).collect())
	}
}

#[cfg(test)]
mod tests;
