use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::param::{Node, ParamError, ParseOptions, Parameter, Result, parse_parameter_with};

const PARAMETER_TAG: &str = "Parameter";
const CODE_ATTRIBUTE: &str = "parameterCode";
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// One `Parameter` element with its unparsed value node.
#[derive(Debug, Clone)]
pub struct ParameterEntry {
	/// `parameterCode` attribute.
	pub code: Box<str>,
	/// Value node found two levels below the `Parameter` element.
	pub value: Node,
}

impl ParameterEntry {
	/// Parse the value node, tagging failures with this entry's code.
	pub fn parse(&self, options: &ParseOptions) -> Result<Parameter> {
		debug!(code = %self.code, tag = self.value.label(), "parsing parameter");
		parse_parameter_with(&self.value, options).map_err(|source| ParamError::InParameter {
			code: self.code.to_string(),
			source: Box::new(source),
		})
	}
}

/// Parameter document indexed by parameter code.
pub struct ParamDocument {
	entries: Vec<ParameterEntry>,
	by_code: HashMap<Box<str>, usize>,
}

impl ParamDocument {
	/// Read and index an XML parameter document.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let raw = fs::read(path)?;
		debug!(path = %path.display(), bytes = raw.len(), "read parameter document");
		Self::from_bytes(raw)
	}

	/// Index a document from raw file bytes; a leading byte-order mark is ignored.
	pub fn from_bytes(mut raw: Vec<u8>) -> Result<Self> {
		if raw.starts_with(UTF8_BOM) {
			raw.drain(..UTF8_BOM.len());
		}
		Self::from_xml_str(&String::from_utf8(raw)?)
	}

	/// Index a document from XML text.
	///
	/// A repeated code replaces the earlier entry in its original position.
	pub fn from_xml_str(text: &str) -> Result<Self> {
		let xml = roxmltree::Document::parse(text)?;
		let mut document = Self {
			entries: Vec::new(),
			by_code: HashMap::new(),
		};

		for element in xml.descendants().filter(|node| node.has_tag_name(PARAMETER_TAG)) {
			let code = element.attribute(CODE_ATTRIBUTE).ok_or(ParamError::MissingParameterCode)?;
			let value = value_node(Node::from_xml(element)).ok_or_else(|| ParamError::MissingValueNode { code: code.to_owned() })?;
			document.insert(ParameterEntry { code: code.into(), value });
		}

		debug!(parameters = document.entries.len(), "indexed parameter document");
		Ok(document)
	}

	fn insert(&mut self, entry: ParameterEntry) {
		if let Some(&slot) = self.by_code.get(&entry.code) {
			warn!(code = %entry.code, "duplicate parameter code overwrites earlier entry");
			self.entries[slot] = entry;
			return;
		}
		self.by_code.insert(entry.code.clone(), self.entries.len());
		self.entries.push(entry);
	}

	/// Entries in document order.
	pub fn entries(&self) -> &[ParameterEntry] {
		&self.entries
	}

	/// Parameter codes in document order.
	pub fn codes(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|entry| entry.code.as_ref())
	}

	/// Entry by parameter code.
	pub fn get(&self, code: &str) -> Option<&ParameterEntry> {
		self.by_code.get(code).map(|&slot| &self.entries[slot])
	}

	/// Entry by parameter code, failing when absent.
	pub fn require(&self, code: &str) -> Result<&ParameterEntry> {
		self.get(code).ok_or_else(|| ParamError::ParameterNotFound { code: code.to_owned() })
	}

	/// Number of distinct parameter codes.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the document holds no parameters.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Parse every entry in document order, stopping at the first failure.
	pub fn parse_all(&self, options: &ParseOptions) -> Result<Vec<(Box<str>, Parameter)>> {
		self.entries.iter().map(|entry| Ok((entry.code.clone(), entry.parse(options)?))).collect()
	}
}

/// Descend `first_child().first_child()` from a `Parameter` element.
fn value_node(parameter: Node) -> Option<Node> {
	let Node::Element(outer) = parameter else {
		return None;
	};
	let Node::Element(wrapper) = outer.children.into_iter().next()? else {
		return None;
	};
	wrapper.children.into_iter().next()
}

#[cfg(test)]
mod tests;
