use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ParamError>;

/// Errors produced while loading, parsing, and inspecting parameter documents.
#[derive(Debug, Error)]
pub enum ParamError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Document bytes were not valid UTF-8.
	#[error("document is not valid utf-8: {0}")]
	Utf8(#[from] std::string::FromUtf8Error),
	/// Document could not be parsed as XML.
	#[error("could not parse xml file: {0}")]
	Xml(#[from] roxmltree::Error),
	/// A `Parameter` element did not carry a `parameterCode` attribute.
	#[error("Parameter element without parameterCode attribute")]
	MissingParameterCode,
	/// A `Parameter` element did not hold a value node two levels down.
	#[error("parameter {code} has no value node")]
	MissingValueNode {
		/// Offending parameter code.
		code: String,
	},
	/// Requested parameter code does not exist in the document.
	#[error("Parameter {code} not found")]
	ParameterNotFound {
		/// Requested parameter code.
		code: String,
	},
	/// Parsing one parameter's value tree failed.
	#[error("Error parsing parameter {code}: {source}")]
	InParameter {
		/// Parameter code whose value failed to parse.
		code: String,
		/// Underlying parse failure.
		#[source]
		source: Box<ParamError>,
	},
	/// Node tag is not one of the recognized value tags.
	#[error("Cannot parse a node with name: {tag}")]
	UnknownTag {
		/// Offending tag name (`#text` for bare text nodes).
		tag: String,
	},
	/// Container child was not wrapped in an `Element` node.
	#[error("Childnodes of {container} expected to be of type Element, got {tag}")]
	ElementExpected {
		/// Container kind being parsed.
		container: &'static str,
		/// Actual child tag.
		tag: String,
	},
	/// `Element` wrapper had the wrong number of sub-nodes.
	#[error("Element in {container} must have exactly {expected} child(ren), got {got}")]
	ElementArity {
		/// Container kind being parsed.
		container: &'static str,
		/// Required sub-node count.
		expected: usize,
		/// Actual sub-node count.
		got: usize,
	},
	/// Array mixed container and leaf children.
	#[error("Trying to create a non-rectangular array (element {index})")]
	NonRectangular {
		/// Zero-based index of the first offending element.
		index: usize,
	},
	/// Enum node did not carry both a value and a label child.
	#[error("Enum must have a value and a label, got {got} child(ren)")]
	EnumArity {
		/// Actual child count.
		got: usize,
	},
	/// Label or field-name wrapper had no content.
	#[error("{container} {what} is missing")]
	MissingName {
		/// Container kind being parsed.
		container: &'static str,
		/// Missing item description.
		what: &'static str,
	},
	/// Struct field name resolved to a container instead of a leaf.
	#[error("Struct field name must be a leaf value, got {kind}")]
	NonLeafFieldName {
		/// Kind of the parsed name node.
		kind: &'static str,
	},
	/// Leaf wrapper held an element where text was expected.
	#[error("<{tag}> expected text content, got <{child}>")]
	ExpectedText {
		/// Leaf tag.
		tag: String,
		/// Unexpected child tag.
		child: String,
	},
	/// Value tree nesting exceeded configured limit.
	#[error("parse depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Scalar payload could not be read as a number.
	#[error("could not convert scalar to number: {text:?}")]
	Format {
		/// Raw scalar text.
		text: String,
	},
	/// Index path expression syntax is invalid.
	#[error("invalid index path: {path}")]
	InvalidPath {
		/// Original user-provided path string.
		path: String,
	},
	/// Index path did not resolve inside the parameter.
	#[error("path [{path}] not found in parameter {code}")]
	PathNotFound {
		/// Parameter code.
		code: String,
		/// Rendered index path.
		path: String,
	},
	/// Parameter cannot be rendered as a two-dimensional table.
	#[error("parameter {code} is not a two-dimensional array")]
	NotTabular {
		/// Parameter code.
		code: String,
	},
}

impl ParamError {
	/// Whether this error reports a malformed wrapper or container shape.
	pub fn is_structural(&self) -> bool {
		match self {
			Self::ElementExpected { .. }
			| Self::ElementArity { .. }
			| Self::NonRectangular { .. }
			| Self::EnumArity { .. }
			| Self::MissingName { .. }
			| Self::NonLeafFieldName { .. }
			| Self::ExpectedText { .. } => true,
			Self::InParameter { source, .. } => source.is_structural(),
			_ => false,
		}
	}
}
