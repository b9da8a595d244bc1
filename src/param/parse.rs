use crate::param::{BooleanParam, EnumParam, MatrixParam, Node, ParamError, Parameter, PrimitiveKind, PrimitiveParam, Result, ScalarParam, StructParam};

const ELEMENT_TAG: &str = "Element";

/// Limits applied while building a parameter tree.
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
	/// Maximum nesting of value nodes below the root.
	pub max_depth: u32,
}

impl Default for ParseOptions {
	fn default() -> Self {
		Self { max_depth: 256 }
	}
}

/// Parse a value node with default options.
pub fn parse_parameter(node: &Node) -> Result<Parameter> {
	parse_parameter_with(node, &ParseOptions::default())
}

/// Parse a value node into a typed [`Parameter`], dispatching on its tag.
pub fn parse_parameter_with(node: &Node, options: &ParseOptions) -> Result<Parameter> {
	parse_node(node, 0, options)
}

fn parse_node(node: &Node, depth: u32, options: &ParseOptions) -> Result<Parameter> {
	if depth > options.max_depth {
		return Err(ParamError::DepthExceeded {
			max_depth: options.max_depth,
		});
	}

	let Some(tag) = node.tag() else {
		return Err(ParamError::UnknownTag { tag: node.label().to_owned() });
	};

	match tag {
		"Scalar" => Ok(Parameter::Scalar(ScalarParam { text: leaf_text(node)?.into() })),
		"Boolean" => Ok(Parameter::Boolean(BooleanParam { text: leaf_text(node)?.into() })),
		"String" => parse_primitive(node, PrimitiveKind::String),
		"Identifier" => parse_primitive(node, PrimitiveKind::Identifier),
		"Value" => parse_primitive(node, PrimitiveKind::Value),
		"Enum" => parse_enum(node, depth, options),
		"Array" => parse_matrix(node, depth, options),
		"Struct" => parse_struct(node, depth, options),
		other => Err(ParamError::UnknownTag { tag: other.to_owned() }),
	}
}

fn parse_primitive(node: &Node, kind: PrimitiveKind) -> Result<Parameter> {
	Ok(Parameter::Primitive(PrimitiveParam {
		kind,
		text: leaf_text(node)?.into(),
	}))
}

/// Text of the first child, empty when the node has no children.
fn leaf_text(node: &Node) -> Result<&str> {
	match node.first_child() {
		None => Ok(""),
		Some(Node::Text(text)) => Ok(&**text),
		Some(child) => Err(ParamError::ExpectedText {
			tag: node.label().to_owned(),
			child: child.label().to_owned(),
		}),
	}
}

fn parse_enum(node: &Node, depth: u32, options: &ParseOptions) -> Result<Parameter> {
	let [value_node, label_node, ..] = node.children() else {
		return Err(ParamError::EnumArity { got: node.children().len() });
	};

	let value = parse_node(value_node, depth + 1, options)?;
	let label = match label_node.first_child() {
		Some(Node::Text(text)) => &**text,
		Some(inner) => leaf_text(inner)?,
		None => {
			return Err(ParamError::MissingName {
				container: "Enum",
				what: "label",
			});
		}
	};

	Ok(Parameter::Enum(EnumParam {
		value: Box::new(value),
		label: label.into(),
	}))
}

fn parse_matrix(node: &Node, depth: u32, options: &ParseOptions) -> Result<Parameter> {
	let mut matrix = MatrixParam::default();
	for element in node.children() {
		let children = element_children(element, "Array", 1)?;
		matrix.push(parse_node(&children[0], depth + 1, options)?)?;
	}
	Ok(Parameter::Matrix(matrix))
}

fn parse_struct(node: &Node, depth: u32, options: &ParseOptions) -> Result<Parameter> {
	let mut fields = StructParam::default();
	for element in node.children() {
		let children = element_children(element, "Struct", 2)?;
		let value = parse_node(&children[0], depth + 1, options)?;
		let name = field_name(&children[1], depth, options)?;
		fields.insert(&name, value);
	}
	Ok(Parameter::Struct(fields))
}

fn field_name(name_node: &Node, depth: u32, options: &ParseOptions) -> Result<String> {
	let inner = name_node.first_child().ok_or(ParamError::MissingName {
		container: "Struct",
		what: "field name",
	})?;
	let name = parse_node(inner, depth + 2, options)?;
	if name.is_container() {
		return Err(ParamError::NonLeafFieldName { kind: name.kind() });
	}
	Ok(name.to_string())
}

/// Validate an `Element` wrapper and return its sub-nodes.
fn element_children<'a>(element: &'a Node, container: &'static str, expected: usize) -> Result<&'a [Node]> {
	if element.tag() != Some(ELEMENT_TAG) {
		return Err(ParamError::ElementExpected {
			container,
			tag: element.label().to_owned(),
		});
	}

	let children = element.children();
	if children.len() != expected {
		return Err(ParamError::ElementArity {
			container,
			expected,
			got: children.len(),
		});
	}
	Ok(children)
}
