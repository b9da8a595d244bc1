use std::fmt;

use tracing::warn;

use crate::param::{IndexPath, Leaves, ParamError, PathStep, Result};

/// Typed parameter value built from one value subtree.
#[derive(Debug, Clone, PartialEq)]
pub enum Parameter {
	/// `String`, `Identifier`, or `Value` text.
	Primitive(PrimitiveParam),
	/// Numeric text, validated when queried.
	Scalar(ScalarParam),
	/// Boolean text, `true` in any letter case.
	Boolean(BooleanParam),
	/// Selected enumeration value plus its display label.
	Enum(EnumParam),
	/// Ordered array of same-shaped children.
	Matrix(MatrixParam),
	/// Ordered named fields.
	Struct(StructParam),
}

/// Source tag of a primitive value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
	/// `<String>`.
	String,
	/// `<Identifier>`.
	Identifier,
	/// `<Value>`.
	Value,
}

impl PrimitiveKind {
	/// Source tag name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::String => "String",
			Self::Identifier => "Identifier",
			Self::Value => "Value",
		}
	}
}

/// Raw text leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveParam {
	/// Source tag.
	pub kind: PrimitiveKind,
	/// Raw payload, possibly empty.
	pub text: Box<str>,
}

/// Numeric leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarParam {
	/// Raw payload, not validated at parse time.
	pub text: Box<str>,
}

impl ScalarParam {
	/// Numeric value of the payload.
	pub fn value(&self) -> Result<f64> {
		self.text.trim().parse::<f64>().map_err(|_| ParamError::Format { text: self.text.to_string() })
	}
}

/// Boolean leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanParam {
	/// Raw payload.
	pub text: Box<str>,
}

impl BooleanParam {
	/// `true` when the payload equals `true` ignoring case.
	pub fn value(&self) -> bool {
		self.text.eq_ignore_ascii_case("true")
	}
}

/// Enumeration leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumParam {
	/// Selected value.
	pub value: Box<Parameter>,
	/// Display label.
	pub label: Box<str>,
}

/// Array container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatrixParam {
	items: Vec<Parameter>,
	nested: bool,
}

impl MatrixParam {
	/// Build an array, enforcing that children are all containers or all leaves.
	pub fn new(items: Vec<Parameter>) -> Result<Self> {
		let mut matrix = Self::default();
		for item in items {
			matrix.push(item)?;
		}
		Ok(matrix)
	}

	/// Append one child, enforcing the rectangular shape.
	pub fn push(&mut self, item: Parameter) -> Result<()> {
		let index = self.items.len();
		if index > 0 && item.is_container() != self.nested {
			return Err(ParamError::NonRectangular { index });
		}
		self.nested = item.is_container();
		self.items.push(item);
		Ok(())
	}

	/// Children in document order.
	pub fn items(&self) -> &[Parameter] {
		&self.items
	}

	/// Whether the children are themselves containers.
	pub fn is_nested(&self) -> bool {
		self.nested
	}

	/// Number of direct children.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Whether the array has no children.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Lazy depth-first enumeration of leaves with their paths.
	pub fn leaves(&self) -> Leaves<'_> {
		Leaves::new(ContainerRef::Matrix(self))
	}
}

/// Struct container with insertion-ordered fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructParam {
	fields: Vec<(Box<str>, Parameter)>,
}

impl StructParam {
	/// Insert a field. A repeated name replaces the earlier value in place.
	pub fn insert(&mut self, name: &str, value: Parameter) -> Option<Parameter> {
		if let Some((_, slot)) = self.fields.iter_mut().find(|(key, _)| key.as_ref() == name) {
			warn!(field = name, "duplicate struct field overwrites earlier value");
			return Some(std::mem::replace(slot, value));
		}
		self.fields.push((name.into(), value));
		None
	}

	/// Field value by name.
	pub fn get(&self, name: &str) -> Option<&Parameter> {
		self.fields.iter().find(|(key, _)| key.as_ref() == name).map(|(_, value)| value)
	}

	/// Fields in insertion order.
	pub fn fields(&self) -> &[(Box<str>, Parameter)] {
		&self.fields
	}

	/// Number of fields.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Whether the struct has no fields.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Lazy depth-first enumeration of leaves with their paths.
	pub fn leaves(&self) -> Leaves<'_> {
		Leaves::new(ContainerRef::Struct(self))
	}
}

/// Borrowed view of a container parameter.
#[derive(Debug, Clone, Copy)]
pub enum ContainerRef<'a> {
	/// Array container.
	Matrix(&'a MatrixParam),
	/// Struct container.
	Struct(&'a StructParam),
}

impl<'a> ContainerRef<'a> {
	/// Lazy depth-first enumeration of leaves with their paths.
	pub fn leaves(self) -> Leaves<'a> {
		Leaves::new(self)
	}

	/// Number of direct children.
	pub fn len(self) -> usize {
		match self {
			Self::Matrix(item) => item.len(),
			Self::Struct(item) => item.len(),
		}
	}

	/// Whether the container has no children.
	pub fn is_empty(self) -> bool {
		self.len() == 0
	}
}

impl Parameter {
	/// Build a primitive leaf.
	pub fn primitive(kind: PrimitiveKind, text: &str) -> Self {
		Self::Primitive(PrimitiveParam { kind, text: text.into() })
	}

	/// Build a scalar leaf.
	pub fn scalar(text: &str) -> Self {
		Self::Scalar(ScalarParam { text: text.into() })
	}

	/// Build a boolean leaf.
	pub fn boolean(text: &str) -> Self {
		Self::Boolean(BooleanParam { text: text.into() })
	}

	/// Source tag name of this variant.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Primitive(item) => item.kind.as_str(),
			Self::Scalar(_) => "Scalar",
			Self::Boolean(_) => "Boolean",
			Self::Enum(_) => "Enum",
			Self::Matrix(_) => "Array",
			Self::Struct(_) => "Struct",
		}
	}

	/// Whether this is an array or struct.
	pub fn is_container(&self) -> bool {
		matches!(self, Self::Matrix(_) | Self::Struct(_))
	}

	/// Container view, `None` for leaves.
	pub fn as_container(&self) -> Option<ContainerRef<'_>> {
		match self {
			Self::Matrix(item) => Some(ContainerRef::Matrix(item)),
			Self::Struct(item) => Some(ContainerRef::Struct(item)),
			_ => None,
		}
	}

	/// Leaf payload text; the label for enums, `None` for containers.
	pub fn text(&self) -> Option<&str> {
		match self {
			Self::Primitive(item) => Some(&*item.text),
			Self::Scalar(item) => Some(&*item.text),
			Self::Boolean(item) => Some(&*item.text),
			Self::Enum(item) => Some(&*item.label),
			Self::Matrix(_) | Self::Struct(_) => None,
		}
	}

	/// Whether this value carries meaningful (non-zero, non-empty, true) data.
	///
	/// Fails with [`ParamError::Format`] when a reachable scalar is not numeric.
	pub fn has_data(&self) -> Result<bool> {
		match self {
			Self::Primitive(item) => Ok(!item.text.is_empty()),
			Self::Scalar(item) => Ok(item.value()? != 0.0),
			Self::Boolean(item) => Ok(item.value()),
			Self::Enum(item) => item.value.has_data(),
			Self::Matrix(item) => any_has_data(item.items.iter()),
			Self::Struct(item) => any_has_data(item.fields.iter().map(|(_, value)| value)),
		}
	}

	/// Total number of leaves; a leaf counts itself.
	pub fn leaf_count(&self) -> usize {
		match self.as_container() {
			Some(container) => container.leaves().count(),
			None => 1,
		}
	}

	/// Resolve a nested value by path. An index step on a struct matches the key of the same spelling.
	pub fn get_path(&self, path: &IndexPath) -> Option<&Parameter> {
		let mut current = self;
		for step in path.steps() {
			current = match (current, step) {
				(Self::Matrix(item), PathStep::Index(index)) => item.items.get(*index)?,
				(Self::Struct(item), PathStep::Key(key)) => item.get(key)?,
				(Self::Struct(item), PathStep::Index(index)) => item.get(&index.to_string())?,
				_ => return None,
			};
		}
		Some(current)
	}
}

fn any_has_data<'a>(items: impl Iterator<Item = &'a Parameter>) -> Result<bool> {
	for item in items {
		if item.has_data()? {
			return Ok(true);
		}
	}
	Ok(false)
}

impl fmt::Display for Parameter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Matrix(item) => write!(f, "Array[{}]", item.len()),
			Self::Struct(item) => write!(f, "Struct{{{}}}", item.len()),
			leaf => f.write_str(leaf.text().unwrap_or_default()),
		}
	}
}
