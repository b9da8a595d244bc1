/// Normalized document node consumed by the parameter parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	/// Tagged element with attributes and ordered children.
	Element(ElementNode),
	/// Trimmed, non-empty text content.
	Text(Box<str>),
}

/// Element payload of [`Node::Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
	/// Element tag name.
	pub tag: Box<str>,
	/// Attributes in document order.
	pub attributes: Vec<(Box<str>, Box<str>)>,
	/// Child nodes in document order.
	pub children: Vec<Node>,
}

impl Node {
	/// Build an element node without attributes.
	pub fn element(tag: &str, children: Vec<Node>) -> Self {
		Self::Element(ElementNode {
			tag: tag.into(),
			attributes: Vec::new(),
			children,
		})
	}

	/// Build a text node.
	pub fn text(text: &str) -> Self {
		Self::Text(text.into())
	}

	/// Build an element whose only child is `text`, or a childless element for empty text.
	pub fn leaf(tag: &str, text: &str) -> Self {
		if text.is_empty() {
			Self::element(tag, Vec::new())
		} else {
			Self::element(tag, vec![Self::text(text)])
		}
	}

	/// Element tag name, `None` for text nodes.
	pub fn tag(&self) -> Option<&str> {
		match self {
			Self::Element(item) => Some(&*item.tag),
			Self::Text(_) => None,
		}
	}

	/// Tag label used in diagnostics.
	pub fn label(&self) -> &str {
		self.tag().unwrap_or("#text")
	}

	/// Ordered children; text nodes have none.
	pub fn children(&self) -> &[Node] {
		match self {
			Self::Element(item) => &item.children,
			Self::Text(_) => &[],
		}
	}

	/// First child, if any.
	pub fn first_child(&self) -> Option<&Node> {
		self.children().first()
	}

	/// Text payload for text nodes.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(&**text),
			Self::Element(_) => None,
		}
	}

	/// Attribute value by name.
	pub fn attribute(&self, name: &str) -> Option<&str> {
		match self {
			Self::Element(item) => item.attributes.iter().find(|(key, _)| key.as_ref() == name).map(|(_, value)| value.as_ref()),
			Self::Text(_) => None,
		}
	}

	/// Convert an XML element subtree into a normalized node tree.
	///
	/// Text is trimmed, empty text dropped, adjacent text merged, and comments or
	/// processing instructions skipped.
	pub fn from_xml(node: roxmltree::Node<'_, '_>) -> Self {
		if !node.is_element() {
			return Self::text(node.text().unwrap_or_default().trim());
		}

		let mut children: Vec<Node> = Vec::new();
		for child in node.children() {
			if child.is_element() {
				children.push(Self::from_xml(child));
				continue;
			}
			if !child.is_text() {
				continue;
			}
			let text = child.text().unwrap_or_default().trim();
			if text.is_empty() {
				continue;
			}
			match children.last_mut() {
				Some(Node::Text(prev)) => {
					let mut merged = String::with_capacity(prev.len() + text.len());
					merged.push_str(prev);
					merged.push_str(text);
					*prev = merged.into_boxed_str();
				}
				_ => children.push(Self::text(text)),
			}
		}

		Self::Element(ElementNode {
			tag: node.tag_name().name().into(),
			attributes: node.attributes().map(|attr| (Box::from(attr.name()), Box::from(attr.value()))).collect(),
			children,
		})
	}
}
