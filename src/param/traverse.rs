use std::iter::Enumerate;
use std::slice;

use crate::param::{ContainerRef, IndexPath, Parameter, PathStep};

enum Frame<'a> {
	Items(Enumerate<slice::Iter<'a, Parameter>>),
	Fields(slice::Iter<'a, (Box<str>, Parameter)>),
}

impl<'a> Frame<'a> {
	fn open(container: ContainerRef<'a>) -> Self {
		match container {
			ContainerRef::Matrix(item) => Self::Items(item.items().iter().enumerate()),
			ContainerRef::Struct(item) => Self::Fields(item.fields().iter()),
		}
	}

	fn next_child(&mut self) -> Option<(PathStep, &'a Parameter)> {
		match self {
			Self::Items(iter) => iter.next().map(|(index, value)| (PathStep::Index(index), value)),
			Self::Fields(iter) => iter.next().map(|(key, value)| (PathStep::Key(key.clone()), value)),
		}
	}
}

/// Lazy depth-first iterator over `(path, leaf)` pairs of a container.
///
/// Only leaves are yielded; nested containers contribute their index or key as a
/// path prefix. Iteration uses an explicit frame stack, so depth is bounded by
/// memory rather than the call stack.
pub struct Leaves<'a> {
	stack: Vec<Frame<'a>>,
	prefix: Vec<PathStep>,
}

impl<'a> Leaves<'a> {
	/// Start a traversal at `root`.
	pub fn new(root: ContainerRef<'a>) -> Self {
		Self {
			stack: vec![Frame::open(root)],
			prefix: Vec::new(),
		}
	}
}

impl<'a> Iterator for Leaves<'a> {
	type Item = (IndexPath, &'a Parameter);

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			let frame = self.stack.last_mut()?;
			let Some((step, child)) = frame.next_child() else {
				self.stack.pop();
				// prefix holds one step per frame below the root
				if !self.stack.is_empty() {
					self.prefix.pop();
				}
				continue;
			};

			match child.as_container() {
				Some(container) => {
					self.prefix.push(step);
					self.stack.push(Frame::open(container));
				}
				None => {
					let mut path = Vec::with_capacity(self.prefix.len() + 1);
					path.extend(self.prefix.iter().cloned());
					path.push(step);
					return Some((IndexPath(path), child));
				}
			}
		}
	}
}
