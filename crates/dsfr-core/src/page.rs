//! Page types for component rendering.
//!
//! `Page` is the tree every component renders to. It is a plain value: it can
//! be cloned, compared, queried, and serialized to HTML with
//! [`Page::render_to_string`].
//!
//! ## Example
//!
//! ```
//! use dsfr_core::page::{IntoPage, PageElement};
//!
//! let view = PageElement::new("div")
//! 	.attr("class", "container")
//! 	.child("Hello, World!")
//! 	.into_page();
//!
//! assert_eq!(
//! 	view.render_to_string(),
//! 	r#"<div class="container">Hello, World!</div>"#
//! );
//! ```

mod util;

pub(crate) use util::html_escape;
pub use util::{BOOLEAN_ATTRS, is_boolean_attr_truthy};

use std::borrow::Cow;

/// A unified representation of renderable content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
	/// A DOM element.
	Element(PageElement),
	/// A text node.
	Text(Cow<'static, str>),
	/// A fragment containing multiple views (no wrapper element).
	Fragment(Vec<Page>),
	/// An empty view (renders nothing).
	Empty,
}

/// Represents a DOM element in the view tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageElement {
	/// The tag name (e.g., "div", "span").
	tag: Cow<'static, str>,
	/// HTML attributes, in insertion order.
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	/// Child views.
	children: Vec<Page>,
	/// Whether this is a void element (no closing tag).
	is_void: bool,
}

impl PageElement {
	/// Creates a new element view.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
		}
	}

	/// Adds an attribute.
	///
	/// Duplicate names are kept; callers emit each name once.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Adds a boolean attribute.
	///
	/// When true, the attribute is added with the attribute name as its value
	/// (e.g., `disabled="disabled"`). When false, the attribute is not added.
	pub fn bool_attr(self, name: impl Into<Cow<'static, str>>, value: bool) -> Self {
		if value {
			let name = name.into();
			self.attr(name.clone(), name)
		} else {
			self
		}
	}

	/// Adds a child view.
	pub fn child(mut self, child: impl IntoPage) -> Self {
		self.children.push(child.into_page());
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Returns the value of the first attribute named `name`.
	pub fn get_attr(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_ref())
	}

	/// Returns whether an attribute named `name` is present.
	pub fn has_attr(&self, name: &str) -> bool {
		self.attrs.iter().any(|(n, _)| n == name)
	}

	/// Returns the child views.
	pub fn child_views(&self) -> &[Page] {
		&self.children
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Returns the concatenated text of all descendant text nodes.
	pub fn text_content(&self) -> String {
		let mut output = String::new();
		for child in &self.children {
			child.collect_text(&mut output);
		}
		output
	}
}

impl Page {
	/// Creates a text view.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment view.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_page()).collect())
	}

	/// Creates an empty view.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Returns the root element, if this page is an element.
	pub fn as_element(&self) -> Option<&PageElement> {
		match self {
			Page::Element(el) => Some(el),
			_ => None,
		}
	}

	/// Finds the first element (depth-first, document order) matching `predicate`.
	pub fn find<F>(&self, predicate: F) -> Option<&PageElement>
	where
		F: Fn(&PageElement) -> bool,
	{
		self.find_inner(&predicate)
	}

	fn find_inner<F>(&self, predicate: &F) -> Option<&PageElement>
	where
		F: Fn(&PageElement) -> bool,
	{
		match self {
			Page::Element(el) => {
				if predicate(el) {
					return Some(el);
				}
				el.children.iter().find_map(|c| c.find_inner(predicate))
			}
			Page::Fragment(children) => children.iter().find_map(|c| c.find_inner(predicate)),
			Page::Text(_) | Page::Empty => None,
		}
	}

	/// Finds the first element with the given tag name.
	pub fn find_by_tag(&self, tag: &str) -> Option<&PageElement> {
		self.find(|el| el.tag_name() == tag)
	}

	/// Finds the element whose `id` attribute equals `id`.
	pub fn find_by_id(&self, id: &str) -> Option<&PageElement> {
		self.find(|el| el.get_attr("id") == Some(id))
	}

	/// Returns the concatenated text of all text nodes in this page.
	pub fn text_content(&self) -> String {
		let mut output = String::new();
		self.collect_text(&mut output);
		output
	}

	fn collect_text(&self, output: &mut String) {
		match self {
			Page::Element(el) => {
				for child in &el.children {
					child.collect_text(output);
				}
			}
			Page::Text(text) => output.push_str(text),
			Page::Fragment(children) => {
				for child in children {
					child.collect_text(output);
				}
			}
			Page::Empty => {}
		}
	}

	/// Renders the view to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			Page::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				for (name, value) in el.attrs() {
					// Skip boolean attributes with falsy values (empty, "false", "0")
					let name_str: &str = name.as_ref();
					if BOOLEAN_ATTRS.contains(&name_str) && !is_boolean_attr_truthy(value) {
						continue;
					}

					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape(value));
					output.push('"');
				}

				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in el.child_views() {
						child.render_to_string_inner(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}
			}
			Page::Text(text) => {
				output.push_str(&html_escape(text));
			}
			Page::Fragment(children) => {
				for child in children {
					child.render_to_string_inner(output);
				}
			}
			Page::Empty => {}
		}
	}
}

impl Default for Page {
	fn default() -> Self {
		Self::Empty
	}
}

/// Trait for types that can be converted into a Page.
pub trait IntoPage {
	/// Converts self into a Page.
	fn into_page(self) -> Page;
}

impl IntoPage for Page {
	fn into_page(self) -> Page {
		self
	}
}

impl IntoPage for PageElement {
	fn into_page(self) -> Page {
		Page::Element(self)
	}
}

impl IntoPage for String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self))
	}
}

impl IntoPage for &String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self.clone()))
	}
}

impl IntoPage for &'static str {
	fn into_page(self) -> Page {
		Page::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoPage> IntoPage for Option<T> {
	fn into_page(self) -> Page {
		match self {
			Some(v) => v.into_page(),
			None => Page::Empty,
		}
	}
}

impl<T: IntoPage> IntoPage for Vec<T> {
	fn into_page(self) -> Page {
		Page::Fragment(self.into_iter().map(|v| v.into_page()).collect())
	}
}

impl IntoPage for () {
	fn into_page(self) -> Page {
		Page::Empty
	}
}

impl<A: IntoPage, B: IntoPage> IntoPage for (A, B) {
	fn into_page(self) -> Page {
		Page::Fragment(vec![self.0.into_page(), self.1.into_page()])
	}
}

impl<A: IntoPage, B: IntoPage, C: IntoPage> IntoPage for (A, B, C) {
	fn into_page(self) -> Page {
		Page::Fragment(vec![
			self.0.into_page(),
			self.1.into_page(),
			self.2.into_page(),
		])
	}
}
