//! Props for the [`Input`](super::Input) component.
//!
//! The two either/or choices of the component are sum types here:
//!
//! - [`FieldVariant`]: a single-line `<input>` or a multi-line `<textarea>`,
//!   each with its own native attribute bag;
//! - [`Validation`]: a success or error state, always carrying its message.
//!
//! Mixing the two sides of either choice cannot be expressed, so the typed
//! builder needs no runtime shape checks.

use super::icon::IconId;
use crate::error::{InputError, Result};
use dsfr_core::page::{IntoPage, Page};
use serde::Deserialize;
use std::fmt;

/// Kind of validation state displayed by a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationKind {
	/// The value was accepted.
	Success,
	/// The value was rejected.
	Error,
}

impl ValidationKind {
	/// Returns the lowercase name used in configurations.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Success => "success",
			Self::Error => "error",
		}
	}
}

impl fmt::Display for ValidationKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A validation state together with its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
	kind: ValidationKind,
	message: Page,
}

impl Validation {
	/// Creates a validation state of the given kind.
	pub fn new(kind: ValidationKind, message: impl IntoPage) -> Self {
		Self {
			kind,
			message: message.into_page(),
		}
	}

	/// Creates a success state.
	pub fn success(message: impl IntoPage) -> Self {
		Self::new(ValidationKind::Success, message)
	}

	/// Creates an error state.
	pub fn error(message: impl IntoPage) -> Self {
		Self::new(ValidationKind::Error, message)
	}

	/// Returns the kind of state.
	pub fn kind(&self) -> ValidationKind {
		self.kind
	}

	/// Returns the message content.
	pub fn message(&self) -> &Page {
		&self.message
	}
}

/// Ordered bag of native HTML attributes forwarded to an element.
///
/// Names are stored in ASCII lowercase, as HTML compares them
/// case-insensitively. Setting a name twice replaces the earlier value.
/// Names that could break out of the attribute syntax are rejected.
///
/// ```
/// use dsfr_components::input::NativeAttrs;
///
/// let attrs = NativeAttrs::new().attr("MaxLength", "40").unwrap();
/// assert_eq!(attrs.get("maxlength"), Some("40"));
/// assert!(NativeAttrs::new().attr("x><script", "v").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NativeAttrs {
	attrs: Vec<(String, String)>,
}

impl NativeAttrs {
	/// Creates an empty attribute bag.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets an attribute.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
		self.insert(name.into(), value.into())?;
		Ok(self)
	}

	/// Sets a boolean attribute, or removes it when `value` is false.
	pub fn bool_attr(mut self, name: impl Into<String>, value: bool) -> Result<Self> {
		let name = attr_name(name.into())?;
		if value {
			self.put(name.clone(), name);
		} else {
			self.attrs.retain(|(n, _)| *n != name);
		}
		Ok(self)
	}

	/// Sets the `id` attribute.
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.put("id".to_string(), id.into());
		self
	}

	/// Sets the `type` attribute.
	pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
		self.put("type".to_string(), input_type.into());
		self
	}

	/// Returns the value of an attribute, matching the name case-insensitively.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(n, _)| n.eq_ignore_ascii_case(name))
			.map(|(_, v)| v.as_str())
	}

	/// Iterates over the attributes in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.attrs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
	}

	/// Returns the number of attributes.
	pub fn len(&self) -> usize {
		self.attrs.len()
	}

	/// Returns whether the bag is empty.
	pub fn is_empty(&self) -> bool {
		self.attrs.is_empty()
	}

	pub(crate) fn insert(&mut self, name: String, value: String) -> Result<()> {
		let name = attr_name(name)?;
		self.put(name, value);
		Ok(())
	}

	// `name` is already lowercase and valid.
	fn put(&mut self, name: String, value: String) {
		match self.attrs.iter_mut().find(|(n, _)| *n == name) {
			Some(slot) => slot.1 = value,
			None => self.attrs.push((name, value)),
		}
	}
}

/// Validates an attribute name and folds it to ASCII lowercase.
fn attr_name(name: String) -> Result<String> {
	if name.is_empty() {
		return Err(InputError::InvalidAttribute {
			name,
			reason: "name is empty",
		});
	}
	if !name
		.chars()
		.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
	{
		return Err(InputError::InvalidAttribute {
			name,
			reason: "name contains forbidden characters",
		});
	}
	Ok(name.to_ascii_lowercase())
}

/// The rendered field element and the native attributes forwarded to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldVariant {
	/// Single-line `<input>`.
	Input(NativeAttrs),
	/// Multi-line `<textarea>`.
	TextArea(NativeAttrs),
}

impl FieldVariant {
	/// A single-line input with no extra attributes.
	pub fn input() -> Self {
		Self::Input(NativeAttrs::new())
	}

	/// A text area with no extra attributes.
	pub fn text_area() -> Self {
		Self::TextArea(NativeAttrs::new())
	}

	/// Returns whether this is the multi-line variant.
	pub fn is_text_area(&self) -> bool {
		matches!(self, Self::TextArea(_))
	}

	/// Returns the caller's native attributes.
	pub fn native_attrs(&self) -> &NativeAttrs {
		match self {
			Self::Input(attrs) | Self::TextArea(attrs) => attrs,
		}
	}

	/// Returns the native `type` of a single-line input.
	///
	/// Text areas have no type.
	pub fn native_type(&self) -> Option<&str> {
		match self {
			Self::Input(attrs) => attrs.get("type"),
			Self::TextArea(_) => None,
		}
	}

	/// Returns the element tag this variant renders.
	pub fn tag(&self) -> &'static str {
		match self {
			Self::Input(_) => "input",
			Self::TextArea(_) => "textarea",
		}
	}
}

impl Default for FieldVariant {
	fn default() -> Self {
		Self::input()
	}
}

/// Extra classes appended to each slot of the rendered structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ClassOverrides {
	/// Root `<div>`.
	pub root: Option<String>,
	/// `<label>`.
	pub label: Option<String>,
	/// Hint `<span>` under the label.
	pub description: Option<String>,
	/// The `<input>` or `<textarea>`.
	#[serde(alias = "nativeInputOrTextArea")]
	pub field: Option<String>,
	/// Validation message `<p>`.
	pub message: Option<String>,
}

impl ClassOverrides {
	/// Creates an empty set of overrides.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the root override.
	pub fn root(mut self, class: impl Into<String>) -> Self {
		self.root = Some(class.into());
		self
	}

	/// Sets the label override.
	pub fn label(mut self, class: impl Into<String>) -> Self {
		self.label = Some(class.into());
		self
	}

	/// Sets the hint override.
	pub fn description(mut self, class: impl Into<String>) -> Self {
		self.description = Some(class.into());
		self
	}

	/// Sets the field override.
	pub fn field(mut self, class: impl Into<String>) -> Self {
		self.field = Some(class.into());
		self
	}

	/// Sets the message override.
	pub fn message(mut self, class: impl Into<String>) -> Self {
		self.message = Some(class.into());
		self
	}
}

/// Complete description of one [`Input`](super::Input) render.
///
/// # Example
///
/// ```
/// use dsfr_components::input::{FieldVariant, InputProps, NativeAttrs, Validation};
///
/// let props = InputProps::new("Email")
/// 	.with_validation(Validation::error("Required"))
/// 	.with_field(FieldVariant::Input(NativeAttrs::new().input_type("email")));
///
/// assert_eq!(props.field().native_type(), Some("email"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputProps {
	label: Page,
	hint_text: Option<Page>,
	disabled: bool,
	icon_id: Option<IconId>,
	classes: ClassOverrides,
	class_name: Option<String>,
	validation: Option<Validation>,
	field: FieldVariant,
	root_attrs: NativeAttrs,
}

impl InputProps {
	/// Creates props for a plain single-line input with the given label.
	pub fn new(label: impl IntoPage) -> Self {
		Self {
			label: label.into_page(),
			hint_text: None,
			disabled: false,
			icon_id: None,
			classes: ClassOverrides::default(),
			class_name: None,
			validation: None,
			field: FieldVariant::default(),
			root_attrs: NativeAttrs::default(),
		}
	}

	/// Replaces the label.
	pub fn with_label(mut self, label: impl IntoPage) -> Self {
		self.label = label.into_page();
		self
	}

	/// Sets the hint shown under the label.
	pub fn with_hint_text(mut self, hint: impl IntoPage) -> Self {
		self.hint_text = Some(hint.into_page());
		self
	}

	/// Sets whether the field is disabled.
	pub fn with_disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	/// Sets an explicit icon.
	pub fn with_icon_id(mut self, icon_id: IconId) -> Self {
		self.icon_id = Some(icon_id);
		self
	}

	/// Sets the per-slot class overrides.
	pub fn with_classes(mut self, classes: ClassOverrides) -> Self {
		self.classes = classes;
		self
	}

	/// Sets an extra class on the root, applied after the root override.
	pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
		self.class_name = Some(class_name.into());
		self
	}

	/// Sets the validation state.
	pub fn with_validation(mut self, validation: Validation) -> Self {
		self.validation = Some(validation);
		self
	}

	/// Removes the validation state.
	pub fn without_validation(mut self) -> Self {
		self.validation = None;
		self
	}

	/// Chooses the field element and its native attributes.
	pub fn with_field(mut self, field: FieldVariant) -> Self {
		self.field = field;
		self
	}

	/// Adds an attribute forwarded to the root `<div>`.
	///
	/// The name is checked like a [`NativeAttrs`] name.
	pub fn with_root_attr(
		mut self,
		name: impl Into<String>,
		value: impl Into<String>,
	) -> Result<Self> {
		self.root_attrs.insert(name.into(), value.into())?;
		Ok(self)
	}

	/// Returns the label content.
	pub fn label(&self) -> &Page {
		&self.label
	}

	/// Returns the hint content.
	pub fn hint_text(&self) -> Option<&Page> {
		self.hint_text.as_ref()
	}

	/// Returns whether the field is disabled.
	pub fn is_disabled(&self) -> bool {
		self.disabled
	}

	/// Returns the explicit icon, if any.
	pub fn icon_id(&self) -> Option<&IconId> {
		self.icon_id.as_ref()
	}

	/// Returns the class overrides.
	pub fn classes(&self) -> &ClassOverrides {
		&self.classes
	}

	/// Returns the extra root class.
	pub fn class_name(&self) -> Option<&str> {
		self.class_name.as_deref()
	}

	/// Returns the validation state.
	pub fn validation(&self) -> Option<&Validation> {
		self.validation.as_ref()
	}

	/// Returns the field variant.
	pub fn field(&self) -> &FieldVariant {
		&self.field
	}

	/// Returns the root pass-through attributes.
	pub fn root_attrs(&self) -> &NativeAttrs {
		&self.root_attrs
	}
}
