//! DSFR text input / text area field.
//!
//! [`Input`] renders the DSFR `fr-input-group` structure:
//!
//! ```text
//! <div class="fr-input-group …">
//!   <label class="fr-label" for="{field id}">Label<span class="fr-hint-text">Hint</span></label>
//!   [<div class="fr-input-wrap {icon}">]
//!     <input class="fr-input …" aria-describedby="{field id}-desc-error" type="text" id="{field id}" />
//!   [</div>]
//!   <p id="{field id}-desc-error" class="fr-error-text">Message</p>
//! </div>
//! ```
//!
//! An `Input` is the mounted instance: it allocates its field id once, when it
//! is created, and keeps it across re-renders while the props change.
//!
//! ## Example
//!
//! ```
//! use dsfr_components::Component;
//! use dsfr_components::input::{FieldVariant, Input, InputProps, NativeAttrs, Validation};
//!
//! let mut input = Input::new(
//! 	InputProps::new("Email")
//! 		.with_validation(Validation::error("Required"))
//! 		.with_field(FieldVariant::Input(NativeAttrs::new().input_type("email"))),
//! );
//! let page = input.render();
//! let field = page.find_by_tag("input").unwrap();
//! assert_eq!(field.get_attr("type"), Some("email"));
//! assert_eq!(field.get_attr("class"), Some("fr-input fr-input--error"));
//!
//! let field_id = input.field_id().to_string();
//! input.set_props(InputProps::new("E-mail"));
//! assert_eq!(input.field_id(), field_id);
//! ```

mod classes;
mod config;
mod icon;
mod identity;
mod props;

pub use classes::{FieldClasses, field_modifier, group_modifier, message_class};
pub use config::{InputConfig, RawAttrs};
pub use icon::{IconId, resolve_icon};
pub use identity::{
	FieldIdentity, INPUT_ID_PREFIX, MESSAGE_ID_SUFFIX, generate_input_id, resolve_field_id,
};
pub use props::{ClassOverrides, FieldVariant, InputProps, NativeAttrs, Validation, ValidationKind};

use self::classes::WRAP_CLASS;
use crate::component::Component;
use crate::error::Result;
use dsfr_core::class_names::fr_cx;
use dsfr_core::page::{IntoPage, Page, PageElement};

/// Native attributes the component computes itself.
///
/// Caller values for these names are never forwarded.
pub const COMPUTED_FIELD_ATTRS: &[&str] = &["id", "class", "disabled", "aria-describedby", "type"];

/// A mounted DSFR input field.
///
/// Cloning mounts a new field: the copy gets its own generated id.
#[derive(Debug)]
pub struct Input {
	generated_id: String,
	props: InputProps,
}

impl Clone for Input {
	fn clone(&self) -> Self {
		Self::new(self.props.clone())
	}
}

impl Input {
	/// Mounts a new field, allocating its id.
	pub fn new(props: InputProps) -> Self {
		Self {
			generated_id: generate_input_id(),
			props,
		}
	}

	/// Mounts a new field from a configuration document.
	pub fn from_config(config: InputConfig) -> Result<Self> {
		Ok(Self::new(config.try_into()?))
	}

	/// Mounts a new field from a JSON configuration.
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(Self::new(InputProps::from_json(json)?))
	}

	/// Returns the current props.
	pub fn props(&self) -> &InputProps {
		&self.props
	}

	/// Replaces the props for the next render. The generated id is kept.
	pub fn set_props(&mut self, props: InputProps) {
		self.props = props;
	}

	/// Updates the props in place.
	pub fn update_props<F>(&mut self, f: F)
	where
		F: FnOnce(InputProps) -> InputProps,
	{
		let props = std::mem::replace(&mut self.props, InputProps::new(()));
		self.props = f(props);
	}

	/// Resolves the ids used by the current props.
	pub fn identity(&self) -> FieldIdentity {
		FieldIdentity::resolve(
			self.props.field().native_attrs().get("id"),
			&self.generated_id,
		)
	}

	/// Returns the id of the field element.
	pub fn field_id(&self) -> &str {
		resolve_field_id(self.props.field().native_attrs().get("id"), &self.generated_id)
	}

	fn render_label(&self, classes: &FieldClasses, identity: &FieldIdentity) -> PageElement {
		let props = &self.props;
		let label = PageElement::new("label")
			.attr("class", classes.label.clone())
			.attr("for", identity.field_id().to_string())
			.child(props.label().clone());

		match props.hint_text() {
			Some(hint) => label.child(
				PageElement::new("span")
					.attr("class", classes.hint.clone())
					.child(hint.clone()),
			),
			None => label,
		}
	}

	fn render_field(&self, classes: &FieldClasses, identity: &FieldIdentity) -> PageElement {
		let field = self.props.field();
		let mut element = PageElement::new(field.tag());

		for (name, value) in field.native_attrs().iter() {
			if COMPUTED_FIELD_ATTRS.iter().any(|c| c.eq_ignore_ascii_case(name)) {
				if name != "id" && name != "type" {
					tracing::debug!(
						attr = name,
						field_id = identity.field_id(),
						"native attribute shadowed by computed value"
					);
				}
				continue;
			}
			element = element.attr(name.to_string(), value.to_string());
		}

		element = element
			.attr("class", classes.field.clone())
			.bool_attr("disabled", self.props.is_disabled())
			.attr("aria-describedby", identity.message_id().to_string());

		if let FieldVariant::Input(attrs) = field {
			element = element.attr("type", attrs.get("type").unwrap_or("text").to_string());
		}

		element.attr("id", identity.field_id().to_string())
	}

	fn render_message(&self, classes: &FieldClasses, identity: &FieldIdentity) -> Option<PageElement> {
		let validation = self.props.validation()?;
		let class = classes
			.message
			.clone()
			.unwrap_or_else(|| message_class(validation.kind()).to_string());
		Some(
			PageElement::new("p")
				.attr("id", identity.message_id().to_string())
				.attr("class", class)
				.child(validation.message().clone()),
		)
	}
}

impl Component for Input {
	fn render(&self) -> Page {
		let props = &self.props;
		let identity = self.identity();
		let state = props.validation().map(Validation::kind);
		let classes = FieldClasses::derive(
			props.is_disabled(),
			state,
			props.classes(),
			props.class_name(),
		);

		tracing::debug!(
			field_id = identity.field_id(),
			text_area = props.field().is_text_area(),
			state = ?state,
			disabled = props.is_disabled(),
			"rendering input"
		);

		let mut root = PageElement::new("div").attr("class", classes.root.clone());
		for (name, value) in props.root_attrs().iter() {
			if name.eq_ignore_ascii_case("class") {
				tracing::debug!(field_id = identity.field_id(), "root class attribute shadowed by computed classes");
				continue;
			}
			root = root.attr(name.to_string(), value.to_string());
		}

		let field = self.render_field(&classes, &identity);
		let field = match resolve_icon(props.icon_id(), props.field()) {
			Some(icon) => PageElement::new("div")
				.attr("class", fr_cx([Some(WRAP_CLASS), Some(icon.as_str())]))
				.child(field),
			None => field,
		};

		root.child(self.render_label(&classes, &identity))
			.child(field)
			.child(self.render_message(&classes, &identity))
			.into_page()
	}

	fn name() -> &'static str {
		"Input"
	}
}

impl IntoPage for &Input {
	fn into_page(self) -> Page {
		self.render()
	}
}

impl IntoPage for Input {
	fn into_page(self) -> Page {
		self.render()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn email_input() -> Input {
		Input::new(
			InputProps::new("Email")
				.with_validation(Validation::error("Required"))
				.with_field(FieldVariant::Input(NativeAttrs::new().input_type("email"))),
		)
	}

	fn field_of(page: &Page) -> &PageElement {
		page.find(|el| el.tag_name() == "input" || el.tag_name() == "textarea")
			.expect("field element")
	}

	#[rstest]
	fn test_name() {
		assert_eq!(Input::name(), "Input");
	}

	#[rstest]
	fn test_email_error_example(email_input: Input) {
		let page = email_input.render();
		let root = page.as_element().unwrap();
		let field_id = email_input.field_id().to_string();
		let message_id = format!("{field_id}-desc-error");

		assert_eq!(root.tag_name(), "div");
		assert_eq!(root.get_attr("class"), Some("fr-input-group fr-input-group--error"));

		let label = page.find_by_tag("label").unwrap();
		assert_eq!(label.text_content(), "Email");
		assert_eq!(label.get_attr("for"), Some(field_id.as_str()));

		let field = field_of(&page);
		assert_eq!(field.get_attr("type"), Some("email"));
		assert_eq!(field.get_attr("class"), Some("fr-input fr-input--error"));
		assert_eq!(field.get_attr("aria-describedby"), Some(message_id.as_str()));

		let message = page.find_by_tag("p").unwrap();
		assert_eq!(message.get_attr("id"), Some(message_id.as_str()));
		assert_eq!(message.get_attr("class"), Some("fr-error-text"));
		assert_eq!(message.text_content(), "Required");
	}

	#[rstest]
	fn test_structure_order(email_input: Input) {
		let page = email_input.render();
		let tags: Vec<&str> = page
			.as_element()
			.unwrap()
			.child_views()
			.iter()
			.filter_map(Page::as_element)
			.map(PageElement::tag_name)
			.collect();
		assert_eq!(tags, vec!["label", "input", "p"]);
	}

	#[rstest]
	fn test_field_attribute_order(email_input: Input) {
		let page = email_input.render();
		let names: Vec<&str> = field_of(&page).attrs().iter().map(|(n, _)| &**n).collect();
		assert_eq!(names, vec!["class", "aria-describedby", "type", "id"]);
	}

	#[rstest]
	fn test_computed_attrs_take_precedence() {
		let input = Input::new(
			InputProps::new("Name").with_field(FieldVariant::Input(
				NativeAttrs::new()
					.attr("class", "caller")
					.and_then(|a| a.attr("aria-describedby", "elsewhere"))
					.and_then(|a| a.bool_attr("disabled", true))
					.and_then(|a| a.attr("name", "name"))
					.unwrap(),
			)),
		);
		let page = input.render();
		let field = field_of(&page);
		assert_eq!(field.get_attr("class"), Some("fr-input"));
		assert_eq!(
			field.get_attr("aria-describedby"),
			Some(format!("{}-desc-error", input.field_id()).as_str())
		);
		assert!(!field.has_attr("disabled"));
		assert_eq!(field.get_attr("name"), Some("name"));
	}

	#[rstest]
	fn test_text_area_drops_type() {
		let input = Input::new(
			InputProps::new("Bio")
				.with_field(FieldVariant::TextArea(
					NativeAttrs::new().input_type("date").attr("rows", "3").unwrap(),
				)),
		);
		let page = input.render();
		let field = field_of(&page);
		assert_eq!(field.tag_name(), "textarea");
		assert!(!field.has_attr("type"));
		assert_eq!(field.get_attr("rows"), Some("3"));
		assert!(page.find(|el| el.get_attr("class") == Some("fr-input-wrap ri-calendar-line")).is_none());
	}

	#[rstest]
	fn test_update_props_keeps_identity(mut email_input: Input) {
		let before = email_input.field_id().to_string();
		email_input.update_props(|props| props.with_label("Courriel").with_disabled(true));
		assert_eq!(email_input.field_id(), before);
		assert!(email_input.props().is_disabled());
		assert_eq!(email_input.props().label(), &Page::text("Courriel"));
	}

	#[rstest]
	fn test_root_class_attr_is_not_forwarded() {
		let input = Input::new(
			InputProps::new("Name")
				.with_root_attr("CLASS", "ignored")
				.and_then(|p| p.with_root_attr("data-testid", "name-group"))
				.unwrap(),
		);
		let page = input.render();
		let root = page.as_element().unwrap();
		assert_eq!(root.get_attr("class"), Some("fr-input-group"));
		assert_eq!(root.get_attr("data-testid"), Some("name-group"));
		assert_eq!(root.attrs().len(), 2);
	}

	#[rstest]
	#[case("ID", "caller")]
	#[case("Id", "caller")]
	fn test_mixed_case_id_becomes_field_id(#[case] name: &str, #[case] value: &str) {
		let input = Input::new(
			InputProps::new("Name")
				.with_field(FieldVariant::Input(NativeAttrs::new().attr(name, value).unwrap())),
		);
		let page = input.render();
		let field = field_of(&page);
		let ids: Vec<&str> = field
			.attrs()
			.iter()
			.filter(|(n, _)| n.eq_ignore_ascii_case("id"))
			.map(|(_, v)| &**v)
			.collect();
		assert_eq!(ids, vec![value]);
		assert_eq!(input.field_id(), value);
		assert_eq!(page.find_by_tag("label").unwrap().get_attr("for"), Some(value));
	}

	#[rstest]
	fn test_mixed_case_computed_names_are_not_forwarded() {
		let input = Input::new(InputProps::new("Name").with_field(FieldVariant::Input(
			NativeAttrs::new()
				.attr("TYPE", "date")
				.and_then(|a| a.attr("Class", "x"))
				.and_then(|a| a.attr("ARIA-DESCRIBEDBY", "other"))
				.and_then(|a| a.attr("Disabled", "disabled"))
				.unwrap(),
		)));
		let page = input.render();
		let field = field_of(&page);
		let names: Vec<&str> = field.attrs().iter().map(|(n, _)| &**n).collect();
		assert_eq!(names, vec!["class", "aria-describedby", "type", "id"]);
		assert_eq!(field.get_attr("type"), Some("date"));
		assert_eq!(field.get_attr("class"), Some("fr-input"));
	}

	#[rstest]
	fn test_clone_mounts_a_new_field(email_input: Input) {
		let copy = email_input.clone();
		assert_ne!(copy.field_id(), email_input.field_id());
		assert_eq!(copy.props(), email_input.props());

		let copy_page = copy.render();
		assert_eq!(
			field_of(&copy_page).get_attr("aria-describedby"),
			Some(format!("{}-desc-error", copy.field_id()).as_str())
		);
	}

	#[rstest]
	fn test_clone_keeps_caller_id() {
		let input = Input::new(
			InputProps::new("Email").with_field(FieldVariant::Input(NativeAttrs::new().id("email"))),
		);
		assert_eq!(input.clone().field_id(), "email");
	}

	#[rstest]
	fn test_into_page_renders() {
		let input = Input::new(InputProps::new("Name"));
		assert_eq!((&input).into_page(), input.render());
	}
}
