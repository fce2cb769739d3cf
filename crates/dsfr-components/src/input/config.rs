//! Declarative input configuration.
//!
//! [`InputConfig`] mirrors the component's option names (`hintText`,
//! `stateRelatedMessage`, `isTextArea`, ...) so a field can be described in
//! JSON. The typed [`InputProps`] cannot express a broken configuration, but a
//! document can, so the conversion checks every either/or pair and fails
//! before anything is rendered.
//!
//! ```
//! use dsfr_components::input::InputProps;
//!
//! let props = InputProps::from_json(
//! 	r#"{"label": "Bio", "isTextArea": true, "hintText": "Max 500 chars"}"#,
//! )
//! .unwrap();
//! assert!(props.field().is_text_area());
//!
//! let err = InputProps::from_json(r#"{"label": "Bio", "state": "error"}"#).unwrap_err();
//! assert_eq!(err.to_string(), "`state` is `error` but `stateRelatedMessage` is missing");
//! ```

use super::icon::IconId;
use super::props::{ClassOverrides, FieldVariant, InputProps, NativeAttrs, Validation, ValidationKind};
use crate::error::{InputError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Native attribute values as they appear in a configuration document.
pub type RawAttrs = BTreeMap<String, Value>;

/// Configuration document for an input field.
///
/// Unknown fields are rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InputConfig {
	/// Label text.
	pub label: String,
	/// Hint under the label.
	pub hint_text: Option<String>,
	/// Disabled flag (default false).
	#[serde(default)]
	pub disabled: bool,
	/// Explicit icon class name.
	pub icon_id: Option<String>,
	/// Per-slot class overrides.
	#[serde(default)]
	pub classes: ClassOverrides,
	/// Extra root class.
	pub class_name: Option<String>,
	/// Validation state.
	pub state: Option<ValidationKind>,
	/// Message accompanying `state`.
	pub state_related_message: Option<String>,
	/// Renders a `<textarea>` when true.
	pub is_text_area: Option<bool>,
	/// Attributes for the `<input>`.
	pub native_input_props: Option<RawAttrs>,
	/// Attributes for the `<textarea>`.
	pub native_text_area_props: Option<RawAttrs>,
	/// Attributes for the root `<div>`.
	#[serde(default)]
	pub root_attrs: RawAttrs,
}

impl InputConfig {
	/// Parses a JSON configuration document.
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	/// Parses a configuration from an already-decoded JSON value.
	pub fn from_value(value: Value) -> Result<Self> {
		Ok(serde_json::from_value(value)?)
	}
}

impl TryFrom<InputConfig> for InputProps {
	type Error = InputError;

	fn try_from(config: InputConfig) -> Result<Self> {
		let validation = match (config.state, config.state_related_message) {
			(Some(kind), Some(message)) => Some(Validation::new(kind, message)),
			(Some(kind), None) => return Err(InputError::MissingStateMessage(kind)),
			(None, Some(_)) => return Err(InputError::MissingState),
			(None, None) => None,
		};

		let field = if config.is_text_area.unwrap_or(false) {
			if config.native_input_props.is_some() {
				return Err(InputError::InputPropsOnTextArea);
			}
			FieldVariant::TextArea(convert_attrs(config.native_text_area_props)?)
		} else {
			if config.native_text_area_props.is_some() {
				return Err(InputError::TextAreaPropsOnInput);
			}
			FieldVariant::Input(convert_attrs(config.native_input_props)?)
		};

		let mut props = InputProps::new(config.label)
			.with_disabled(config.disabled)
			.with_classes(config.classes)
			.with_field(field);

		if let Some(hint) = config.hint_text {
			props = props.with_hint_text(hint);
		}
		if let Some(icon_id) = config.icon_id {
			props = props.with_icon_id(IconId::try_from(icon_id)?);
		}
		if let Some(class_name) = config.class_name {
			props = props.with_class_name(class_name);
		}
		if let Some(validation) = validation {
			props = props.with_validation(validation);
		}
		for (name, value) in convert_attrs(Some(config.root_attrs))?.iter() {
			props = props.with_root_attr(name, value)?;
		}

		Ok(props)
	}
}

impl InputProps {
	/// Builds props from a JSON configuration document.
	pub fn from_json(json: &str) -> Result<Self> {
		InputConfig::from_json(json)?.try_into()
	}
}

/// Converts configuration attribute values to native attributes.
///
/// Strings are kept verbatim, `true` becomes a boolean attribute, `false` is
/// dropped and numbers are written in decimal. Other values are rejected.
fn convert_attrs(raw: Option<RawAttrs>) -> Result<NativeAttrs> {
	let mut attrs = NativeAttrs::new();
	for (name, value) in raw.unwrap_or_default() {
		match value {
			Value::String(s) => attrs.insert(name, s)?,
			Value::Bool(b) => attrs = attrs.bool_attr(name, b)?,
			Value::Number(n) => attrs.insert(name, n.to_string())?,
			Value::Null | Value::Array(_) | Value::Object(_) => {
				return Err(InputError::InvalidAttribute {
					name,
					reason: "value must be a string, a number or a boolean",
				});
			}
		}
	}
	Ok(attrs)
}
