//! Class-name derivation for every slot of the input.
//!
//! | Slot | Base | Disabled | Error | Success |
//! |------|------|----------|-------|---------|
//! | root | `fr-input-group` | `fr-input-group--disabled` | `fr-input-group--error` | `fr-input-group--valid` |
//! | field | `fr-input` | native attribute | `fr-input--error` | `fr-input--valid` |
//! | message | | | `fr-error-text` | `fr-valid-text` |
//!
//! Each slot is built as base, then modifier, then caller override.

use super::props::{ClassOverrides, ValidationKind};
use dsfr_core::class_names::{cx, fr_cx};

/// Root container class.
pub const GROUP_CLASS: &str = "fr-input-group";
/// Label class.
pub const LABEL_CLASS: &str = "fr-label";
/// Hint span class.
pub const HINT_CLASS: &str = "fr-hint-text";
/// Field class.
pub const FIELD_CLASS: &str = "fr-input";
/// Icon wrapper class.
pub const WRAP_CLASS: &str = "fr-input-wrap";
/// Root modifier for disabled fields.
pub const GROUP_DISABLED_CLASS: &str = "fr-input-group--disabled";

/// Root modifier for a validation kind.
pub fn group_modifier(kind: ValidationKind) -> &'static str {
	match kind {
		ValidationKind::Error => "fr-input-group--error",
		ValidationKind::Success => "fr-input-group--valid",
	}
}

/// Field modifier for a validation kind.
pub fn field_modifier(kind: ValidationKind) -> &'static str {
	match kind {
		ValidationKind::Error => "fr-input--error",
		ValidationKind::Success => "fr-input--valid",
	}
}

/// Message class for a validation kind.
pub fn message_class(kind: ValidationKind) -> &'static str {
	match kind {
		ValidationKind::Error => "fr-error-text",
		ValidationKind::Success => "fr-valid-text",
	}
}

/// Final class strings for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldClasses {
	/// Root `<div>`.
	pub root: String,
	/// `<label>`.
	pub label: String,
	/// Hint `<span>`.
	pub hint: String,
	/// `<input>` / `<textarea>`.
	pub field: String,
	/// Message `<p>`; present only with a validation state.
	pub message: Option<String>,
}

impl FieldClasses {
	/// Derives the classes from the disabled flag, the validation kind and
	/// the caller's overrides.
	///
	/// `class_name` is appended to the root after `overrides.root`.
	pub fn derive(
		disabled: bool,
		state: Option<ValidationKind>,
		overrides: &ClassOverrides,
		class_name: Option<&str>,
	) -> Self {
		let root = cx([
			Some(fr_cx([
				Some(GROUP_CLASS),
				disabled.then_some(GROUP_DISABLED_CLASS),
				state.map(group_modifier),
			])),
			overrides.root.clone(),
			class_name.map(str::to_string),
		]);

		let label = cx([Some(LABEL_CLASS), overrides.label.as_deref()]);
		let hint = cx([Some(HINT_CLASS), overrides.description.as_deref()]);

		let field = cx([
			Some(fr_cx([Some(FIELD_CLASS), state.map(field_modifier)])),
			overrides.field.clone(),
		]);

		let message = state.map(|kind| cx([Some(message_class(kind)), overrides.message.as_deref()]));

		Self {
			root,
			label,
			hint,
			field,
			message,
		}
	}
}
