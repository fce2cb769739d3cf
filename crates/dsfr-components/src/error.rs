//! Error types for dsfr-components

use crate::input::ValidationKind;
use thiserror::Error;

/// Error type for component construction.
///
/// Every variant describes a configuration that breaks the component's
/// prop contract. They are raised before anything is rendered.
#[derive(Debug, Error)]
pub enum InputError {
	/// A `state` was given without the message that must accompany it.
	#[error("`state` is `{0}` but `stateRelatedMessage` is missing")]
	MissingStateMessage(ValidationKind),

	/// A state message was given without a `state`.
	#[error("`stateRelatedMessage` is set but `state` is missing")]
	MissingState,

	/// `nativeInputProps` was supplied for a text area.
	#[error("`nativeInputProps` cannot be combined with `isTextArea: true`")]
	InputPropsOnTextArea,

	/// `nativeTextAreaProps` was supplied for a single-line input.
	#[error("`nativeTextAreaProps` requires `isTextArea: true`")]
	TextAreaPropsOnInput,

	/// The icon id is not a DSFR or Remix icon class name.
	#[error("Invalid icon id: {0:?}")]
	InvalidIconId(String),

	/// A native attribute has an unusable name or value.
	#[error("Invalid native attribute `{name}`: {reason}")]
	InvalidAttribute {
		/// Attribute name as supplied.
		name: String,
		/// Why it was rejected.
		reason: &'static str,
	},

	/// The configuration document could not be parsed.
	///
	/// Unknown top-level fields end up here too.
	#[error("Malformed input configuration: {0}")]
	Config(#[from] serde_json::Error),
}

/// Result type for component construction.
pub type Result<T> = std::result::Result<T, InputError>;
