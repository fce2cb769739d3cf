//! Icon-slot resolution.

use super::props::FieldVariant;
use crate::error::{InputError, Result};
use std::borrow::Cow;
use std::fmt;

/// Prefix of DSFR icon class names.
pub const FR_ICON_PREFIX: &str = "fr-icon-";

/// Prefix of Remix icon class names.
pub const RI_ICON_PREFIX: &str = "ri-";

/// An icon class name from the DSFR (`fr-icon-…`) or Remix (`ri-…`) icon sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconId(Cow<'static, str>);

impl IconId {
	/// Calendar icon used by default on date inputs.
	pub const CALENDAR: IconId = IconId(Cow::Borrowed("ri-calendar-line"));

	/// Validates and wraps an icon class name.
	///
	/// # Examples
	///
	/// ```
	/// use dsfr_components::input::IconId;
	///
	/// assert!(IconId::new("fr-icon-mail-line").is_ok());
	/// assert!(IconId::new("ri-user-line").is_ok());
	/// assert!(IconId::new("mail").is_err());
	/// ```
	pub fn new(id: impl Into<Cow<'static, str>>) -> Result<Self> {
		let id = id.into();
		let suffix = id
			.strip_prefix(FR_ICON_PREFIX)
			.or_else(|| id.strip_prefix(RI_ICON_PREFIX));
		let valid = suffix.is_some_and(|rest| {
			!rest.is_empty()
				&& rest
					.chars()
					.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
		});
		if valid {
			Ok(Self(id))
		} else {
			Err(InputError::InvalidIconId(id.into_owned()))
		}
	}

	/// Returns the icon class name.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for IconId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl TryFrom<String> for IconId {
	type Error = InputError;

	fn try_from(value: String) -> Result<Self> {
		Self::new(value)
	}
}

impl TryFrom<&'static str> for IconId {
	type Error = InputError;

	fn try_from(value: &'static str) -> Result<Self> {
		Self::new(value)
	}
}

/// Decides which icon, if any, decorates the field.
///
/// An explicit icon always wins. Without one, a single-line input whose
/// native type is `date` gets [`IconId::CALENDAR`].
pub fn resolve_icon(explicit: Option<&IconId>, field: &FieldVariant) -> Option<IconId> {
	match explicit {
		Some(icon) => Some(icon.clone()),
		None if field.native_type() == Some("date") => Some(IconId::CALENDAR),
		None => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::input::props::NativeAttrs;
	use rstest::rstest;

	#[rstest]
	#[case("fr-icon-mail-line")]
	#[case("fr-icon-account_circle-fill")]
	#[case("ri-calendar-line")]
	fn test_icon_id_accepts_known_sets(#[case] id: &'static str) {
		assert_eq!(IconId::new(id).unwrap().as_str(), id);
	}

	#[rstest]
	#[case("")]
	#[case("calendar")]
	#[case("fr-icon-")]
	#[case("ri-")]
	#[case("ri-calendar line")]
	#[case("fr-icon-x\" onclick=\"y")]
	fn test_icon_id_rejects_others(#[case] id: &'static str) {
		assert!(matches!(IconId::new(id), Err(InputError::InvalidIconId(_))));
	}

	#[rstest]
	fn test_explicit_icon_wins_over_date_default() {
		let explicit = IconId::new("fr-icon-time-line").unwrap();
		let field = FieldVariant::Input(NativeAttrs::new().input_type("date"));
		assert_eq!(resolve_icon(Some(&explicit), &field), Some(explicit));
	}

	#[rstest]
	fn test_date_input_defaults_to_calendar() {
		let field = FieldVariant::Input(NativeAttrs::new().input_type("date"));
		assert_eq!(resolve_icon(None, &field), Some(IconId::CALENDAR));
	}

	#[rstest]
	#[case(FieldVariant::input())]
	#[case(FieldVariant::Input(NativeAttrs::new().input_type("email")))]
	#[case(FieldVariant::TextArea(NativeAttrs::new().input_type("date")))]
	fn test_no_icon_without_explicit_or_date(#[case] field: FieldVariant) {
		assert_eq!(resolve_icon(None, &field), None);
	}

	#[rstest]
	fn test_explicit_icon_applies_to_text_area() {
		let explicit = IconId::new("ri-edit-line").unwrap();
		assert_eq!(
			resolve_icon(Some(&explicit), &FieldVariant::text_area()),
			Some(explicit)
		);
	}
}
