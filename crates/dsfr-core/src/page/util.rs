//! Escaping and attribute helpers used by the renderer.

use std::borrow::Cow;

/// Escapes text for use in element content and quoted attribute values.
///
/// Borrows the input when nothing needs escaping.
pub(crate) fn html_escape(s: &str) -> Cow<'_, str> {
	let Some(first) = s.find(['&', '<', '>', '"', '\'']) else {
		return Cow::Borrowed(s);
	};

	let mut out = String::with_capacity(s.len() + 16);
	out.push_str(&s[..first]);
	for c in s[first..].chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#x27;"),
			_ => out.push(c),
		}
	}
	Cow::Owned(out)
}

/// Boolean attributes of form controls and their containers.
///
/// Browsers treat any present value as true (`disabled="false"` still
/// disables), so the renderer omits these when the value is falsy.
pub const BOOLEAN_ATTRS: &[&str] = &[
	"autofocus",
	"checked",
	"disabled",
	"formnovalidate",
	"hidden",
	"inert",
	"multiple",
	"novalidate",
	"readonly",
	"required",
	"selected",
];

/// Whether a boolean attribute with this value should be emitted.
pub fn is_boolean_attr_truthy(value: &str) -> bool {
	!matches!(value, "" | "false" | "0")
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_plain_label_is_borrowed() {
		assert!(matches!(html_escape("Adresse e-mail"), Cow::Borrowed(_)));
	}

	#[rstest]
	#[case("Nom & prénom", "Nom &amp; prénom")]
	#[case("<b>Requis</b>", "&lt;b&gt;Requis&lt;/b&gt;")]
	#[case(r#"placeholder="x""#, "placeholder=&quot;x&quot;")]
	#[case("l'adresse", "l&#x27;adresse")]
	fn test_escapes_markup(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(html_escape(input), expected);
	}

	#[rstest]
	#[case("disabled", true)]
	#[case("required", true)]
	#[case("true", true)]
	#[case("", false)]
	#[case("false", false)]
	#[case("0", false)]
	fn test_boolean_attr_truthiness(#[case] value: &str, #[case] expected: bool) {
		assert_eq!(is_boolean_attr_truthy(value), expected);
	}
}
