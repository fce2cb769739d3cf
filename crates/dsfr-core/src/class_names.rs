//! Class-name utilities.
//!
//! Two small collaborators that every DSFR component uses to build its
//! `class` attributes:
//!
//! - [`fr_cx`] resolves design-system tokens into a class string. Absent
//!   (conditionally disabled) tokens contribute nothing.
//! - [`cx`] merges several class strings, some possibly absent, into one
//!   whitespace-normalized string without duplicates.
//!
//! ```
//! use dsfr_core::class_names::{cx, fr_cx};
//!
//! let disabled = true;
//! let group = fr_cx([
//! 	Some("fr-input-group"),
//! 	disabled.then_some("fr-input-group--disabled"),
//! ]);
//! assert_eq!(group, "fr-input-group fr-input-group--disabled");
//!
//! let merged = cx([Some(group), Some("  extra  fr-input-group ".to_string()), None]);
//! assert_eq!(merged, "fr-input-group fr-input-group--disabled extra");
//! ```

/// Joins the present design-system tokens with single spaces.
///
/// Tokens are emitted in the given order. `None` and empty tokens are skipped.
pub fn fr_cx<'a, I>(tokens: I) -> String
where
	I: IntoIterator<Item = Option<&'a str>>,
{
	tokens
		.into_iter()
		.flatten()
		.filter(|token| !token.is_empty())
		.collect::<Vec<_>>()
		.join(" ")
}

/// Merges class strings into a single deduplicated class string.
///
/// Each input may hold several whitespace-separated classes. The output keeps
/// the first occurrence of every class, in input order, separated by a single
/// space.
pub fn cx<I, S>(parts: I) -> String
where
	I: IntoIterator<Item = Option<S>>,
	S: AsRef<str>,
{
	let mut merged: Vec<String> = Vec::new();
	for part in parts.into_iter().flatten() {
		for class in part.as_ref().split_whitespace() {
			if !merged.iter().any(|existing| existing == class) {
				merged.push(class.to_string());
			}
		}
	}
	merged.join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::rstest;

	#[rstest]
	fn test_fr_cx_skips_absent_tokens() {
		assert_eq!(
			fr_cx([Some("fr-input"), None, Some("fr-input--error")]),
			"fr-input fr-input--error"
		);
	}

	#[rstest]
	fn test_fr_cx_all_absent_is_empty() {
		assert_eq!(fr_cx([None, None]), "");
	}

	#[rstest]
	fn test_fr_cx_skips_empty_tokens() {
		assert_eq!(fr_cx([Some(""), Some("fr-label")]), "fr-label");
	}

	#[rstest]
	#[case(vec![Some("a b"), Some("b c")], "a b c")]
	#[case(vec![Some("  a\t\nb  "), None], "a b")]
	#[case(vec![None, None], "")]
	#[case(vec![Some("fr-input"), Some("fr-input")], "fr-input")]
	#[case(vec![Some(""), Some("x")], "x")]
	fn test_cx_merges(#[case] parts: Vec<Option<&str>>, #[case] expected: &str) {
		assert_eq!(cx(parts), expected);
	}

	#[rstest]
	fn test_cx_accepts_owned_strings() {
		let base = fr_cx([Some("fr-label")]);
		assert_eq!(cx([Some(base), Some("custom".to_string())]), "fr-label custom");
	}

	proptest! {
		#[test]
		fn prop_cx_output_has_no_duplicates(parts in proptest::collection::vec(proptest::option::of("[a-c ]{0,8}"), 0..6)) {
			let merged = cx(parts);
			let classes: Vec<&str> = merged.split(' ').filter(|c| !c.is_empty()).collect();
			let mut deduped = classes.clone();
			deduped.sort_unstable();
			deduped.dedup();
			prop_assert_eq!(classes.len(), deduped.len());
			prop_assert!(!merged.starts_with(' ') && !merged.ends_with(' '));
			prop_assert!(!merged.contains("  "));
		}
	}
}
