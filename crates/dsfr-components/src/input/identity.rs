//! Field identity and accessibility wiring.
//!
//! Each mounted [`Input`](super::Input) takes one id from a process-wide
//! counter when it is created. The message id is derived from the field id
//! with a fixed suffix, whatever the validation kind, so `aria-describedby`
//! stays stable while the message comes and goes.

use std::sync::atomic::{AtomicU64, Ordering};

/// Prefix of generated field ids.
pub const INPUT_ID_PREFIX: &str = "input-";

/// Suffix appended to the field id to form the message id.
pub const MESSAGE_ID_SUFFIX: &str = "-desc-error";

/// Global counter for generating unique field ids.
static INPUT_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Allocates a fresh field id.
///
/// Every call returns a different value for the lifetime of the process.
pub fn generate_input_id() -> String {
	let n = INPUT_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
	let id = format!("{INPUT_ID_PREFIX}{n}");
	tracing::trace!(input_id = %id, "allocated input id");
	id
}

/// Picks the field id: the caller's native id when given, else the generated one.
pub fn resolve_field_id<'a>(caller_id: Option<&'a str>, generated_id: &'a str) -> &'a str {
	caller_id.unwrap_or(generated_id)
}

/// Ids used to wire the label, the field and the message together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIdentity {
	field_id: String,
	message_id: String,
}

impl FieldIdentity {
	/// Resolves the identity of a field.
	///
	/// A caller-supplied native id takes precedence over the generated one.
	///
	/// # Examples
	///
	/// ```
	/// use dsfr_components::input::FieldIdentity;
	///
	/// let identity = FieldIdentity::resolve(None, "input-7");
	/// assert_eq!(identity.field_id(), "input-7");
	/// assert_eq!(identity.message_id(), "input-7-desc-error");
	///
	/// let identity = FieldIdentity::resolve(Some("email"), "input-7");
	/// assert_eq!(identity.message_id(), "email-desc-error");
	/// ```
	pub fn resolve(caller_id: Option<&str>, generated_id: &str) -> Self {
		let field_id = resolve_field_id(caller_id, generated_id).to_string();
		let message_id = format!("{field_id}{MESSAGE_ID_SUFFIX}");
		Self {
			field_id,
			message_id,
		}
	}

	/// Id of the `<input>` / `<textarea>`, targeted by the label's `for`.
	pub fn field_id(&self) -> &str {
		&self.field_id
	}

	/// Id of the validation message, targeted by `aria-describedby`.
	pub fn message_id(&self) -> &str {
		&self.message_id
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::rstest;
	use std::collections::HashSet;

	#[rstest]
	fn test_generated_ids_are_prefixed_and_distinct() {
		let ids: Vec<String> = (0..100).map(|_| generate_input_id()).collect();
		assert!(ids.iter().all(|id| id.starts_with(INPUT_ID_PREFIX)));
		let unique: HashSet<_> = ids.iter().collect();
		assert_eq!(unique.len(), ids.len());
	}

	#[rstest]
	fn test_generated_ids_are_distinct_across_threads() {
		let handles: Vec<_> = (0..4)
			.map(|_| std::thread::spawn(|| (0..50).map(|_| generate_input_id()).collect::<Vec<_>>()))
			.collect();
		let ids: Vec<String> = handles
			.into_iter()
			.flat_map(|h| h.join().unwrap())
			.collect();
		let unique: HashSet<_> = ids.iter().collect();
		assert_eq!(unique.len(), 200);
	}

	#[rstest]
	fn test_resolve_uses_generated_id_by_default() {
		let identity = FieldIdentity::resolve(None, "input-3");
		assert_eq!(identity.field_id(), "input-3");
		assert_eq!(identity.message_id(), "input-3-desc-error");
	}

	#[rstest]
	fn test_resolve_prefers_caller_id() {
		let identity = FieldIdentity::resolve(Some("user-email"), "input-3");
		assert_eq!(identity.field_id(), "user-email");
		assert_eq!(identity.message_id(), "user-email-desc-error");
	}

	proptest! {
		#[test]
		fn prop_message_id_is_field_id_with_suffix(caller in proptest::option::of("[a-z][a-z0-9-]{0,12}")) {
			let identity = FieldIdentity::resolve(caller.as_deref(), "input-0");
			prop_assert_eq!(
				identity.message_id(),
				format!("{}-desc-error", identity.field_id())
			);
		}
	}
}
