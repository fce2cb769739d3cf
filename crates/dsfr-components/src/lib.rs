//! # DSFR Components
//!
//! Accessible form components for the DSFR design system, rendered to the
//! [`dsfr_core::page::Page`] element tree.
//!
//! ## Components
//!
//! - [`Input`]: labelled single-line input or text area with optional hint,
//!   icon and success/error message.
//!
//! ## Building props
//!
//! Props can be built in code with the typed builder, where invalid shapes do
//! not compile, or read from a JSON document with [`InputProps::from_json`],
//! where they are rejected with an [`InputError`].
//!
//! ```
//! use dsfr_components::prelude::*;
//!
//! let bio = Input::from_json(
//! 	r#"{"label": "Bio", "isTextArea": true, "hintText": "Max 500 chars"}"#,
//! )
//! .unwrap();
//!
//! let html = bio.render().render_to_string();
//! assert!(html.contains("<textarea"));
//! assert!(html.contains(r#"<span class="fr-hint-text">Max 500 chars</span>"#));
//! assert!(!html.contains("<p"));
//! ```

pub mod component;
pub mod error;
pub mod input;

pub use component::Component;
pub use error::{InputError, Result};
pub use input::{
	ClassOverrides, FieldVariant, IconId, Input, InputConfig, InputProps, NativeAttrs, Validation,
	ValidationKind,
};

/// Commonly used types.
pub mod prelude {
	pub use crate::component::Component;
	pub use crate::error::{InputError, Result};
	pub use crate::input::{
		ClassOverrides, FieldVariant, IconId, Input, InputConfig, InputProps, NativeAttrs,
		Validation, ValidationKind,
	};
	pub use dsfr_core::page::{IntoPage, Page, PageElement};
}
