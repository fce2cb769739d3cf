//! # DSFR
//!
//! Accessible form components for the French government design system
//! (DSFR), rendered on the server to an HTML element tree.
//!
//! ## Crates
//!
//! - [`core`]: element tree ([`Page`], [`PageElement`]) and class-name helpers
//! - [`components`]: the DSFR components, starting with [`Input`]
//!
//! ## Example
//!
//! ```
//! use dsfr::prelude::*;
//!
//! let input = Input::new(
//! 	InputProps::new("Email")
//! 		.with_hint_text("name@example.com")
//! 		.with_validation(Validation::error("Required"))
//! 		.with_field(FieldVariant::Input(NativeAttrs::new().input_type("email"))),
//! );
//!
//! let html = input.render().render_to_string();
//! assert!(html.starts_with(r#"<div class="fr-input-group fr-input-group--error">"#));
//! assert!(html.contains(r#"type="email""#));
//! ```
//!
//! ## Logging
//!
//! Rendering emits `tracing` events at `debug` and `trace` level. Install any
//! `tracing` subscriber in the host application to see them.

pub mod components;
pub mod core;

pub use dsfr_components::{
	ClassOverrides, Component, FieldVariant, IconId, Input, InputConfig, InputError, InputProps,
	NativeAttrs, Validation, ValidationKind,
};
pub use dsfr_core::{IntoPage, Page, PageElement, cx, fr_cx};

/// Re-exports for building and rendering components.
pub mod prelude {
	pub use dsfr_components::prelude::*;
	pub use dsfr_core::{cx, fr_cx};
}
