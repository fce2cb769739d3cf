//! # DSFR Core
//!
//! Building blocks shared by the DSFR component crates:
//!
//! - [`page`]: the server-rendered element tree (`Page`, `PageElement`,
//!   `IntoPage`) that components produce.
//! - [`class_names`]: the design-system class resolver ([`fr_cx`]) and the
//!   class-string merge utility ([`cx`]).
//!
//! ## Example
//!
//! ```
//! use dsfr_core::class_names::{cx, fr_cx};
//! use dsfr_core::page::{IntoPage, PageElement};
//!
//! let class = cx([
//! 	Some(fr_cx([Some("fr-input-group"), None])),
//! 	Some("my-group".to_string()),
//! ]);
//!
//! let html = PageElement::new("div")
//! 	.attr("class", class)
//! 	.child("Hello")
//! 	.into_page()
//! 	.render_to_string();
//!
//! assert_eq!(html, r#"<div class="fr-input-group my-group">Hello</div>"#);
//! ```

pub mod class_names;
pub mod page;

pub use class_names::{cx, fr_cx};
pub use page::{IntoPage, Page, PageElement};
