//! Element tree and class-name utilities.
//!
//! # Examples
//!
//! ```
//! use dsfr::core::page::{IntoPage, PageElement};
//!
//! let page = PageElement::new("p").child("hi").into_page();
//! assert_eq!(page.render_to_string(), "<p>hi</p>");
//! ```

pub use dsfr_core::*;
