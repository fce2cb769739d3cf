//! DSFR components.
//!
//! # Examples
//!
//! ```
//! use dsfr::components::Component;
//! use dsfr::components::input::{Input, InputProps};
//!
//! let page = Input::new(InputProps::new("Name")).render();
//! assert!(page.find_by_tag("label").is_some());
//! ```

pub use dsfr_components::*;
