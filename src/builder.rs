//! Field rendering module.
//!
//! Attribute serialization, field markup and relationship selects.
//!
//! # Examples
//!
//! ```
//! use formmaker::builder::{AttributeMap, serialize};
//!
//! let attrs = AttributeMap::new().with("required", true).with("class", vec!["a", "b"]);
//! assert_eq!(serialize(&attrs), r#" required class="a b""#);
//! ```

#[cfg(feature = "builder")]
pub use formmaker_builder::*;
