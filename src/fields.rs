//! Field types module.
//!
//! Named field types with their input types and sample data.
//!
//! # Examples
//!
//! ```
//! use formmaker::fields::global;
//!
//! assert_eq!(global().input_type("range"), Some("range"));
//! ```

#[cfg(feature = "fields")]
pub use formmaker_fields::*;
