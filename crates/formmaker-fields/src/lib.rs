//! Field types for formmaker
//!
//! Descriptors that pair a field name with its HTML input type, a sample
//! value expression and a routine that generates sample data, plus a
//! registry to look them up by name.
//!
//! ```
//! use formmaker_fields::{FieldType, global};
//!
//! let range = global().get("range").unwrap();
//! assert_eq!(range.input_type(), "range");
//! assert_eq!(range.sample_value_expression(), Some("numberBetween(1, 10)"));
//! ```

pub mod field_type;
pub mod registry;

pub use field_type::{
	Checkbox, Color, Date, Email, FieldType, Hidden, Number, Password, Range, Telephone, Text,
	TextArea,
};
pub use registry::{FieldTypeRegistry, global};
