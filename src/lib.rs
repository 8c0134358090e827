//! # formmaker
//!
//! HTML form field rendering for server-side templates.
//!
//! formmaker renders form controls from a field name, a value and a typed
//! option bag. Attribute maps are serialized with boolean, class-list and raw
//! fragment rules; selects can draw their choices from an external data layer
//! through an async resolver.
//!
//! ## Feature Flags
//!
//! - `builder` - Attribute serialization and field rendering
//! - `fields` - Field type descriptors and their registry (implies `builder`)
//! - `full` (default) - Everything
//!
//! ## Quick Example
//!
//! ```
//! use formmaker::builder::{FieldBuilder, FieldOptions};
//!
//! let builder = FieldBuilder::new();
//! let html = builder.button("Go", &FieldOptions::new());
//! assert_eq!(html.as_str(), r#"<button type="button">Go</button>"#);
//! ```

#[cfg(feature = "builder")]
pub mod builder;

#[cfg(feature = "fields")]
pub mod fields;

/// Commonly used items
#[cfg(feature = "builder")]
pub mod prelude {
	pub use crate::builder::{
		AttributeMap, AttributeValue, BuilderSettings, FieldBuilder, FieldKind, FieldOptions,
		FieldValue, Html, ModelOptions, ModelRef, ModelRegistry, RecordSource, RelatedRecord,
		RelationshipResolver, RenderError, RenderResult,
	};

	#[cfg(feature = "fields")]
	pub use crate::fields::{FieldType, FieldTypeRegistry};
}
