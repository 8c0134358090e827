//! HTML form field rendering for server-side templates
//!
//! This crate turns a field name, a value and a typed option bag into markup:
//! - Attribute serialization with boolean, class-list and raw fragment rules
//! - Inputs, submit buttons, buttons and textareas
//! - Checkboxes and radios (plus their inline aliases)
//! - Styled custom file inputs
//! - Selects, including multiple selects
//! - Relationship selects whose choices come from an external data layer
//!
//! ```
//! use formmaker_builder::{FieldBuilder, FieldOptions};
//!
//! let builder = FieldBuilder::new();
//! let options = FieldOptions::new().option("Red", "red").option("Blue", "blue");
//!
//! let html = builder.select("color", "red", &options);
//! assert_eq!(
//! 	html.as_str(),
//! 	r#"<select name="color"><option value="red" selected>Red</option><option value="blue" >Blue</option></select>"#
//! );
//! ```

pub mod attributes;
pub mod builder;
pub mod error;
pub mod html;
pub mod options;
pub mod relationship;
pub mod settings;
pub mod value;

pub use attributes::{AttributeKey, AttributeMap, AttributeValue, serialize};
pub use builder::{FieldBuilder, FieldKind};
pub use error::{
	RelationshipError, RelationshipResult, RenderError, RenderResult, SettingsError,
	SettingsResult,
};
pub use html::Html;
pub use options::{FieldOptions, ModelOptions, ModelRef};
pub use relationship::{
	InMemorySource, ModelRegistry, RecordSource, Records, RelatedRecord, RelationshipResolver,
};
pub use settings::BuilderSettings;
pub use value::FieldValue;
