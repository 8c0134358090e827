//! Typed option bag passed to every render call

use crate::attributes::{AttributeMap, AttributeValue};
use crate::relationship::RecordSource;
use crate::value::FieldValue;
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Names of the record properties used as option label and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelOptions {
	pub label: String,
	pub value: String,
}

impl ModelOptions {
	pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			value: value.into(),
		}
	}
}

/// Model backing a relationship select
#[derive(Clone)]
pub enum ModelRef {
	/// Identifier resolved by the builder's [`RelationshipResolver`](crate::RelationshipResolver)
	Named(String),
	/// Already-constructed record source, used as is
	Source(Arc<dyn RecordSource>),
}

impl ModelRef {
	pub fn source(source: impl RecordSource + 'static) -> Self {
		Self::Source(Arc::new(source))
	}

	/// Identifier used in logs and error messages
	pub fn model_id(&self) -> &str {
		match self {
			Self::Named(id) => id,
			Self::Source(source) => source.model_id(),
		}
	}
}

impl fmt::Debug for ModelRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Named(id) => f.debug_tuple("Named").field(id).finish(),
			Self::Source(source) => f.debug_tuple("Source").field(&source.model_id()).finish(),
		}
	}
}

impl From<&str> for ModelRef {
	fn from(id: &str) -> Self {
		Self::Named(id.to_string())
	}
}

impl From<String> for ModelRef {
	fn from(id: String) -> Self {
		Self::Named(id)
	}
}

impl From<Arc<dyn RecordSource>> for ModelRef {
	fn from(source: Arc<dyn RecordSource>) -> Self {
		Self::Source(source)
	}
}

/// Configuration of a single rendered field
///
/// Two attribute maps are kept apart, matching how each field kind reads its
/// options:
/// - [`attrs`](Self::attrs) holds the top-level options (`id`, `class`,
///   `type` and any unknown key). `input`, `submit` and `button` render
///   them as tag attributes.
/// - [`attributes`](Self::attributes) is the nested map rendered by
///   textareas, selects, checkboxes, radios and custom file inputs.
///
/// # Examples
///
/// ```
/// use formmaker_builder::FieldOptions;
///
/// let options = FieldOptions::new()
/// 	.id("color")
/// 	.attribute("class", "form-select")
/// 	.option("Red", "red")
/// 	.option("Blue", "blue");
///
/// assert_eq!(options.get_id(), Some("color"));
/// assert_eq!(options.options.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldOptions {
	/// Top-level options rendered as attributes by `input` and `button`
	pub attrs: AttributeMap,
	/// Nested attribute map
	pub attributes: AttributeMap,
	/// Select choices, label to value, in display order
	pub options: IndexMap<String, FieldValue>,
	/// strftime pattern for date values
	pub format: Option<String>,
	/// Custom file inputs accept several files
	pub multiple: bool,
	pub model: Option<ModelRef>,
	/// Fetch method for relationship selects
	pub method: Option<String>,
	/// Parameters handed to the fetch method
	pub params: Option<Value>,
	pub model_options: Option<ModelOptions>,
}

impl FieldOptions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set a top-level attribute
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
		self.attrs.insert(name, value);
		self
	}

	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.attrs.insert("id", id.into());
		self
	}

	pub fn class(mut self, class: impl Into<AttributeValue>) -> Self {
		self.attrs.insert("class", class);
		self
	}

	/// Set the top-level `type` option (used by buttons)
	pub fn button_type(mut self, button_type: impl Into<String>) -> Self {
		self.attrs.insert("type", button_type.into());
		self
	}

	/// Set an entry of the nested attribute map
	pub fn attribute(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
		self.attributes.insert(name, value);
		self
	}

	/// Replace the nested attribute map
	pub fn attributes(mut self, attributes: AttributeMap) -> Self {
		self.attributes = attributes;
		self
	}

	/// Add a select choice; an existing label is overwritten in place
	pub fn option(mut self, label: impl Into<String>, value: impl Into<FieldValue>) -> Self {
		self.options.insert(label.into(), value.into());
		self
	}

	pub fn choices<L, V>(mut self, choices: impl IntoIterator<Item = (L, V)>) -> Self
	where
		L: Into<String>,
		V: Into<FieldValue>,
	{
		self.options.extend(
			choices
				.into_iter()
				.map(|(label, value)| (label.into(), value.into())),
		);
		self
	}

	pub fn format(mut self, format: impl Into<String>) -> Self {
		self.format = Some(format.into());
		self
	}

	pub fn multiple(mut self, multiple: bool) -> Self {
		self.multiple = multiple;
		self
	}

	pub fn model(mut self, model: impl Into<ModelRef>) -> Self {
		self.model = Some(model.into());
		self
	}

	pub fn method(mut self, method: impl Into<String>) -> Self {
		self.method = Some(method.into());
		self
	}

	pub fn params(mut self, params: Value) -> Self {
		self.params = Some(params);
		self
	}

	pub fn model_options(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
		self.model_options = Some(ModelOptions::new(label, value));
		self
	}

	/// The top-level `id` option, when it is text
	pub fn get_id(&self) -> Option<&str> {
		match self.attrs.get("id") {
			Some(AttributeValue::Text(id)) => Some(id),
			_ => None,
		}
	}
}
