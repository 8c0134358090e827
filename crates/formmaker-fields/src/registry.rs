//! Field type registry
//!
//! Ordered lookup table of [`FieldType`] descriptors by name. The shared
//! [`global`] registry holds the built-in types and is initialised on first
//! use.

use crate::field_type::{
	Checkbox, Color, Date, Email, FieldType, Hidden, Number, Password, Range, Telephone, Text,
	TextArea,
};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::Arc;

static GLOBAL_REGISTRY: Lazy<FieldTypeRegistry> = Lazy::new(FieldTypeRegistry::with_builtins);

/// Returns the shared registry of built-in field types.
pub fn global() -> &'static FieldTypeRegistry {
	&GLOBAL_REGISTRY
}

/// Field types keyed by name, in registration order
#[derive(Clone, Default)]
pub struct FieldTypeRegistry {
	types: IndexMap<&'static str, Arc<dyn FieldType>>,
}

impl FieldTypeRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a registry holding every built-in field type.
	///
	/// # Examples
	///
	/// ```
	/// use formmaker_fields::FieldTypeRegistry;
	///
	/// let registry = FieldTypeRegistry::with_builtins();
	/// assert_eq!(registry.input_type("range"), Some("range"));
	/// assert_eq!(registry.input_type("tel"), Some("tel"));
	/// ```
	pub fn with_builtins() -> Self {
		let mut registry = Self::new();
		registry.register(Text);
		registry.register(Email);
		registry.register(Password);
		registry.register(Number);
		registry.register(Range);
		registry.register(Date);
		registry.register(Color);
		registry.register(Telephone);
		registry.register(TextArea);
		registry.register(Checkbox);
		registry.register(Hidden);
		registry
	}

	/// Registers a field type under its name.
	///
	/// An earlier descriptor with the same name is replaced in place.
	pub fn register(&mut self, field_type: impl FieldType + 'static) {
		let name = field_type.name();
		if self.types.insert(name, Arc::new(field_type)).is_some() {
			tracing::debug!(field_type = name, "replaced registered field type");
		}
	}

	pub fn with(mut self, field_type: impl FieldType + 'static) -> Self {
		self.register(field_type);
		self
	}

	pub fn get(&self, name: &str) -> Option<Arc<dyn FieldType>> {
		self.types.get(name).cloned()
	}

	/// Input type of the named field type
	pub fn input_type(&self, name: &str) -> Option<&'static str> {
		self.types.get(name).map(|field_type| field_type.input_type())
	}

	pub fn contains(&self, name: &str) -> bool {
		self.types.contains_key(name)
	}

	pub fn names(&self) -> Vec<&'static str> {
		self.types.keys().copied().collect()
	}

	pub fn len(&self) -> usize {
		self.types.len()
	}

	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}
}

impl fmt::Debug for FieldTypeRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FieldTypeRegistry")
			.field("types", &self.names())
			.finish()
	}
}
