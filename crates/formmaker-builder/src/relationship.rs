//! Record sources for relationship selects
//!
//! A relationship select fills its choices from records owned by an
//! external data layer. The builder only needs two things from it:
//!
//! - a [`RecordSource`] that returns records for a named fetch method
//! - a [`RelationshipResolver`] that turns a model identifier into records
//!
//! [`ModelRegistry`] is the stock resolver: it maps identifiers to registered
//! sources. [`InMemorySource`] serves fixed record sets, mostly for tests and
//! fixtures.

use crate::error::{RelationshipError, RelationshipResult};
use crate::options::ModelRef;
use crate::value::FieldValue;
use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// A record whose properties can be read by name
pub trait RelatedRecord: Send + Sync {
	fn get_field(&self, name: &str) -> Option<FieldValue>;
}

impl RelatedRecord for Map<String, Value> {
	fn get_field(&self, name: &str) -> Option<FieldValue> {
		self.get(name).map(FieldValue::from)
	}
}

impl RelatedRecord for Value {
	fn get_field(&self, name: &str) -> Option<FieldValue> {
		self.as_object().and_then(|object| object.get_field(name))
	}
}

impl RelatedRecord for HashMap<String, FieldValue> {
	fn get_field(&self, name: &str) -> Option<FieldValue> {
		self.get(name).cloned()
	}
}

impl RelatedRecord for IndexMap<String, FieldValue> {
	fn get_field(&self, name: &str) -> Option<FieldValue> {
		self.get(name).cloned()
	}
}

/// Records returned by a fetch
pub type Records = Vec<Box<dyn RelatedRecord>>;

/// An already-resolved handle on a model's records
#[async_trait]
pub trait RecordSource: Send + Sync {
	/// Model identifier, e.g. `"blog.Category"`
	fn model_id(&self) -> &str;

	/// Run the named fetch method, with parameters when given
	async fn fetch(&self, method: &str, params: Option<&Value>) -> RelationshipResult<Records>;
}

/// Resolves models and fetches their records
#[async_trait]
pub trait RelationshipResolver: Send + Sync {
	async fn fetch(
		&self,
		model: &ModelRef,
		method: &str,
		params: Option<&Value>,
	) -> RelationshipResult<Records>;
}

/// Resolver backed by a table of registered record sources
///
/// An already-constructed [`ModelRef::Source`] is fetched directly without a
/// table lookup.
///
/// # Examples
///
/// ```
/// use formmaker_builder::relationship::{InMemorySource, ModelRegistry};
/// use serde_json::json;
///
/// let registry = ModelRegistry::new().with_source(
/// 	InMemorySource::new("blog.Category").with_method("all", vec![json!({"id": 1, "name": "News"})]),
/// );
/// assert!(registry.contains("blog.Category"));
/// ```
#[derive(Default, Clone)]
pub struct ModelRegistry {
	sources: IndexMap<String, Arc<dyn RecordSource>>,
}

impl ModelRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a source under its model identifier, replacing an earlier one
	pub fn register(&mut self, source: impl RecordSource + 'static) {
		let source: Arc<dyn RecordSource> = Arc::new(source);
		self.sources.insert(source.model_id().to_string(), source);
	}

	pub fn with_source(mut self, source: impl RecordSource + 'static) -> Self {
		self.register(source);
		self
	}

	pub fn get(&self, model_id: &str) -> Option<Arc<dyn RecordSource>> {
		self.sources.get(model_id).cloned()
	}

	pub fn contains(&self, model_id: &str) -> bool {
		self.sources.contains_key(model_id)
	}

	pub fn model_ids(&self) -> Vec<String> {
		self.sources.keys().cloned().collect()
	}

	pub fn len(&self) -> usize {
		self.sources.len()
	}

	pub fn is_empty(&self) -> bool {
		self.sources.is_empty()
	}
}

#[async_trait]
impl RelationshipResolver for ModelRegistry {
	async fn fetch(
		&self,
		model: &ModelRef,
		method: &str,
		params: Option<&Value>,
	) -> RelationshipResult<Records> {
		let source = match model {
			ModelRef::Source(source) => Arc::clone(source),
			ModelRef::Named(id) => self
				.get(id)
				.ok_or_else(|| RelationshipError::ModelNotFound(id.clone()))?,
		};
		source.fetch(method, params).await
	}
}

/// Record source serving fixed JSON records per fetch method
///
/// When parameters are given as a JSON object, only records whose
/// properties equal every parameter are returned.
#[derive(Debug, Clone)]
pub struct InMemorySource {
	model_id: String,
	methods: IndexMap<String, Vec<Value>>,
}

impl InMemorySource {
	pub fn new(model_id: impl Into<String>) -> Self {
		Self {
			model_id: model_id.into(),
			methods: IndexMap::new(),
		}
	}

	pub fn with_method(mut self, method: impl Into<String>, records: Vec<Value>) -> Self {
		self.methods.insert(method.into(), records);
		self
	}
}

#[async_trait]
impl RecordSource for InMemorySource {
	fn model_id(&self) -> &str {
		&self.model_id
	}

	async fn fetch(&self, method: &str, params: Option<&Value>) -> RelationshipResult<Records> {
		let records = self
			.methods
			.get(method)
			.ok_or_else(|| RelationshipError::UnknownMethod {
				model: self.model_id.clone(),
				method: method.to_string(),
			})?;

		let filter = match params {
			None | Some(Value::Null) => None,
			Some(Value::Object(filter)) => Some(filter),
			Some(other) => {
				return Err(RelationshipError::Fetch(format!(
					"parameters for {} must be an object, got {other}",
					self.model_id
				)));
			}
		};

		Ok(records
			.iter()
			.filter(|record| {
				filter.is_none_or(|filter| {
					filter
						.iter()
						.all(|(key, expected)| record.get(key) == Some(expected))
				})
			})
			.map(|record| Box::new(record.clone()) as Box<dyn RelatedRecord>)
			.collect())
	}
}
