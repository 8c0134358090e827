//! Error types for field rendering, relationship lookups and settings

use thiserror::Error;

/// Errors raised while rendering a field.
#[derive(Debug, Error)]
pub enum RenderError {
	/// A required option was not supplied.
	#[error("Missing required option: {0}")]
	MissingOption(&'static str),

	/// A related record lacks the property named by `model_options`.
	#[error("Related record has no `{field}` property (used as option {role})")]
	MissingRecordField {
		/// Property that was looked up.
		field: String,
		/// Either `label` or `value`.
		role: &'static str,
	},

	/// The date format pattern could not be applied.
	#[error("Invalid date format: {0}")]
	InvalidFormat(String),

	/// A relationship select was rendered without a resolver.
	#[error("No relationship resolver configured")]
	NoResolver,

	/// The requested rendering path does not exist yet.
	#[error("Not implemented: {0}")]
	Unimplemented(&'static str),

	/// Fetching related records failed.
	#[error(transparent)]
	Relationship(#[from] RelationshipError),
}

/// Errors reported by a relationship resolver or record source.
#[derive(Debug, Error)]
pub enum RelationshipError {
	/// No record source is registered under the identifier.
	#[error("Model not found: {0}")]
	ModelNotFound(String),

	/// The record source does not support the fetch method.
	#[error("Unknown method `{method}` on model {model}")]
	UnknownMethod {
		/// Model identifier.
		model: String,
		/// Requested method.
		method: String,
	},

	/// The data layer failed while fetching.
	#[error("Fetch error: {0}")]
	Fetch(String),
}

/// Errors raised while loading builder settings.
#[derive(Debug, Error)]
pub enum SettingsError {
	/// Settings file could not be read.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// Settings file is not valid TOML for [`BuilderSettings`](crate::BuilderSettings).
	#[error("Parse error: {0}")]
	Parse(#[from] toml::de::Error),

	/// A setting holds an unusable value.
	#[error("Invalid setting {field}: {message}")]
	Invalid {
		/// Setting name.
		field: &'static str,
		/// What is wrong with it.
		message: String,
	},
}

/// Result type alias for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Result type alias for relationship lookups.
pub type RelationshipResult<T> = Result<T, RelationshipError>;

/// Result type alias for settings loading.
pub type SettingsResult<T> = Result<T, SettingsError>;
