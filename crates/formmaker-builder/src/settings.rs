//! Builder settings
//!
//! Settings can be built in code or loaded from a TOML document:
//!
//! ```toml
//! date_format = "%d/%m/%Y"
//! file_label = "Browse"
//! default_method = "all"
//! escape_values = true
//! ```

use crate::error::{SettingsError, SettingsResult};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Date pattern used when neither the field nor the settings provide one
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Label text of the custom file input
pub const DEFAULT_FILE_LABEL: &str = "Choose file";

/// Fetch method used for relationship selects without an explicit method
pub const DEFAULT_FETCH_METHOD: &str = "all";

/// Settings shared by every render call of a [`FieldBuilder`](crate::FieldBuilder)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderSettings {
	/// strftime pattern applied to date values when the field has no `format`
	pub date_format: String,

	/// Text of the label rendered next to custom file inputs
	pub file_label: String,

	/// Fetch method for relationship selects without an explicit `method`
	pub default_method: String,

	/// Escape names, values, option labels and element text.
	///
	/// Off by default: those parts are emitted as given and callers must
	/// sanitize them. Attribute maps are always escaped.
	pub escape_values: bool,
}

impl Default for BuilderSettings {
	fn default() -> Self {
		Self {
			date_format: DEFAULT_DATE_FORMAT.to_string(),
			file_label: DEFAULT_FILE_LABEL.to_string(),
			default_method: DEFAULT_FETCH_METHOD.to_string(),
			escape_values: false,
		}
	}
}

impl BuilderSettings {
	/// Parse settings from a TOML document; missing keys keep their defaults
	///
	/// # Examples
	///
	/// ```
	/// use formmaker_builder::BuilderSettings;
	///
	/// let settings = BuilderSettings::from_toml_str("escape_values = true").unwrap();
	/// assert!(settings.escape_values);
	/// assert_eq!(settings.date_format, "%Y-%m-%d");
	/// ```
	pub fn from_toml_str(source: &str) -> SettingsResult<Self> {
		let settings: Self = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Load settings from a TOML file
	pub fn from_file(path: impl AsRef<Path>) -> SettingsResult<Self> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path)?;
		let settings = Self::from_toml_str(&source)?;
		tracing::debug!(path = %path.display(), "loaded builder settings");
		Ok(settings)
	}

	pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
		self.date_format = format.into();
		self
	}

	pub fn with_file_label(mut self, label: impl Into<String>) -> Self {
		self.file_label = label.into();
		self
	}

	pub fn with_default_method(mut self, method: impl Into<String>) -> Self {
		self.default_method = method.into();
		self
	}

	pub fn with_escape_values(mut self, escape: bool) -> Self {
		self.escape_values = escape;
		self
	}

	/// Check that the date pattern parses and the fetch method is non-empty
	pub fn validate(&self) -> SettingsResult<()> {
		if !is_valid_date_format(&self.date_format) {
			return Err(SettingsError::Invalid {
				field: "date_format",
				message: format!("`{}` is not a valid strftime pattern", self.date_format),
			});
		}
		if self.default_method.trim().is_empty() {
			return Err(SettingsError::Invalid {
				field: "default_method",
				message: "must not be empty".to_string(),
			});
		}
		Ok(())
	}
}

/// Whether `format` is a strftime pattern chrono can apply
pub fn is_valid_date_format(format: &str) -> bool {
	StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}
