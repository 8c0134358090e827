//! Field rendering
//!
//! [`FieldBuilder`] turns a field name, a value and [`FieldOptions`] into
//! markup. Each field kind has its own routine; [`FieldBuilder::render`]
//! dispatches on a [`FieldKind`].
//!
//! Attribute maps are always escaped. Names, values, option labels and
//! element text are emitted as given unless
//! [`BuilderSettings::escape_values`] is on, so callers must sanitize them.

use crate::attributes::serialize;
use crate::error::{RenderError, RenderResult};
use crate::html::{Html, escape_once};
use crate::options::{FieldOptions, ModelRef};
use crate::relationship::{Records, RelationshipResolver};
use crate::settings::BuilderSettings;
use crate::value::FieldValue;
use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Field archetype selected for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
	/// Plain `<input>` of the given HTML type
	Input(String),
	Submit,
	Button,
	Textarea,
	Checkbox,
	CheckboxInline,
	Radio,
	RadioInline,
	CustomFile,
	Select,
	Relationship,
	CheckInput,
}

impl FromStr for FieldKind {
	type Err = Infallible;

	/// Any name that is not a dedicated kind is taken as an input type
	///
	/// # Examples
	///
	/// ```
	/// use formmaker_builder::FieldKind;
	///
	/// assert_eq!("select".parse::<FieldKind>().unwrap(), FieldKind::Select);
	/// assert_eq!("custom-file".parse::<FieldKind>().unwrap(), FieldKind::CustomFile);
	/// assert_eq!(
	/// 	"email".parse::<FieldKind>().unwrap(),
	/// 	FieldKind::Input("email".to_string())
	/// );
	/// ```
	fn from_str(name: &str) -> Result<Self, Self::Err> {
		Ok(match name {
			"submit" => Self::Submit,
			"button" => Self::Button,
			"textarea" => Self::Textarea,
			"checkbox" => Self::Checkbox,
			"checkbox-inline" => Self::CheckboxInline,
			"radio" => Self::Radio,
			"radio-inline" => Self::RadioInline,
			"custom-file" => Self::CustomFile,
			"select" => Self::Select,
			"relationship" => Self::Relationship,
			"check-input" => Self::CheckInput,
			other => Self::Input(other.to_string()),
		})
	}
}

impl fmt::Display for FieldKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Input(input_type) => input_type.as_str(),
			Self::Submit => "submit",
			Self::Button => "button",
			Self::Textarea => "textarea",
			Self::Checkbox => "checkbox",
			Self::CheckboxInline => "checkbox-inline",
			Self::Radio => "radio",
			Self::RadioInline => "radio-inline",
			Self::CustomFile => "custom-file",
			Self::Select => "select",
			Self::Relationship => "relationship",
			Self::CheckInput => "check-input",
		};
		f.write_str(name)
	}
}

/// Renders form fields as HTML
///
/// The builder holds no per-call state; identical inputs always produce
/// identical markup.
///
/// # Examples
///
/// ```
/// use formmaker_builder::{FieldBuilder, FieldOptions};
///
/// let builder = FieldBuilder::new();
/// let html = builder.button("Go", &FieldOptions::new());
/// assert_eq!(html, r#"<button type="button">Go</button>"#);
/// ```
#[derive(Clone, Default)]
pub struct FieldBuilder {
	settings: BuilderSettings,
	resolver: Option<Arc<dyn RelationshipResolver>>,
}

impl fmt::Debug for FieldBuilder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FieldBuilder")
			.field("settings", &self.settings)
			.field("resolver", &self.resolver.is_some())
			.finish()
	}
}

impl FieldBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_settings(mut self, settings: BuilderSettings) -> Self {
		self.settings = settings;
		self
	}

	/// Resolver used for relationship selects whose model is an identifier
	pub fn with_resolver(mut self, resolver: Arc<dyn RelationshipResolver>) -> Self {
		self.resolver = Some(resolver);
		self
	}

	pub fn settings(&self) -> &BuilderSettings {
		&self.settings
	}

	/// Render a field of the given kind
	pub async fn render(
		&self,
		kind: &FieldKind,
		name: &str,
		value: impl Into<FieldValue>,
		options: &FieldOptions,
	) -> RenderResult<Html> {
		let value = value.into();
		tracing::debug!(field = name, kind = %kind, "rendering field");

		match kind {
			FieldKind::Input(input_type) => self.input(input_type, Some(name), value, options),
			FieldKind::Submit => self.submit(value, options),
			FieldKind::Button => Ok(self.button(value, options)),
			FieldKind::Textarea => Ok(self.textarea(name, value, options)),
			FieldKind::Checkbox => Ok(self.checkbox(name, value, options)),
			FieldKind::CheckboxInline => Ok(self.checkbox_inline(name, value, options)),
			FieldKind::Radio => Ok(self.radio(name, value, options)),
			FieldKind::RadioInline => Ok(self.radio_inline(name, value, options)),
			FieldKind::CustomFile => self.custom_file(name, value, options),
			FieldKind::Select => Ok(self.select(name, value, options)),
			FieldKind::Relationship => self.relationship_select(name, value, options).await,
			FieldKind::CheckInput => self.check_input(name, value, options),
		}
	}

	/// `<input>` of any type, with the top-level options as attributes
	///
	/// Date values are formatted with the field's `format`, falling back to
	/// the configured date format.
	pub fn input(
		&self,
		input_type: &str,
		name: Option<&str>,
		value: impl Into<FieldValue>,
		options: &FieldOptions,
	) -> RenderResult<Html> {
		let value = value.into();
		let text = if value.is_temporal() {
			let format = options
				.format
				.as_deref()
				.unwrap_or(&self.settings.date_format);
			value
				.to_text_with_format(format)
				.map_err(|_| RenderError::InvalidFormat(format.to_string()))?
		} else {
			value.to_text()
		};

		Ok(Html::new(format!(
			r#"<input{} name="{}" type="{}" value="{}">"#,
			serialize(&options.attrs),
			self.text(name.unwrap_or_default()),
			self.text(input_type),
			self.text(&text)
		)))
	}

	/// Submit input without a name
	pub fn submit(&self, value: impl Into<FieldValue>, options: &FieldOptions) -> RenderResult<Html> {
		self.input("submit", None, value, options)
	}

	/// `<button>`, typed `button` unless the options give a `type`
	pub fn button(&self, value: impl Into<FieldValue>, options: &FieldOptions) -> Html {
		let attrs = if options.attrs.contains_key("type") {
			Cow::Borrowed(&options.attrs)
		} else {
			Cow::Owned(options.attrs.clone().with("type", "button"))
		};

		Html::new(format!(
			"<button{}>{}</button>",
			serialize(&attrs),
			self.text(&value.into().to_text())
		))
	}

	pub fn textarea(&self, name: &str, value: impl Into<FieldValue>, options: &FieldOptions) -> Html {
		Html::new(format!(
			r#"<textarea{} name="{}">{}</textarea>"#,
			serialize(&options.attributes),
			self.text(name),
			self.text(&value.into().to_text())
		))
	}

	/// Bare checkbox; `value` and `checked` come from the nested attributes
	pub fn checkbox(&self, name: &str, _value: impl Into<FieldValue>, options: &FieldOptions) -> Html {
		self.choice_input("checkbox", name, options)
	}

	/// Inline checkbox; inline only differs in styling
	pub fn checkbox_inline(
		&self,
		name: &str,
		value: impl Into<FieldValue>,
		options: &FieldOptions,
	) -> Html {
		self.checkbox(name, value, options)
	}

	/// Bare radio; `value` and `checked` come from the nested attributes
	pub fn radio(&self, name: &str, _value: impl Into<FieldValue>, options: &FieldOptions) -> Html {
		self.choice_input("radio", name, options)
	}

	/// Inline radio; inline only differs in styling
	pub fn radio_inline(
		&self,
		name: &str,
		value: impl Into<FieldValue>,
		options: &FieldOptions,
	) -> Html {
		self.radio(name, value, options)
	}

	fn choice_input(&self, input_type: &str, name: &str, options: &FieldOptions) -> Html {
		Html::new(format!(
			r#"<input{} type="{}" name="{}">"#,
			serialize(&options.attributes),
			input_type,
			self.text(name)
		))
	}

	/// Styled file input with its "Choose file" label
	///
	/// Requires the top-level `id`, which the label points at. The top-level
	/// `class` is never applied; only the nested attributes reach the input.
	pub fn custom_file(
		&self,
		name: &str,
		_value: impl Into<FieldValue>,
		options: &FieldOptions,
	) -> RenderResult<Html> {
		let id = options
			.get_id()
			.ok_or(RenderError::MissingOption("id"))?;
		let name = if options.multiple {
			format!("{name}[]")
		} else {
			name.to_string()
		};

		Ok(Html::new(format!(
			r#"<div class="custom-file"><input{} class="custom-file-input" type="file" name="{}"><label class="custom-file-label" for="{}">{}</label></div>"#,
			serialize(&options.attributes),
			self.text(&name),
			self.text(id),
			self.text(&self.settings.file_label)
		)))
	}

	/// `<select>` over the option choices
	///
	/// A choice is selected when `selected` equals its value strictly, or, in
	/// multiple mode, when `selected` is a list containing the value.
	pub fn select(&self, name: &str, selected: impl Into<FieldValue>, options: &FieldOptions) -> Html {
		let selected = selected.into();
		let multiple = options.attributes.is_set("multiple");
		let name = if multiple {
			format!("{name}[]")
		} else {
			name.to_string()
		};

		let mut choices = String::new();
		for (label, value) in &options.options {
			let mut is_selected = false;

			if multiple && selected.as_list().is_some() && selected.contains(value) {
				is_selected = true;
			}

			if selected.strictly_equals(value) {
				is_selected = true;
			}

			choices.push_str(&format!(
				r#"<option value="{}" {}>{}</option>"#,
				self.text(&value.to_text()),
				if is_selected { "selected" } else { "" },
				self.text(label)
			));
		}

		Html::new(format!(
			r#"<select{} name="{}">{}</select>"#,
			serialize(&options.attributes),
			self.text(&name),
			choices
		))
	}

	/// `<select>` whose choices come from a model's records
	///
	/// Each record contributes `record[label] => record[value]`, appended to
	/// any static choices. A label seen twice keeps its first position and
	/// takes the later value.
	pub async fn relationship_select(
		&self,
		name: &str,
		value: impl Into<FieldValue>,
		options: &FieldOptions,
	) -> RenderResult<Html> {
		let value = value.into();
		let model = options
			.model
			.as_ref()
			.ok_or(RenderError::MissingOption("model"))?;
		let model_options = options
			.model_options
			.as_ref()
			.ok_or(RenderError::MissingOption("model_options"))?;
		let method = options
			.method
			.as_deref()
			.unwrap_or(&self.settings.default_method);

		let records = self
			.fetch_records(model, method, options.params.as_ref())
			.await?;

		let mut populated = options.clone();
		for record in records {
			let label = record
				.get_field(&model_options.label)
				.ok_or_else(|| RenderError::MissingRecordField {
					field: model_options.label.clone(),
					role: "label",
				})?
				.to_text();
			let option_value =
				record
					.get_field(&model_options.value)
					.ok_or_else(|| RenderError::MissingRecordField {
						field: model_options.value.clone(),
						role: "value",
					})?;

			if let Some(previous) = populated.options.insert(label.clone(), option_value) {
				tracing::warn!(
					field = name,
					label = %label,
					previous = %previous.to_text(),
					"duplicate relationship label overwrites earlier option"
				);
			}
		}

		Ok(self.select(name, value, &populated))
	}

	/// Checked-input wrapper, not available yet
	pub fn check_input(
		&self,
		_name: &str,
		_value: impl Into<FieldValue>,
		_options: &FieldOptions,
	) -> RenderResult<Html> {
		Err(RenderError::Unimplemented("check_input"))
	}

	async fn fetch_records(
		&self,
		model: &ModelRef,
		method: &str,
		params: Option<&serde_json::Value>,
	) -> RenderResult<Records> {
		tracing::debug!(
			model = model.model_id(),
			method,
			has_params = params.is_some(),
			"fetching relationship records"
		);

		let records = match model {
			ModelRef::Source(source) => source.fetch(method, params).await?,
			ModelRef::Named(_) => {
				let resolver = self.resolver.as_ref().ok_or(RenderError::NoResolver)?;
				resolver.fetch(model, method, params).await?
			}
		};
		Ok(records)
	}

	fn text<'a>(&self, text: &'a str) -> Cow<'a, str> {
		if self.settings.escape_values {
			Cow::Owned(escape_once(text))
		} else {
			Cow::Borrowed(text)
		}
	}
}
