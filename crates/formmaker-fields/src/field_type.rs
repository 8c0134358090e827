//! Field type descriptors
//!
//! A field type names a kind of form control, the HTML `type` it renders with
//! and a sample value expression that scaffolding tools use to seed
//! placeholder data. [`FieldType::sample_value`] produces such a value
//! directly using `fake`.

use chrono::NaiveDate;
use fake::Fake;
use fake::faker::boolean::en::Boolean;
use fake::faker::internet::en::{Password as FakePassword, SafeEmail};
use fake::faker::lorem::en::{Paragraph, Word};
use fake::faker::phone_number::en::PhoneNumber;
use formmaker_builder::{FieldKind, FieldValue};

/// A named field type
pub trait FieldType: Send + Sync {
	/// Registry name, e.g. `"range"`
	fn name(&self) -> &'static str;

	/// Value of the rendered `type` attribute
	fn input_type(&self) -> &'static str;

	/// Faker expression describing sample data, e.g. `"numberBetween(1, 10)"`
	fn sample_value_expression(&self) -> Option<&'static str> {
		None
	}

	/// Generate a sample value matching [`sample_value_expression`](Self::sample_value_expression)
	fn sample_value(&self) -> FieldValue {
		FieldValue::Null
	}

	/// Builder routine used to render this field
	fn kind(&self) -> FieldKind {
		FieldKind::Input(self.input_type().to_string())
	}
}

/// Slider input over a bounded integer range
///
/// # Examples
///
/// ```
/// use formmaker_fields::{FieldType, Range};
///
/// assert_eq!(Range.input_type(), "range");
/// assert_eq!(Range.sample_value_expression(), Some("numberBetween(1, 10)"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Range;

impl FieldType for Range {
	fn name(&self) -> &'static str {
		"range"
	}

	fn input_type(&self) -> &'static str {
		"range"
	}

	fn sample_value_expression(&self) -> Option<&'static str> {
		Some("numberBetween(1, 10)")
	}

	fn sample_value(&self) -> FieldValue {
		FieldValue::Integer((1i64..11).fake())
	}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Text;

impl FieldType for Text {
	fn name(&self) -> &'static str {
		"text"
	}

	fn input_type(&self) -> &'static str {
		"text"
	}

	fn sample_value_expression(&self) -> Option<&'static str> {
		Some("word")
	}

	fn sample_value(&self) -> FieldValue {
		FieldValue::Text(Word().fake())
	}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Email;

impl FieldType for Email {
	fn name(&self) -> &'static str {
		"email"
	}

	fn input_type(&self) -> &'static str {
		"email"
	}

	fn sample_value_expression(&self) -> Option<&'static str> {
		Some("safeEmail")
	}

	fn sample_value(&self) -> FieldValue {
		FieldValue::Text(SafeEmail().fake())
	}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Password;

impl FieldType for Password {
	fn name(&self) -> &'static str {
		"password"
	}

	fn input_type(&self) -> &'static str {
		"password"
	}

	fn sample_value_expression(&self) -> Option<&'static str> {
		Some("password")
	}

	fn sample_value(&self) -> FieldValue {
		FieldValue::Text(FakePassword(8..16).fake())
	}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Number;

impl FieldType for Number {
	fn name(&self) -> &'static str {
		"number"
	}

	fn input_type(&self) -> &'static str {
		"number"
	}

	fn sample_value_expression(&self) -> Option<&'static str> {
		Some("randomNumber()")
	}

	fn sample_value(&self) -> FieldValue {
		FieldValue::Integer((0i64..1_000_000).fake())
	}
}

/// Calendar date input
///
/// Samples fall between 2000-01-01 and the last day of 2030.
#[derive(Debug, Clone, Copy, Default)]
pub struct Date;

impl FieldType for Date {
	fn name(&self) -> &'static str {
		"date"
	}

	fn input_type(&self) -> &'static str {
		"date"
	}

	fn sample_value_expression(&self) -> Option<&'static str> {
		Some("date()")
	}

	fn sample_value(&self) -> FieldValue {
		let year: i32 = (2000..2031).fake();
		let ordinal: u32 = (1..366).fake();
		NaiveDate::from_yo_opt(year, ordinal)
			.map(FieldValue::Date)
			.unwrap_or_default()
	}
}

/// Color picker; samples are `#rrggbb` strings
#[derive(Debug, Clone, Copy, Default)]
pub struct Color;

impl FieldType for Color {
	fn name(&self) -> &'static str {
		"color"
	}

	fn input_type(&self) -> &'static str {
		"color"
	}

	fn sample_value_expression(&self) -> Option<&'static str> {
		Some("hexColor")
	}

	fn sample_value(&self) -> FieldValue {
		let rgb: u32 = (0u32..0x0100_0000).fake();
		FieldValue::Text(format!("#{rgb:06x}"))
	}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Telephone;

impl FieldType for Telephone {
	fn name(&self) -> &'static str {
		"tel"
	}

	fn input_type(&self) -> &'static str {
		"tel"
	}

	fn sample_value_expression(&self) -> Option<&'static str> {
		Some("phoneNumber")
	}

	fn sample_value(&self) -> FieldValue {
		FieldValue::Text(PhoneNumber().fake())
	}
}

/// Multi-line text, rendered with `<textarea>`
#[derive(Debug, Clone, Copy, Default)]
pub struct TextArea;

impl FieldType for TextArea {
	fn name(&self) -> &'static str {
		"textarea"
	}

	fn input_type(&self) -> &'static str {
		"textarea"
	}

	fn sample_value_expression(&self) -> Option<&'static str> {
		Some("paragraph")
	}

	fn sample_value(&self) -> FieldValue {
		FieldValue::Text(Paragraph(1..3).fake())
	}

	fn kind(&self) -> FieldKind {
		FieldKind::Textarea
	}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Checkbox;

impl FieldType for Checkbox {
	fn name(&self) -> &'static str {
		"checkbox"
	}

	fn input_type(&self) -> &'static str {
		"checkbox"
	}

	fn sample_value_expression(&self) -> Option<&'static str> {
		Some("boolean")
	}

	fn sample_value(&self) -> FieldValue {
		FieldValue::Bool(Boolean(50).fake())
	}

	fn kind(&self) -> FieldKind {
		FieldKind::Checkbox
	}
}

/// Hidden input; no sample data
#[derive(Debug, Clone, Copy, Default)]
pub struct Hidden;

impl FieldType for Hidden {
	fn name(&self) -> &'static str {
		"hidden"
	}

	fn input_type(&self) -> &'static str {
		"hidden"
	}
}
