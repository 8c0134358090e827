//! Dynamic field values handed to render calls

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use serde_json::Value;
use std::fmt::{self, Write};

/// A value rendered into a field, or compared against select options.
///
/// Scalars stringify the way form posts do: `Null` and `false` become an
/// empty string, `true` becomes `1`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
	#[default]
	Null,
	Text(String),
	Integer(i64),
	Float(f64),
	Bool(bool),
	Date(NaiveDate),
	DateTime(NaiveDateTime),
	/// Date-time that keeps its UTC offset, so `%z` patterns can format it
	ZonedDateTime(DateTime<FixedOffset>),
	List(Vec<FieldValue>),
}

/// Numeric reading of a value for loose comparison
#[derive(Debug, Clone, Copy)]
enum Number {
	Integer(i64),
	Float(f64),
}

impl Number {
	fn equals(self, other: Number) -> bool {
		match (self, other) {
			(Self::Integer(left), Self::Integer(right)) => left == right,
			(left, right) => left.as_f64() == right.as_f64(),
		}
	}

	fn as_f64(self) -> f64 {
		match self {
			Self::Integer(n) => n as f64,
			Self::Float(f) => f,
		}
	}
}

impl FieldValue {
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Whether the value is a date or date-time
	pub fn is_temporal(&self) -> bool {
		matches!(
			self,
			Self::Date(_) | Self::DateTime(_) | Self::ZonedDateTime(_)
		)
	}

	/// Render as text, formatting dates with the given strftime pattern
	///
	/// Fails only when `format` is not a valid strftime pattern.
	///
	/// # Examples
	///
	/// ```
	/// use chrono::NaiveDate;
	/// use formmaker_builder::FieldValue;
	///
	/// let date = FieldValue::from(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
	/// assert_eq!(date.to_text_with_format("%Y-%m-%d").unwrap(), "2024-03-09");
	/// assert_eq!(date.to_text_with_format("%d/%m/%Y").unwrap(), "09/03/2024");
	/// assert!(date.to_text_with_format("%Q").is_err());
	/// ```
	pub fn to_text_with_format(&self, format: &str) -> Result<String, fmt::Error> {
		let mut out = String::new();
		match self {
			Self::Date(date) => write!(out, "{}", date.format(format))?,
			Self::DateTime(datetime) => write!(out, "{}", datetime.format(format))?,
			Self::ZonedDateTime(datetime) => write!(out, "{}", datetime.format(format))?,
			Self::List(items) => {
				let rendered = items
					.iter()
					.map(|item| item.to_text_with_format(format))
					.collect::<Result<Vec<_>, _>>()?;
				out.push_str(&rendered.join(","));
			}
			_ => out.push_str(&self.to_text()),
		}
		Ok(out)
	}

	/// Render as text, formatting dates as ISO year-month-day
	pub fn to_text(&self) -> String {
		match self {
			Self::Null => String::new(),
			Self::Text(s) => s.clone(),
			Self::Integer(n) => n.to_string(),
			Self::Float(f) => f.to_string(),
			Self::Bool(true) => "1".to_string(),
			Self::Bool(false) => String::new(),
			Self::Date(date) => date.to_string(),
			Self::DateTime(datetime) => datetime.date().to_string(),
			Self::ZonedDateTime(datetime) => datetime.date_naive().to_string(),
			Self::List(items) => items
				.iter()
				.map(FieldValue::to_text)
				.collect::<Vec<_>>()
				.join(","),
		}
	}

	/// Strict comparison: same variant and same payload
	pub fn strictly_equals(&self, other: &FieldValue) -> bool {
		self == other
	}

	/// Loose comparison used for membership checks
	///
	/// Two numeric-looking values compare by number, anything else by its
	/// rendered text. Integers compare exactly; `NaN` and `inf` spellings are
	/// not numeric.
	///
	/// # Examples
	///
	/// ```
	/// use formmaker_builder::FieldValue;
	///
	/// assert!(FieldValue::from("1").loosely_equals(&FieldValue::from(1)));
	/// assert!(FieldValue::from("1.0").loosely_equals(&FieldValue::from(1)));
	/// assert!(!FieldValue::from("abc").loosely_equals(&FieldValue::from(0)));
	/// assert!(FieldValue::from("NaN").loosely_equals(&FieldValue::from("NaN")));
	/// ```
	pub fn loosely_equals(&self, other: &FieldValue) -> bool {
		match (self.as_number(), other.as_number()) {
			(Some(left), Some(right)) => left.equals(right),
			_ => self.to_text() == other.to_text(),
		}
	}

	/// Whether this is a list holding an item loosely equal to `needle`
	pub fn contains(&self, needle: &FieldValue) -> bool {
		match self {
			Self::List(items) => items.iter().any(|item| item.loosely_equals(needle)),
			_ => false,
		}
	}

	pub fn as_list(&self) -> Option<&[FieldValue]> {
		match self {
			Self::List(items) => Some(items),
			_ => None,
		}
	}

	fn as_number(&self) -> Option<Number> {
		match self {
			Self::Integer(n) => Some(Number::Integer(*n)),
			Self::Float(f) if f.is_finite() => Some(Number::Float(*f)),
			Self::Text(s) => {
				let s = s.trim();
				if let Ok(n) = s.parse::<i64>() {
					return Some(Number::Integer(n));
				}
				// Rust also parses `NaN`, `inf` and `infinity`; a numeric
				// string needs at least one digit.
				if !s.bytes().any(|b| b.is_ascii_digit()) {
					return None;
				}
				s.parse::<f64>()
					.ok()
					.filter(|f| f.is_finite())
					.map(Number::Float)
			}
			_ => None,
		}
	}
}

impl From<&str> for FieldValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for FieldValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&String> for FieldValue {
	fn from(value: &String) -> Self {
		Self::Text(value.clone())
	}
}

macro_rules! impl_from_integer {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for FieldValue {
				fn from(value: $ty) -> Self {
					Self::Integer(i64::from(value))
				}
			}
		)*
	};
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for FieldValue {
	fn from(value: f32) -> Self {
		Self::Float(f64::from(value))
	}
}

impl From<f64> for FieldValue {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<bool> for FieldValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<NaiveDate> for FieldValue {
	fn from(value: NaiveDate) -> Self {
		Self::Date(value)
	}
}

impl From<NaiveDateTime> for FieldValue {
	fn from(value: NaiveDateTime) -> Self {
		Self::DateTime(value)
	}
}

impl<Tz: TimeZone> From<DateTime<Tz>> for FieldValue {
	fn from(value: DateTime<Tz>) -> Self {
		Self::ZonedDateTime(value.fixed_offset())
	}
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
	fn from(values: Vec<T>) -> Self {
		Self::List(values.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

impl From<Value> for FieldValue {
	fn from(value: Value) -> Self {
		match value {
			Value::Null => Self::Null,
			Value::Bool(b) => Self::Bool(b),
			Value::Number(n) => match n.as_i64() {
				Some(i) => Self::Integer(i),
				None => Self::Float(n.as_f64().unwrap_or_default()),
			},
			Value::String(s) => Self::Text(s),
			Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
			Value::Object(map) => Self::Text(Value::Object(map).to_string()),
		}
	}
}

impl From<&Value> for FieldValue {
	fn from(value: &Value) -> Self {
		Self::from(value.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(FieldValue::Null, "")]
	#[case(FieldValue::from("red"), "red")]
	#[case(FieldValue::from(42), "42")]
	#[case(FieldValue::from(1.5), "1.5")]
	#[case(FieldValue::from(true), "1")]
	#[case(FieldValue::from(false), "")]
	#[case(FieldValue::from(vec!["a", "b"]), "a,b")]
	fn test_to_text(#[case] value: FieldValue, #[case] expected: &str) {
		assert_eq!(value.to_text(), expected);
	}

	#[rstest]
	fn test_datetime_formatting() {
		// Arrange
		let datetime = NaiveDate::from_ymd_opt(2025, 10, 10)
			.unwrap()
			.and_hms_opt(14, 30, 0)
			.unwrap();
		let value = FieldValue::from(datetime);

		// Act + Assert
		assert!(value.is_temporal());
		assert_eq!(value.to_text(), "2025-10-10");
		assert_eq!(value.to_text_with_format("%H:%M").unwrap(), "14:30");
	}

	#[rstest]
	fn test_zoned_datetime_keeps_offset() {
		// Arrange
		let offset = FixedOffset::east_opt(2 * 3600).unwrap();
		let moment = offset.with_ymd_and_hms(2025, 6, 1, 9, 15, 0).unwrap();

		// Act
		let value = FieldValue::from(moment);

		// Assert
		assert!(value.is_temporal());
		assert_eq!(value.to_text(), "2025-06-01");
		assert_eq!(
			value.to_text_with_format("%Y-%m-%dT%H:%M%:z").unwrap(),
			"2025-06-01T09:15+02:00"
		);
		assert_eq!(value.to_text_with_format("%z").unwrap(), "+0200");
	}

	#[rstest]
	#[case("NaN", "NaN", true)]
	#[case("NaN", "nan", false)]
	#[case("inf", "infinity", false)]
	#[case("inf", "inf", true)]
	#[case("-inf", "-Infinity", false)]
	#[case("1e3", "1000", true)]
	#[case(" 7 ", "7", true)]
	#[case("1.0", "1", true)]
	fn test_loose_equality_of_text(#[case] left: &str, #[case] right: &str, #[case] expected: bool) {
		assert_eq!(
			FieldValue::from(left).loosely_equals(&FieldValue::from(right)),
			expected
		);
	}

	#[rstest]
	fn test_loose_equality_keeps_large_integers_exact() {
		// Arrange
		let id = FieldValue::from(9_007_199_254_740_993_i64);
		let neighbour = FieldValue::from(9_007_199_254_740_992_i64);

		// Act + Assert
		assert!(!id.loosely_equals(&neighbour));
		assert!(!id.loosely_equals(&FieldValue::from("9007199254740992")));
		assert!(id.loosely_equals(&FieldValue::from("9007199254740993")));
	}

	#[rstest]
	fn test_non_finite_floats_compare_as_text() {
		assert!(!FieldValue::Float(f64::NAN).loosely_equals(&FieldValue::from(0)));
		assert!(FieldValue::Float(f64::INFINITY).loosely_equals(&FieldValue::from("inf")));
	}

	#[rstest]
	fn test_strict_equality_distinguishes_types() {
		assert!(FieldValue::from("1").strictly_equals(&FieldValue::from("1")));
		assert!(!FieldValue::from("1").strictly_equals(&FieldValue::from(1)));
	}

	#[rstest]
	fn test_contains_uses_loose_comparison() {
		// Arrange
		let selected = FieldValue::from(vec![1, 3]);

		// Act + Assert
		assert!(selected.contains(&FieldValue::from("3")));
		assert!(!selected.contains(&FieldValue::from("2")));
		assert!(!FieldValue::from("3").contains(&FieldValue::from("3")));
	}

	#[rstest]
	fn test_from_json() {
		// Arrange
		let value = json!(["x", 2, null]);

		// Act
		let converted = FieldValue::from(value);

		// Assert
		assert_eq!(
			converted,
			FieldValue::List(vec![
				FieldValue::from("x"),
				FieldValue::Integer(2),
				FieldValue::Null,
			])
		);
	}

	#[rstest]
	fn test_from_option() {
		assert_eq!(FieldValue::from(None::<&str>), FieldValue::Null);
		assert_eq!(FieldValue::from(Some("a")), FieldValue::from("a"));
	}
}
