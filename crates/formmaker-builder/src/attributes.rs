//! Ordered HTML attribute maps and their serialization
//!
//! An [`AttributeMap`] keeps entries in insertion order, since the order
//! appears verbatim in the rendered tag. Keys are either named attributes or
//! positional slots holding already-formed fragments such as
//! `data-toggle="tooltip"`.

use crate::html::escape_once;
use indexmap::IndexMap;
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Key of an attribute map entry
///
/// Deserialized keys made only of ASCII digits, such as `"0"`, are
/// positional; map keys in JSON and TOML are always strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeKey {
	/// Auto-numbered slot whose value is emitted verbatim
	Positional(usize),
	Named(String),
}

impl AttributeKey {
	pub fn as_name(&self) -> Option<&str> {
		match self {
			Self::Named(name) => Some(name),
			Self::Positional(_) => None,
		}
	}
}

impl From<&str> for AttributeKey {
	fn from(name: &str) -> Self {
		Self::Named(name.to_string())
	}
}

impl Serialize for AttributeKey {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::Positional(position) => serializer.collect_str(position),
			Self::Named(name) => serializer.serialize_str(name),
		}
	}
}

impl<'de> Deserialize<'de> for AttributeKey {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_any(KeyVisitor)
	}
}

struct KeyVisitor;

impl Visitor<'_> for KeyVisitor {
	type Value = AttributeKey;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("an attribute name or a position")
	}

	fn visit_u64<E: de::Error>(self, position: u64) -> Result<Self::Value, E> {
		usize::try_from(position)
			.map(AttributeKey::Positional)
			.map_err(E::custom)
	}

	fn visit_i64<E: de::Error>(self, position: i64) -> Result<Self::Value, E> {
		usize::try_from(position)
			.map(AttributeKey::Positional)
			.map_err(E::custom)
	}

	fn visit_str<E: de::Error>(self, key: &str) -> Result<Self::Value, E> {
		if !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()) {
			key.parse()
				.map(AttributeKey::Positional)
				.map_err(E::custom)
		} else {
			Ok(AttributeKey::Named(key.to_string()))
		}
	}
}

impl From<String> for AttributeKey {
	fn from(name: String) -> Self {
		Self::Named(name)
	}
}

/// Value of an attribute map entry
///
/// Numbers read from config are kept as their text, the way `From<i32>`
/// stores them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
	#[default]
	Null,
	Bool(bool),
	Text(String),
	List(Vec<String>),
}

impl AttributeValue {
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Text form used when the value is written as `key="..."`
	fn to_attribute_text(&self) -> String {
		match self {
			Self::Null => String::new(),
			Self::Bool(b) => b.to_string(),
			Self::Text(s) => s.clone(),
			Self::List(items) => items.join(" "),
		}
	}
}

impl<'de> Deserialize<'de> for AttributeValue {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_any(ValueVisitor)
	}
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
	type Value = AttributeValue;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("null, a boolean, a string, a number or a list of strings")
	}

	fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
		Ok(AttributeValue::Null)
	}

	fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
		Ok(AttributeValue::Null)
	}

	fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
		AttributeValue::deserialize(deserializer)
	}

	fn visit_bool<E: de::Error>(self, flag: bool) -> Result<Self::Value, E> {
		Ok(AttributeValue::Bool(flag))
	}

	fn visit_i64<E: de::Error>(self, n: i64) -> Result<Self::Value, E> {
		Ok(AttributeValue::Text(n.to_string()))
	}

	fn visit_u64<E: de::Error>(self, n: u64) -> Result<Self::Value, E> {
		Ok(AttributeValue::Text(n.to_string()))
	}

	fn visit_f64<E: de::Error>(self, n: f64) -> Result<Self::Value, E> {
		Ok(AttributeValue::Text(n.to_string()))
	}

	fn visit_str<E: de::Error>(self, text: &str) -> Result<Self::Value, E> {
		Ok(AttributeValue::Text(text.to_string()))
	}

	fn visit_string<E: de::Error>(self, text: String) -> Result<Self::Value, E> {
		Ok(AttributeValue::Text(text))
	}

	fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
		let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
		while let Some(item) = seq.next_element::<AttributeValue>()? {
			match item {
				AttributeValue::Text(text) => items.push(text),
				other => {
					return Err(de::Error::custom(format!(
						"list items must be strings or numbers, got {other:?}"
					)));
				}
			}
		}
		Ok(AttributeValue::List(items))
	}
}

impl From<&str> for AttributeValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<bool> for AttributeValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i64> for AttributeValue {
	fn from(value: i64) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<i32> for AttributeValue {
	fn from(value: i32) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<Vec<String>> for AttributeValue {
	fn from(values: Vec<String>) -> Self {
		Self::List(values)
	}
}

impl From<Vec<&str>> for AttributeValue {
	fn from(values: Vec<&str>) -> Self {
		Self::List(values.into_iter().map(str::to_string).collect())
	}
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

/// Insertion-ordered attribute map
///
/// # Examples
///
/// ```
/// use formmaker_builder::AttributeMap;
///
/// let attrs = AttributeMap::new()
/// 	.with("id", "email")
/// 	.with("required", true)
/// 	.with("class", vec!["form-control", "is-valid"]);
///
/// assert_eq!(attrs.to_html(), r#" id="email" required class="form-control is-valid""#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeMap {
	entries: IndexMap<AttributeKey, AttributeValue>,
}

impl AttributeMap {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set a named attribute, replacing an existing value in place
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
		self.entries
			.insert(AttributeKey::Named(name.into()), value.into());
	}

	/// Builder-style [`insert`](Self::insert)
	pub fn with(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
		self.insert(name, value);
		self
	}

	/// Append an already-formed fragment that is emitted verbatim
	pub fn push_raw(&mut self, fragment: impl Into<String>) {
		let position = self.next_free_position();
		self.entries.insert(
			AttributeKey::Positional(position),
			AttributeValue::Text(fragment.into()),
		);
	}

	/// Builder-style [`push_raw`](Self::push_raw)
	pub fn with_raw(mut self, fragment: impl Into<String>) -> Self {
		self.push_raw(fragment);
		self
	}

	pub fn get(&self, name: &str) -> Option<&AttributeValue> {
		self.entries.get(&AttributeKey::from(name))
	}

	/// Whether a named attribute is set to a non-null value
	pub fn is_set(&self, name: &str) -> bool {
		self.get(name).is_some_and(|value| !value.is_null())
	}

	pub fn contains_key(&self, name: &str) -> bool {
		self.entries.contains_key(&AttributeKey::from(name))
	}

	/// Remove a named attribute, keeping the order of the remaining entries
	pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
		self.entries.shift_remove(&AttributeKey::from(name))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&AttributeKey, &AttributeValue)> {
		self.entries.iter()
	}

	/// Serialize to an attribute string, see [`serialize`]
	pub fn to_html(&self) -> String {
		serialize(self)
	}

	fn next_free_position(&self) -> usize {
		self.entries
			.keys()
			.filter_map(|key| match key {
				AttributeKey::Positional(position) => Some(position + 1),
				AttributeKey::Named(_) => None,
			})
			.max()
			.unwrap_or(0)
	}
}

impl<K, V> FromIterator<(K, V)> for AttributeMap
where
	K: Into<String>,
	V: Into<AttributeValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut map = Self::new();
		for (name, value) in iter {
			map.insert(name, value);
		}
		map
	}
}

/// Serialize attributes into a string that can follow a tag name directly
///
/// Each entry yields at most one fragment:
/// - positional entries are emitted verbatim
/// - booleans emit the bare key when `true` and nothing when `false`, except
///   under the `value` key where they are written out as text
/// - a list under `class` becomes `class="a b"`
/// - any other non-null value becomes `key="value"`, escaped once
///
/// The fragments are joined by single spaces and the whole string gets one
/// leading space; an empty map yields an empty string.
///
/// # Examples
///
/// ```
/// use formmaker_builder::{AttributeMap, serialize};
///
/// assert_eq!(serialize(&AttributeMap::new()), "");
/// assert_eq!(serialize(&AttributeMap::new().with("foo", true)), " foo");
/// assert_eq!(serialize(&AttributeMap::new().with("foo", false)), "");
/// assert_eq!(serialize(&AttributeMap::new().with("value", false)), r#" value="false""#);
/// ```
pub fn serialize(attributes: &AttributeMap) -> String {
	let fragments: Vec<String> = attributes
		.iter()
		.filter_map(|(key, value)| attribute_element(key, value))
		.filter(|fragment| !fragment.is_empty())
		.collect();

	if fragments.is_empty() {
		String::new()
	} else {
		format!(" {}", fragments.join(" "))
	}
}

fn attribute_element(key: &AttributeKey, value: &AttributeValue) -> Option<String> {
	let name = match key {
		AttributeKey::Positional(_) => return Some(value.to_attribute_text()),
		AttributeKey::Named(name) => name,
	};

	match value {
		AttributeValue::Null => None,
		AttributeValue::Bool(flag) if name != "value" => flag.then(|| name.clone()),
		AttributeValue::List(classes) if name == "class" => Some(format!(
			r#"class="{}""#,
			classes
				.iter()
				.map(|class| escape_once(class))
				.collect::<Vec<_>>()
				.join(" ")
		)),
		other => Some(format!(
			r#"{}="{}""#,
			name,
			escape_once(&other.to_attribute_text())
		)),
	}
}
