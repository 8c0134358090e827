//! HTML escaping and the safe markup type returned by the field builder

use std::fmt;

/// Escape HTML special characters
///
/// Every `&` is escaped, including ones that already start an entity.
///
/// # Examples
///
/// ```
/// use formmaker_builder::html::escape;
///
/// assert_eq!(escape("5 < 10 & 10 > 5"), "5 &lt; 10 &amp; 10 &gt; 5");
/// assert_eq!(escape("&amp;"), "&amp;amp;");
/// ```
pub fn escape(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		push_escaped(&mut result, ch);
	}
	result
}

/// Escape HTML special characters without double-encoding existing entities
///
/// An `&` that begins a known named (`&amp;`), decimal (`&#39;`) or
/// hexadecimal (`&#x27;`) entity is kept as is; everything else is escaped
/// like [`escape`], including look-alikes such as `&Jerry;`.
///
/// # Examples
///
/// ```
/// use formmaker_builder::html::escape_once;
///
/// assert_eq!(escape_once(r#"say "hi""#), "say &quot;hi&quot;");
/// assert_eq!(escape_once("Tom &amp; Jerry"), "Tom &amp; Jerry");
/// assert_eq!(escape_once("Tom & Jerry"), "Tom &amp; Jerry");
/// assert_eq!(escape_once("&#x27;quoted&#39;"), "&#x27;quoted&#39;");
/// assert_eq!(escape_once("Tom &Jerry; x"), "Tom &amp;Jerry; x");
/// ```
pub fn escape_once(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for (index, ch) in text.char_indices() {
		if ch == '&' && starts_entity(&text[index + 1..]) {
			result.push('&');
		} else {
			push_escaped(&mut result, ch);
		}
	}
	result
}

fn push_escaped(result: &mut String, ch: char) {
	match ch {
		'&' => result.push_str("&amp;"),
		'<' => result.push_str("&lt;"),
		'>' => result.push_str("&gt;"),
		'"' => result.push_str("&quot;"),
		'\'' => result.push_str("&#x27;"),
		_ => result.push(ch),
	}
}

/// Longest entity body looked at after an `&`
const MAX_ENTITY_LEN: usize = 32;

/// Whether `rest` (the text right after an `&`) completes a known entity reference.
fn starts_entity(rest: &str) -> bool {
	let Some(end) = rest
		.char_indices()
		.take(MAX_ENTITY_LEN + 1)
		.find_map(|(index, c)| (c == ';').then_some(index))
	else {
		return false;
	};
	let body = &rest[..end];

	if let Some(numeric) = body.strip_prefix('#') {
		return match numeric.strip_prefix(['x', 'X']) {
			Some(hex) => !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()),
			None => !numeric.is_empty() && numeric.chars().all(|c| c.is_ascii_digit()),
		};
	}

	if body.is_empty() || !body.chars().all(|c| c.is_ascii_alphanumeric()) {
		return false;
	}
	// Legacy prefixes like `&copy` in `&copyright;` decode partially; a real
	// reference decodes to at most two characters.
	let candidate = format!("&{};", body);
	let decoded = html_escape::decode_html_entities(&candidate);
	decoded != candidate && decoded.chars().count() <= 2
}

/// Rendered markup that is already safe to embed in a page.
///
/// The host templating layer should output this verbatim instead of escaping
/// it again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Html(String);

impl Html {
	/// Wrap an already-built markup string
	///
	/// # Examples
	///
	/// ```
	/// use formmaker_builder::Html;
	///
	/// let html = Html::new("<b>Bold</b>");
	/// assert_eq!(html.as_str(), "<b>Bold</b>");
	/// ```
	pub fn new(markup: impl Into<String>) -> Self {
		Self(markup.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_string(self) -> String {
		self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Display for Html {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for Html {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl From<Html> for String {
	fn from(html: Html) -> Self {
		html.0
	}
}

impl PartialEq<str> for Html {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for Html {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("plain", "plain")]
	#[case("<script>", "&lt;script&gt;")]
	#[case(r#"a "b" 'c'"#, "a &quot;b&quot; &#x27;c&#x27;")]
	#[case("fish & chips", "fish &amp; chips")]
	#[case("&copy; 2024", "&copy; 2024")]
	#[case("&#169;", "&#169;")]
	#[case("&#xA9;", "&#xA9;")]
	#[case("&#X1f;", "&#X1f;")]
	#[case("&;", "&amp;;")]
	#[case("&#;", "&amp;#;")]
	#[case("&#x;", "&amp;#x;")]
	#[case("&#12a;", "&amp;#12a;")]
	#[case("&1abc;", "&amp;1abc;")]
	#[case("&amp", "&amp;amp")]
	#[case("trailing &", "trailing &amp;")]
	#[case("Tom &Jerry; x", "Tom &amp;Jerry; x")]
	#[case("&nbsp;&hellip;", "&nbsp;&hellip;")]
	#[case("&semi;", "&semi;")]
	#[case("&copyright;", "&amp;copyright;")]
	fn test_escape_once(#[case] input: &str, #[case] expected: &str) {
		// Act
		let escaped = escape_once(input);

		// Assert
		assert_eq!(escaped, expected);
	}

	#[rstest]
	fn test_escape_once_is_idempotent() {
		// Arrange
		let input = r#"<a href="?x=1&y=2">it's</a>"#;

		// Act
		let once = escape_once(input);
		let twice = escape_once(&once);

		// Assert
		assert_eq!(once, twice);
	}

	#[rstest]
	fn test_escape_once_bounds_entity_lookahead() {
		// Arrange
		let long_name = format!("&{};", "a".repeat(40));
		let many = "&".repeat(10_000) + ";";

		// Act
		let escaped_long = escape_once(&long_name);
		let escaped_many = escape_once(&many);

		// Assert
		assert_eq!(escaped_long, format!("&amp;{};", "a".repeat(40)));
		assert_eq!(escaped_many, "&amp;".repeat(10_000) + ";");
	}

	#[rstest]
	fn test_escape_double_encodes() {
		assert_eq!(escape("&lt;"), "&amp;lt;");
	}

	#[rstest]
	fn test_html_display_and_conversions() {
		// Arrange
		let html = Html::new("<br>");

		// Act + Assert
		assert_eq!(html.to_string(), "<br>");
		assert_eq!(html, "<br>");
		assert!(!html.is_empty());
		assert_eq!(String::from(html), "<br>");
	}
}
