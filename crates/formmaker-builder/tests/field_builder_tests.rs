//! Field builder tests
//!
//! Tests for attribute serialization and field markup through the public API

use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use formmaker_builder::{
	AttributeMap, AttributeValue, BuilderSettings, FieldBuilder, FieldKind, FieldOptions,
	FieldValue, RenderError, serialize,
};
use rstest::rstest;

#[rstest]
#[case(AttributeMap::new())]
#[case(AttributeMap::new().with("id", "a"))]
#[case(AttributeMap::new().with("hidden", true).with("title", "t"))]
#[case(AttributeMap::new().with("disabled", false))]
#[case(AttributeMap::new().with_raw("data-x=\"1\""))]
fn test_serialize_leading_space_convention(#[case] attrs: AttributeMap) {
	// Act
	let html = serialize(&attrs);

	// Assert
	if html.is_empty() {
		return;
	}
	assert!(html.starts_with(' '));
	assert!(!html.starts_with("  "));
	assert!(!html.contains("  "));
}

#[rstest]
fn test_serialize_mixed_map() {
	// Arrange
	let attrs = AttributeMap::new()
		.with("class", vec!["form-control", "is-invalid"])
		.with("required", true)
		.with("readonly", false)
		.with("value", false)
		.with("placeholder", r#"Your "name""#)
		.with("title", AttributeValue::Null)
		.with_raw("data-bs-toggle=\"tooltip\"");

	// Act
	let html = serialize(&attrs);

	// Assert
	assert_eq!(
		html,
		r#" class="form-control is-invalid" required value="false" placeholder="Your &quot;name&quot;" data-bs-toggle="tooltip""#
	);
}

#[rstest]
fn test_select_color_example() {
	// Arrange
	let builder = FieldBuilder::new();
	let options = FieldOptions::new()
		.attributes(AttributeMap::new())
		.option("Red", "red")
		.option("Blue", "blue");

	// Act
	let html = builder.select("color", "red", &options);

	// Assert
	assert_eq!(html.as_str().matches("<option").count(), 2);
	assert!(html.as_str().contains(r#"<option value="red" selected>Red</option>"#));
	assert!(!html.as_str().contains(r#"<option value="blue" selected>"#));
	let red = html.as_str().find("Red").unwrap();
	let blue = html.as_str().find("Blue").unwrap();
	assert!(red < blue);
}

#[rstest]
fn test_custom_file_example() {
	// Arrange
	let builder = FieldBuilder::new();
	let options = FieldOptions::new()
		.id("docfile")
		.attributes(AttributeMap::new());

	// Act
	let single = builder
		.custom_file("doc", FieldValue::Null, &options)
		.unwrap();
	let multiple = builder
		.custom_file("doc", FieldValue::Null, &options.clone().multiple(true))
		.unwrap();

	// Assert
	assert!(single
		.as_str()
		.contains(r#"<label class="custom-file-label" for="docfile">Choose file</label>"#));
	assert!(single.as_str().contains(r#"type="file" name="doc">"#));
	assert!(multiple.as_str().contains(r#"type="file" name="doc[]">"#));
}

#[rstest]
fn test_datetime_with_timezone_is_formatted() {
	// Arrange
	let builder = FieldBuilder::new();
	let moment = Utc.with_ymd_and_hms(2025, 1, 15, 8, 45, 0).unwrap();

	// Act
	let html = builder
		.input(
			"datetime-local",
			Some("starts_at"),
			moment,
			&FieldOptions::new().format("%Y-%m-%dT%H:%M"),
		)
		.unwrap();

	// Assert
	assert_eq!(
		html,
		r#"<input name="starts_at" type="datetime-local" value="2025-01-15T08:45">"#
	);
}

#[rstest]
fn test_datetime_offset_is_formatted() {
	// Arrange
	let builder = FieldBuilder::new();
	let offset = FixedOffset::west_opt(5 * 3600).unwrap();
	let moment = offset.with_ymd_and_hms(2025, 3, 2, 18, 0, 0).unwrap();

	// Act
	let html = builder
		.input(
			"text",
			Some("sent_at"),
			moment,
			&FieldOptions::new().format("%Y-%m-%d %H:%M %:z"),
		)
		.unwrap();

	// Assert
	assert_eq!(
		html,
		r#"<input name="sent_at" type="text" value="2025-03-02 18:00 -05:00">"#
	);
}

#[rstest]
fn test_multiple_select_treats_nan_and_inf_as_text() {
	// Arrange
	let builder = FieldBuilder::new();
	let options = FieldOptions::new()
		.attribute("multiple", true)
		.option("NaN", "NaN")
		.option("Inf", "inf");

	// Act
	let html = builder.select("reading", vec!["NaN", "infinity"], &options);

	// Assert
	assert_eq!(
		html,
		concat!(
			r#"<select multiple name="reading[]">"#,
			r#"<option value="NaN" selected>NaN</option>"#,
			r#"<option value="inf" >Inf</option>"#,
			"</select>"
		)
	);
}

#[rstest]
fn test_attributes_loaded_from_config_render() {
	// Arrange
	let attributes: AttributeMap =
		serde_json::from_str(r#"{"maxlength":20,"0":"autofocus","class":["form-control"]}"#)
			.unwrap();
	let options = FieldOptions::new().attributes(attributes);

	// Act
	let html = FieldBuilder::new().textarea("bio", "", &options);

	// Assert
	assert_eq!(
		html,
		r#"<textarea maxlength="20" autofocus class="form-control" name="bio"></textarea>"#
	);
}

#[rstest]
fn test_settings_date_format_applies_to_inputs() {
	// Arrange
	let settings = BuilderSettings::from_toml_str(r#"date_format = "%m/%d/%Y""#).unwrap();
	let builder = FieldBuilder::new().with_settings(settings);
	let date = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();

	// Act
	let html = builder
		.input("text", Some("day"), date, &FieldOptions::new())
		.unwrap();

	// Assert
	assert!(html.as_str().contains(r#"value="07/04/2025""#));
}

#[rstest]
fn test_escape_values_setting_covers_text_content() {
	// Arrange
	let builder =
		FieldBuilder::new().with_settings(BuilderSettings::default().with_escape_values(true));
	let options = FieldOptions::new().option("<b>Bold</b>", "b&w");

	// Act
	let select = builder.select("style", FieldValue::Null, &options);
	let textarea = builder.textarea("bio", "<script>", &FieldOptions::new());
	let button = builder.button("<i>Go</i>", &FieldOptions::new());

	// Assert
	assert!(select
		.as_str()
		.contains(r#"<option value="b&amp;w" >&lt;b&gt;Bold&lt;/b&gt;</option>"#));
	assert_eq!(textarea, r#"<textarea name="bio">&lt;script&gt;</textarea>"#);
	assert_eq!(button, r#"<button type="button">&lt;i&gt;Go&lt;/i&gt;</button>"#);
}

#[rstest]
fn test_text_content_passes_through_by_default() {
	// Arrange
	let builder = FieldBuilder::new();

	// Act
	let html = builder.textarea("bio", "<em>hi</em>", &FieldOptions::new());

	// Assert
	assert_eq!(html, r#"<textarea name="bio"><em>hi</em></textarea>"#);
}

#[rstest]
#[tokio::test]
async fn test_render_by_kind_name() {
	// Arrange
	let builder = FieldBuilder::new();
	let kind: FieldKind = "custom-file".parse().unwrap();

	// Act
	let missing_id = builder
		.render(&kind, "doc", FieldValue::Null, &FieldOptions::new())
		.await;
	let rendered = builder
		.render(&kind, "doc", FieldValue::Null, &FieldOptions::new().id("d"))
		.await
		.unwrap();

	// Assert
	assert!(matches!(missing_id, Err(RenderError::MissingOption("id"))));
	assert!(rendered.as_str().starts_with(r#"<div class="custom-file">"#));
}
