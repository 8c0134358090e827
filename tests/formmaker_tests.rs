//! Facade tests
//!
//! Tests that drive the re-exported API the way a host application would

use async_trait::async_trait;
use formmaker::builder::{Records, RelatedRecord, RelationshipResult};
use formmaker::fields::global;
use formmaker::prelude::*;
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::Arc;

/// Resolver that serves every model from one fixed list of countries
struct CountryResolver;

#[async_trait]
impl RelationshipResolver for CountryResolver {
	async fn fetch(
		&self,
		_model: &ModelRef,
		_method: &str,
		_params: Option<&Value>,
	) -> RelationshipResult<Records> {
		Ok(vec![
			Box::new(json!({"code": "fr", "name": "France"})) as Box<dyn RelatedRecord>,
			Box::new(json!({"code": "jp", "name": "Japan"})),
		])
	}
}

#[rstest]
#[tokio::test]
async fn test_custom_resolver_backs_relationship_select() {
	// Arrange
	let builder = FieldBuilder::new().with_resolver(Arc::new(CountryResolver));
	let options = FieldOptions::new()
		.model("geo.Country")
		.model_options("name", "code");

	// Act
	let html = builder
		.render(&FieldKind::Relationship, "country", "jp", &options)
		.await
		.unwrap();

	// Assert
	assert_eq!(
		html,
		concat!(
			r#"<select name="country">"#,
			r#"<option value="fr" >France</option>"#,
			r#"<option value="jp" selected>Japan</option>"#,
			"</select>"
		)
	);
}

#[rstest]
#[tokio::test]
async fn test_registered_field_type_renders_sample() {
	// Arrange
	let email = global().get("email").unwrap();
	let sample = email.sample_value();

	// Act
	let html = FieldBuilder::new()
		.render(&email.kind(), "contact", sample.clone(), &FieldOptions::new())
		.await
		.unwrap();

	// Assert
	assert!(html.as_str().starts_with("<input"));
	assert!(html.as_str().contains(r#"type="email""#));
	assert!(html.as_str().contains(&sample.to_text()));
}

#[rstest]
fn test_rendering_is_idempotent() {
	// Arrange
	let builder = FieldBuilder::new();
	let options = FieldOptions::new()
		.attributes(AttributeMap::new().with("class", vec!["form-select"]))
		.option("Small", "s")
		.option("Large", "l");

	// Act
	let first = builder.select("size", "l", &options);
	let second = builder.select("size", "l", &options);

	// Assert
	assert_eq!(first, second);
}

#[rstest]
#[tokio::test]
async fn test_check_input_is_reported_unimplemented() {
	// Act
	let result = FieldBuilder::new()
		.render(&FieldKind::CheckInput, "agree", true, &FieldOptions::new())
		.await;

	// Assert
	assert!(matches!(result, Err(RenderError::Unimplemented("check_input"))));
}
