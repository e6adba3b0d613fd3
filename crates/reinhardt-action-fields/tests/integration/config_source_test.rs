//! Loading action fields maps from configuration sources

use crate::fixtures::{USER_ACTION_FIELDS, user_declared_fields, user_field_names};
use reinhardt_action_fields::prelude::*;
use rstest::rstest;
use serde_json::json;

fn user_map() -> ActionFieldsMap {
	ActionFieldsMap::from_yaml_str(USER_ACTION_FIELDS)
		.unwrap()
		.unwrap()
}

/// Test YAML, JSON and TOML sources describing the same map are equivalent
#[rstest]
fn test_sources_are_equivalent() {
	// Arrange
	let json = r#"{
		"retrieve": {
			"fields": ["username", "email", "fullname"],
			"exclude": ["username"],
			"custom_fields": {
				"fullname": {"type": "method", "method_name": "get_fullname"}
			}
		}
	}"#;
	let toml = r#"
[retrieve]
fields = ["username", "email", "fullname"]
exclude = ["username"]

[retrieve.custom_fields.fullname]
type = "method"
method_name = "get_fullname"
"#;

	// Act
	let from_json = ActionFieldsMap::from_json_str(json).unwrap().unwrap();
	let from_toml = ActionFieldsMap::from_toml_str(toml).unwrap().unwrap();

	// Assert
	assert_eq!(from_json, user_map());
	assert_eq!(from_toml, user_map());
}

/// Test the resolution scenario of a retrieve action with custom fields
#[rstest]
fn test_retrieve_scenario_from_json_value() {
	// Arrange
	let raw = json!({
		"retrieve": {
			"fields": ["username", "email", "fullname"],
			"exclude": ["username"],
			"custom_fields": { "fullname": { "type": "method" } }
		}
	});
	let map = ActionFieldsMap::from_json_value(&raw).unwrap();
	let resolver = FieldResolver::new(map).unwrap();

	// Act
	let names = resolver
		.resolve_field_names(Some("retrieve"), user_field_names)
		.unwrap();
	let fields = resolver.resolve_field_definitions(Some("retrieve"), user_declared_fields());

	// Assert
	assert_eq!(names, vec!["email", "fullname"]);
	let keys: Vec<&str> = fields.keys().map(String::as_str).collect();
	assert_eq!(
		keys,
		vec!["username", "email", "first_name", "last_name", "fullname"]
	);
	assert_eq!(fields["fullname"], FieldDefinition::method());
}

/// Test inline `[name, definition]` pairs keep their position in `fields`
#[rstest]
fn test_inline_custom_pairs_from_yaml() {
	let map = ActionFieldsMap::from_yaml_str(
		"
retrieve:
  fields:
    - username
    - email
    - first_name
    - last_name
    - [fullname, { type: method }]
  exclude: [username]
",
	)
	.unwrap();
	let resolver = FieldResolver::new(map).unwrap();

	let names = resolver
		.resolve_field_names(Some("retrieve"), user_field_names)
		.unwrap();
	let fields = resolver.resolve_field_definitions(Some("retrieve"), user_declared_fields());

	assert_eq!(names, vec!["email", "first_name", "last_name", "fullname"]);
	assert_eq!(fields.get("fullname"), Some(&FieldDefinition::method()));
}

/// Test a null source means no per-action configuration
#[rstest]
#[case("null")]
#[case("~")]
fn test_null_source_is_unconfigured(#[case] source: &str) {
	let map = ActionFieldsMap::<FieldDefinition>::from_yaml_str(source).unwrap();

	assert!(map.is_none());
}

/// Test malformed sources are rejected before any processing
#[rstest]
#[case(json!(["retrieve"]))]
#[case(json!({ "retrieve": "email" }))]
#[case(json!({ "retrieve": { "fields": "email" } }))]
#[case(json!({ "retrieve": { "fields": ["email"], "exclude": "email" } }))]
#[case(json!({ "retrieve": { "fields": ["email"], "custom_fields": ["fullname"] } }))]
fn test_rejects_malformed_json(#[case] raw: serde_json::Value) {
	let error = ActionFieldsMap::<FieldDefinition>::from_json_value(&raw).unwrap_err();

	assert!(matches!(error, ActionFieldsError::ConfigurationShape { .. }));
	assert!(error.is_configuration_error());
}

/// Test an inline custom entry that is not a pair is rejected
#[rstest]
fn test_rejects_custom_entry_of_three_elements() {
	let raw = json!({
		"retrieve": { "fields": ["email", ["fullname", { "type": "method" }, "extra"]] }
	});

	let error = ActionFieldsMap::<FieldDefinition>::from_json_value(&raw).unwrap_err();

	assert_eq!(
		error,
		ActionFieldsError::CustomFieldShape {
			action: "retrieve".to_string(),
			index: 1,
			len: 3,
		}
	);
}

/// Test an action configured without `fields` is rejected when loaded
#[rstest]
fn test_rejects_action_without_fields() {
	let error = ActionFieldsMap::<FieldDefinition>::from_yaml_str(
		"retrieve: { custom_fields: { fullname: { type: method } } }",
	)
	.unwrap_err();

	assert_eq!(
		error,
		ActionFieldsError::MissingFieldsList {
			action: "retrieve".to_string()
		}
	);
}

/// Test syntax errors are reported as parse errors
#[rstest]
#[case::yaml(ActionFieldsMap::<FieldDefinition>::from_yaml_str("retrieve: [unclosed"))]
#[case::json(ActionFieldsMap::<FieldDefinition>::from_json_str("{\"retrieve\": "))]
#[case::toml(ActionFieldsMap::<FieldDefinition>::from_toml_str("[retrieve"))]
fn test_syntax_errors(#[case] result: Result<Option<ActionFieldsMap>>) {
	assert!(matches!(result, Err(ActionFieldsError::Parse(_))));
}
