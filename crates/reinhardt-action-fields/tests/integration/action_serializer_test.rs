//! Action dependent field selection through `ActionSerializer`

use crate::fixtures::{
	MalformedConfigUserSerializer, NoActionConfigUserSerializer, UserSerializer, list_context,
	retrieve_context, user_declared_fields, user_field_names,
};
use reinhardt_action_fields::prelude::*;
use rstest::rstest;
use std::sync::Arc;
use std::thread;

/// Test the list action keeps the declared fields and has no `fullname`
#[rstest]
fn test_list_action_uses_declared_fields(list_context: SerializerContext) {
	// Arrange
	let serializer = ActionSerializer::new(UserSerializer, list_context).unwrap();

	// Act
	let names = serializer.get_field_names().unwrap();
	let fields = serializer.get_fields();

	// Assert
	assert_eq!(names, user_field_names());
	assert!(!names.contains(&"fullname".to_string()));
	assert_eq!(fields, user_declared_fields());
}

/// Test the retrieve action shows `fullname` and hides `username`
#[rstest]
fn test_retrieve_action_displays_fullname_and_no_username(retrieve_context: SerializerContext) {
	// Arrange
	let serializer = ActionSerializer::new(UserSerializer, retrieve_context).unwrap();

	// Act
	let names = serializer.get_field_names().unwrap();
	let fields = serializer.get_fields();

	// Assert
	assert_eq!(names, vec!["email", "fullname"]);
	let mut expected = user_declared_fields();
	expected.insert(
		"fullname".to_string(),
		FieldDefinition::method().with_method_name("get_fullname"),
	);
	assert_eq!(fields, expected);
}

/// Test the selected fields are emitted in configured order with definitions
#[rstest]
fn test_retrieve_action_selected_fields(retrieve_context: SerializerContext) {
	let serializer = ActionSerializer::new(UserSerializer, retrieve_context).unwrap();

	let fields = serializer.fields().unwrap();

	let names: Vec<&str> = fields.iter().map(|(name, _)| name.as_str()).collect();
	assert_eq!(names, vec!["email", "fullname"]);
	assert!(fields[1].1.is_read_only());
}

/// Test a serializer used by hand, outside of any view, keeps its defaults
#[rstest]
fn test_no_view_passed_to_serializer() {
	let serializer = ActionSerializer::new(UserSerializer, SerializerContext::new()).unwrap();

	let names = serializer.get_field_names().unwrap();

	assert!(names.contains(&"username".to_string()));
	assert_eq!(serializer.get_fields(), user_declared_fields());
}

/// Test a view dispatched without an action keeps the defaults
#[rstest]
fn test_view_without_action_uses_defaults() {
	let context = SerializerContext::new().with_view(ViewContext::default());
	let serializer = ActionSerializer::new(UserSerializer, context).unwrap();

	assert_eq!(serializer.get_field_names().unwrap(), user_field_names());
}

/// Test a serializer without `action_fields_map` always keeps its defaults
#[rstest]
#[case(Action::list())]
#[case(Action::retrieve())]
#[case(Action::create())]
#[case(Action::custom("recent"))]
fn test_no_action_fields_map_provided(#[case] action: Action) {
	let serializer = ActionSerializer::new(
		NoActionConfigUserSerializer,
		SerializerContext::with_action(action),
	)
	.unwrap();

	assert!(serializer.resolver().action_fields_map().is_none());
	assert_eq!(serializer.get_field_names().unwrap(), user_field_names());
	assert_eq!(serializer.get_fields(), user_declared_fields());
}

/// Test a configuration that fails to load makes construction fail
#[rstest]
fn test_malformed_config_fails_at_construction(retrieve_context: SerializerContext) {
	// Act
	let result = ActionSerializer::new(MalformedConfigUserSerializer, retrieve_context);

	// Assert
	match result {
		Err(ActionFieldsError::ConfigurationShape { path, expected, .. }) => {
			assert_eq!(path, "action_fields_map.retrieve.fields");
			assert_eq!(expected, "a sequence");
		}
		other => panic!("expected a configuration shape error, got {:?}", other),
	}
}

/// Test repeated resolution returns identical results
#[rstest]
fn test_resolution_is_idempotent(retrieve_context: SerializerContext) {
	let serializer = ActionSerializer::new(UserSerializer, retrieve_context).unwrap();

	let first = (serializer.get_field_names().unwrap(), serializer.get_fields());
	let second = (serializer.get_field_names().unwrap(), serializer.get_fields());

	assert_eq!(first, second);
	let loaded = UserSerializer::action_fields_map().unwrap();
	assert_eq!(serializer.resolver().action_fields_map(), loaded.as_ref());
}

/// Test one validated resolver can serve concurrent requests
#[rstest]
fn test_shared_resolver_across_threads() {
	let resolver =
		Arc::new(FieldResolver::new(UserSerializer::action_fields_map().unwrap()).unwrap());

	let handles: Vec<_> = ["list", "retrieve", "create", "retrieve"]
		.into_iter()
		.map(|action| {
			let resolver = Arc::clone(&resolver);
			thread::spawn(move || {
				let serializer = ActionSerializer::with_resolver(
					UserSerializer,
					SerializerContext::with_action(Action::from_name(action)),
					resolver,
				);
				(action, serializer.get_field_names().unwrap())
			})
		})
		.collect();

	for handle in handles {
		let (action, names) = handle.join().unwrap();
		if action == "retrieve" {
			assert_eq!(names, vec!["email", "fullname"]);
		} else {
			assert_eq!(names, user_field_names());
		}
	}
}

/// Test an exclusion missing from `fields` surfaces while resolving names
#[rstest]
fn test_exclusion_mismatch_surfaces_on_resolution() {
	let map = ActionFieldsMap::new().with_action(
		"retrieve",
		FieldConfig::new()
			.with_fields(["username", "email"])
			.with_exclude(["phone"]),
	);
	let serializer = ActionSerializer::with_resolver(
		UserSerializer,
		SerializerContext::with_action(Action::retrieve()),
		Arc::new(FieldResolver::new(Some(map)).unwrap()),
	);

	let error = serializer.get_field_names().unwrap_err();

	assert_eq!(
		error,
		ActionFieldsError::ExclusionMismatch {
			action: "retrieve".to_string(),
			field: "phone".to_string(),
		}
	);
	// Definitions do not depend on `exclude`
	assert_eq!(serializer.get_fields(), user_declared_fields());
}
