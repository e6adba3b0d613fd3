//! Serializers shared by the integration tests

use indexmap::IndexMap;
use reinhardt_action_fields::prelude::*;
use rstest::fixture;

pub const USER_ACTION_FIELDS: &str = "
retrieve:
  fields: [username, email, fullname]
  exclude: [username]
  custom_fields:
    fullname: { type: method, method_name: get_fullname }
";

pub fn user_declared_fields() -> IndexMap<String, FieldDefinition> {
	IndexMap::from([
		("username".to_string(), FieldDefinition::char().max_length(150)),
		("email".to_string(), FieldDefinition::char()),
		("first_name".to_string(), FieldDefinition::char()),
		("last_name".to_string(), FieldDefinition::char()),
	])
}

pub fn user_field_names() -> Vec<String> {
	user_declared_fields().keys().cloned().collect()
}

/// User serializer with a `retrieve` specific field set
#[derive(Debug, Clone)]
pub struct UserSerializer;

impl BaseSerializer for UserSerializer {
	type Field = FieldDefinition;

	fn declared_fields(&self) -> IndexMap<String, FieldDefinition> {
		user_declared_fields()
	}

	fn action_fields_map() -> Result<Option<ActionFieldsMap>> {
		ActionFieldsMap::from_yaml_str(USER_ACTION_FIELDS)
	}
}

/// `fields` given as a scalar instead of a list
pub const MALFORMED_USER_ACTION_FIELDS: &str = "
retrieve:
  fields: email
";

/// User serializer whose action configuration does not load
#[derive(Debug, Clone)]
pub struct MalformedConfigUserSerializer;

impl BaseSerializer for MalformedConfigUserSerializer {
	type Field = FieldDefinition;

	fn declared_fields(&self) -> IndexMap<String, FieldDefinition> {
		user_declared_fields()
	}

	fn action_fields_map() -> Result<Option<ActionFieldsMap>> {
		ActionFieldsMap::from_yaml_str(MALFORMED_USER_ACTION_FIELDS)
	}
}

/// Same fields as `UserSerializer`, without per-action configuration
#[derive(Debug, Clone)]
pub struct NoActionConfigUserSerializer;

impl BaseSerializer for NoActionConfigUserSerializer {
	type Field = FieldDefinition;

	fn declared_fields(&self) -> IndexMap<String, FieldDefinition> {
		user_declared_fields()
	}
}

#[fixture]
pub fn retrieve_context() -> SerializerContext {
	SerializerContext::with_action(Action::retrieve())
}

#[fixture]
pub fn list_context() -> SerializerContext {
	SerializerContext::with_action(Action::list())
}
