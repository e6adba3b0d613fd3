use thiserror::Error;

/// Errors raised while validating or resolving per-action field configuration
///
/// Every variant describes a misconfiguration of the host serializer. None of
/// them are transient, so callers should surface them at startup rather than
/// retry.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionFieldsError {
	/// A configuration node has the wrong structural type
	#[error("Invalid configuration at `{path}`: expected {expected}, got {found}")]
	ConfigurationShape {
		path: String,
		expected: &'static str,
		found: String,
	},

	/// An inline custom entry in `fields` is not a `(name, definition)` pair
	#[error(
		"Custom field entry #{index} of `{action}` must have exactly 2 elements (name, definition), got {len}"
	)]
	CustomFieldShape {
		action: String,
		index: usize,
		len: usize,
	},

	/// An `exclude` entry names a field missing from the resolved `fields` list
	#[error("Cannot exclude `{field}` from `{action}`: the field is not in `fields`")]
	ExclusionMismatch { action: String, field: String },

	/// An action is configured but declares no `fields` list
	#[error("The configuration for `{action}` action must declare `fields`")]
	MissingFieldsList { action: String },

	/// The same field name appears twice in an action's `fields`
	#[error("Field `{field}` is declared more than once in `{action}`")]
	DuplicateField { action: String, field: String },

	/// A custom field definition could not be built from the raw configuration
	#[error("Invalid definition for custom field `{field}` of `{action}`: {message}")]
	InvalidFieldDefinition {
		action: String,
		field: String,
		message: String,
	},

	/// The configuration source could not be parsed
	#[error("Parse error: {0}")]
	Parse(String),
}

impl ActionFieldsError {
	/// Check whether this error was raised while checking configuration shape
	/// or contents, as opposed to while resolving names for an action
	pub fn is_configuration_error(&self) -> bool {
		!matches!(self, ActionFieldsError::ExclusionMismatch { .. })
	}

	/// Get the action name involved in the error, when there is one
	pub fn action(&self) -> Option<&str> {
		match self {
			ActionFieldsError::CustomFieldShape { action, .. }
			| ActionFieldsError::ExclusionMismatch { action, .. }
			| ActionFieldsError::MissingFieldsList { action }
			| ActionFieldsError::DuplicateField { action, .. }
			| ActionFieldsError::InvalidFieldDefinition { action, .. } => Some(action),
			ActionFieldsError::ConfigurationShape { .. } | ActionFieldsError::Parse(_) => None,
		}
	}
}

impl From<serde_yaml::Error> for ActionFieldsError {
	fn from(error: serde_yaml::Error) -> Self {
		Self::Parse(error.to_string())
	}
}

impl From<serde_json::Error> for ActionFieldsError {
	fn from(error: serde_json::Error) -> Self {
		Self::Parse(error.to_string())
	}
}

impl From<toml::de::Error> for ActionFieldsError {
	fn from(error: toml::de::Error) -> Self {
		Self::Parse(error.to_string())
	}
}

/// Result type for action field operations
pub type Result<T> = std::result::Result<T, ActionFieldsError>;
