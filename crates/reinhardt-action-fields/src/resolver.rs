//! Field resolution for the active action
//!
//! A [`FieldResolver`] owns a validated [`ActionFieldsMap`] and answers the two
//! questions a serializer asks while binding its fields: which field names it
//! emits, and which definition each field name maps to. Whenever the active
//! action is unknown or has no configuration, both answers are the
//! serializer's own defaults.

use crate::config::{ActionFieldsMap, FieldConfig};
use crate::error::{ActionFieldsError, Result};
use crate::field::FieldDefinition;
use crate::validator::validate_action_fields_map;
use indexmap::IndexMap;

/// Resolves field names and definitions for the action being executed
///
/// Resolution never mutates the resolver, so one instance can be shared by
/// every serializer of a type (e.g. behind an `Arc`).
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
/// use reinhardt_action_fields::{ActionFieldsMap, FieldConfig, FieldDefinition, FieldResolver};
///
/// let map = ActionFieldsMap::new().with_action(
///     "retrieve",
///     FieldConfig::new()
///         .with_fields(["username", "email", "fullname"])
///         .with_exclude(["username"])
///         .with_custom_field("fullname", FieldDefinition::method()),
/// );
/// let resolver = FieldResolver::new(Some(map)).unwrap();
///
/// let names = resolver
///     .resolve_field_names(Some("retrieve"), || vec!["username".to_string()])
///     .unwrap();
/// assert_eq!(names, vec!["email", "fullname"]);
///
/// let names = resolver
///     .resolve_field_names(Some("list"), || vec!["username".to_string()])
///     .unwrap();
/// assert_eq!(names, vec!["username"]);
///
/// let mut declared = IndexMap::new();
/// declared.insert("username".to_string(), FieldDefinition::char());
/// let fields = resolver.resolve_field_definitions(Some("retrieve"), declared);
/// assert_eq!(fields.get("fullname"), Some(&FieldDefinition::method()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FieldResolver<F = FieldDefinition> {
	action_fields_map: Option<ActionFieldsMap<F>>,
}

impl<F> Default for FieldResolver<F> {
	fn default() -> Self {
		Self {
			action_fields_map: None,
		}
	}
}

impl<F> FieldResolver<F> {
	/// Create a resolver, validating the configuration
	///
	/// `None` creates a resolver that always falls back to the defaults.
	pub fn new(action_fields_map: Option<ActionFieldsMap<F>>) -> Result<Self> {
		if let Some(map) = &action_fields_map {
			validate_action_fields_map(map)?;
		}
		Ok(Self { action_fields_map })
	}

	/// Create a resolver without per-action configuration
	pub fn unconfigured() -> Self {
		Self::default()
	}

	/// Get the configured action fields map
	pub fn action_fields_map(&self) -> Option<&ActionFieldsMap<F>> {
		self.action_fields_map.as_ref()
	}

	/// Get the configuration that applies to `current_action`, if any
	pub fn action_config(&self, current_action: Option<&str>) -> Option<&FieldConfig<F>> {
		let action = current_action?;
		self.action_fields_map.as_ref()?.get(action)
	}

	/// Resolve the ordered list of field names to emit
	///
	/// `default_names` computes the serializer's own field names and is only
	/// called when no configuration applies. Otherwise the configured `fields`
	/// replace the declared ones, in their configured order, minus every name
	/// listed in `exclude`.
	///
	/// # Errors
	///
	/// Returns [`ActionFieldsError::ExclusionMismatch`] when an `exclude` entry
	/// is not among the configured fields, and
	/// [`ActionFieldsError::MissingFieldsList`] when the action declares no
	/// `fields`.
	pub fn resolve_field_names<D>(
		&self,
		current_action: Option<&str>,
		default_names: D,
	) -> Result<Vec<String>>
	where
		D: FnOnce() -> Vec<String>,
	{
		let (Some(action), Some(config)) = (current_action, self.action_config(current_action))
		else {
			tracing::debug!(
				action = current_action,
				"no action field configuration, using declared field names"
			);
			return Ok(default_names());
		};

		let entries = config
			.fields()
			.ok_or_else(|| ActionFieldsError::MissingFieldsList {
				action: action.to_string(),
			})?;
		let mut names: Vec<String> = entries
			.iter()
			.map(|entry| entry.name().to_string())
			.collect();

		for field in config.exclude() {
			let position = names
				.iter()
				.position(|name| name == field)
				.ok_or_else(|| ActionFieldsError::ExclusionMismatch {
					action: action.to_string(),
					field: field.clone(),
				})?;
			names.remove(position);
			tracing::trace!(action = action, field = %field, "excluded field");
		}

		tracing::debug!(
			action = action,
			fields = names.len(),
			"resolved field names from action configuration"
		);
		Ok(names)
	}
}

impl<F: Clone> FieldResolver<F> {
	/// Resolve the field definitions available to the serializer
	///
	/// The declared definitions are always kept. Custom definitions of the
	/// active action are layered on top: `custom_fields` first, then inline
	/// custom entries of `fields`. A custom definition replaces a declared one
	/// of the same name in place; new names are appended. `exclude` does not
	/// apply here, excluded fields are simply never selected by name.
	pub fn resolve_field_definitions(
		&self,
		current_action: Option<&str>,
		declared: IndexMap<String, F>,
	) -> IndexMap<String, F> {
		let Some(config) = self.action_config(current_action) else {
			return declared;
		};

		let mut fields = declared;
		for (name, definition) in config.custom_definitions() {
			fields.insert(name.to_string(), definition.clone());
		}
		fields
	}
}
