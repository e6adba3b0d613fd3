//! Action fields map validation and parsing
//!
//! Configuration coming from a source (YAML, JSON or TOML) is first checked
//! structurally on its raw value, then converted into a typed
//! [`ActionFieldsMap`], then checked semantically. Typed maps built in code
//! only go through the semantic pass.
//!
//! Structural checks run in this order and stop at the first violation:
//!
//! 1. the top-level value is a mapping
//! 2. every action key is a string and every action config is a mapping
//! 3. `fields` is a sequence
//! 4. every `fields` entry is a name or a `[name, definition]` pair
//! 5. `exclude` is a sequence of names
//! 6. `custom_fields` is a mapping from name to definition

use crate::config::{ActionFieldsMap, FieldConfig, FieldEntry};
use crate::error::{ActionFieldsError, Result};
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use std::collections::HashSet;

const ROOT: &str = "action_fields_map";
const FIELDS: &str = "fields";
const EXCLUDE: &str = "exclude";
const CUSTOM_FIELDS: &str = "custom_fields";
const KNOWN_KEYS: [&str; 3] = [FIELDS, EXCLUDE, CUSTOM_FIELDS];

/// Structural validator for raw action fields configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigValidator;

impl ConfigValidator {
	pub fn new() -> Self {
		Self
	}

	/// Validate the shape of a raw action fields map
	///
	/// `None` and `null` mean the serializer has no per-action configuration,
	/// which is always valid.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_action_fields::ConfigValidator;
	///
	/// let raw: serde_yaml::Value = serde_yaml::from_str("
	/// retrieve:
	///   fields: [email, fullname]
	///   exclude: [email]
	/// ").unwrap();
	/// assert!(ConfigValidator::new().validate(Some(&raw)).is_ok());
	///
	/// let raw: serde_yaml::Value = serde_yaml::from_str("[list, retrieve]").unwrap();
	/// assert!(ConfigValidator::new().validate(Some(&raw)).is_err());
	/// ```
	pub fn validate(&self, raw: Option<&Value>) -> Result<()> {
		let Some(raw) = raw else {
			return Ok(());
		};
		if raw.is_null() {
			return Ok(());
		}

		let actions = expect_mapping(raw, ROOT)?;
		for (key, config) in actions {
			let action = key.as_str().ok_or_else(|| {
				shape_error(ROOT.to_string(), "string action names", key)
			})?;
			self.validate_action(action, config)?;
		}
		Ok(())
	}

	fn validate_action(&self, action: &str, config: &Value) -> Result<()> {
		let path = format!("{}.{}", ROOT, action);
		let config = expect_mapping(config, &path)?;

		for key in config.keys() {
			let known = key.as_str().is_some_and(|key| KNOWN_KEYS.contains(&key));
			if !known {
				tracing::warn!(
					action = action,
					key = ?key,
					"ignoring unknown key in action fields configuration"
				);
			}
		}

		if let Some(fields) = present(config, FIELDS) {
			let path = format!("{}.{}", path, FIELDS);
			let entries = expect_sequence(fields, &path)?;
			for (index, entry) in entries.iter().enumerate() {
				validate_field_entry(action, index, entry, &path)?;
			}
		}

		if let Some(exclude) = present(config, EXCLUDE) {
			let path = format!("{}.{}", path, EXCLUDE);
			let names = expect_sequence(exclude, &path)?;
			for (index, name) in names.iter().enumerate() {
				if !name.is_string() {
					return Err(shape_error(
						format!("{}[{}]", path, index),
						"a field name",
						name,
					));
				}
			}
		}

		if let Some(custom_fields) = present(config, CUSTOM_FIELDS) {
			let path = format!("{}.{}", path, CUSTOM_FIELDS);
			let definitions = expect_mapping(custom_fields, &path)?;
			for name in definitions.keys() {
				if !name.is_string() {
					return Err(shape_error(path, "string field names", name));
				}
			}
		}

		Ok(())
	}
}

fn validate_field_entry(action: &str, index: usize, entry: &Value, path: &str) -> Result<()> {
	match entry {
		Value::String(_) => Ok(()),
		Value::Sequence(pair) if pair.len() == 2 => {
			if pair[0].is_string() {
				Ok(())
			} else {
				Err(shape_error(
					format!("{}[{}][0]", path, index),
					"a field name",
					&pair[0],
				))
			}
		}
		Value::Sequence(pair) => Err(ActionFieldsError::CustomFieldShape {
			action: action.to_string(),
			index,
			len: pair.len(),
		}),
		other => Err(shape_error(
			format!("{}[{}]", path, index),
			"a field name or a [name, definition] pair",
			other,
		)),
	}
}

/// Check the contents of a typed action fields map
///
/// Every configured action must declare `fields`, and no field name may be
/// listed twice for the same action. Whether `exclude` names are present in
/// `fields` is checked when names are resolved.
pub fn validate_action_fields_map<F>(map: &ActionFieldsMap<F>) -> Result<()> {
	for (action, config) in map.iter() {
		if action.is_empty() {
			return Err(ActionFieldsError::ConfigurationShape {
				path: ROOT.to_string(),
				expected: "non-empty action names",
				found: "an empty string".to_string(),
			});
		}

		let entries = config
			.fields()
			.ok_or_else(|| ActionFieldsError::MissingFieldsList {
				action: action.to_string(),
			})?;

		let mut seen = HashSet::with_capacity(entries.len());
		for entry in entries {
			if !seen.insert(entry.name()) {
				return Err(ActionFieldsError::DuplicateField {
					action: action.to_string(),
					field: entry.name().to_string(),
				});
			}
		}
	}
	Ok(())
}

/// Validate a raw action fields map and convert it into a typed one
///
/// Returns `Ok(None)` when the raw value is `null`.
pub fn parse_action_fields_map<F>(raw: &Value) -> Result<Option<ActionFieldsMap<F>>>
where
	F: DeserializeOwned,
{
	ConfigValidator::new().validate(Some(raw))?;

	let Some(actions) = raw.as_mapping() else {
		return Ok(None);
	};

	let mut map = ActionFieldsMap::new();
	for (key, config) in actions {
		// Keys and configs were checked by the structural pass
		let (Some(action), Some(config)) = (key.as_str(), config.as_mapping()) else {
			continue;
		};
		map.insert(action, parse_field_config(action, config)?);
	}

	validate_action_fields_map(&map)?;
	tracing::debug!(actions = map.len(), "loaded action fields map");
	Ok(Some(map))
}

fn parse_field_config<F>(action: &str, config: &Mapping) -> Result<FieldConfig<F>>
where
	F: DeserializeOwned,
{
	let mut parsed = FieldConfig::new();

	if let Some(Value::Sequence(entries)) = present(config, FIELDS) {
		let mut fields = Vec::with_capacity(entries.len());
		for entry in entries {
			match entry {
				Value::String(name) => fields.push(FieldEntry::Plain(name.clone())),
				Value::Sequence(pair) => {
					if let [Value::String(name), definition] = pair.as_slice() {
						let definition = parse_definition(action, name, definition)?;
						fields.push(FieldEntry::Custom(name.clone(), definition));
					}
				}
				_ => {}
			}
		}
		parsed = parsed.with_entries(fields);
	}

	if let Some(Value::Sequence(names)) = present(config, EXCLUDE) {
		parsed = parsed.with_exclude(names.iter().filter_map(Value::as_str));
	}

	if let Some(Value::Mapping(definitions)) = present(config, CUSTOM_FIELDS) {
		for (name, definition) in definitions {
			if let Some(name) = name.as_str() {
				let definition = parse_definition(action, name, definition)?;
				parsed = parsed.with_custom_field(name, definition);
			}
		}
	}

	Ok(parsed)
}

fn parse_definition<F>(action: &str, field: &str, raw: &Value) -> Result<F>
where
	F: DeserializeOwned,
{
	serde_yaml::from_value(raw.clone()).map_err(|e| ActionFieldsError::InvalidFieldDefinition {
		action: action.to_string(),
		field: field.to_string(),
		message: e.to_string(),
	})
}

impl<F: DeserializeOwned> ActionFieldsMap<F> {
	/// Parse an action fields map from YAML (or JSON) text
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_action_fields::ActionFieldsMap;
	///
	/// let map: ActionFieldsMap = ActionFieldsMap::from_yaml_str("
	/// retrieve:
	///   fields: [username, email, fullname]
	///   exclude: [username]
	///   custom_fields:
	///     fullname: { type: method }
	/// ").unwrap().unwrap();
	///
	/// assert!(map.contains_action("retrieve"));
	/// ```
	pub fn from_yaml_str(source: &str) -> Result<Option<Self>> {
		let raw: Value = serde_yaml::from_str(source)?;
		parse_action_fields_map(&raw)
	}

	/// Parse an action fields map from JSON text
	pub fn from_json_str(source: &str) -> Result<Option<Self>> {
		let raw: serde_json::Value = serde_json::from_str(source)?;
		Self::from_json_value(&raw)
	}

	/// Parse an action fields map from a JSON value
	pub fn from_json_value(raw: &serde_json::Value) -> Result<Option<Self>> {
		let raw = serde_yaml::to_value(raw)?;
		parse_action_fields_map(&raw)
	}

	/// Parse an action fields map from TOML text, one table per action
	///
	/// ```toml
	/// [retrieve]
	/// fields = ["username", "email", "fullname"]
	/// exclude = ["username"]
	///
	/// [retrieve.custom_fields.fullname]
	/// type = "method"
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Option<Self>> {
		let raw: toml::Value = toml::from_str(source)?;
		let raw = serde_yaml::to_value(raw)?;
		parse_action_fields_map(&raw)
	}
}

/// Get a key of an action config, treating explicit `null` as absent
fn present<'a>(config: &'a Mapping, key: &str) -> Option<&'a Value> {
	config.get(key).filter(|value| !value.is_null())
}

fn expect_mapping<'a>(value: &'a Value, path: &str) -> Result<&'a Mapping> {
	value
		.as_mapping()
		.ok_or_else(|| shape_error(path.to_string(), "a mapping", value))
}

fn expect_sequence<'a>(value: &'a Value, path: &str) -> Result<&'a [Value]> {
	value
		.as_sequence()
		.map(Vec::as_slice)
		.ok_or_else(|| shape_error(path.to_string(), "a sequence", value))
}

fn shape_error(path: String, expected: &'static str, found: &Value) -> ActionFieldsError {
	ActionFieldsError::ConfigurationShape {
		path,
		expected,
		found: describe(found),
	}
}

fn describe(value: &Value) -> String {
	match value {
		Value::Null => "null".to_string(),
		Value::Bool(_) => "a boolean".to_string(),
		Value::Number(_) => "a number".to_string(),
		Value::String(_) => "a string".to_string(),
		Value::Sequence(_) => "a sequence".to_string(),
		Value::Mapping(_) => "a mapping".to_string(),
		Value::Tagged(tagged) => format!("a value tagged {}", tagged.tag),
	}
}
