//! Per-action field configuration
//!
//! An [`ActionFieldsMap`] maps action names to a [`FieldConfig`] that replaces
//! the serializer's declared field list while that action runs. It can be
//! built in code or parsed from a configuration source (see
//! [`crate::validator`]).

use crate::field::FieldDefinition;
use indexmap::IndexMap;

/// One entry of an action's `fields` list
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEntry<F = FieldDefinition> {
	/// A field declared on the serializer, selected by name
	Plain(String),
	/// A field introduced for this action, selected at this position
	Custom(String, F),
}

impl<F> FieldEntry<F> {
	/// Get the output field name of this entry
	pub fn name(&self) -> &str {
		match self {
			FieldEntry::Plain(name) | FieldEntry::Custom(name, _) => name,
		}
	}

	/// Get the field definition of a custom entry
	pub fn definition(&self) -> Option<&F> {
		match self {
			FieldEntry::Plain(_) => None,
			FieldEntry::Custom(_, definition) => Some(definition),
		}
	}

	pub fn is_custom(&self) -> bool {
		matches!(self, FieldEntry::Custom(..))
	}
}

impl<F> From<&str> for FieldEntry<F> {
	fn from(name: &str) -> Self {
		FieldEntry::Plain(name.to_string())
	}
}

impl<F> From<String> for FieldEntry<F> {
	fn from(name: String) -> Self {
		FieldEntry::Plain(name)
	}
}

/// Field configuration applied while a single action runs
///
/// # Examples
///
/// ```
/// use reinhardt_action_fields::{FieldConfig, FieldDefinition};
///
/// let config = FieldConfig::new()
///     .with_fields(["username", "email", "fullname"])
///     .with_exclude(["username"])
///     .with_custom_field("fullname", FieldDefinition::method());
///
/// assert_eq!(config.field_names(), Some(vec!["username", "email", "fullname"]));
/// assert_eq!(config.exclude(), ["username".to_string()]);
/// assert!(config.custom_fields().contains_key("fullname"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig<F = FieldDefinition> {
	fields: Option<Vec<FieldEntry<F>>>,
	exclude: Vec<String>,
	custom_fields: IndexMap<String, F>,
}

impl<F> Default for FieldConfig<F> {
	fn default() -> Self {
		Self {
			fields: None,
			exclude: Vec::new(),
			custom_fields: IndexMap::new(),
		}
	}
}

impl<F> FieldConfig<F> {
	/// Create an empty configuration
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the field list to the given plain field names
	pub fn with_fields<I, S>(self, names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.with_entries(names.into_iter().map(|name| FieldEntry::Plain(name.into())))
	}

	/// Set the field list to the given entries
	pub fn with_entries<I>(mut self, entries: I) -> Self
	where
		I: IntoIterator<Item = FieldEntry<F>>,
	{
		self.fields = Some(entries.into_iter().collect());
		self
	}

	/// Append a plain field name to the field list
	pub fn with_field(mut self, name: impl Into<String>) -> Self {
		self.fields
			.get_or_insert_with(Vec::new)
			.push(FieldEntry::Plain(name.into()));
		self
	}

	/// Append an inline custom field to the field list
	pub fn with_custom_entry(mut self, name: impl Into<String>, definition: F) -> Self {
		self.fields
			.get_or_insert_with(Vec::new)
			.push(FieldEntry::Custom(name.into(), definition));
		self
	}

	/// Set the names removed from the field list
	pub fn with_exclude<I, S>(mut self, names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.exclude = names.into_iter().map(Into::into).collect();
		self
	}

	/// Add a custom field definition layered over the declared fields
	pub fn with_custom_field(mut self, name: impl Into<String>, definition: F) -> Self {
		self.custom_fields.insert(name.into(), definition);
		self
	}

	/// Get the configured field entries
	pub fn fields(&self) -> Option<&[FieldEntry<F>]> {
		self.fields.as_deref()
	}

	/// Get the names of the configured field entries, in order
	pub fn field_names(&self) -> Option<Vec<&str>> {
		self.fields
			.as_ref()
			.map(|entries| entries.iter().map(FieldEntry::name).collect())
	}

	/// Get the excluded field names
	pub fn exclude(&self) -> &[String] {
		&self.exclude
	}

	/// Get the custom field definitions declared in `custom_fields`
	pub fn custom_fields(&self) -> &IndexMap<String, F> {
		&self.custom_fields
	}

	/// Iterate over every custom definition, `custom_fields` first and then the
	/// inline entries of `fields`, in the order they are applied
	pub fn custom_definitions(&self) -> impl Iterator<Item = (&str, &F)> {
		let mapped = self
			.custom_fields
			.iter()
			.map(|(name, definition)| (name.as_str(), definition));
		let inline = self
			.fields
			.iter()
			.flatten()
			.filter_map(|entry| match entry {
				FieldEntry::Custom(name, definition) => Some((name.as_str(), definition)),
				FieldEntry::Plain(_) => None,
			});
		mapped.chain(inline)
	}
}

/// Mapping from action name to the field configuration used by that action
#[derive(Debug, Clone, PartialEq)]
pub struct ActionFieldsMap<F = FieldDefinition> {
	actions: IndexMap<String, FieldConfig<F>>,
}

impl<F> Default for ActionFieldsMap<F> {
	fn default() -> Self {
		Self {
			actions: IndexMap::new(),
		}
	}
}

impl<F> ActionFieldsMap<F> {
	/// Create an empty map
	pub fn new() -> Self {
		Self::default()
	}

	/// Configure the fields used by `action`
	pub fn with_action(mut self, action: impl Into<String>, config: FieldConfig<F>) -> Self {
		self.insert(action, config);
		self
	}

	/// Configure the fields used by `action`, returning the replaced configuration
	pub fn insert(
		&mut self,
		action: impl Into<String>,
		config: FieldConfig<F>,
	) -> Option<FieldConfig<F>> {
		self.actions.insert(action.into(), config)
	}

	/// Get the configuration of `action`
	pub fn get(&self, action: &str) -> Option<&FieldConfig<F>> {
		self.actions.get(action)
	}

	pub fn contains_action(&self, action: &str) -> bool {
		self.actions.contains_key(action)
	}

	/// Iterate over configured actions
	pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldConfig<F>)> {
		self.actions
			.iter()
			.map(|(action, config)| (action.as_str(), config))
	}

	pub fn len(&self) -> usize {
		self.actions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.actions.is_empty()
	}
}
