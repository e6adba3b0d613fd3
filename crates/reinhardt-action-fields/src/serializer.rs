//! Serializer integration
//!
//! [`ActionSerializer`] wraps a [`BaseSerializer`] and replaces its two field
//! hooks, `get_field_names` and `get_fields`, with the output of a
//! [`FieldResolver`] for the action found in the serializer context.

use crate::config::ActionFieldsMap;
use crate::context::SerializerContext;
use crate::error::Result;
use crate::resolver::FieldResolver;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Default field behaviour of a serializer
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
/// use reinhardt_action_fields::{
///     ActionFieldsMap, BaseSerializer, FieldConfig, FieldDefinition, Result,
/// };
///
/// struct UserSerializer;
///
/// impl BaseSerializer for UserSerializer {
///     type Field = FieldDefinition;
///
///     fn declared_fields(&self) -> IndexMap<String, FieldDefinition> {
///         IndexMap::from([
///             ("username".to_string(), FieldDefinition::char()),
///             ("email".to_string(), FieldDefinition::char()),
///         ])
///     }
///
///     fn action_fields_map() -> Result<Option<ActionFieldsMap<FieldDefinition>>> {
///         Ok(Some(ActionFieldsMap::new().with_action(
///             "retrieve",
///             FieldConfig::new()
///                 .with_fields(["email", "fullname"])
///                 .with_custom_field("fullname", FieldDefinition::method()),
///         )))
///     }
/// }
/// ```
pub trait BaseSerializer {
	/// Field definition type
	type Field: Clone;

	/// Get the statically declared field definitions
	fn declared_fields(&self) -> IndexMap<String, Self::Field>;

	/// Get the field names emitted when no action configuration applies
	///
	/// Defaults to every declared field, in declaration order.
	fn default_field_names(&self, declared: &IndexMap<String, Self::Field>) -> Vec<String> {
		declared.keys().cloned().collect()
	}

	/// Get the per-action field configuration attached to this serializer type
	///
	/// Errors from loading the map (e.g. with
	/// [`ActionFieldsMap::from_yaml_str`]) are returned from
	/// [`ActionSerializer::new`].
	fn action_fields_map() -> Result<Option<ActionFieldsMap<Self::Field>>>
	where
		Self: Sized,
	{
		Ok(None)
	}
}

/// A serializer whose fields depend on the action being executed
pub struct ActionSerializer<S: BaseSerializer> {
	base: S,
	context: SerializerContext,
	resolver: Arc<FieldResolver<S::Field>>,
}

impl<S> Clone for ActionSerializer<S>
where
	S: BaseSerializer + Clone,
{
	fn clone(&self) -> Self {
		Self {
			base: self.base.clone(),
			context: self.context.clone(),
			resolver: Arc::clone(&self.resolver),
		}
	}
}

impl<S> fmt::Debug for ActionSerializer<S>
where
	S: BaseSerializer + fmt::Debug,
	S::Field: fmt::Debug,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ActionSerializer")
			.field("base", &self.base)
			.field("context", &self.context)
			.field("resolver", &self.resolver)
			.finish()
	}
}

impl<S: BaseSerializer> ActionSerializer<S> {
	/// Wrap `base`, validating the configuration it declares
	///
	/// The map is loaded and validated on every call. When serializers are
	/// built per request, validate once and use
	/// [`with_resolver`](Self::with_resolver) instead.
	///
	/// # Errors
	///
	/// Fails when the declared action fields map cannot be loaded or is
	/// invalid.
	pub fn new(base: S, context: SerializerContext) -> Result<Self> {
		let resolver = FieldResolver::new(S::action_fields_map()?)?;
		Ok(Self::with_resolver(base, context, Arc::new(resolver)))
	}

	/// Wrap `base` with an already validated resolver
	///
	/// Use this to validate a configuration once at startup and share it
	/// between serializer instances.
	pub fn with_resolver(
		base: S,
		context: SerializerContext,
		resolver: Arc<FieldResolver<S::Field>>,
	) -> Self {
		Self {
			base,
			context,
			resolver,
		}
	}

	pub fn base(&self) -> &S {
		&self.base
	}

	pub fn context(&self) -> &SerializerContext {
		&self.context
	}

	pub fn resolver(&self) -> &FieldResolver<S::Field> {
		&self.resolver
	}

	/// Get the names of the fields this serializer emits
	pub fn get_field_names(&self) -> Result<Vec<String>> {
		self.resolver
			.resolve_field_names(self.context.current_action(), || {
				self.base.default_field_names(&self.base.declared_fields())
			})
	}

	/// Get the field definitions available to this serializer
	pub fn get_fields(&self) -> IndexMap<String, S::Field> {
		self.resolver
			.resolve_field_definitions(self.context.current_action(), self.base.declared_fields())
	}

	/// Get the selected fields with their definitions, in output order
	///
	/// Names without a definition are skipped; building those from a model is
	/// left to the surrounding framework.
	pub fn fields(&self) -> Result<Vec<(String, S::Field)>> {
		let mut definitions = self.get_fields();
		let names = self.get_field_names()?;

		Ok(names
			.into_iter()
			.filter_map(|name| {
				let definition = definitions.swap_remove(&name)?;
				Some((name, definition))
			})
			.collect())
	}
}
