//! # Reinhardt Action Serializer
//!
//! Per-action field selection for Reinhardt serializers.
//!
//! A viewset usually needs slightly different representations for its
//! actions: a compact one for `list`, a richer one for `retrieve`. Instead of
//! writing one serializer per action, declare the fields once and describe the
//! differences in an action fields map:
//!
//! ```yaml
//! retrieve:
//!   fields: [username, email, fullname]
//!   exclude: [username]
//!   custom_fields:
//!     fullname: { type: method }
//! ```
//!
//! The map is validated when the serializer is constructed, so configuration
//! mistakes surface at startup rather than while handling a request.
//!
//! ## Quick Example
//!
//! ```
//! use indexmap::IndexMap;
//! use reinhardt_action_serializer::prelude::*;
//!
//! struct UserSerializer;
//!
//! impl BaseSerializer for UserSerializer {
//!     type Field = FieldDefinition;
//!
//!     fn declared_fields(&self) -> IndexMap<String, FieldDefinition> {
//!         IndexMap::from([
//!             ("username".to_string(), FieldDefinition::char()),
//!             ("email".to_string(), FieldDefinition::char()),
//!         ])
//!     }
//!
//!     fn action_fields_map() -> Result<Option<ActionFieldsMap>> {
//!         Ok(Some(ActionFieldsMap::new().with_action(
//!             "retrieve",
//!             FieldConfig::new()
//!                 .with_fields(["username", "email", "fullname"])
//!                 .with_exclude(["username"])
//!                 .with_custom_field("fullname", FieldDefinition::method()),
//!         )))
//!     }
//! }
//!
//! let serializer = ActionSerializer::new(
//!     UserSerializer,
//!     SerializerContext::with_action(Action::retrieve()),
//! )?;
//! assert_eq!(serializer.get_field_names()?, vec!["email", "fullname"]);
//! # Ok::<(), ActionFieldsError>(())
//! ```

pub mod action_fields;

pub use reinhardt_action_fields::{
	Action, ActionFieldsError, ActionFieldsMap, ActionSerializer, ActionType, BaseSerializer,
	FieldConfig, FieldDefinition, FieldEntry, FieldResolver, SerializerContext,
};

/// Prelude module for convenient imports
pub mod prelude {
	pub use reinhardt_action_fields::prelude::*;
}
