//! # reinhardt-action-fields
//!
//! Per-action field selection for Reinhardt serializers, inspired by
//! django-rest-action-serializer.
//!
//! A serializer declares its fields once. An [`ActionFieldsMap`] then says, for
//! some viewset actions, which fields to emit instead (`fields`), which of
//! those to drop (`exclude`) and which extra field definitions to add
//! (`custom_fields`). No separate serializer type per action is needed.
//!
//! ## Quick Start
//!
//! ```
//! use indexmap::IndexMap;
//! use reinhardt_action_fields::prelude::*;
//!
//! struct UserSerializer;
//!
//! impl BaseSerializer for UserSerializer {
//!     type Field = FieldDefinition;
//!
//!     fn declared_fields(&self) -> IndexMap<String, FieldDefinition> {
//!         ["username", "email", "first_name", "last_name"]
//!             .into_iter()
//!             .map(|name| (name.to_string(), FieldDefinition::char()))
//!             .collect()
//!     }
//!
//!     fn action_fields_map() -> Result<Option<ActionFieldsMap>> {
//!         ActionFieldsMap::from_yaml_str(
//!             "
//! retrieve:
//!   fields: [username, email, fullname]
//!   exclude: [username]
//!   custom_fields:
//!     fullname: { type: method }
//! ",
//!         )
//!     }
//! }
//!
//! let retrieve = ActionSerializer::new(
//!     UserSerializer,
//!     SerializerContext::with_action(Action::retrieve()),
//! )
//! .unwrap();
//! assert_eq!(retrieve.get_field_names().unwrap(), vec!["email", "fullname"]);
//!
//! let list = ActionSerializer::new(UserSerializer, SerializerContext::with_action(Action::list()))
//!     .unwrap();
//! assert_eq!(
//!     list.get_field_names().unwrap(),
//!     vec!["username", "email", "first_name", "last_name"]
//! );
//! ```

pub mod action;
pub mod config;
pub mod context;
pub mod error;
pub mod field;
pub mod resolver;
pub mod serializer;
pub mod validator;

pub use action::{Action, ActionType};
pub use config::{ActionFieldsMap, FieldConfig, FieldEntry};
pub use context::{SerializerContext, ViewContext};
pub use error::{ActionFieldsError, Result};
pub use field::{FieldDefinition, FieldKind};
pub use resolver::FieldResolver;
pub use serializer::{ActionSerializer, BaseSerializer};
pub use validator::{ConfigValidator, parse_action_fields_map, validate_action_fields_map};

/// Prelude module for convenient imports
pub mod prelude {
	pub use crate::action::{Action, ActionType};
	pub use crate::config::{ActionFieldsMap, FieldConfig, FieldEntry};
	pub use crate::context::{SerializerContext, ViewContext};
	pub use crate::error::{ActionFieldsError, Result};
	pub use crate::field::{FieldDefinition, FieldKind};
	pub use crate::resolver::FieldResolver;
	pub use crate::serializer::{ActionSerializer, BaseSerializer};
}
