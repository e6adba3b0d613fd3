//! Action fields module.
//!
//! This module provides the configuration, validation and resolution types
//! behind [`ActionSerializer`](crate::ActionSerializer).
//!
//! # Examples
//!
//! ```rust
//! use reinhardt_action_serializer::action_fields::{ConfigValidator, FieldResolver};
//!
//! let raw: serde_yaml::Value = serde_yaml::from_str("list: {fields: [id, name]}").unwrap();
//! ConfigValidator::new().validate(Some(&raw)).unwrap();
//!
//! let resolver = FieldResolver::<()>::unconfigured();
//! assert!(resolver.action_fields_map().is_none());
//! ```

pub use reinhardt_action_fields::*;
