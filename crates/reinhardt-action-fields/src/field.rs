//! Field definitions
//!
//! `FieldDefinition` is the default field-definition object carried by action
//! field maps. It describes what a serializer field is (its kind and options)
//! without performing any serialization itself, so it can be declared in
//! configuration files:
//!
//! ```yaml
//! retrieve:
//!   fields: [email, fullname]
//!   custom_fields:
//!     fullname: { type: method, method_name: get_fullname }
//!     stories: { type: nested, serializer: StorySerializer, many: true, read_only: true }
//! ```

use serde::{Deserialize, Serialize};

/// Kind of a serializer field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
	Char {
		#[serde(default)]
		max_length: Option<usize>,
	},
	Integer,
	Float,
	Boolean,
	DateTime,
	/// Computed by a serializer method, `get_<field name>` unless overridden
	Method {
		#[serde(default)]
		method_name: Option<String>,
	},
	/// Rendered by another serializer
	Nested {
		serializer: String,
		#[serde(default)]
		many: bool,
	},
}

/// A serializer field definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
	#[serde(flatten)]
	pub kind: FieldKind,
	#[serde(default)]
	pub read_only: bool,
	#[serde(default)]
	pub write_only: bool,
	/// Attribute the value is read from, when it differs from the field name
	#[serde(default)]
	pub source: Option<String>,
}

impl FieldDefinition {
	/// Create a field definition of the given kind
	pub fn new(kind: FieldKind) -> Self {
		Self {
			kind,
			read_only: false,
			write_only: false,
			source: None,
		}
	}

	pub fn char() -> Self {
		Self::new(FieldKind::Char { max_length: None })
	}

	pub fn integer() -> Self {
		Self::new(FieldKind::Integer)
	}

	pub fn float() -> Self {
		Self::new(FieldKind::Float)
	}

	pub fn boolean() -> Self {
		Self::new(FieldKind::Boolean)
	}

	pub fn datetime() -> Self {
		Self::new(FieldKind::DateTime)
	}

	/// Create a method field; method fields are always read-only, see
	/// [`is_read_only`](Self::is_read_only)
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_action_fields::FieldDefinition;
	///
	/// let field = FieldDefinition::method();
	/// assert!(field.is_read_only());
	/// assert_eq!(field.method_name("fullname").as_deref(), Some("get_fullname"));
	/// ```
	pub fn method() -> Self {
		Self::new(FieldKind::Method { method_name: None })
	}

	/// Create a nested serializer field
	pub fn nested(serializer: impl Into<String>, many: bool) -> Self {
		Self::new(FieldKind::Nested {
			serializer: serializer.into(),
			many,
		})
	}

	/// Set the maximum length of a char field
	pub fn max_length(mut self, max: usize) -> Self {
		if let FieldKind::Char { max_length } = &mut self.kind {
			*max_length = Some(max);
		}
		self
	}

	/// Set a custom method name on a method field
	pub fn with_method_name(mut self, name: impl Into<String>) -> Self {
		if let FieldKind::Method { method_name } = &mut self.kind {
			*method_name = Some(name.into());
		}
		self
	}

	pub fn read_only(mut self) -> Self {
		self.read_only = true;
		self
	}

	pub fn write_only(mut self) -> Self {
		self.write_only = true;
		self
	}

	pub fn source(mut self, source: impl Into<String>) -> Self {
		self.source = Some(source.into());
		self
	}

	/// Check whether the field is only used for output
	pub fn is_read_only(&self) -> bool {
		self.read_only || matches!(self.kind, FieldKind::Method { .. })
	}

	/// Get the method a method field calls when bound to `field_name`
	///
	/// Returns `None` for fields that are not method fields.
	pub fn method_name(&self, field_name: &str) -> Option<String> {
		match &self.kind {
			FieldKind::Method {
				method_name: Some(name),
			} => Some(name.clone()),
			FieldKind::Method { method_name: None } => Some(format!("get_{}", field_name)),
			_ => None,
		}
	}
}
