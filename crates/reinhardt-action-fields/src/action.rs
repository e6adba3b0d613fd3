//! Viewset actions as seen by a serializer
//!
//! The action is the only thing the field resolver needs to know about the
//! request being handled. Standard viewset actions map to their own variants;
//! anything else is kept as a custom action name.

use std::fmt;

/// Action type for viewset operations
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActionType {
	List,
	Retrieve,
	Create,
	Update,
	PartialUpdate,
	Destroy,
	Custom(String),
}

impl ActionType {
	/// Get the action name used as key in an action fields map
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_action_fields::ActionType;
	///
	/// assert_eq!(ActionType::PartialUpdate.as_str(), "partial_update");
	/// assert_eq!(ActionType::Custom("recent".to_string()).as_str(), "recent");
	/// ```
	pub fn as_str(&self) -> &str {
		match self {
			ActionType::List => "list",
			ActionType::Retrieve => "retrieve",
			ActionType::Create => "create",
			ActionType::Update => "update",
			ActionType::PartialUpdate => "partial_update",
			ActionType::Destroy => "destroy",
			ActionType::Custom(name) => name,
		}
	}
}

impl fmt::Display for ActionType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The action a viewset is executing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
	pub action_type: ActionType,
}

impl Action {
	pub fn new(action_type: ActionType) -> Self {
		Self { action_type }
	}

	pub fn list() -> Self {
		Self::new(ActionType::List)
	}

	pub fn retrieve() -> Self {
		Self::new(ActionType::Retrieve)
	}

	pub fn create() -> Self {
		Self::new(ActionType::Create)
	}

	pub fn update() -> Self {
		Self::new(ActionType::Update)
	}

	pub fn partial_update() -> Self {
		Self::new(ActionType::PartialUpdate)
	}

	pub fn destroy() -> Self {
		Self::new(ActionType::Destroy)
	}

	/// Create a custom (extra) action
	pub fn custom(name: impl Into<String>) -> Self {
		Self::new(ActionType::Custom(name.into()))
	}

	/// Create an Action from a string name
	///
	/// Standard names map to their corresponding `ActionType`. Unknown names
	/// become custom actions.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_action_fields::{Action, ActionType};
	///
	/// let action = Action::from_name("retrieve");
	/// assert_eq!(action.action_type, ActionType::Retrieve);
	///
	/// let action = Action::from_name("recent_users");
	/// assert_eq!(action.name(), "recent_users");
	/// ```
	pub fn from_name(name: &str) -> Self {
		match name {
			"list" => Self::list(),
			"retrieve" => Self::retrieve(),
			"create" => Self::create(),
			"update" => Self::update(),
			"partial_update" => Self::partial_update(),
			"destroy" => Self::destroy(),
			custom_name => Self::custom(custom_name),
		}
	}

	/// Get the action name
	pub fn name(&self) -> &str {
		self.action_type.as_str()
	}
}

impl fmt::Display for Action {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
