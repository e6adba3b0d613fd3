//! Serializer execution context
//!
//! Viewsets hand their serializers a context describing the view that is
//! running. A serializer built by hand (outside a request) has no view, and a
//! view may be dispatched without an action (e.g. metadata requests); both
//! cases mean the active action is unknown.

use crate::action::Action;

/// The view driving a serializer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewContext {
	/// Action currently executed by the view
	pub action: Option<Action>,
}

impl ViewContext {
	/// Create a view context for the given action
	pub fn new(action: Action) -> Self {
		Self {
			action: Some(action),
		}
	}

	/// Create a view context from an action name
	pub fn for_action(name: &str) -> Self {
		Self::new(Action::from_name(name))
	}
}

/// Context passed to serializers
///
/// # Examples
///
/// ```
/// use reinhardt_action_fields::{Action, SerializerContext};
///
/// let context = SerializerContext::with_action(Action::retrieve());
/// assert_eq!(context.current_action(), Some("retrieve"));
///
/// let standalone = SerializerContext::new();
/// assert_eq!(standalone.current_action(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SerializerContext {
	view: Option<ViewContext>,
}

impl SerializerContext {
	/// Create an empty context, as used by standalone serializers
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a context driven by a view executing `action`
	pub fn with_action(action: Action) -> Self {
		Self::new().with_view(ViewContext::new(action))
	}

	/// Attach the view driving the serializer
	pub fn with_view(mut self, view: ViewContext) -> Self {
		self.view = Some(view);
		self
	}

	/// Get the view, if any
	pub fn view(&self) -> Option<&ViewContext> {
		self.view.as_ref()
	}

	/// Get the name of the action currently executed, if known
	pub fn current_action(&self) -> Option<&str> {
		self.view
			.as_ref()
			.and_then(|view| view.action.as_ref())
			.map(Action::name)
	}
}
