//! Render-time event bindings

use reinhardt_formbuilder_element::Field;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Points in the render pass where bound callbacks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormEvent {
	BeforeForm,
	AfterForm,
	BeforeField,
	AfterField,
}

impl FormEvent {
	pub fn as_str(&self) -> &'static str {
		match self {
			FormEvent::BeforeForm => "before_form",
			FormEvent::AfterForm => "after_form",
			FormEvent::BeforeField => "before_field",
			FormEvent::AfterField => "after_field",
		}
	}
}

impl fmt::Display for FormEvent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Callback bound to a [`FormEvent`]. Field events receive the field being
/// rendered; form events receive `None`. Returned text is spliced into the
/// output at the event's position.
pub type EventCallback = Arc<dyn Fn(Option<&Field>) -> Option<String> + Send + Sync>;

/// Callbacks per event, run in binding order.
///
/// # Examples
///
/// ```
/// use reinhardt_formbuilder_forms::{EventBindings, FormEvent};
///
/// let mut bindings = EventBindings::new();
/// bindings.bind(FormEvent::BeforeForm, |_| Some("<!-- start -->".to_string()));
/// bindings.bind(FormEvent::BeforeForm, |_| None);
///
/// assert_eq!(bindings.fire(FormEvent::BeforeForm, None), "<!-- start -->");
/// assert_eq!(bindings.fire(FormEvent::AfterForm, None), "");
/// ```
#[derive(Clone, Default)]
pub struct EventBindings {
	callbacks: HashMap<FormEvent, Vec<EventCallback>>,
}

impl EventBindings {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn bind<F>(&mut self, event: FormEvent, callback: F) -> &mut Self
	where
		F: Fn(Option<&Field>) -> Option<String> + Send + Sync + 'static,
	{
		self.bind_shared(event, Arc::new(callback))
	}

	pub fn bind_shared(&mut self, event: FormEvent, callback: EventCallback) -> &mut Self {
		self.callbacks.entry(event).or_default().push(callback);
		self
	}

	/// Run every callback bound to `event` and concatenate their output.
	pub fn fire(&self, event: FormEvent, field: Option<&Field>) -> String {
		let Some(callbacks) = self.callbacks.get(&event) else {
			return String::new();
		};
		callbacks
			.iter()
			.filter_map(|callback| callback(field))
			.collect()
	}

	pub fn is_bound(&self, event: FormEvent) -> bool {
		self.callbacks.get(&event).is_some_and(|c| !c.is_empty())
	}

	pub fn count(&self, event: FormEvent) -> usize {
		self.callbacks.get(&event).map_or(0, Vec::len)
	}

	pub fn is_empty(&self) -> bool {
		self.callbacks.values().all(Vec::is_empty)
	}

	pub fn clear(&mut self) {
		self.callbacks.clear();
	}
}

impl fmt::Debug for EventBindings {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut counts: Vec<_> = self
			.callbacks
			.iter()
			.map(|(event, callbacks)| (event.as_str(), callbacks.len()))
			.collect();
		counts.sort();
		f.debug_struct("EventBindings")
			.field("callbacks", &counts)
			.finish()
	}
}
