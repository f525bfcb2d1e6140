//! Per-key override hooks consulted by [`Element::set`] and [`Element::get`]

use crate::element::Element;
use crate::value::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Replaces the default store for a key. Receives the element and the value
/// passed to `set`.
pub type SetHook = Arc<dyn Fn(&mut Element, Value) + Send + Sync>;

/// Post-processes a read. Receives the element and the resolved value (or the
/// caller's default, depending on [`GetterFallback`](crate::GetterFallback)).
pub type GetHook = Arc<dyn Fn(&Element, serde_json::Value) -> serde_json::Value + Send + Sync>;

/// Table of setter and getter hooks keyed by attribute/property name.
///
/// A missing entry means the default routing applies; looking up an
/// unregistered key is never an error.
///
/// # Examples
///
/// ```
/// use reinhardt_formbuilder_element::{Element, Hooks};
/// use serde_json::json;
///
/// let hooks = Hooks::new()
/// 	.on_set("size", |element, value| {
/// 		element.set_attr("data-size", value);
/// 	})
/// 	.on_get("title", |_, value| {
/// 		if value.is_null() { json!("Untitled") } else { value }
/// 	});
///
/// let mut element = Element::default().with_hooks(hooks);
/// element.set("size", 3);
///
/// assert_eq!(element.get_attr("data-size"), json!(3));
/// assert_eq!(element.get("title"), json!("Untitled"));
/// ```
#[derive(Clone, Default)]
pub struct Hooks {
	setters: HashMap<String, SetHook>,
	getters: HashMap<String, GetHook>,
}

impl Hooks {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a setter hook, replacing any previous one for `key`.
	pub fn on_set<F>(mut self, key: impl Into<String>, hook: F) -> Self
	where
		F: Fn(&mut Element, Value) + Send + Sync + 'static,
	{
		self.insert_setter(key, hook);
		self
	}

	/// Register a getter hook, replacing any previous one for `key`.
	pub fn on_get<F>(mut self, key: impl Into<String>, hook: F) -> Self
	where
		F: Fn(&Element, serde_json::Value) -> serde_json::Value + Send + Sync + 'static,
	{
		self.insert_getter(key, hook);
		self
	}

	pub fn insert_setter<F>(&mut self, key: impl Into<String>, hook: F)
	where
		F: Fn(&mut Element, Value) + Send + Sync + 'static,
	{
		self.setters.insert(key.into(), Arc::new(hook));
	}

	pub fn insert_getter<F>(&mut self, key: impl Into<String>, hook: F)
	where
		F: Fn(&Element, serde_json::Value) -> serde_json::Value + Send + Sync + 'static,
	{
		self.getters.insert(key.into(), Arc::new(hook));
	}

	pub fn remove_setter(&mut self, key: &str) -> Option<SetHook> {
		self.setters.remove(key)
	}

	pub fn remove_getter(&mut self, key: &str) -> Option<GetHook> {
		self.getters.remove(key)
	}

	pub fn setter(&self, key: &str) -> Option<&SetHook> {
		self.setters.get(key)
	}

	pub fn getter(&self, key: &str) -> Option<&GetHook> {
		self.getters.get(key)
	}

	pub fn has_setter(&self, key: &str) -> bool {
		self.setters.contains_key(key)
	}

	pub fn has_getter(&self, key: &str) -> bool {
		self.getters.contains_key(key)
	}

	/// Copy every hook from `other`, overriding entries with the same key.
	pub fn extend(&mut self, other: Hooks) {
		self.setters.extend(other.setters);
		self.getters.extend(other.getters);
	}

	pub fn is_empty(&self) -> bool {
		self.setters.is_empty() && self.getters.is_empty()
	}
}

impl fmt::Debug for Hooks {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut setters: Vec<_> = self.setters.keys().collect();
		let mut getters: Vec<_> = self.getters.keys().collect();
		setters.sort();
		getters.sort();
		f.debug_struct("Hooks")
			.field("setters", &setters)
			.field("getters", &getters)
			.finish()
	}
}
