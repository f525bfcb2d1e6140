//! Dual-namespace key/value store with override-hook dispatch
//!
//! An [`Element`] keeps two maps:
//!
//! - **properties**: builder configuration that never reaches markup
//! - **attributes**: key/value pairs destined for the rendered tag
//!
//! [`Element::set`] routes a key through, in order: a registered setter hook,
//! the property map (only when the key already exists there), and finally the
//! attribute map. [`Element::get`] resolves a key as a property when it exists
//! in the property map and as an attribute otherwise, then passes the result
//! through a registered getter hook.
//!
//! The `class` attribute is always held as a [`ClassList`] and flattened to a
//! single string by [`Element::get_attributes`].

use crate::class_list::{ClassList, ClassTokens};
use crate::hooks::Hooks;
use crate::value::{Value, is_falsy};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Attribute key that always holds a [`ClassList`].
pub const CLASS_KEY: &str = "class";

/// How [`Element::get`] picks the value handed to a getter hook.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GetterFallback {
	/// Any falsy resolved value (`0`, `""`, `false`, `null`, ...) is replaced
	/// with the caller's default before the hook sees it.
	#[default]
	Falsy,
	/// Only an absent key or a `null` value is replaced with the default.
	Unset,
}

/// Attribute/property container backing every form field.
///
/// # Examples
///
/// ```
/// use reinhardt_formbuilder_element::Element;
/// use serde_json::json;
///
/// let mut element = Element::default();
/// element.set_property("label", "Name").set("label", "Email");
///
/// assert_eq!(element.get_property("label"), json!("Email"));
/// assert_eq!(element.get_attr("label"), json!(null));
/// ```
#[derive(Clone, Default)]
pub struct Element {
	attributes: IndexMap<String, Value>,
	properties: IndexMap<String, Value>,
	hooks: Hooks,
	getter_fallback: GetterFallback,
}

impl Element {
	/// Build an element from initial attributes and properties.
	///
	/// Attributes go through [`merge_attributes`](Self::merge_attributes),
	/// properties through [`set_properties`](Self::set_properties).
	pub fn new<A, P, K1, V1, K2, V2>(attributes: A, properties: P) -> Self
	where
		A: IntoIterator<Item = (K1, V1)>,
		P: IntoIterator<Item = (K2, V2)>,
		K1: Into<String>,
		V1: Into<Value>,
		K2: Into<String>,
		V2: Into<Value>,
	{
		let mut element = Self::default();
		element.merge_attributes(attributes);
		element.set_properties(properties);
		element
	}

	/// Build an element whose `defaults` are applied first, with the caller's
	/// `attributes` merged on top of them.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_formbuilder_element::Element;
	///
	/// let element = Element::with_defaults(
	/// 	[("class", "form-control"), ("type", "text")],
	/// 	[("class", "wide"), ("type", "email")],
	/// 	Vec::<(String, String)>::new(),
	/// );
	///
	/// let attrs = element.get_attributes();
	/// assert_eq!(attrs["type"], "email");
	/// assert_eq!(attrs["class"], "form-control wide");
	/// ```
	pub fn with_defaults<D, A, P, K0, V0, K1, V1, K2, V2>(
		defaults: D,
		attributes: A,
		properties: P,
	) -> Self
	where
		D: IntoIterator<Item = (K0, V0)>,
		A: IntoIterator<Item = (K1, V1)>,
		P: IntoIterator<Item = (K2, V2)>,
		K0: Into<String>,
		V0: Into<Value>,
		K1: Into<String>,
		V1: Into<Value>,
		K2: Into<String>,
		V2: Into<Value>,
	{
		let mut element = Self::default();
		element.merge_attributes(defaults);
		element.merge_attributes(attributes);
		element.set_properties(properties);
		element
	}

	pub fn with_hooks(mut self, hooks: Hooks) -> Self {
		self.hooks = hooks;
		self
	}

	pub fn hooks(&self) -> &Hooks {
		&self.hooks
	}

	pub fn hooks_mut(&mut self) -> &mut Hooks {
		&mut self.hooks
	}

	pub fn with_getter_fallback(mut self, fallback: GetterFallback) -> Self {
		self.getter_fallback = fallback;
		self
	}

	pub fn set_getter_fallback(&mut self, fallback: GetterFallback) -> &mut Self {
		self.getter_fallback = fallback;
		self
	}

	pub fn getter_fallback(&self) -> GetterFallback {
		self.getter_fallback
	}

	/// Store `value` under `key`.
	///
	/// A setter hook for `key` takes the value instead of either map. Without
	/// one, the value goes to the property map when `key` is already a
	/// property, and to the attribute map otherwise.
	pub fn set(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
		let value = value.into();
		if let Some(hook) = self.hooks.setter(key).cloned() {
			tracing::trace!(key, "set dispatched to hook");
			hook(self, value);
		} else if self.is_property(key) {
			self.set_property(key, value);
		} else {
			self.set_attr(key, value);
		}
		self
	}

	/// Read `key` with a `null` default. See [`get_or`](Self::get_or).
	pub fn get(&self, key: &str) -> serde_json::Value {
		self.get_or(key, serde_json::Value::Null)
	}

	/// Read `key` as a property if it exists in the property map, otherwise as
	/// an attribute, falling back to `default`.
	///
	/// When a getter hook is registered for `key` its result is returned
	/// instead. Under [`GetterFallback::Falsy`] the hook receives `default`
	/// whenever the resolved value is falsy.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_formbuilder_element::{Element, Hooks};
	/// use serde_json::json;
	///
	/// let mut element = Element::default()
	/// 	.with_hooks(Hooks::new().on_get("count", |_, v| v));
	/// element.set("count", 0);
	///
	/// // a stored 0 is falsy, so the hook sees the default
	/// assert_eq!(element.get_or("count", 10), json!(10));
	/// ```
	pub fn get_or(&self, key: &str, default: impl Into<serde_json::Value>) -> serde_json::Value {
		let default = default.into();
		let value = if self.is_property(key) {
			self.get_property_or(key, default.clone())
		} else {
			self.get_attr_or(key, default.clone())
		};

		let Some(hook) = self.hooks.getter(key) else {
			return value;
		};
		tracing::trace!(key, "get dispatched to hook");

		let input = match self.getter_fallback {
			GetterFallback::Falsy if is_falsy(&value) => default,
			GetterFallback::Unset if value.is_null() => default,
			_ => value,
		};
		hook(self, input)
	}

	/// Call-style façade: `element.call("disabled").flag()` or
	/// `element.call("maxlength").value(20)`.
	pub fn call(&mut self, name: impl Into<String>) -> DynamicSetter<'_> {
		DynamicSetter {
			element: self,
			name: name.into(),
		}
	}

	// -- properties ---------------------------------------------------------

	pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
		self.properties.insert(name.into(), value.into());
		self
	}

	/// Set each property in turn.
	pub fn set_properties<I, K, V>(&mut self, properties: I) -> &mut Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<Value>,
	{
		for (name, value) in properties {
			self.set_property(name, value);
		}
		self
	}

	/// Overwrite properties with `properties`, keeping any others.
	pub fn append_properties<I, K, V>(&mut self, properties: I) -> &mut Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<Value>,
	{
		self.properties.extend(
			properties
				.into_iter()
				.map(|(name, value)| (name.into(), value.into())),
		);
		self
	}

	pub fn properties(&self) -> &IndexMap<String, Value> {
		&self.properties
	}

	pub fn get_property(&self, name: &str) -> serde_json::Value {
		self.get_property_or(name, serde_json::Value::Null)
	}

	/// Resolved property value, or `default` when the property is absent or
	/// `null`.
	pub fn get_property_or(
		&self,
		name: &str,
		default: impl Into<serde_json::Value>,
	) -> serde_json::Value {
		match self.properties.get(name) {
			Some(value) if !value.is_null() => value.resolve(),
			_ => default.into(),
		}
	}

	pub fn remove_property(&mut self, name: &str) -> &mut Self {
		self.properties.shift_remove(name);
		self
	}

	/// The key exists in the property map, whatever its value.
	pub fn is_property(&self, name: &str) -> bool {
		self.properties.contains_key(name)
	}

	/// The key exists in the property map and is not `null`.
	pub fn has_property(&self, name: &str) -> bool {
		self.properties.get(name).is_some_and(|v| !v.is_null())
	}

	// -- attributes ---------------------------------------------------------

	/// Store an attribute, replacing any previous value. Values stored under
	/// `class` are converted into a [`ClassList`]; a `null` class removes the
	/// attribute.
	pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
		let key = key.into();
		let value = value.into();
		let value = if key == CLASS_KEY {
			if value.is_null() {
				self.attributes.shift_remove(CLASS_KEY);
				return self;
			}
			Value::Classes(into_class_list(value))
		} else {
			value
		};
		self.attributes.insert(key, value);
		self
	}

	pub fn get_attr(&self, key: &str) -> serde_json::Value {
		self.get_attr_or(key, serde_json::Value::Null)
	}

	/// Resolved attribute value, or `default` when the key is absent. A stored
	/// `null` is returned as `null`.
	pub fn get_attr_or(&self, key: &str, default: impl Into<serde_json::Value>) -> serde_json::Value {
		match self.attributes.get(key) {
			Some(value) => value.resolve(),
			None => default.into(),
		}
	}

	pub fn has_attr(&self, key: &str) -> bool {
		self.attributes.contains_key(key)
	}

	pub fn remove_attr(&mut self, key: &str) -> &mut Self {
		self.attributes.shift_remove(key);
		self
	}

	/// Merge attributes into the existing set.
	///
	/// - `class` values are added to the class set, `null` adds nothing
	/// - a JSON array meeting an existing JSON array is appended to it
	/// - anything else replaces the previous value
	pub fn merge_attributes<I, K, V>(&mut self, attributes: I) -> &mut Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<Value>,
	{
		for (key, value) in attributes {
			let key = key.into();
			let value = value.into();
			if key == CLASS_KEY {
				if !value.is_null() {
					self.add_class(value);
				}
				continue;
			}
			if let (
				Some(Value::Scalar(serde_json::Value::Array(existing))),
				Value::Scalar(serde_json::Value::Array(incoming)),
			) = (self.attributes.get_mut(&key), &value)
			{
				existing.extend(incoming.iter().cloned());
				continue;
			}
			self.attributes.insert(key, value);
		}
		self
	}

	/// Replace every attribute.
	pub fn set_attributes<I, K, V>(&mut self, attributes: I) -> &mut Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<Value>,
	{
		self.attributes.clear();
		for (key, value) in attributes {
			self.set_attr(key, value);
		}
		self
	}

	/// Resolved attributes ready for output.
	///
	/// Lazy values are evaluated and the class set is flattened to a single
	/// space-joined string, emitted after every other attribute.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_formbuilder_element::Element;
	/// use serde_json::json;
	///
	/// let mut element = Element::default();
	/// element.add_class(["btn", "btn-primary"]).add_class("active");
	/// element.set_attr("type", "submit");
	///
	/// let attrs = element.get_attributes();
	/// assert_eq!(attrs["class"], json!("btn btn-primary active"));
	/// assert_eq!(attrs.keys().collect::<Vec<_>>(), vec!["type", "class"]);
	/// ```
	pub fn get_attributes(&self) -> IndexMap<String, serde_json::Value> {
		let mut resolved: IndexMap<String, serde_json::Value> = self
			.attributes
			.iter()
			.filter(|(key, _)| key.as_str() != CLASS_KEY)
			.map(|(key, value)| (key.clone(), value.resolve()))
			.collect();
		if let Some(class) = self.attributes.get(CLASS_KEY) {
			let joined = match class {
				Value::Classes(classes) => classes.joined(),
				other => into_class_list(other.clone()).joined(),
			};
			resolved.insert(CLASS_KEY.to_string(), serde_json::Value::String(joined));
		}
		resolved
	}

	/// Raw attribute storage, class set unflattened.
	pub fn attributes(&self) -> &IndexMap<String, Value> {
		&self.attributes
	}

	// -- classes ------------------------------------------------------------

	/// Add class tokens: a single token, a space-separated string, or a list
	/// of either. Existing tokens keep their position.
	pub fn add_class<C: ClassTokens>(&mut self, classes: C) -> &mut Self {
		let slot = self
			.attributes
			.entry(CLASS_KEY.to_string())
			.or_insert_with(|| Value::Classes(ClassList::new()));
		match slot {
			Value::Classes(list) => list.add(classes),
			other => {
				let mut list = into_class_list(other.clone());
				list.add(classes);
				*other = Value::Classes(list);
			}
		}
		self
	}

	/// Remove class tokens. Tokens that are not present are ignored, and an
	/// element without a class attribute is left untouched.
	pub fn remove_class<C: ClassTokens>(&mut self, classes: C) -> &mut Self {
		match self.attributes.get_mut(CLASS_KEY) {
			Some(Value::Classes(list)) => list.remove(classes),
			Some(other) => {
				let mut list = into_class_list(other.clone());
				list.remove(classes);
				*other = Value::Classes(list);
			}
			None => {}
		}
		self
	}

	pub fn has_class(&self, token: &str) -> bool {
		self.class_list().is_some_and(|list| list.contains(token))
	}

	pub fn class_list(&self) -> Option<&ClassList> {
		match self.attributes.get(CLASS_KEY) {
			Some(Value::Classes(list)) => Some(list),
			_ => None,
		}
	}

	// -- well-known keys ----------------------------------------------------

	pub fn id(&mut self, id: impl Into<Value>) -> &mut Self {
		self.set_attr("id", id)
	}

	pub fn placeholder(&mut self, text: impl Into<Value>) -> &mut Self {
		self.set_attr("placeholder", text)
	}

	pub fn class<C: ClassTokens>(&mut self, classes: C) -> &mut Self {
		self.add_class(classes)
	}

	pub fn required(&mut self) -> &mut Self {
		self.set("required", true)
	}

	pub fn disabled(&mut self) -> &mut Self {
		self.set("disabled", true)
	}

	pub fn readonly(&mut self) -> &mut Self {
		self.set("readonly", true)
	}

	pub fn autofocus(&mut self) -> &mut Self {
		self.set("autofocus", true)
	}

	// -- consuming builders -------------------------------------------------

	pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.set_attr(key, value);
		self
	}

	pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.set_property(name, value);
		self
	}

	pub fn with_class<C: ClassTokens>(mut self, classes: C) -> Self {
		self.add_class(classes);
		self
	}
}

fn into_class_list(value: Value) -> ClassList {
	match value {
		Value::Classes(list) => list,
		other => {
			let mut list = ClassList::new();
			list.add(other.resolve());
			list
		}
	}
}

impl fmt::Debug for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Element")
			.field("attributes", &self.attributes)
			.field("properties", &self.properties)
			.field("hooks", &self.hooks)
			.field("getter_fallback", &self.getter_fallback)
			.finish()
	}
}

/// Setter returned by [`Element::call`] for ad hoc keys.
///
/// `flag()` is the zero-argument form and goes through [`Element::set`] with
/// `true`. `value(v)` is the one-argument form and writes the attribute
/// directly, except for `class`, which adds tokens to the class set.
pub struct DynamicSetter<'a> {
	element: &'a mut Element,
	name: String,
}

impl<'a> DynamicSetter<'a> {
	pub fn flag(self) -> &'a mut Element {
		self.element.set(&self.name, true)
	}

	pub fn value(self, value: impl Into<Value>) -> &'a mut Element {
		let value = value.into();
		if self.name == CLASS_KEY {
			self.element.add_class(value)
		} else {
			self.element.set_attr(self.name, value)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use serde_json::json;
	use std::sync::Arc;
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[fixture]
	fn element() -> Element {
		Element::default()
	}

	#[rstest]
	fn test_set_new_key_goes_to_attributes(mut element: Element) {
		// Act
		element.set("placeholder", "Your name");

		// Assert
		assert_eq!(element.get_attr("placeholder"), json!("Your name"));
		assert!(!element.is_property("placeholder"));
		assert_eq!(element.get("placeholder"), json!("Your name"));
	}

	#[rstest]
	fn test_set_existing_property_goes_to_properties(mut element: Element) {
		// Arrange
		element.set_property("label", "Name");

		// Act
		element.set("label", "Email");

		// Assert
		assert_eq!(element.get_property("label"), json!("Email"));
		assert_eq!(element.get_attr("label"), json!(null));
		assert!(!element.has_attr("label"));
	}

	#[rstest]
	fn test_null_property_still_captures_set(mut element: Element) {
		// Arrange
		element.set_property("help", serde_json::Value::Null);

		// Act
		element.set("help", "Some help");

		// Assert
		assert!(!element.has_attr("help"));
		assert_eq!(element.get("help"), json!("Some help"));
	}

	#[rstest]
	fn test_property_takes_precedence_on_get(mut element: Element) {
		element.set_attr("title", "attr");
		element.set_property("title", "prop");
		assert_eq!(element.get("title"), json!("prop"));
	}

	#[rstest]
	fn test_null_property_hides_attribute_on_get(mut element: Element) {
		// the key resolves as a property even though its value is null
		element.set_attr("title", "attr");
		element.set_property("title", serde_json::Value::Null);
		assert_eq!(element.get_or("title", "fallback"), json!("fallback"));
	}

	#[rstest]
	fn test_get_missing_uses_default(element: Element) {
		assert_eq!(element.get("missing"), json!(null));
		assert_eq!(element.get_or("missing", 5), json!(5));
	}

	#[rstest]
	fn test_stored_null_attribute_is_returned(mut element: Element) {
		element.set_attr("value", serde_json::Value::Null);
		assert_eq!(element.get_attr_or("value", "default"), json!(null));
	}

	#[rstest]
	fn test_set_hook_replaces_store() {
		// Arrange
		let mut element = Element::default().with_hooks(Hooks::new().on_set(
			"size",
			|element, value| {
				element.set_attr("data-size", value);
			},
		));

		// Act
		element.set("size", "lg");

		// Assert
		assert!(!element.has_attr("size"));
		assert_eq!(element.get_attr("data-size"), json!("lg"));
	}

	#[rstest]
	fn test_set_hook_wins_over_property_routing() {
		let mut element = Element::default()
			.with_property("label", "Old")
			.with_hooks(Hooks::new().on_set("label", |element, value| {
				element.set_property("caption", value);
			}));

		element.set("label", "New");

		assert_eq!(element.get_property("label"), json!("Old"));
		assert_eq!(element.get_property("caption"), json!("New"));
	}

	#[rstest]
	fn test_set_attr_bypasses_hooks() {
		let calls = Arc::new(AtomicUsize::new(0));
		let counter = Arc::clone(&calls);
		let mut element = Element::default().with_hooks(Hooks::new().on_set("x", move |_, _| {
			counter.fetch_add(1, Ordering::SeqCst);
		}));

		element.set_attr("x", 1);

		assert_eq!(calls.load(Ordering::SeqCst), 0);
		assert_eq!(element.get_attr("x"), json!(1));
	}

	#[rstest]
	#[case(json!(0))]
	#[case(json!(""))]
	#[case(json!(false))]
	#[case(json!("0"))]
	fn test_getter_hook_sees_default_for_falsy_values(#[case] stored: serde_json::Value) {
		// Arrange
		let mut element =
			Element::default().with_hooks(Hooks::new().on_get("amount", |_, value| value));
		element.set_attr("amount", stored);

		// Act
		let value = element.get_or("amount", "default");

		// Assert
		assert_eq!(value, json!("default"));
	}

	#[rstest]
	#[case(json!(0))]
	#[case(json!(""))]
	#[case(json!(false))]
	fn test_unset_fallback_keeps_falsy_values(#[case] stored: serde_json::Value) {
		let mut element = Element::default()
			.with_getter_fallback(GetterFallback::Unset)
			.with_hooks(Hooks::new().on_get("amount", |_, value| value));
		element.set_attr("amount", stored.clone());

		assert_eq!(element.get_or("amount", "default"), stored);
	}

	#[rstest]
	fn test_unset_fallback_replaces_null() {
		let mut element = Element::default()
			.with_getter_fallback(GetterFallback::Unset)
			.with_hooks(Hooks::new().on_get("amount", |_, value| value));
		element.set_attr("amount", serde_json::Value::Null);

		assert_eq!(element.get_or("amount", "default"), json!("default"));
	}

	#[rstest]
	fn test_falsy_values_are_returned_without_getter_hook(mut element: Element) {
		element.set_attr("amount", 0);
		assert_eq!(element.get_or("amount", 10), json!(0));
	}

	#[rstest]
	fn test_lazy_values_resolve_on_read(mut element: Element) {
		// Arrange
		let calls = Arc::new(AtomicUsize::new(0));
		let counter = Arc::clone(&calls);
		element.set_attr(
			"data-token",
			Value::lazy(move || {
				counter.fetch_add(1, Ordering::SeqCst);
				json!("abc")
			}),
		);
		element.set_property("initial", Value::lazy(|| json!(42)));

		// Act / Assert
		assert_eq!(calls.load(Ordering::SeqCst), 0);
		assert_eq!(element.get("data-token"), json!("abc"));
		assert_eq!(element.get_attributes()["data-token"], json!("abc"));
		assert_eq!(calls.load(Ordering::SeqCst), 2);
		assert_eq!(element.get_property("initial"), json!(42));
	}

	#[rstest]
	fn test_is_property_and_has_property(mut element: Element) {
		element.set_property("a", serde_json::Value::Null);
		element.set_property("b", false);

		assert!(element.is_property("a"));
		assert!(!element.has_property("a"));
		assert!(element.has_property("b"));
		assert!(!element.is_property("c"));
		assert!(!element.has_property("c"));
	}

	#[rstest]
	fn test_remove_property_restores_attribute_routing(mut element: Element) {
		element.set_property("label", "x");
		element.remove_property("label");
		element.set("label", "y");

		assert!(!element.is_property("label"));
		assert_eq!(element.get_attr("label"), json!("y"));
	}

	#[rstest]
	fn test_get_property_or_default(mut element: Element) {
		element.set_property("n", serde_json::Value::Null);
		assert_eq!(element.get_property_or("n", "d"), json!("d"));
		assert_eq!(element.get_property_or("missing", "d"), json!("d"));
	}

	#[rstest]
	fn test_append_properties_overwrites(mut element: Element) {
		element.set_properties([("a", 1), ("b", 2)]);
		element.append_properties([("b", 3), ("c", 4)]);

		let keys: Vec<_> = element.properties().keys().cloned().collect();
		assert_eq!(keys, vec!["a", "b", "c"]);
		assert_eq!(element.get_property("b"), json!(3));
	}

	#[rstest]
	fn test_merge_attributes_concatenates_lists(mut element: Element) {
		// Arrange
		element.set_attr("data-tags", vec!["a"]);

		// Act
		element.merge_attributes([("data-tags", Value::from(vec!["b", "a"]))]);

		// Assert
		assert_eq!(element.get_attr("data-tags"), json!(["a", "b", "a"]));
	}

	#[rstest]
	fn test_merge_attributes_replaces_scalars(mut element: Element) {
		element.set_attr("type", "text");
		element.merge_attributes([("type", "email")]);
		assert_eq!(element.get_attr("type"), json!("email"));
	}

	#[rstest]
	fn test_merge_attributes_dedupes_classes(mut element: Element) {
		element.add_class("a b");
		element.merge_attributes([("class", "b c")]);
		assert_eq!(element.get_attributes()["class"], json!("a b c"));
	}

	#[rstest]
	fn test_constructor_merges_attributes_and_properties() {
		let element = Element::new(
			[("class", Value::from("x y")), ("name", Value::from("email"))],
			[("label", "Email")],
		);

		assert_eq!(element.get_attributes()["class"], json!("x y"));
		assert_eq!(element.get_attr("name"), json!("email"));
		assert!(element.is_property("label"));
	}

	#[rstest]
	fn test_set_attributes_replaces_everything(mut element: Element) {
		element.set_attr("a", 1).add_class("old");
		element.set_attributes([("b", "2"), ("class", "new")]);

		let attrs = element.get_attributes();
		assert!(!attrs.contains_key("a"));
		assert_eq!(attrs["b"], json!("2"));
		assert_eq!(attrs["class"], json!("new"));
		assert!(element.class_list().is_some());
	}

	#[rstest]
	fn test_add_class_chain(mut element: Element) {
		element.add_class(["btn", "btn-primary"]).add_class("active");
		assert_eq!(
			element.get_attributes()["class"],
			json!("btn btn-primary active")
		);
	}

	#[rstest]
	fn test_add_class_is_idempotent_and_ordered(mut element: Element) {
		element.add_class("a b").add_class("b c");
		assert_eq!(element.get_attr("class"), json!(["a", "b", "c"]));
	}

	#[rstest]
	fn test_set_attr_class_string_is_normalized(mut element: Element) {
		element.set_attr("class", "one  two one");
		assert_eq!(element.get_attr("class"), json!(["one", "two"]));
		assert_eq!(element.get_attributes()["class"], json!("one two"));
	}

	#[rstest]
	fn test_null_class_removes_attribute(mut element: Element) {
		// Arrange
		element.set_attr("id", "f");
		element.set_attr("class", json!(null));
		assert!(!element.has_attr("class"));

		element.add_class("a b");

		// Act
		element.set("class", serde_json::Value::Null);
		element.merge_attributes([("class", json!(null))]);

		// Assert
		assert!(!element.has_attr("class"));
		assert_eq!(element.get_attributes().keys().collect::<Vec<_>>(), vec!["id"]);
	}

	#[rstest]
	fn test_remove_class(mut element: Element) {
		element.add_class("a b c");
		element.remove_class("a").remove_class(["c"]);
		assert_eq!(element.get_attributes()["class"], json!("b"));
		assert!(element.has_class("b"));
		assert!(!element.has_class("a"));
	}

	#[rstest]
	fn test_remove_missing_class_is_noop(mut element: Element) {
		// Arrange
		element.add_class("a b");
		let before = element.get_attributes();

		// Act
		element.remove_class("zzz");

		// Assert
		assert_eq!(element.get_attributes(), before);
	}

	#[rstest]
	fn test_remove_class_without_class_attribute(mut element: Element) {
		element.remove_class("a");
		assert!(!element.has_attr("class"));
		assert!(element.get_attributes().is_empty());
	}

	#[rstest]
	fn test_class_is_emitted_last(mut element: Element) {
		element.add_class("x");
		element.set_attr("id", "f").set_attr("name", "f");

		let keys: Vec<_> = element.get_attributes().keys().cloned().collect();
		assert_eq!(keys, vec!["id", "name", "class"]);
	}

	#[rstest]
	fn test_dynamic_setter_zero_args_sets_true(mut element: Element) {
		element.call("disabled").flag();
		assert_eq!(element.get_attr("disabled"), json!(true));
	}

	#[rstest]
	fn test_dynamic_setter_zero_args_routes_through_set(mut element: Element) {
		element.set_property("inline", false);
		element.call("inline").flag();
		assert_eq!(element.get_property("inline"), json!(true));
		assert!(!element.has_attr("inline"));
	}

	#[rstest]
	fn test_dynamic_setter_one_arg_writes_attribute(mut element: Element) {
		// the one-argument form bypasses property routing
		element.set_property("maxlength", 5);
		element.call("maxlength").value(20);
		assert_eq!(element.get_attr("maxlength"), json!(20));
		assert_eq!(element.get_property("maxlength"), json!(5));
	}

	#[rstest]
	fn test_dynamic_setter_class_adds_tokens(mut element: Element) {
		element.add_class("a");
		element.call("class").value(vec!["b", "a c"]);
		assert_eq!(element.get_attributes()["class"], json!("a b c"));
	}

	#[rstest]
	fn test_well_known_helpers(mut element: Element) {
		element
			.id("email")
			.placeholder("you@example.com")
			.class("form-control")
			.required()
			.disabled()
			.readonly()
			.autofocus();

		let attrs = element.get_attributes();
		assert_eq!(attrs["id"], json!("email"));
		assert_eq!(attrs["placeholder"], json!("you@example.com"));
		assert_eq!(attrs["required"], json!(true));
		assert_eq!(attrs["disabled"], json!(true));
		assert_eq!(attrs["readonly"], json!(true));
		assert_eq!(attrs["autofocus"], json!(true));
		assert_eq!(attrs["class"], json!("form-control"));
	}

	#[rstest]
	fn test_getter_fallback_deserializes() {
		let parsed: GetterFallback = serde_json::from_value(json!("unset")).unwrap();
		assert_eq!(parsed, GetterFallback::Unset);
		assert_eq!(GetterFallback::default(), GetterFallback::Falsy);
	}
}
