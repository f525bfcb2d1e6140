//! A named element representing one form input

use crate::class_list::ClassTokens;
use crate::element::{Element, GetterFallback};
use crate::hooks::Hooks;
use crate::value::{Value, is_falsy};
use std::ops::{Deref, DerefMut};

/// Attributes and properties applied to a [`Field`] before a macro builds it.
///
/// # Examples
///
/// ```
/// use reinhardt_formbuilder_element::{Field, FieldOptions};
/// use serde_json::json;
///
/// let options = FieldOptions::new()
/// 	.attr("placeholder", "you@example.com")
/// 	.property("label", "E-mail");
/// let field = Field::with_options("email", options);
///
/// assert_eq!(field.get("placeholder"), json!("you@example.com"));
/// assert_eq!(field.label(), "E-mail");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldOptions {
	pub attributes: Vec<(String, Value)>,
	pub properties: Vec<(String, Value)>,
	pub getter_fallback: Option<GetterFallback>,
}

impl FieldOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.attributes.push((key.into(), value.into()));
		self
	}

	pub fn property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.properties.push((name.into(), value.into()));
		self
	}

	pub fn getter_fallback(mut self, fallback: GetterFallback) -> Self {
		self.getter_fallback = Some(fallback);
		self
	}
}

/// One form input.
///
/// A field starts with `name` and `id` attributes set to its name, the
/// `label`, `initial` and `help` properties declared (empty), and these hooks:
///
/// - reading `label` yields the humanised field name when no label is set
/// - reading `value` yields the `initial` property when no value is set
/// - setting `required` to a falsy value removes the attribute
///
/// The underlying [`Element`] is reachable through `Deref`.
///
/// # Examples
///
/// ```
/// use reinhardt_formbuilder_element::Field;
/// use serde_json::json;
///
/// let mut field = Field::new("first_name");
/// assert_eq!(field.label(), "First name");
///
/// field.set("label", "Given name");
/// assert_eq!(field.label(), "Given name");
/// assert!(!field.has_attr("label"));
/// ```
#[derive(Debug, Clone)]
pub struct Field {
	name: String,
	field_type: Option<String>,
	element: Element,
}

impl Field {
	pub fn new(name: impl Into<String>) -> Self {
		Self::with_options(name, FieldOptions::default())
	}

	pub fn with_options(name: impl Into<String>, options: FieldOptions) -> Self {
		let name = name.into();
		let element = Element::with_defaults(
			[("name", name.as_str()), ("id", name.as_str())],
			options.attributes,
			[
				("label", Value::null()),
				("initial", Value::null()),
				("help", Value::null()),
			],
		)
		.with_hooks(field_hooks(&name))
		.with_getter_fallback(options.getter_fallback.unwrap_or_default());

		let mut field = Self {
			name,
			field_type: None,
			element,
		};
		field.element.set_properties(options.properties);
		field
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Macro type this field was built by, if any.
	pub fn field_type(&self) -> Option<&str> {
		self.field_type.as_deref()
	}

	pub fn set_field_type(&mut self, field_type: impl Into<String>) -> &mut Self {
		self.field_type = Some(field_type.into());
		self
	}

	/// Resolved label text.
	pub fn label(&self) -> String {
		match self.element.get("label") {
			serde_json::Value::String(label) => label,
			other => other.to_string(),
		}
	}

	/// Resolved value: the `value` attribute, or the `initial` property.
	pub fn value(&self) -> serde_json::Value {
		self.element.get("value")
	}

	pub fn element(&self) -> &Element {
		&self.element
	}

	pub fn element_mut(&mut self) -> &mut Element {
		&mut self.element
	}

	pub fn into_element(self) -> Element {
		self.element
	}

	pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
		self.element.set(key, value);
		self
	}

	pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.element.set_attr(key, value);
		self
	}

	pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.element.set_property(name, value);
		self
	}

	pub fn with_class<C: ClassTokens>(mut self, classes: C) -> Self {
		self.element.add_class(classes);
		self
	}
}

impl Deref for Field {
	type Target = Element;

	fn deref(&self) -> &Element {
		&self.element
	}
}

impl DerefMut for Field {
	fn deref_mut(&mut self) -> &mut Element {
		&mut self.element
	}
}

fn field_hooks(name: &str) -> Hooks {
	let pretty = pretty_name(name);
	Hooks::new()
		.on_get("label", move |_, label| {
			if is_falsy(&label) {
				serde_json::Value::String(pretty.clone())
			} else {
				label
			}
		})
		.on_get("value", |element, value| {
			if value.is_null() {
				element.get_property("initial")
			} else {
				value
			}
		})
		.on_set("required", |element, value| {
			if is_falsy(&value.resolve()) {
				element.remove_attr("required");
			} else {
				element.set_attr("required", true);
			}
		})
}

/// `"first_name"` → `"First name"`.
pub fn pretty_name(name: &str) -> String {
	let spaced = name.replace('_', " ");
	let mut chars = spaced.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
