//! Built-in field macros

use crate::macro_registry::MacroRegistry;
use crate::renderer::Renderer;
use reinhardt_formbuilder_element::Field;

/// Field types registered by [`register_standard_macros`] that only set the
/// `type` attribute.
pub const INPUT_TYPES: &[&str] = &["text", "email", "password", "hidden", "number", "checkbox"];

/// Register `text`, `email`, `password`, `hidden`, `number`, `checkbox`,
/// `textarea` and `submit`.
///
/// Each macro adds the renderer's [`input_classes`](Renderer::input_classes).
/// `textarea` sets the `tag` property instead of a `type` attribute;
/// `submit` uses the field label as its button text.
///
/// # Examples
///
/// ```
/// use reinhardt_formbuilder_element::Field;
/// use reinhardt_formbuilder_forms::{MacroRegistry, register_standard_macros};
/// use serde_json::json;
///
/// let registry = MacroRegistry::new();
/// register_standard_macros(&registry);
///
/// let field = registry.resolve("email", Field::new("contact"), None).unwrap();
/// assert_eq!(field.get_attr("type"), json!("email"));
/// ```
pub fn register_standard_macros(registry: &MacroRegistry) {
	for &input_type in INPUT_TYPES {
		registry.register(input_type, move |mut field: Field, renderer: Option<&dyn Renderer>| {
			field.set_attr("type", input_type);
			add_renderer_classes(&mut field, renderer);
			field
		});
	}

	registry.register("textarea", |mut field: Field, renderer: Option<&dyn Renderer>| {
		field.set_property("tag", "textarea");
		add_renderer_classes(&mut field, renderer);
		field
	});

	registry.register("submit", |mut field: Field, renderer: Option<&dyn Renderer>| {
		let label = field.label();
		field.set_attr("type", "submit");
		if !field.has_attr("value") {
			field.set_attr("value", label);
		}
		add_renderer_classes(&mut field, renderer);
		field
	});
}

fn add_renderer_classes(field: &mut Field, renderer: Option<&dyn Renderer>) {
	if let Some(renderer) = renderer {
		let classes = renderer.input_classes();
		if !classes.is_empty() {
			field.add_class(classes);
		}
	}
}
