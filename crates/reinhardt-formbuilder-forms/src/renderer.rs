//! Renderer strategy consumed by [`Form::render`](crate::Form::render)

use crate::error::FormBuilderResult;
use crate::events::{EventBindings, FormEvent};
use indexmap::IndexMap;
use reinhardt_formbuilder_element::Field;

/// Data a renderer needs besides the fields themselves.
#[derive(Debug)]
pub struct RenderContext<'a> {
	/// Resolved attributes of the form tag.
	pub form_attributes: IndexMap<String, serde_json::Value>,
	/// Bindings of the form being rendered.
	pub events: &'a EventBindings,
}

impl<'a> RenderContext<'a> {
	pub fn new(form_attributes: IndexMap<String, serde_json::Value>, events: &'a EventBindings) -> Self {
		Self {
			form_attributes,
			events,
		}
	}
}

/// Serialises a form's fields into markup.
///
/// Implementors supply [`render_field`](Renderer::render_field); the provided
/// [`render`](Renderer::render) walks the fields in order, firing
/// [`FormEvent::BeforeField`] and [`FormEvent::AfterField`] around each one,
/// between [`open_form`](Renderer::open_form) and
/// [`close_form`](Renderer::close_form).
///
/// # Examples
///
/// ```
/// use reinhardt_formbuilder_element::Field;
/// use reinhardt_formbuilder_forms::{EventBindings, FormBuilderResult, RenderContext, Renderer};
///
/// struct NamesOnly;
///
/// impl Renderer for NamesOnly {
/// 	fn render_field(&self, name: &str, _: &Field, _: &RenderContext<'_>) -> FormBuilderResult<String> {
/// 		Ok(format!("{};", name))
/// 	}
/// }
///
/// let events = EventBindings::new();
/// let ctx = RenderContext::new(Default::default(), &events);
/// let a = Field::new("a");
/// let b = Field::new("b");
///
/// let output = NamesOnly.render(&[("a", &a), ("b", &b)], &ctx).unwrap();
/// assert_eq!(output, "a;b;");
/// ```
pub trait Renderer: Send + Sync {
	/// Markup for a single field.
	fn render_field(
		&self,
		name: &str,
		field: &Field,
		ctx: &RenderContext<'_>,
	) -> FormBuilderResult<String>;

	/// Markup emitted before the first field.
	fn open_form(&self, _ctx: &RenderContext<'_>) -> String {
		String::new()
	}

	/// Markup emitted after the last field.
	fn close_form(&self, _ctx: &RenderContext<'_>) -> String {
		String::new()
	}

	/// Classes macros should add to inputs built for this renderer.
	fn input_classes(&self) -> &[&'static str] {
		&[]
	}

	/// Markup for the whole field collection, in the given order.
	fn render(&self, fields: &[(&str, &Field)], ctx: &RenderContext<'_>) -> FormBuilderResult<String> {
		let mut output = self.open_form(ctx);
		for &(name, field) in fields {
			output.push_str(&ctx.events.fire(FormEvent::BeforeField, Some(field)));
			output.push_str(&self.render_field(name, field, ctx)?);
			output.push_str(&ctx.events.fire(FormEvent::AfterField, Some(field)));
		}
		output.push_str(&self.close_form(ctx));
		Ok(output)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	struct Bracketed;

	impl Renderer for Bracketed {
		fn render_field(
			&self,
			name: &str,
			_field: &Field,
			_ctx: &RenderContext<'_>,
		) -> FormBuilderResult<String> {
			Ok(format!("[{}]", name))
		}

		fn open_form(&self, _ctx: &RenderContext<'_>) -> String {
			"<".to_string()
		}

		fn close_form(&self, _ctx: &RenderContext<'_>) -> String {
			">".to_string()
		}
	}

	#[rstest]
	fn test_render_wraps_fields_and_fires_field_events() {
		// Arrange
		let mut events = EventBindings::new();
		events
			.bind(FormEvent::BeforeField, |f| f.map(|f| format!("{}:", f.name())))
			.bind(FormEvent::AfterField, |_| Some(";".to_string()));
		let ctx = RenderContext::new(IndexMap::new(), &events);
		let first = Field::new("first");
		let second = Field::new("second");

		// Act
		let output = Bracketed
			.render(&[("first", &first), ("second", &second)], &ctx)
			.unwrap();

		// Assert
		assert_eq!(output, "<first:[first];second:[second];>");
	}

	#[rstest]
	fn test_default_input_classes_are_empty() {
		assert!(Bracketed.input_classes().is_empty());
	}
}
