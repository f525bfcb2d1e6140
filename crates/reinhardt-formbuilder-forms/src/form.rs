//! Form aggregate: an ordered collection of named fields

use crate::error::{FormBuilderError, FormBuilderResult};
use crate::events::{EventBindings, FormEvent};
use crate::macro_registry::MacroRegistry;
use crate::renderer::{RenderContext, Renderer};
use crate::renderer_registry::RendererRegistry;
use indexmap::IndexMap;
use reinhardt_formbuilder_element::{Element, Field, FieldOptions, GetterFallback};
use std::ops::Index;
use std::sync::Arc;

/// A form under construction.
///
/// Fields are built by macros looked up in the form's [`MacroRegistry`] and
/// rendered by a renderer looked up by name in its [`RendererRegistry`].
/// Forms are usually obtained from a
/// [`FormBuilderManager`](crate::FormBuilderManager), which hands each one a
/// snapshot of its event bindings.
///
/// # Examples
///
/// ```
/// use reinhardt_formbuilder_forms::{Form, MacroRegistry, RendererRegistry};
/// use serde_json::json;
/// use std::sync::Arc;
///
/// let macros = Arc::new(MacroRegistry::new());
/// macros.register("text", |mut field, _| {
/// 	field.set_attr("type", "text");
/// 	field
/// });
/// let mut form = Form::new(macros, Arc::new(RendererRegistry::new()));
///
/// form.add("text", "email").unwrap();
///
/// assert_eq!(form["email"].get_attr("type"), json!("text"));
/// assert!(form.add("text", "email").is_err());
/// ```
#[derive(Debug)]
pub struct Form {
	element: Element,
	fields: IndexMap<String, Field>,
	renderer: Option<String>,
	bindings: EventBindings,
	getter_fallback: GetterFallback,
	macros: Arc<MacroRegistry>,
	renderers: Arc<RendererRegistry>,
}

impl Form {
	pub fn new(macros: Arc<MacroRegistry>, renderers: Arc<RendererRegistry>) -> Self {
		Self {
			element: Element::default(),
			fields: IndexMap::new(),
			renderer: None,
			bindings: EventBindings::new(),
			getter_fallback: GetterFallback::default(),
			macros,
			renderers,
		}
	}

	pub fn with_renderer(mut self, name: impl Into<String>) -> Self {
		self.renderer = Some(name.into());
		self
	}

	pub fn with_bindings(mut self, bindings: EventBindings) -> Self {
		self.bindings = bindings;
		self
	}

	/// Fallback policy given to fields this form builds, unless their options
	/// choose one.
	pub fn with_getter_fallback(mut self, fallback: GetterFallback) -> Self {
		self.getter_fallback = fallback;
		self
	}

	// -- fields -------------------------------------------------------------

	/// Build a field of type `field_type` and store it under `name`.
	///
	/// # Errors
	///
	/// - [`FormBuilderError::DuplicateFieldName`] when `name` is taken; no
	///   macro runs in that case
	/// - [`FormBuilderError::UnknownRenderer`] when the form's renderer name
	///   is not registered
	/// - [`FormBuilderError::UnknownMacro`] when `field_type` is not registered
	pub fn add(&mut self, field_type: &str, name: &str) -> FormBuilderResult<&mut Field> {
		self.add_with(field_type, name, FieldOptions::default())
	}

	/// [`add`](Self::add) with attributes and properties applied before the
	/// macro runs.
	pub fn add_with(
		&mut self,
		field_type: &str,
		name: &str,
		options: FieldOptions,
	) -> FormBuilderResult<&mut Field> {
		if self.fields.contains_key(name) {
			tracing::warn!(field = name, "rejecting duplicate field name");
			return Err(FormBuilderError::DuplicateFieldName(name.to_string()));
		}
		let field = self.build_field(field_type, name, options)?;
		Ok(self.fields.entry(name.to_string()).or_insert(field))
	}

	/// Build a field and store it under `name`, overwriting any field already
	/// there. An overwritten field keeps its position.
	pub fn replace(&mut self, field_type: &str, name: &str) -> FormBuilderResult<&mut Field> {
		self.replace_with(field_type, name, FieldOptions::default())
	}

	pub fn replace_with(
		&mut self,
		field_type: &str,
		name: &str,
		options: FieldOptions,
	) -> FormBuilderResult<&mut Field> {
		let field = self.build_field(field_type, name, options)?;
		let (index, previous) = self.fields.insert_full(name.to_string(), field);
		if previous.is_some() {
			tracing::debug!(field = name, "replaced existing field");
		}
		Ok(&mut self.fields[index])
	}

	fn build_field(
		&self,
		field_type: &str,
		name: &str,
		mut options: FieldOptions,
	) -> FormBuilderResult<Field> {
		let renderer = self.resolve_renderer()?;
		options.getter_fallback.get_or_insert(self.getter_fallback);

		let mut field = self.macros.resolve(
			field_type,
			Field::with_options(name, options),
			renderer.as_deref(),
		)?;
		field.set_field_type(field_type);
		Ok(field)
	}

	fn resolve_renderer(&self) -> FormBuilderResult<Option<Arc<dyn Renderer>>> {
		self.renderer
			.as_deref()
			.map(|name| self.renderers.resolve(name))
			.transpose()
	}

	pub fn field(&self, name: &str) -> Option<&Field> {
		self.fields.get(name)
	}

	pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
		self.fields.get_mut(name)
	}

	/// Fields in insertion order.
	pub fn fields(&self) -> &IndexMap<String, Field> {
		&self.fields
	}

	/// Remove and return the field stored under `name`. Later fields keep
	/// their relative order.
	pub fn remove(&mut self, name: &str) -> Option<Field> {
		self.fields.shift_remove(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.fields.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	// -- rendering ----------------------------------------------------------

	pub fn renderer_name(&self) -> Option<&str> {
		self.renderer.as_deref()
	}

	pub fn set_renderer(&mut self, name: impl Into<String>) -> &mut Self {
		self.renderer = Some(name.into());
		self
	}

	/// Attributes of the form tag itself.
	pub fn element(&self) -> &Element {
		&self.element
	}

	pub fn element_mut(&mut self) -> &mut Element {
		&mut self.element
	}

	pub fn bind<F>(&mut self, event: FormEvent, callback: F) -> &mut Self
	where
		F: Fn(Option<&Field>) -> Option<String> + Send + Sync + 'static,
	{
		self.bindings.bind(event, callback);
		self
	}

	pub fn bindings(&self) -> &EventBindings {
		&self.bindings
	}

	/// Render the form with its named renderer.
	///
	/// Output is the `BeforeForm` event output, the renderer's markup for
	/// every field in insertion order, then the `AfterForm` event output.
	///
	/// # Errors
	///
	/// - [`FormBuilderError::UnknownRenderer`] when the name is not registered,
	///   or with an empty name when the form has no renderer
	/// - any error the renderer returns
	pub fn render(&self) -> FormBuilderResult<String> {
		let renderer = self
			.resolve_renderer()?
			.ok_or_else(|| FormBuilderError::UnknownRenderer(String::new()))?;
		let ctx = RenderContext::new(self.element.get_attributes(), &self.bindings);
		let fields: Vec<(&str, &Field)> = self
			.fields
			.iter()
			.map(|(name, field)| (name.as_str(), field))
			.collect();

		let mut output = self.bindings.fire(FormEvent::BeforeForm, None);
		output.push_str(&renderer.render(&fields, &ctx)?);
		output.push_str(&self.bindings.fire(FormEvent::AfterForm, None));
		Ok(output)
	}
}

impl Index<&str> for Form {
	type Output = Field;

	fn index(&self, name: &str) -> &Field {
		self.fields
			.get(name)
			.unwrap_or_else(|| panic!("Field '{}' not found", name))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::renderers::BasicRenderer;
	use rstest::{fixture, rstest};
	use serde_json::json;
	use std::sync::atomic::{AtomicUsize, Ordering};

	struct Listing;

	impl Renderer for Listing {
		fn render_field(
			&self,
			name: &str,
			field: &Field,
			_ctx: &RenderContext<'_>,
		) -> FormBuilderResult<String> {
			Ok(format!("{}={};", name, field.get_attr("type")))
		}

		fn input_classes(&self) -> &[&'static str] {
			&["listed"]
		}
	}

	#[fixture]
	fn form() -> Form {
		let macros = Arc::new(MacroRegistry::new());
		macros.register("text", |mut field, renderer| {
			field.set_attr("type", "text");
			if let Some(classes) = renderer.map(|r| r.input_classes()).filter(|c| !c.is_empty()) {
				field.add_class(classes);
			}
			field
		});
		macros.register("email", |mut field, _| {
			field.set_attr("type", "email");
			field
		});
		let renderers = Arc::new(RendererRegistry::new());
		renderers.register("listing", || Listing);
		renderers.register("basic", BasicRenderer::new);
		Form::new(macros, renderers)
	}

	#[rstest]
	fn test_add_builds_through_macro(mut form: Form) {
		// Act
		form.add("text", "email").unwrap();

		// Assert
		let field = &form["email"];
		assert_eq!(field.get_attr("type"), json!("text"));
		assert_eq!(field.field_type(), Some("text"));
		assert_eq!(field.name(), "email");
	}

	#[rstest]
	fn test_add_with_options(mut form: Form) {
		form.add_with(
			"text",
			"city",
			FieldOptions::new().attr("placeholder", "Oslo").property("label", "Town"),
		)
		.unwrap();

		assert_eq!(form["city"].get_attr("placeholder"), json!("Oslo"));
		assert_eq!(form["city"].label(), "Town");
	}

	#[rstest]
	fn test_duplicate_rejected_before_macro_runs() {
		// Arrange
		let calls = Arc::new(AtomicUsize::new(0));
		let counter = calls.clone();
		let macros = Arc::new(MacroRegistry::new());
		macros.register("text", move |field, _| {
			counter.fetch_add(1, Ordering::SeqCst);
			field
		});
		let mut form = Form::new(macros, Arc::new(RendererRegistry::new()));
		form.add("text", "name").unwrap();

		// Act
		let err = form.add("text", "name").unwrap_err();

		// Assert
		assert!(matches!(err, FormBuilderError::DuplicateFieldName(ref n) if n == "name"));
		assert_eq!(calls.load(Ordering::SeqCst), 1);
		assert_eq!(form.len(), 1);
	}

	#[rstest]
	fn test_replace_keeps_position(mut form: Form) {
		form.add("text", "a").unwrap();
		form.add("text", "b").unwrap();

		form.replace("email", "a").unwrap();

		assert_eq!(form.fields().keys().collect::<Vec<_>>(), vec!["a", "b"]);
		assert_eq!(form["a"].get_attr("type"), json!("email"));
	}

	#[rstest]
	fn test_unknown_macro_leaves_form_unchanged(mut form: Form) {
		let err = form.add("colour", "c").unwrap_err();

		assert!(matches!(err, FormBuilderError::UnknownMacro(_)));
		assert!(form.is_empty());
	}

	#[rstest]
	fn test_macro_receives_renderer(mut form: Form) {
		form.set_renderer("listing");

		form.add("text", "q").unwrap();

		assert!(form["q"].has_class("listed"));
	}

	#[rstest]
	fn test_unknown_renderer_aborts_add(mut form: Form) {
		form.set_renderer("fancy");

		let err = form.add("text", "q").unwrap_err();

		assert!(matches!(err, FormBuilderError::UnknownRenderer(ref n) if n == "fancy"));
		assert!(!form.contains("q"));
	}

	#[rstest]
	fn test_render_in_insertion_order(mut form: Form) {
		// Arrange
		form.set_renderer("listing");
		form.add("email", "b").unwrap();
		form.add("text", "a").unwrap();
		form.bind(FormEvent::BeforeForm, |_| Some("[".to_string()))
			.bind(FormEvent::AfterForm, |_| Some("]".to_string()));

		// Act
		let output = form.render().unwrap();

		// Assert
		assert_eq!(output, "[b=\"email\";a=\"text\";]");
	}

	#[rstest]
	fn test_render_without_renderer(form: Form) {
		let err = form.render().unwrap_err();

		assert!(matches!(err, FormBuilderError::UnknownRenderer(ref name) if name.is_empty()));
		assert_eq!(err.to_string(), "Renderer not found: \"\"");
	}

	#[rstest]
	fn test_render_basic_with_form_attributes(mut form: Form) {
		form.set_renderer("basic");
		form.element_mut().set_attr("method", "post");
		form.add("text", "q").unwrap();

		let html = form.render().unwrap();

		assert!(html.starts_with("<form method=\"post\">\n"));
		assert!(html.ends_with("</form>\n"));
		assert!(html.contains("<label for=\"q\">Q</label>"));
	}

	#[rstest]
	fn test_getter_fallback_propagates_to_fields(form: Form) {
		let mut form = form.with_getter_fallback(GetterFallback::Unset);

		form.add("text", "n").unwrap();

		assert_eq!(form["n"].getter_fallback(), GetterFallback::Unset);
	}

	#[rstest]
	fn test_remove_and_lookup(mut form: Form) {
		form.add("text", "a").unwrap();
		form.add("text", "b").unwrap();

		let removed = form.remove("a").unwrap();
		form.field_mut("b").unwrap().placeholder("B");

		assert_eq!(removed.name(), "a");
		assert!(form.field("a").is_none());
		assert_eq!(form.field("b").unwrap().get_attr("placeholder"), json!("B"));
	}

	#[rstest]
	#[should_panic(expected = "Field 'missing' not found")]
	fn test_index_missing_field_panics(form: Form) {
		let _ = &form["missing"];
	}
}
