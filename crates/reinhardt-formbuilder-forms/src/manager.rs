//! Entry point tying registries, defaults and event bindings together

use crate::error::FormBuilderResult;
use crate::events::{EventBindings, FormEvent};
use crate::form::Form;
use crate::macro_registry::MacroRegistry;
use crate::renderer::Renderer;
use crate::renderer_registry::RendererRegistry;
use crate::renderers::BasicRenderer;
use crate::settings::FormBuilderSettings;
use crate::standard_macros;
use parking_lot::RwLock;
use reinhardt_formbuilder_element::{Field, GetterFallback};
use std::sync::Arc;

/// Creates forms wired to a shared set of registries.
///
/// Construct one at startup, register macros and renderers, then hand out
/// forms. Each form receives the manager's registries, its default renderer
/// name and a snapshot of the manager's event bindings taken at creation.
///
/// # Examples
///
/// ```
/// use reinhardt_formbuilder_forms::FormBuilderManager;
///
/// let manager = FormBuilderManager::with_defaults();
///
/// let html = manager
/// 	.build(|form| {
/// 		form.add("email", "contact").unwrap();
/// 	})
/// 	.render()
/// 	.unwrap();
///
/// assert!(html.contains(r#"type="email""#));
/// ```
#[derive(Debug)]
pub struct FormBuilderManager {
	macros: Arc<MacroRegistry>,
	renderers: Arc<RendererRegistry>,
	default_renderer: RwLock<Option<String>>,
	bindings: RwLock<EventBindings>,
	getter_fallback: GetterFallback,
}

impl Default for FormBuilderManager {
	fn default() -> Self {
		Self::new()
	}
}

impl FormBuilderManager {
	/// Manager with empty registries and no default renderer.
	pub fn new() -> Self {
		Self::with_registries(Arc::new(MacroRegistry::new()), Arc::new(RendererRegistry::new()))
	}

	/// Manager sharing existing registries.
	pub fn with_registries(macros: Arc<MacroRegistry>, renderers: Arc<RendererRegistry>) -> Self {
		Self {
			macros,
			renderers,
			default_renderer: RwLock::new(None),
			bindings: RwLock::new(EventBindings::new()),
			getter_fallback: GetterFallback::default(),
		}
	}

	/// Empty manager configured from settings.
	pub fn from_settings(settings: &FormBuilderSettings) -> Self {
		let mut manager = Self::new();
		manager.getter_fallback = settings.getter_fallback;
		if let Some(name) = &settings.default_renderer {
			manager.set_default_renderer(name.clone());
		}
		manager
	}

	/// Manager with the standard macros and [`BasicRenderer`] registered, and
	/// `"basic"` as the default renderer.
	pub fn with_defaults() -> Self {
		let manager = Self::new();
		manager.register_standard_macros();
		manager.add_renderer(BasicRenderer::NAME, BasicRenderer::new);
		manager.set_default_renderer(BasicRenderer::NAME);
		manager
	}

	// -- forms --------------------------------------------------------------

	/// New form using the default renderer.
	pub fn form(&self) -> Form {
		let renderer = self.default_renderer.read().clone();
		self.make_form(renderer)
	}

	/// New form using the named renderer.
	pub fn form_with_renderer(&self, renderer: impl Into<String>) -> Form {
		self.make_form(Some(renderer.into()))
	}

	/// New form using the default renderer, passed to `callback` before it is
	/// returned.
	pub fn build<F>(&self, callback: F) -> Form
	where
		F: FnOnce(&mut Form),
	{
		let mut form = self.form();
		callback(&mut form);
		form
	}

	pub fn build_with_renderer<F>(&self, renderer: impl Into<String>, callback: F) -> Form
	where
		F: FnOnce(&mut Form),
	{
		let mut form = self.form_with_renderer(renderer);
		callback(&mut form);
		form
	}

	fn make_form(&self, renderer: Option<String>) -> Form {
		tracing::debug!(renderer = renderer.as_deref(), "creating form");
		let mut form = Form::new(Arc::clone(&self.macros), Arc::clone(&self.renderers))
			.with_bindings(self.bindings.read().clone())
			.with_getter_fallback(self.getter_fallback);
		if let Some(renderer) = renderer {
			form.set_renderer(renderer);
		}
		form
	}

	/// Bind a callback for every form created from now on. Existing forms are
	/// not affected.
	pub fn bind<F>(&self, event: FormEvent, callback: F) -> &Self
	where
		F: Fn(Option<&Field>) -> Option<String> + Send + Sync + 'static,
	{
		self.bindings.write().bind(event, callback);
		self
	}

	// -- macros -------------------------------------------------------------

	pub fn add_macro<F>(&self, name: impl Into<String>, factory: F) -> &Self
	where
		F: Fn(Field, Option<&dyn Renderer>) -> Field + Send + Sync + 'static,
	{
		self.macros.register(name, factory);
		self
	}

	pub fn add_macro_with_initializer<F, I>(
		&self,
		name: impl Into<String>,
		factory: F,
		initializer: I,
	) -> &Self
	where
		F: Fn(Field, Option<&dyn Renderer>) -> Field + Send + Sync + 'static,
		I: Fn() + Send + Sync + 'static,
	{
		self.macros.register_with_initializer(name, factory, initializer);
		self
	}

	pub fn is_macro(&self, name: &str) -> bool {
		self.macros.contains(name)
	}

	/// Run a macro outside any form.
	pub fn call_macro(
		&self,
		name: &str,
		field: Field,
		renderer: Option<&dyn Renderer>,
	) -> FormBuilderResult<Field> {
		self.macros.resolve(name, field, renderer)
	}

	pub fn register_standard_macros(&self) -> &Self {
		standard_macros::register_standard_macros(&self.macros);
		self
	}

	pub fn macros(&self) -> &Arc<MacroRegistry> {
		&self.macros
	}

	// -- renderers ----------------------------------------------------------

	pub fn add_renderer<F, R>(&self, name: impl Into<String>, producer: F) -> &Self
	where
		F: Fn() -> R + Send + Sync + 'static,
		R: Renderer + 'static,
	{
		self.renderers.register(name, producer);
		self
	}

	pub fn get_renderer(&self, name: &str) -> FormBuilderResult<Arc<dyn Renderer>> {
		self.renderers.resolve(name)
	}

	/// Renderer name given to forms created without one. The name is not
	/// checked until a form uses it.
	pub fn set_default_renderer(&self, name: impl Into<String>) -> &Self {
		let name = name.into();
		tracing::debug!(renderer = %name, "setting default renderer");
		*self.default_renderer.write() = Some(name);
		self
	}

	pub fn default_renderer(&self) -> Option<String> {
		self.default_renderer.read().clone()
	}

	pub fn renderers(&self) -> &Arc<RendererRegistry> {
		&self.renderers
	}

	pub fn getter_fallback(&self) -> GetterFallback {
		self.getter_fallback
	}
}
