//! Field-type macro registry
//!
//! A macro turns a bare [`Field`] into a field of a particular type (text,
//! email, textarea, ...). Each macro may carry an initializer that runs once,
//! the first time the macro is resolved.

use crate::error::{FormBuilderError, FormBuilderResult};
use crate::renderer::Renderer;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use reinhardt_formbuilder_element::Field;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Builds a field of one type. Receives the freshly created field and the
/// form's renderer, if the form has one.
pub type MacroFactory = Arc<dyn Fn(Field, Option<&dyn Renderer>) -> Field + Send + Sync>;

/// One-time setup run before a macro's first use.
pub type MacroInitializer = Arc<dyn Fn() + Send + Sync>;

struct MacroEntry {
	factory: MacroFactory,
	initializer: Option<MacroInitializer>,
	initialized: OnceCell<()>,
}

impl MacroEntry {
	fn new(factory: MacroFactory, initializer: Option<MacroInitializer>) -> Self {
		Self {
			factory,
			initializer,
			initialized: OnceCell::new(),
		}
	}

	fn ensure_initialized(&self, name: &str) {
		self.initialized.get_or_init(|| {
			if let Some(initializer) = &self.initializer {
				tracing::debug!(name, "running macro initializer");
				initializer();
			}
		});
	}
}

/// Registry mapping field type names to macros.
///
/// # Examples
///
/// ```
/// use reinhardt_formbuilder_element::Field;
/// use reinhardt_formbuilder_forms::MacroRegistry;
/// use serde_json::json;
///
/// let registry = MacroRegistry::new();
/// registry.register("slug", |mut field, _| {
/// 	field.set_attr("type", "text").set_attr("pattern", "[a-z0-9-]+");
/// 	field
/// });
///
/// let field = registry.resolve("slug", Field::new("path"), None).unwrap();
/// assert_eq!(field.get_attr("pattern"), json!("[a-z0-9-]+"));
/// assert!(registry.resolve("nope", Field::new("x"), None).is_err());
/// ```
#[derive(Default)]
pub struct MacroRegistry {
	macros: RwLock<HashMap<String, Arc<MacroEntry>>>,
}

impl MacroRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register `factory` under `name`, replacing any previous macro.
	pub fn register<F>(&self, name: impl Into<String>, factory: F)
	where
		F: Fn(Field, Option<&dyn Renderer>) -> Field + Send + Sync + 'static,
	{
		self.insert(name.into(), MacroEntry::new(Arc::new(factory), None));
	}

	/// Register `factory` with an initializer that runs once, before the first
	/// resolution. Re-registering the name resets it.
	pub fn register_with_initializer<F, I>(&self, name: impl Into<String>, factory: F, initializer: I)
	where
		F: Fn(Field, Option<&dyn Renderer>) -> Field + Send + Sync + 'static,
		I: Fn() + Send + Sync + 'static,
	{
		self.insert(
			name.into(),
			MacroEntry::new(Arc::new(factory), Some(Arc::new(initializer))),
		);
	}

	fn insert(&self, name: String, entry: MacroEntry) {
		tracing::debug!(name = %name, "registering field macro");
		self.macros.write().insert(name, Arc::new(entry));
	}

	/// Run the macro registered under `name` on `field`.
	///
	/// # Errors
	///
	/// Returns [`FormBuilderError::UnknownMacro`] when `name` is not
	/// registered. `field` is dropped untouched in that case.
	pub fn resolve(
		&self,
		name: &str,
		field: Field,
		renderer: Option<&dyn Renderer>,
	) -> FormBuilderResult<Field> {
		let entry = self
			.macros
			.read()
			.get(name)
			.cloned()
			.ok_or_else(|| FormBuilderError::UnknownMacro(name.to_string()))?;

		entry.ensure_initialized(name);
		Ok((entry.factory)(field, renderer))
	}

	pub fn contains(&self, name: &str) -> bool {
		self.macros.read().contains_key(name)
	}

	/// Registered names, sorted.
	pub fn names(&self) -> Vec<String> {
		let mut names: Vec<_> = self.macros.read().keys().cloned().collect();
		names.sort();
		names
	}

	pub fn len(&self) -> usize {
		self.macros.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.macros.read().is_empty()
	}
}

impl fmt::Debug for MacroRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MacroRegistry")
			.field("macros", &self.names())
			.finish()
	}
}
