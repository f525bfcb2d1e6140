//! Named renderer registry
//!
//! Renderers are registered as producers and built lazily: the first
//! resolution of a name runs its producer, later resolutions share the
//! same instance.

use crate::error::{FormBuilderError, FormBuilderResult};
use crate::renderer::Renderer;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

type RendererProducer = Box<dyn Fn() -> Arc<dyn Renderer> + Send + Sync>;

struct RendererEntry {
	producer: RendererProducer,
	instance: OnceCell<Arc<dyn Renderer>>,
}

/// Registry mapping renderer names to lazily built singletons.
///
/// # Examples
///
/// ```
/// use reinhardt_formbuilder_forms::{BasicRenderer, RendererRegistry};
/// use std::sync::Arc;
///
/// let registry = RendererRegistry::new();
/// registry.register("basic", BasicRenderer::new);
///
/// let first = registry.resolve("basic").unwrap();
/// let second = registry.resolve("basic").unwrap();
/// assert!(Arc::ptr_eq(&first, &second));
/// ```
#[derive(Default)]
pub struct RendererRegistry {
	renderers: RwLock<HashMap<String, Arc<RendererEntry>>>,
}

impl RendererRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register `producer` under `name`. Re-registering drops any instance
	/// already built for that name.
	pub fn register<F, R>(&self, name: impl Into<String>, producer: F)
	where
		F: Fn() -> R + Send + Sync + 'static,
		R: Renderer + 'static,
	{
		let name = name.into();
		tracing::debug!(name = %name, "registering renderer");
		let entry = RendererEntry {
			producer: Box::new(move || Arc::new(producer()) as Arc<dyn Renderer>),
			instance: OnceCell::new(),
		};
		self.renderers.write().insert(name, Arc::new(entry));
	}

	/// Shared renderer instance for `name`, built on first use.
	///
	/// # Errors
	///
	/// Returns [`FormBuilderError::UnknownRenderer`] when `name` is not
	/// registered.
	pub fn resolve(&self, name: &str) -> FormBuilderResult<Arc<dyn Renderer>> {
		let entry = self
			.renderers
			.read()
			.get(name)
			.cloned()
			.ok_or_else(|| FormBuilderError::UnknownRenderer(name.to_string()))?;

		let instance = entry.instance.get_or_init(|| {
			tracing::debug!(name, "instantiating renderer");
			(entry.producer)()
		});
		Ok(Arc::clone(instance))
	}

	/// Whether `name` has been instantiated.
	pub fn is_resolved(&self, name: &str) -> bool {
		self.renderers
			.read()
			.get(name)
			.is_some_and(|entry| entry.instance.get().is_some())
	}

	pub fn contains(&self, name: &str) -> bool {
		self.renderers.read().contains_key(name)
	}

	/// Registered names, sorted.
	pub fn names(&self) -> Vec<String> {
		let mut names: Vec<_> = self.renderers.read().keys().cloned().collect();
		names.sort();
		names
	}

	pub fn len(&self) -> usize {
		self.renderers.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.renderers.read().is_empty()
	}
}

impl fmt::Debug for RendererRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RendererRegistry")
			.field("renderers", &self.names())
			.finish()
	}
}
