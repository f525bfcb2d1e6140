//! # Reinhardt Form Builder
//!
//! Builds HTML forms out of fields whose configuration lives in two
//! namespaces: **properties**, which steer the builder, and **attributes**,
//! which end up on the rendered tag.
//!
//! ## Crates
//!
//! - [`element`]: the key/value store behind every field, with override hooks
//!   and class-list handling
//! - [`forms`]: field macros, renderers, event bindings, forms and the
//!   manager that ties them together
//!
//! ## Quick Start
//!
//! ```
//! use formbuilder::prelude::*;
//!
//! let manager = FormBuilderManager::with_defaults();
//! manager.add_macro("search", |mut field, _| {
//! 	field.set_attr("type", "search").placeholder("Search...");
//! 	field
//! });
//!
//! let form = manager.build(|form| {
//! 	form.add("search", "q").unwrap();
//! 	form.add("submit", "go").unwrap();
//! });
//!
//! let html = form.render()?;
//! assert!(html.contains(r#"placeholder="Search...""#));
//! assert!(html.contains(r#"value="Go""#));
//! # Ok::<(), FormBuilderError>(())
//! ```

pub mod element {
	pub use reinhardt_formbuilder_element::*;
}

pub mod forms {
	pub use reinhardt_formbuilder_forms::*;
}

pub use reinhardt_formbuilder_element::{
	ClassList, Element, Field, FieldOptions, GetterFallback, Hooks, Value,
};
pub use reinhardt_formbuilder_forms::{
	BasicRenderer, EventBindings, Form, FormBuilderError, FormBuilderManager, FormBuilderResult,
	FormBuilderSettings, FormEvent, MacroRegistry, RenderContext, Renderer, RendererRegistry,
};

pub mod prelude {
	// Element model
	pub use crate::{ClassList, Element, Field, FieldOptions, GetterFallback, Hooks, Value};

	// Forms
	pub use crate::{
		BasicRenderer, EventBindings, Form, FormBuilderError, FormBuilderManager,
		FormBuilderResult, FormBuilderSettings, FormEvent, MacroRegistry, RenderContext,
		Renderer, RendererRegistry,
	};
}
