//! Form assembly and rendering for the Reinhardt form builder
//!
//! This crate builds on [`reinhardt_formbuilder_element`] and provides:
//! - [`MacroRegistry`]: named field factories with one-time initializers
//! - [`RendererRegistry`]: named renderers built lazily and cached
//! - [`Form`]: an ordered collection of fields built through macros
//! - [`FormBuilderManager`]: the entry point that hands out configured forms
//! - [`EventBindings`]: callbacks spliced into render output
//! - [`BasicRenderer`] and the standard field macros
//!
//! ## Example
//!
//! ```
//! use reinhardt_formbuilder_forms::{FormBuilderManager, FormEvent};
//!
//! let manager = FormBuilderManager::with_defaults();
//! manager.bind(FormEvent::AfterForm, |_| Some("<!-- end -->".to_string()));
//!
//! let mut form = manager.form();
//! form.element_mut().set_attr("method", "post");
//! form.add("text", "username").unwrap().required();
//! form.add("password", "password").unwrap();
//! form.add("submit", "log_in").unwrap();
//!
//! let html = form.render().unwrap();
//! assert!(html.starts_with(r#"<form method="post">"#));
//! assert!(html.contains(r#"type="text" required"#));
//! assert!(html.ends_with("<!-- end -->"));
//! ```

pub mod error;
pub mod events;
pub mod form;
pub mod macro_registry;
pub mod manager;
pub mod renderer;
pub mod renderer_registry;
pub mod renderers;
pub mod settings;
pub mod standard_macros;

pub use error::{FormBuilderError, FormBuilderResult};
pub use events::{EventBindings, EventCallback, FormEvent};
pub use form::Form;
pub use macro_registry::{MacroFactory, MacroInitializer, MacroRegistry};
pub use manager::FormBuilderManager;
pub use renderer::{RenderContext, Renderer};
pub use renderer_registry::RendererRegistry;
pub use renderers::BasicRenderer;
pub use settings::FormBuilderSettings;
pub use standard_macros::register_standard_macros;
