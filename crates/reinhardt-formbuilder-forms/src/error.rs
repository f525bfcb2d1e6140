//! Error types for the form builder.

use thiserror::Error;

/// Errors raised by registries, forms and settings.
///
/// Every variant reports a configuration or programming mistake upstream;
/// none of them is transient.
#[derive(Debug, Error)]
pub enum FormBuilderError {
	/// No macro is registered under the requested field type.
	#[error("Macro not found: {0}")]
	UnknownMacro(String),

	/// No renderer is registered under the requested name.
	///
	/// An empty name means the form had no renderer set at all.
	#[error("Renderer not found: {0:?}")]
	UnknownRenderer(String),

	/// `Form::add` was called with a name that is already taken.
	#[error("Field already exists: {0}")]
	DuplicateFieldName(String),

	/// A renderer failed to produce markup.
	#[error("Render error: {0}")]
	Render(String),

	/// Settings could not be parsed.
	#[error("Invalid settings: {0}")]
	Settings(#[from] toml::de::Error),
}

pub type FormBuilderResult<T> = Result<T, FormBuilderError>;
