//! Form builder settings
//!
//! Settings can be built in code or loaded from a TOML fragment:
//!
//! ```toml
//! default_renderer = "basic"
//! getter_fallback = "unset"
//! ```

use crate::error::FormBuilderResult;
use reinhardt_formbuilder_element::GetterFallback;
use serde::{Deserialize, Serialize};

/// Manager-wide defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormBuilderSettings {
	/// Renderer assigned to forms created without an explicit one.
	pub default_renderer: Option<String>,
	/// Getter fallback policy applied to every field the manager's forms build.
	pub getter_fallback: GetterFallback,
}

impl FormBuilderSettings {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse settings from TOML. Missing keys take their defaults.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_formbuilder_element::GetterFallback;
	/// use reinhardt_formbuilder_forms::FormBuilderSettings;
	///
	/// let settings = FormBuilderSettings::from_toml_str(r#"default_renderer = "basic""#).unwrap();
	/// assert_eq!(settings.default_renderer.as_deref(), Some("basic"));
	/// assert_eq!(settings.getter_fallback, GetterFallback::Falsy);
	/// ```
	pub fn from_toml_str(source: &str) -> FormBuilderResult<Self> {
		Ok(toml::from_str(source)?)
	}

	pub fn with_default_renderer(mut self, name: impl Into<String>) -> Self {
		self.default_renderer = Some(name.into());
		self
	}

	pub fn with_getter_fallback(mut self, fallback: GetterFallback) -> Self {
		self.getter_fallback = fallback;
		self
	}
}
