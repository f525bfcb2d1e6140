//! Plain HTML renderer

use crate::error::FormBuilderResult;
use crate::renderer::{RenderContext, Renderer};
use indexmap::IndexMap;
use reinhardt_formbuilder_element::Field;
use std::borrow::Cow;

/// Escape text for an attribute value or element content.
///
/// Quotes are escaped as well as `&`, `<` and `>`, so the result is safe
/// inside a double-quoted attribute. Clean input is borrowed.
pub fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

/// Text form of an attribute value. Lists are joined with spaces.
pub fn attribute_text(value: &serde_json::Value) -> String {
	match value {
		serde_json::Value::Null => String::new(),
		serde_json::Value::String(s) => s.clone(),
		serde_json::Value::Array(items) => items
			.iter()
			.map(attribute_text)
			.collect::<Vec<_>>()
			.join(" "),
		other => other.to_string(),
	}
}

/// Render attributes as ` key="value"` pairs.
///
/// `true` emits a bare attribute; `false` and `null` omit it.
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
/// use reinhardt_formbuilder_forms::renderers::render_attributes;
/// use serde_json::json;
///
/// let mut attrs = IndexMap::new();
/// attrs.insert("type".to_string(), json!("text"));
/// attrs.insert("required".to_string(), json!(true));
/// attrs.insert("disabled".to_string(), json!(false));
/// attrs.insert("title".to_string(), json!("a \"quote\""));
///
/// assert_eq!(
/// 	render_attributes(&attrs),
/// 	r#" type="text" required title="a &quot;quote&quot;""#
/// );
/// ```
pub fn render_attributes(attributes: &IndexMap<String, serde_json::Value>) -> String {
	let mut html = String::new();
	for (key, value) in attributes {
		match value {
			serde_json::Value::Null | serde_json::Value::Bool(false) => {}
			serde_json::Value::Bool(true) => {
				html.push(' ');
				html.push_str(key);
			}
			other => {
				html.push_str(&format!(
					" {}=\"{}\"",
					key,
					html_escape(&attribute_text(other))
				));
			}
		}
	}
	html
}

/// Renders fields as `<label>` plus `<input>` (or `<textarea>`) inside a
/// `<div>`, wrapped in a `<form>` tag carrying the form's attributes.
///
/// Hidden inputs are emitted bare; submit buttons get no label. A field whose
/// `tag` property is `"textarea"` renders its value as element content.
///
/// The rendered value is always [`Field::value`], so the field's `value`
/// getter hook applies to the markup as well.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicRenderer;

impl BasicRenderer {
	pub const NAME: &'static str = "basic";

	pub fn new() -> Self {
		Self
	}
}

impl Renderer for BasicRenderer {
	fn render_field(
		&self,
		_name: &str,
		field: &Field,
		_ctx: &RenderContext<'_>,
	) -> FormBuilderResult<String> {
		let mut attributes = field.get_attributes();
		attributes.shift_remove("value");
		let value = field.value();
		let input_type = attributes
			.get("type")
			.and_then(|t| t.as_str())
			.unwrap_or("")
			.to_string();
		let is_textarea = field.get_property("tag").as_str() == Some("textarea");

		let control = if is_textarea {
			format!(
				"<textarea{}>{}</textarea>",
				render_attributes(&attributes),
				html_escape(&attribute_text(&value))
			)
		} else {
			if !value.is_null() {
				attributes.insert("value".to_string(), value);
			}
			format!("<input{} />", render_attributes(&attributes))
		};

		if input_type == "hidden" {
			return Ok(format!("{}\n", control));
		}

		let mut html = String::from("<div>");
		if input_type != "submit" {
			let label = html_escape(&field.label()).into_owned();
			match attributes.get("id").map(attribute_text) {
				Some(id) => html.push_str(&format!(
					"<label for=\"{}\">{}</label>",
					html_escape(&id),
					label
				)),
				None => html.push_str(&format!("<label>{}</label>", label)),
			}
		}
		html.push_str(&control);
		if field.has_property("help") {
			html.push_str(&format!(
				"<small>{}</small>",
				html_escape(&attribute_text(&field.get_property("help")))
			));
		}
		html.push_str("</div>\n");
		Ok(html)
	}

	fn open_form(&self, ctx: &RenderContext<'_>) -> String {
		format!("<form{}>\n", render_attributes(&ctx.form_attributes))
	}

	fn close_form(&self, _ctx: &RenderContext<'_>) -> String {
		"</form>\n".to_string()
	}
}
