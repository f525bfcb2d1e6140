//! Stored value shapes for attributes and properties

use crate::class_list::{ClassList, ClassTokens};
use std::fmt;
use std::sync::Arc;

/// Deferred value, evaluated every time the owning key is read.
pub type Thunk = Arc<dyn Fn() -> serde_json::Value + Send + Sync>;

/// A value held by an [`Element`](crate::Element).
///
/// Reads never hand out a `Value`; they resolve it into a plain
/// `serde_json::Value` first. JSON arrays stored as [`Value::Scalar`] are
/// list attributes and concatenate when merged.
#[derive(Clone)]
pub enum Value {
	/// A plain JSON value, including `null` and arrays.
	Scalar(serde_json::Value),
	/// A value computed on read.
	Lazy(Thunk),
	/// The de-duplicated class set. Only stored under the `class` key.
	Classes(ClassList),
}

impl Value {
	/// Wrap a closure so that it is evaluated lazily on read.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_formbuilder_element::Value;
	/// use serde_json::json;
	///
	/// let value = Value::lazy(|| json!("computed"));
	/// assert_eq!(value.resolve(), json!("computed"));
	/// ```
	pub fn lazy<F>(f: F) -> Self
	where
		F: Fn() -> serde_json::Value + Send + Sync + 'static,
	{
		Value::Lazy(Arc::new(f))
	}

	pub fn null() -> Self {
		Value::Scalar(serde_json::Value::Null)
	}

	/// Resolve into a plain JSON value. A class set resolves to an array of
	/// strings.
	pub fn resolve(&self) -> serde_json::Value {
		match self {
			Value::Scalar(v) => v.clone(),
			Value::Lazy(thunk) => thunk(),
			Value::Classes(classes) => classes.to_json(),
		}
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Value::Scalar(serde_json::Value::Null))
	}

	pub fn is_lazy(&self) -> bool {
		matches!(self, Value::Lazy(_))
	}
}

/// Loose truthiness used by the getter-hook fallback.
///
/// `null`, `false`, `0`, `0.0`, `""`, `"0"` and empty arrays or objects are
/// falsy.
///
/// # Examples
///
/// ```
/// use reinhardt_formbuilder_element::is_falsy;
/// use serde_json::json;
///
/// assert!(is_falsy(&json!("0")));
/// assert!(is_falsy(&json!([])));
/// assert!(!is_falsy(&json!("false")));
/// ```
pub fn is_falsy(value: &serde_json::Value) -> bool {
	match value {
		serde_json::Value::Null => true,
		serde_json::Value::Bool(b) => !b,
		serde_json::Value::Number(n) => n.as_f64() == Some(0.0),
		serde_json::Value::String(s) => s.is_empty() || s == "0",
		serde_json::Value::Array(items) => items.is_empty(),
		serde_json::Value::Object(map) => map.is_empty(),
	}
}

impl ClassTokens for Value {
	fn visit_tokens(&self, f: &mut dyn FnMut(&str)) {
		match self {
			Value::Classes(classes) => classes.visit_tokens(f),
			other => other.resolve().visit_tokens(f),
		}
	}
}

impl fmt::Debug for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Scalar(v) => f.debug_tuple("Scalar").field(v).finish(),
			Value::Lazy(_) => f.write_str("Lazy(<thunk>)"),
			Value::Classes(classes) => f.debug_tuple("Classes").field(classes).finish(),
		}
	}
}

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		Value::Scalar(value)
	}
}

impl From<ClassList> for Value {
	fn from(classes: ClassList) -> Self {
		Value::Classes(classes)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Scalar(serde_json::Value::String(value.to_string()))
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::Scalar(serde_json::Value::String(value))
	}
}

impl From<&String> for Value {
	fn from(value: &String) -> Self {
		Value::Scalar(serde_json::Value::String(value.clone()))
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Scalar(serde_json::Value::Bool(value))
	}
}

macro_rules! impl_from_number {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for Value {
				fn from(value: $ty) -> Self {
					Value::Scalar(serde_json::Value::from(value))
				}
			}
		)*
	};
}

impl_from_number!(i32, i64, u32, u64, usize, f64);

impl<T: Into<serde_json::Value>> From<Vec<T>> for Value {
	fn from(items: Vec<T>) -> Self {
		Value::Scalar(serde_json::Value::Array(
			items.into_iter().map(Into::into).collect(),
		))
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map(Into::into).unwrap_or_else(Value::null)
	}
}
