//! CSS class set stored under the `class` attribute

use indexmap::IndexSet;
use std::fmt;

/// Ordered set of unique class tokens.
///
/// Tokens keep the position of their first insertion. The set is flattened to
/// a single space-joined string only when attributes are read for output.
///
/// # Examples
///
/// ```
/// use reinhardt_formbuilder_element::ClassList;
///
/// let mut classes = ClassList::new();
/// classes.add("a b");
/// classes.add(vec!["b", "c"]);
/// assert_eq!(classes.joined(), "a b c");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
	tokens: IndexSet<String>,
}

impl ClassList {
	pub fn new() -> Self {
		Self::default()
	}

	/// Add one or more tokens. Strings are split on whitespace; lists are
	/// walked element by element.
	pub fn add<C: ClassTokens>(&mut self, classes: C) {
		classes.visit_tokens(&mut |token| {
			self.tokens.insert(token.to_string());
		});
	}

	/// Remove one or more tokens, wherever they sit in the set. Absent tokens
	/// are ignored.
	pub fn remove<C: ClassTokens>(&mut self, classes: C) {
		classes.visit_tokens(&mut |token| {
			self.tokens.shift_remove(token);
		});
	}

	pub fn contains(&self, token: &str) -> bool {
		self.tokens.contains(token)
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.tokens.iter().map(String::as_str)
	}

	/// Space-joined form used for markup output.
	pub fn joined(&self) -> String {
		self.iter().collect::<Vec<_>>().join(" ")
	}

	pub(crate) fn to_json(&self) -> serde_json::Value {
		serde_json::Value::Array(
			self.tokens
				.iter()
				.map(|t| serde_json::Value::String(t.clone()))
				.collect(),
		)
	}
}

impl fmt::Display for ClassList {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.joined())
	}
}

impl<C: ClassTokens> FromIterator<C> for ClassList {
	fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
		let mut classes = ClassList::new();
		for item in iter {
			classes.add(item);
		}
		classes
	}
}

/// Anything that can be broken into class tokens.
///
/// Implemented for strings (split on whitespace, empty pieces dropped), for
/// lists of such values (visited element-wise) and for JSON values.
pub trait ClassTokens {
	fn visit_tokens(&self, f: &mut dyn FnMut(&str));
}

impl ClassTokens for str {
	fn visit_tokens(&self, f: &mut dyn FnMut(&str)) {
		self.split_ascii_whitespace().for_each(f);
	}
}

impl ClassTokens for String {
	fn visit_tokens(&self, f: &mut dyn FnMut(&str)) {
		self.as_str().visit_tokens(f);
	}
}

impl<T: ClassTokens + ?Sized> ClassTokens for &T {
	fn visit_tokens(&self, f: &mut dyn FnMut(&str)) {
		(**self).visit_tokens(f);
	}
}

impl<T: ClassTokens> ClassTokens for [T] {
	fn visit_tokens(&self, f: &mut dyn FnMut(&str)) {
		for item in self {
			item.visit_tokens(f);
		}
	}
}

impl<T: ClassTokens, const N: usize> ClassTokens for [T; N] {
	fn visit_tokens(&self, f: &mut dyn FnMut(&str)) {
		self.as_slice().visit_tokens(f);
	}
}

impl<T: ClassTokens> ClassTokens for Vec<T> {
	fn visit_tokens(&self, f: &mut dyn FnMut(&str)) {
		self.as_slice().visit_tokens(f);
	}
}

impl ClassTokens for ClassList {
	fn visit_tokens(&self, f: &mut dyn FnMut(&str)) {
		self.iter().for_each(f);
	}
}

impl ClassTokens for serde_json::Value {
	fn visit_tokens(&self, f: &mut dyn FnMut(&str)) {
		match self {
			serde_json::Value::String(s) => s.visit_tokens(f),
			serde_json::Value::Array(items) => items.visit_tokens(f),
			_ => {}
		}
	}
}
