//! Attribute/property store for Reinhardt form builder fields
//!
//! This crate holds the object model every form field is built on:
//!
//! - [`Element`]: two key/value namespaces (properties and attributes) with
//!   per-key override hooks and class-list helpers
//! - [`Field`]: a named element representing one form input
//! - [`Value`] / [`ClassList`]: the stored value shapes
//!
//! ## Example
//!
//! ```
//! use reinhardt_formbuilder_element::Field;
//! use serde_json::json;
//!
//! let mut field = Field::new("email");
//! field
//! 	.set_attr("type", "email")
//! 	.add_class("form-control")
//! 	.placeholder("you@example.com");
//!
//! let attrs = field.get_attributes();
//! assert_eq!(attrs["type"], json!("email"));
//! assert_eq!(attrs["class"], json!("form-control"));
//! ```

pub mod class_list;
pub mod element;
pub mod field;
pub mod hooks;
pub mod value;

pub use class_list::{ClassList, ClassTokens};
pub use element::{CLASS_KEY, DynamicSetter, Element, GetterFallback};
pub use field::{Field, FieldOptions, pretty_name};
pub use hooks::{GetHook, Hooks, SetHook};
pub use value::{Thunk, Value, is_falsy};
