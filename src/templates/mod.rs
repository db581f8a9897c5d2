//! Template system - default message templates and rule-category bindings

pub mod bindings;
pub mod store;

pub use bindings::{required_kinds, RuleCategory, SIMPLE_KINDS};
pub use store::{CatalogError, TemplateStore};
