//! UI message catalog: JSON-shaped failure-message templates for a host
//! validation framework.
//!
//! The catalog maps a failure-kind key (e.g. `GreaterThan`, `Length_Simple`)
//! to a template string whose content is a JSON object with embedded
//! `{Placeholder}` tokens. During failure reporting the host resolves a
//! template by key and its substitution engine replaces the tokens with
//! run-time context values, producing the final UI-consumable message.

pub mod catalog;
pub mod templates;

pub use catalog::{MessageCatalog, MessageSource};
pub use templates::{CatalogError, RuleCategory, TemplateStore, SIMPLE_KINDS};
