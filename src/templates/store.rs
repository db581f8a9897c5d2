//! Template store - the realized failure-kind to template mapping
//!
//! Templates are kept as opaque strings, not parsed JSON: the host's
//! substitution engine works by plain text replacement of `{Placeholder}`
//! tokens, so each message shape from the bundled resource is re-serialized
//! to its compact string form at load time and never touched again.

use miette::Diagnostic;
use rust_embed::Embed;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use thiserror::Error;

use crate::templates::bindings;

/// Bundled message resources, embedded at build time
#[derive(Embed)]
#[folder = "resources/"]
struct EmbeddedResources;

/// Filename of the default message resource
const DEFAULT_RESOURCE: &str = "default_messages.json";

/// Errors raised while building a template store
///
/// Both variants are construction-time configuration faults; lookups on a
/// built store never fail. String payloads keep the type `Clone` so a cached
/// construction result can be reported to every caller.
#[derive(Debug, Clone, Error, Diagnostic)]
pub enum CatalogError {
    /// The bundled resource is absent or not a JSON object of objects
    #[error("message resource unreadable: {0}")]
    #[diagnostic(code(ui_messages::resource_unreadable))]
    ResourceUnreadable(String),

    /// The binding table references a kind the resource has no entry for
    #[error("no template for failure kind '{0}'")]
    #[diagnostic(code(ui_messages::missing_template))]
    MissingTemplate(String),
}

/// Immutable mapping from failure kind to template string
///
/// Built once, then read-only; swapping templates means building a new store.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    templates: HashMap<String, String>,
}

impl TemplateStore {
    /// Build a store from a resource document: a top-level JSON object whose
    /// field names are failure kinds and whose values are message-shape
    /// objects. Each value is stored in compact serialized form, preserving
    /// its authored field order.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let document: serde_json::Map<String, JsonValue> = serde_json::from_str(raw)
            .map_err(|e| CatalogError::ResourceUnreadable(e.to_string()))?;

        let mut templates = HashMap::with_capacity(document.len());
        for (kind, shape) in document {
            if !shape.is_object() {
                return Err(CatalogError::ResourceUnreadable(format!(
                    "field '{}' is not a JSON object",
                    kind
                )));
            }
            let template = serde_json::to_string(&shape)
                .map_err(|e| CatalogError::ResourceUnreadable(e.to_string()))?;
            templates.insert(kind, template);
        }

        Ok(Self { templates })
    }

    /// Load the bundled default messages and verify them against the
    /// binding table. Defaults are complete by contract: a kind the table
    /// references but the resource lacks fails construction rather than
    /// surfacing later as a silent lookup miss.
    pub fn load_default() -> Result<Self, CatalogError> {
        let resource = EmbeddedResources::get(DEFAULT_RESOURCE).ok_or_else(|| {
            CatalogError::ResourceUnreadable(format!(
                "embedded resource '{}' not found",
                DEFAULT_RESOURCE
            ))
        })?;
        let raw = std::str::from_utf8(&resource.data)
            .map_err(|e| CatalogError::ResourceUnreadable(e.to_string()))?;

        let store = Self::from_json(raw)?;
        store.verify_complete()?;
        Ok(store)
    }

    /// Check that every failure kind the binding table references has a
    /// template. Useful for caller-supplied template sets as well.
    pub fn verify_complete(&self) -> Result<(), CatalogError> {
        for kind in bindings::required_kinds() {
            if !self.templates.contains_key(kind) {
                return Err(CatalogError::MissingTemplate(kind.to_string()));
            }
        }
        Ok(())
    }

    /// Look up the template bound to a failure kind
    pub fn get(&self, kind: &str) -> Option<&str> {
        self.templates.get(kind).map(String::as_str)
    }

    /// Number of templates in the store
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the store holds no templates
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_reserializes_shapes() {
        let store = TemplateStore::from_json(
            r#"{ "GreaterThan": { "key": "greaterThan", "comparisonValue": "{ComparisonValue}" } }"#,
        )
        .unwrap();
        assert_eq!(
            store.get("GreaterThan").unwrap(),
            r#"{"key":"greaterThan","comparisonValue":"{ComparisonValue}"}"#
        );
    }

    #[test]
    fn test_from_json_preserves_field_order() {
        // "entered" sorts before "key" alphabetically; authored order must win
        let store = TemplateStore::from_json(
            r#"{ "Length": { "key": "length", "minLength": "{MinLength}", "entered": "{TotalLength}" } }"#,
        )
        .unwrap();
        assert_eq!(
            store.get("Length").unwrap(),
            r#"{"key":"length","minLength":"{MinLength}","entered":"{TotalLength}"}"#
        );
    }

    #[test]
    fn test_from_json_rejects_malformed_document() {
        let err = TemplateStore::from_json("not json at all").unwrap_err();
        assert!(matches!(err, CatalogError::ResourceUnreadable(_)));
    }

    #[test]
    fn test_from_json_rejects_non_object_root() {
        let err = TemplateStore::from_json(r#"["Email"]"#).unwrap_err();
        assert!(matches!(err, CatalogError::ResourceUnreadable(_)));
    }

    #[test]
    fn test_from_json_rejects_non_object_field() {
        let err = TemplateStore::from_json(r#"{ "Email": "just a string" }"#).unwrap_err();
        assert!(matches!(err, CatalogError::ResourceUnreadable(_)));
    }

    #[test]
    fn test_load_default_is_complete() {
        let store = TemplateStore::load_default().unwrap();
        for kind in bindings::required_kinds() {
            let template = store.get(kind).unwrap();
            assert!(!template.is_empty(), "empty template for {}", kind);
        }
        assert_eq!(store.len(), bindings::required_kinds().len());
    }

    #[test]
    fn test_verify_complete_flags_missing_kind() {
        let store = TemplateStore::from_json(r#"{ "Email": { "key": "email" } }"#).unwrap();
        let err = store.verify_complete().unwrap_err();
        assert!(matches!(err, CatalogError::MissingTemplate(_)));
    }

    #[test]
    fn test_get_unknown_kind() {
        let store = TemplateStore::load_default().unwrap();
        assert!(store.get("__nonexistent__").is_none());
        assert!(!store.is_empty());
    }
}
