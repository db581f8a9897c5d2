//! Catalog facade - the lookup surface the host framework calls
//!
//! The host's message-resolution flow probes keys speculatively (rule error
//! codes first, then category kinds), so an unknown key is a normal miss
//! answered with an empty string, never an error.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use crate::templates::{CatalogError, TemplateStore};

/// The capability a message source offers the host framework during failure
/// reporting. A narrow contract; implementors need no knowledge of the
/// host's type hierarchy.
pub trait MessageSource {
    /// Return the template bound to `key`, or an empty string when the key
    /// is unknown. `locale` is part of the host contract; single-language
    /// sources ignore it.
    fn resolve(&self, key: &str, locale: Option<&str>) -> &str;
}

/// Process-wide default catalog, built at most once
static DEFAULT_CATALOG: OnceLock<Result<MessageCatalog, CatalogError>> = OnceLock::new();

/// Single-language message catalog serving UI-consumable JSON templates
pub struct MessageCatalog {
    store: TemplateStore,
    enabled: AtomicBool,
}

impl MessageCatalog {
    /// Name of this catalog's one "language"
    pub const NAME: &'static str = "ui-localizable";

    /// Create a catalog over an already-built store. Swapping templates
    /// means building a new store and a new catalog; an existing instance
    /// never changes.
    pub fn new(store: TemplateStore) -> Self {
        Self {
            store,
            enabled: AtomicBool::new(true),
        }
    }

    /// The shared catalog over the bundled default messages.
    ///
    /// Built lazily on first access. Concurrent first callers all observe
    /// the same fully-built instance and the bundled resource is parsed
    /// exactly once; the `OnceLock` caches the construction outcome, so a
    /// load failure is reported identically to every caller.
    pub fn default_catalog() -> Result<&'static MessageCatalog, CatalogError> {
        DEFAULT_CATALOG
            .get_or_init(|| TemplateStore::load_default().map(Self::new))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Whether the host should consult this catalog at all
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Turn the catalog on or off without rebuilding it. The flag is
    /// advisory to the host; a disabled catalog still answers lookups if
    /// asked directly.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Borrow the underlying template store
    pub fn store(&self) -> &TemplateStore {
        &self.store
    }
}

impl MessageSource for MessageCatalog {
    fn resolve(&self, key: &str, _locale: Option<&str>) -> &str {
        self.store.get(key).unwrap_or("")
    }
}
