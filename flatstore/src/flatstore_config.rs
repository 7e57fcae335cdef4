//! Store configuration: backing file path and the identifier-field registry.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Identifier field name used for collections without an explicit mapping.
pub const DEFAULT_ID_FIELD: &str = "id";

/// Maps collection names to their identifier field names.
///
/// Collections are heterogeneous: a business directory keeps its listings
/// under `business_id`, its payments under `transaction_id`, and so on. The
/// registry is an explicit per-collection descriptor injected at store
/// construction; any collection without a mapping uses
/// [`DEFAULT_ID_FIELD`].
///
/// # Examples
///
/// ```rust,ignore
/// let registry = IdRegistry::new()
///     .with_field("business", "business_id")
///     .with_field("transactions", "transaction_id")
///     .with_field("subscriptions", "subscription_id");
///
/// assert_eq!(registry.id_field("business"), "business_id");
/// assert_eq!(registry.id_field("users"), "id");
/// ```
#[derive(Clone, Debug, Default)]
pub struct IdRegistry {
    fields: HashMap<String, String>,
}

impl IdRegistry {
    /// Creates an empty registry; every collection resolves to the default
    /// identifier field.
    pub fn new() -> Self {
        IdRegistry::default()
    }

    /// Registers an identifier field for a collection, replacing any prior
    /// mapping. Builder-style variant of [`register`](IdRegistry::register).
    pub fn with_field(
        mut self,
        collection: impl Into<String>,
        id_field: impl Into<String>,
    ) -> Self {
        self.register(collection, id_field);
        self
    }

    /// Registers an identifier field for a collection.
    pub fn register(&mut self, collection: impl Into<String>, id_field: impl Into<String>) {
        self.fields.insert(collection.into(), id_field.into());
    }

    /// Resolves the identifier field name for a collection.
    pub fn id_field(&self, collection: &str) -> &str {
        self.fields
            .get(collection)
            .map(String::as_str)
            .unwrap_or(DEFAULT_ID_FIELD)
    }
}

/// Configuration of an opened store: backing file path plus identifier
/// registry. Built through [`crate::flatstore_builder::FlatstoreBuilder`];
/// immutable once the store is open.
#[derive(Clone, Debug)]
pub struct FlatstoreConfig {
    path: PathBuf,
    registry: IdRegistry,
}

impl FlatstoreConfig {
    /// Creates a configuration from a backing file path and registry.
    pub fn new(path: impl Into<PathBuf>, registry: IdRegistry) -> Self {
        FlatstoreConfig {
            path: path.into(),
            registry,
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The identifier-field registry.
    pub fn registry(&self) -> &IdRegistry {
        &self.registry
    }
}
