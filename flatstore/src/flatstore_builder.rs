//! Builder for configuring and opening a [Flatstore].

use crate::errors::{ErrorKind, FlatstoreError, FlatstoreResult};
use crate::flatstore::Flatstore;
use crate::flatstore_config::{FlatstoreConfig, IdRegistry};
use crate::store::FileBacking;
use std::path::PathBuf;

/// Configures and opens a [Flatstore].
///
/// # Examples
///
/// ```rust,ignore
/// use flatstore::flatstore::Flatstore;
///
/// let store = Flatstore::builder()
///     .file_path("fixtures/directory.json")
///     .id_field("business", "business_id")
///     .id_field("transactions", "transaction_id")
///     .id_field("subscriptions", "subscription_id")
///     .open_or_create()?;
/// ```
#[derive(Default)]
pub struct FlatstoreBuilder {
    file_path: Option<PathBuf>,
    registry: IdRegistry,
}

impl FlatstoreBuilder {
    /// Creates a builder with no path and an empty identifier registry.
    pub fn new() -> Self {
        FlatstoreBuilder::default()
    }

    /// Sets the path of the JSON backing file. Required.
    pub fn file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Registers the identifier field name for a collection.
    ///
    /// May be called once per collection; unregistered collections use the
    /// default field `id`.
    pub fn id_field(mut self, collection: &str, field_name: &str) -> Self {
        self.registry.register(collection, field_name);
        self
    }

    /// Opens the store, creating the backing file with an empty snapshot
    /// when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if no file path was configured, if an existing
    /// backing file does not parse as a store snapshot, or on IO failure.
    pub fn open_or_create(self) -> FlatstoreResult<Flatstore> {
        let path = self.file_path.ok_or_else(|| {
            log::error!("Cannot open store without a backing file path");
            FlatstoreError::new(
                "Cannot open store without a backing file path",
                ErrorKind::ValidationError,
            )
        })?;

        let backing = FileBacking::open_or_create(&path)?;
        let config = FlatstoreConfig::new(path, self.registry);
        Ok(Flatstore::new(config, backing))
    }
}
