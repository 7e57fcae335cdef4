use crate::batch::WriteBatch;
use crate::collection::CollectionRef;
use crate::errors::{ErrorKind, FlatstoreError, FlatstoreResult};
use crate::flatstore_builder::FlatstoreBuilder;
use crate::flatstore_config::FlatstoreConfig;
use crate::repository::Repository;
use crate::store::FileBacking;
use std::sync::Arc;

/// The store root: the entry point for all document operations.
///
/// A `Flatstore` wraps one JSON backing file holding named collections. It
/// hands out [CollectionRef] query builders, per-document handles (through
/// `collection(..)?.doc(..)`), [WriteBatch] executors, and typed
/// [Repository] views.
///
/// The implementation lives behind an `Arc`, so clones are cheap and share
/// the same backing and write lock; a `Flatstore` lives for the process
/// lifetime and needs no explicit close, since every mutation is already
/// persisted when it returns.
///
/// # Examples
///
/// ```rust,ignore
/// use flatstore::flatstore::Flatstore;
/// use flatstore::filter::field;
/// use flatstore::doc;
///
/// let store = Flatstore::builder()
///     .file_path("fixtures/directory.json")
///     .id_field("business", "business_id")
///     .open_or_create()?;
///
/// let businesses = store.collection("business")?;
/// let cafe = businesses.add(doc! { name: "Cafe", city: "Portland" })?;
/// let found = businesses.filter(field("city").eq("Portland")).get()?;
/// ```
#[derive(Clone, Debug)]
pub struct Flatstore {
    inner: Arc<FlatstoreInner>,
}

impl Flatstore {
    /// Creates a new [FlatstoreBuilder] for configuring and opening a store.
    pub fn builder() -> FlatstoreBuilder {
        FlatstoreBuilder::new()
    }

    pub(crate) fn new(config: FlatstoreConfig, backing: FileBacking) -> Self {
        Flatstore {
            inner: Arc::new(FlatstoreInner {
                config,
                backing: Arc::new(backing),
            }),
        }
    }

    /// Returns a query builder bound to the named collection.
    ///
    /// Touches no storage; a collection absent from the backing file reads
    /// as empty and materializes on first write.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection name is empty or contains spaces.
    pub fn collection(&self, name: &str) -> FlatstoreResult<CollectionRef> {
        self.inner.validate_collection_name(name)?;
        let id_field = self.inner.config.registry().id_field(name).to_string();
        Ok(CollectionRef::new(
            self.inner.backing.clone(),
            name.to_string(),
            id_field,
        ))
    }

    /// Returns a typed repository view over the named collection.
    pub fn repository<T>(&self, name: &str) -> FlatstoreResult<Repository<T>>
    where
        T: serde::Serialize + serde::de::DeserializeOwned,
    {
        Ok(Repository::new(self.collection(name)?))
    }

    /// Returns a write batch with an empty pending-operation queue.
    pub fn batch(&self) -> WriteBatch {
        WriteBatch::new()
    }

    /// The store configuration (backing path and identifier registry).
    pub fn config(&self) -> &FlatstoreConfig {
        &self.inner.config
    }

    /// Names of all collections currently present in the backing file.
    pub fn collection_names(&self) -> FlatstoreResult<Vec<String>> {
        Ok(self.inner.backing.load()?.collection_names())
    }
}

#[derive(Debug)]
struct FlatstoreInner {
    config: FlatstoreConfig,
    backing: Arc<FileBacking>,
}

impl FlatstoreInner {
    fn validate_collection_name(&self, name: &str) -> FlatstoreResult<()> {
        if name.is_empty() {
            log::error!("Collection name cannot be empty");
            return Err(FlatstoreError::new(
                "Collection name cannot be empty",
                ErrorKind::ValidationError,
            ));
        }

        if name.contains(' ') {
            log::error!("Collection name cannot contain space");
            return Err(FlatstoreError::new(
                "Collection name cannot contain space",
                ErrorKind::ValidationError,
            ));
        }

        Ok(())
    }
}
