//! Typed repository views over collections.
//!
//! A [Repository] parameterizes a collection over a concrete record type,
//! so application code works with its own structs instead of loosely-typed
//! documents. Conversion goes through serde; the on-file representation is
//! identical to the untyped path, and both views can address the same
//! collection interchangeably.

use crate::collection::{CollectionRef, Document, DocumentRef, WriteOutcome};
use crate::errors::{ErrorKind, FlatstoreError, FlatstoreResult};
use crate::filter::EqFilter;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

fn to_document<T: Serialize>(entity: &T) -> FlatstoreResult<Document> {
    let value = serde_json::to_value(entity).map_err(|err| {
        log::error!("Failed to serialize entity: {}", err);
        FlatstoreError::new(
            &format!("Failed to serialize entity: {}", err),
            ErrorKind::EntityMappingError,
        )
    })?;

    serde_json::from_value(value).map_err(|err| {
        log::error!("Entity does not map to a document: {}", err);
        FlatstoreError::new(
            &format!("Entity does not map to a document: {}", err),
            ErrorKind::EntityMappingError,
        )
    })
}

fn from_document<T: DeserializeOwned>(document: &Document) -> FlatstoreResult<T> {
    let value = serde_json::to_value(document).map_err(|err| {
        log::error!("Failed to serialize document: {}", err);
        FlatstoreError::new(
            &format!("Failed to serialize document: {}", err),
            ErrorKind::EntityMappingError,
        )
    })?;

    serde_json::from_value(value).map_err(|err| {
        log::error!("Document does not map to entity type: {}", err);
        FlatstoreError::new(
            &format!("Document does not map to entity type: {}", err),
            ErrorKind::EntityMappingError,
        )
    })
}

/// A typed view over one collection.
///
/// The identifier field stays store-managed: entities do not need to carry
/// it, and a caller-supplied value under the identifier field is
/// overwritten exactly as on the untyped path.
///
/// # Examples
///
/// ```rust,ignore
/// #[derive(serde::Serialize, serde::Deserialize)]
/// struct Business {
///     name: String,
///     city: String,
/// }
///
/// let businesses = store.repository::<Business>("business")?;
/// let doc_ref = businesses.add(&Business {
///     name: "Cafe".into(),
///     city: "Portland".into(),
/// })?;
/// let cafe: Option<Business> = businesses.get(doc_ref.id())?;
/// ```
pub struct Repository<T> {
    collection: CollectionRef,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Repository<T>
where
    T: Serialize + DeserializeOwned,
{
    pub(crate) fn new(collection: CollectionRef) -> Self {
        Repository {
            collection,
            _entity: PhantomData,
        }
    }

    /// The underlying collection name.
    pub fn collection_name(&self) -> &str {
        self.collection.name()
    }

    /// Creates a new entity with a generated identifier.
    pub fn add(&self, entity: &T) -> FlatstoreResult<DocumentRef> {
        self.collection.add(to_document(entity)?)
    }

    /// Reads an entity by identifier; `None` when absent.
    pub fn get(&self, id: &str) -> FlatstoreResult<Option<T>> {
        let snapshot = self.collection.doc(id).get()?;
        match snapshot.into_data() {
            Some(document) => Ok(Some(from_document(&document)?)),
            None => Ok(None),
        }
    }

    /// Writes the full entity under the given identifier, replacing any
    /// existing document or appending a new one.
    pub fn set(&self, id: &str, entity: &T) -> FlatstoreResult<()> {
        self.collection.doc(id).set(to_document(entity)?)
    }

    /// Deletes an entity by identifier; idempotent.
    pub fn delete(&self, id: &str) -> FlatstoreResult<WriteOutcome> {
        self.collection.doc(id).delete()
    }

    /// Finds all entities passing an equality filter, paired with their
    /// identifiers, in file order.
    pub fn find(&self, filter: EqFilter) -> FlatstoreResult<Vec<(String, T)>> {
        let snapshot = self.collection.clone().filter(filter).get()?;
        snapshot
            .into_iter()
            .map(|doc| {
                let id = doc.id().to_string();
                let entity = from_document(doc.data().ok_or_else(|| {
                    FlatstoreError::new(
                        "Query envelope without payload",
                        ErrorKind::InternalError,
                    )
                })?)?;
                Ok((id, entity))
            })
            .collect()
    }

    /// Lists all entities of the collection, paired with their identifiers.
    pub fn find_all(&self) -> FlatstoreResult<Vec<(String, T)>> {
        let snapshot = self.collection.clone().get()?;
        snapshot
            .into_iter()
            .map(|doc| {
                let id = doc.id().to_string();
                let entity = from_document(doc.data().ok_or_else(|| {
                    FlatstoreError::new(
                        "Query envelope without payload",
                        ErrorKind::InternalError,
                    )
                })?)?;
                Ok((id, entity))
            })
            .collect()
    }
}
