use crate::collection::{Document, DocumentSnapshot, WriteOutcome};
use crate::common::Value;
use crate::errors::FlatstoreResult;
use crate::store::FileBacking;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Addresses exactly one document within a collection by its identifier
/// value and exposes point CRUD operations against it.
///
/// Every operation independently reloads the backing file, so a handle
/// never goes stale: a `get()` after another handle's write observes that
/// write. Mutations run their full reload-mutate-persist cycle under the
/// store-wide write lock.
///
/// Mutations targeting a missing document are no-ops reported through
/// [WriteOutcome], never errors.
#[derive(Clone)]
pub struct DocumentRef {
    backing: Arc<FileBacking>,
    collection_name: String,
    id_field: String,
    id: String,
}

impl DocumentRef {
    pub(crate) fn new(
        backing: Arc<FileBacking>,
        collection_name: String,
        id_field: String,
        id: String,
    ) -> Self {
        DocumentRef {
            backing,
            collection_name,
            id_field,
            id,
        }
    }

    /// The collection this handle addresses into.
    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }

    /// The identifier field name of the collection.
    pub fn id_field(&self) -> &str {
        &self.id_field
    }

    /// The identifier value this handle addresses.
    pub fn id(&self) -> &str {
        &self.id
    }

    fn addresses(&self, document: &Document) -> bool {
        matches!(
            document.get(&self.id_field),
            Some(Value::String(id)) if id == &self.id
        )
    }

    /// Reads the addressed document.
    ///
    /// Returns a snapshot with `exists() == false` and no payload when the
    /// document is absent; absence is not an error.
    pub fn get(&self) -> FlatstoreResult<DocumentSnapshot> {
        let snapshot = self.backing.load()?;
        let data = snapshot
            .collection(&self.collection_name)
            .iter()
            .find(|document| self.addresses(document))
            .cloned();

        Ok(DocumentSnapshot::new(self.id.clone(), data, self.clone()))
    }

    /// Writes the full document payload under this handle's identifier.
    ///
    /// The identifier field of `data` is forced to the handle's identifier,
    /// overwriting any value the caller supplied, so the document's address
    /// and content can never disagree. An existing document is replaced in
    /// place, preserving its position; a missing one is appended as new.
    pub fn set(&self, data: Document) -> FlatstoreResult<()> {
        let mut document = data;
        document.put(self.id_field.clone(), self.id.clone())?;

        let _guard = self.backing.write_lock();
        let mut snapshot = self.backing.load()?;
        let collection = snapshot.collection_mut(&self.collection_name);

        match collection.iter().position(|doc| self.addresses(doc)) {
            Some(position) => collection[position] = document,
            None => collection.push(document),
        }

        self.backing.persist(&snapshot)
    }

    /// Shallow-merges `data` over the addressed document.
    ///
    /// Fields in `data` overwrite like-named fields; all other existing
    /// fields survive. The identifier field cannot be changed through an
    /// update. A missing target is a no-op: nothing is persisted and the
    /// document is not created.
    pub fn update(&self, data: Document) -> FlatstoreResult<WriteOutcome> {
        let _guard = self.backing.write_lock();
        let mut snapshot = self.backing.load()?;
        let collection = snapshot.collection_mut(&self.collection_name);

        let position = match collection.iter().position(|doc| self.addresses(doc)) {
            Some(position) => position,
            None => {
                log::warn!(
                    "update: no document with {} = {:?} in collection {:?}",
                    self.id_field,
                    self.id,
                    self.collection_name
                );
                return Ok(WriteOutcome::NotFound);
            }
        };

        collection[position].merge(&data);
        // keep address and content consistent even if the payload carried
        // a different identifier value
        collection[position].put(self.id_field.clone(), self.id.clone())?;

        self.backing.persist(&snapshot)?;
        Ok(WriteOutcome::Applied)
    }

    /// Deletes the addressed document.
    ///
    /// Idempotent: a missing target is a no-op reported as `NotFound`.
    pub fn delete(&self) -> FlatstoreResult<WriteOutcome> {
        let _guard = self.backing.write_lock();
        let mut snapshot = self.backing.load()?;
        let collection = snapshot.collection_mut(&self.collection_name);

        let position = match collection.iter().position(|doc| self.addresses(doc)) {
            Some(position) => position,
            None => {
                log::warn!(
                    "delete: no document with {} = {:?} in collection {:?}",
                    self.id_field,
                    self.id,
                    self.collection_name
                );
                return Ok(WriteOutcome::NotFound);
            }
        };

        collection.remove(position);
        self.backing.persist(&snapshot)?;
        Ok(WriteOutcome::Applied)
    }
}

impl Debug for DocumentRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentRef")
            .field("collection", &self.collection_name)
            .field(&self.id_field, &self.id)
            .finish()
    }
}
