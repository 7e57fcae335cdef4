use crate::collection::random_id::random_id;
use crate::collection::{Document, DocumentRef, DocumentSnapshot, QuerySnapshot};
use crate::common::{SortOrder, Value};
use crate::errors::FlatstoreResult;
use crate::filter::EqFilter;
use crate::query::{OrderSpec, QuerySpec};
use crate::store::FileBacking;
use std::sync::Arc;

/// A query builder bound to one named collection.
///
/// Accumulates a typed [QuerySpec] (equality filters with AND semantics, at
/// most one sort key, an optional limit) and executes it with
/// [`get`](CollectionRef::get).
/// Constructing and configuring a `CollectionRef` touches no storage;
/// every terminal operation reloads the backing file fresh, so a long-lived
/// builder always queries the latest on-disk state.
///
/// # Examples
///
/// ```rust,ignore
/// use flatstore::common::SortOrder;
/// use flatstore::filter::field;
///
/// let top_rated = store
///     .collection("business")?
///     .filter(field("city").eq("Portland"))
///     .order_by("rating", SortOrder::Descending)
///     .limit(10)
///     .get()?;
/// ```
#[derive(Clone)]
pub struct CollectionRef {
    backing: Arc<FileBacking>,
    name: String,
    id_field: String,
    query: QuerySpec,
}

impl CollectionRef {
    pub(crate) fn new(backing: Arc<FileBacking>, name: String, id_field: String) -> Self {
        CollectionRef {
            backing,
            name,
            id_field,
            query: QuerySpec::new(),
        }
    }

    /// The collection name this builder is bound to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The identifier field name resolved for this collection.
    pub fn id_field(&self) -> &str {
        &self.id_field
    }

    /// Appends an equality filter. Multiple filters AND together.
    pub fn filter(mut self, filter: EqFilter) -> Self {
        self.query.add_filter(filter);
        self
    }

    /// Sets the sort key and direction, replacing any prior one.
    ///
    /// There is no multi-key sort; only the last `order_by` before `get()`
    /// applies.
    pub fn order_by(mut self, field_name: &str, order: SortOrder) -> Self {
        self.query.set_order(OrderSpec::new(field_name, order));
        self
    }

    /// Sets the maximum result count, replacing any prior limit.
    ///
    /// `limit(0)` means zero results; an unset limit means unbounded.
    pub fn limit(mut self, limit: usize) -> Self {
        self.query.set_limit(limit);
        self
    }

    /// Returns a handle addressing one document of this collection.
    pub fn doc(&self, id: &str) -> DocumentRef {
        DocumentRef::new(
            self.backing.clone(),
            self.name.clone(),
            self.id_field.clone(),
            id.to_string(),
        )
    }

    /// Executes the accumulated query.
    ///
    /// Reloads the collection fresh from the backing file, applies all
    /// filters, sorts, truncates to the limit, and wraps each surviving
    /// document in a [DocumentSnapshot]. A missing collection yields an
    /// empty result set, not an error.
    pub fn get(&self) -> FlatstoreResult<QuerySnapshot> {
        let snapshot = self.backing.load()?;
        let documents = snapshot.collection(&self.name).to_vec();
        let results = self.query.apply(documents);

        let docs = results
            .into_iter()
            .map(|document| {
                let id = document
                    .get(&self.id_field)
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                let reference = self.doc(&id);
                DocumentSnapshot::new(id, Some(document), reference)
            })
            .collect();

        Ok(QuerySnapshot::new(docs))
    }

    /// Creates a new document with a generated identifier.
    ///
    /// Generates a short random base-36 identifier, regenerating on the
    /// (unlikely) collision with an existing document, injects it into a
    /// copy of `data` under the collection's identifier field, overwriting
    /// any caller-supplied value there, appends the document, persists,
    /// and returns a handle addressing it.
    pub fn add(&self, data: Document) -> FlatstoreResult<DocumentRef> {
        let _guard = self.backing.write_lock();
        let mut snapshot = self.backing.load()?;
        let collection = snapshot.collection_mut(&self.name);

        let mut id = random_id();
        while collection
            .iter()
            .any(|doc| doc.get(&self.id_field).and_then(Value::as_str) == Some(id.as_str()))
        {
            id = random_id();
        }

        let mut document = data;
        document.put(self.id_field.clone(), id.clone())?;
        collection.push(document);

        self.backing.persist(&snapshot)?;
        log::debug!(
            "Added document {} = {:?} to collection {:?}",
            self.id_field,
            id,
            self.name
        );

        Ok(self.doc(&id))
    }
}
