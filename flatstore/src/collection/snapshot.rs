use crate::collection::{Document, DocumentRef};

/// The envelope a read operation returns for one document.
///
/// Exposes the document's identifier, its payload, and a fresh
/// [DocumentRef] addressing it. For point reads of a missing document,
/// `exists()` is `false` and `data()` is `None`; callers must not assume a
/// payload is present when `exists()` is false.
#[derive(Clone, Debug)]
pub struct DocumentSnapshot {
    id: String,
    data: Option<Document>,
    reference: DocumentRef,
}

impl DocumentSnapshot {
    pub(crate) fn new(id: String, data: Option<Document>, reference: DocumentRef) -> Self {
        DocumentSnapshot {
            id,
            data,
            reference,
        }
    }

    /// The document's identifier value.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the document existed when the snapshot was taken.
    pub fn exists(&self) -> bool {
        self.data.is_some()
    }

    /// The raw document payload, or `None` when the document was missing.
    pub fn data(&self) -> Option<&Document> {
        self.data.as_ref()
    }

    /// Consumes the snapshot and yields the payload.
    pub fn into_data(self) -> Option<Document> {
        self.data
    }

    /// A handle addressing the snapshotted document.
    pub fn reference(&self) -> &DocumentRef {
        &self.reference
    }
}

/// The ordered result set of a collection query.
///
/// A snapshot is a point-in-time projection: it holds plain data plus
/// handles, and does not observe writes made after the query executed.
#[derive(Clone, Debug, Default)]
pub struct QuerySnapshot {
    docs: Vec<DocumentSnapshot>,
}

impl QuerySnapshot {
    pub(crate) fn new(docs: Vec<DocumentSnapshot>) -> Self {
        QuerySnapshot { docs }
    }

    /// Checks whether the query matched no documents.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Number of documents in the result set.
    pub fn size(&self) -> usize {
        self.docs.len()
    }

    /// The result envelopes, in query order.
    pub fn docs(&self) -> &[DocumentSnapshot] {
        &self.docs
    }

    /// Applies `f` to every envelope in query order.
    pub fn for_each<F: FnMut(&DocumentSnapshot)>(&self, mut f: F) {
        for doc in &self.docs {
            f(doc);
        }
    }

    /// Iterates over the envelopes in query order.
    pub fn iter(&self) -> std::slice::Iter<'_, DocumentSnapshot> {
        self.docs.iter()
    }
}

impl IntoIterator for QuerySnapshot {
    type Item = DocumentSnapshot;
    type IntoIter = std::vec::IntoIter<DocumentSnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.into_iter()
    }
}

impl<'a> IntoIterator for &'a QuerySnapshot {
    type Item = &'a DocumentSnapshot;
    type IntoIter = std::slice::Iter<'a, DocumentSnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.iter()
    }
}
