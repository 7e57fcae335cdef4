use crate::collection::Document;
use indexmap::IndexMap;

/// The full in-memory image of the backing file.
///
/// A snapshot maps collection names to ordered document lists; it is the
/// unit of load and persist. Collections absent from the file read as
/// empty and materialize on first mutable access, so a query against a
/// never-written collection is not an error.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct StoreSnapshot {
    collections: IndexMap<String, Vec<Document>>,
}

impl StoreSnapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        StoreSnapshot::default()
    }

    /// Returns the documents of a collection, or an empty slice when the
    /// collection does not exist.
    pub fn collection(&self, name: &str) -> &[Document] {
        self.collections
            .get(name)
            .map(|documents| documents.as_slice())
            .unwrap_or(&[])
    }

    /// Returns a mutable handle to a collection, materializing it when it
    /// does not yet exist.
    pub fn collection_mut(&mut self, name: &str) -> &mut Vec<Document> {
        self.collections.entry(name.to_string()).or_default()
    }

    /// Checks whether the snapshot holds a collection under this name.
    ///
    /// A collection that was materialized but never received a document
    /// still counts as present; it will appear in the file as an empty
    /// array.
    pub fn has_collection(&self, name: &str) -> bool {
        self.collections.contains_key(name)
    }

    /// Names of all collections present in the snapshot, in file order.
    pub fn collection_names(&self) -> Vec<String> {
        self.collections.keys().cloned().collect()
    }

    /// Checks whether the snapshot holds no collections at all.
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}
