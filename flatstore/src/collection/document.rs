use crate::common::Value;
use crate::errors::{ErrorKind, FlatstoreError, FlatstoreResult};
use indexmap::IndexMap;
use std::fmt::{Debug, Formatter};

/// Represents a document in the store.
///
/// A document is a flat, insertion-ordered mapping of field name to
/// [Value]. Field order is preserved through serialization, so documents
/// written back to the backing file keep the shape they were authored with.
///
/// Exactly one field of each stored document acts as its identifier; the
/// field's name is collection-specific and resolved through the
/// [`crate::flatstore_config::IdRegistry`]. The identifier is injected by
/// the store on `add` and forced on `set`, so payloads built with this type
/// never need to manage it themselves.
///
/// # Examples
///
/// ```rust,ignore
/// use flatstore::doc;
///
/// let mut document = doc! {
///     name: "Cafe Milano",
///     city: "Portland",
///     rating: 4.5,
///     tags: ["coffee", "breakfast"]
/// };
/// document.put("open", true)?;
/// ```
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct Document {
    fields: IndexMap<String, Value>,
}

impl Document {
    /// Creates a new empty document.
    pub fn new() -> Self {
        Document {
            fields: IndexMap::new(),
        }
    }

    /// Checks if the document has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the number of fields in the document.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Associates the specified value with the specified field name.
    ///
    /// If the field already exists its value is replaced in place,
    /// preserving the field's position in the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the field name is empty.
    pub fn put<T: Into<Value>>(&mut self, key: impl Into<String>, value: T) -> FlatstoreResult<()> {
        let key = key.into();
        if key.is_empty() {
            log::error!("Document does not support empty field name");
            return Err(FlatstoreError::new(
                "Document does not support empty field name",
                ErrorKind::InvalidOperation,
            ));
        }

        self.fields.insert(key, value.into());
        Ok(())
    }

    /// Returns the value associated with the field name, or `None` if the
    /// document contains no such field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Checks whether the document contains the given field.
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Removes a field from the document, returning its value if present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.shift_remove(key)
    }

    /// Shallow-merges `other` over this document.
    ///
    /// Fields of `other` overwrite like-named fields; all other existing
    /// fields survive. Nested documents are replaced wholesale, not merged.
    pub fn merge(&mut self, other: &Document) {
        for (key, value) in other.iter() {
            self.fields.insert(key.clone(), value.clone());
        }
    }

    /// Iterates over the document's fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Returns the document's field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }
}

impl Debug for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.fields.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Strips the surrounding quotes a `stringify!`-ed string literal key
/// carries, so `doc!{ "business_id": .. }` and `doc!{ business_id: .. }`
/// produce the same field name.
pub fn normalize(key: &str) -> String {
    key.trim_matches('"').to_string()
}

/// Creates a [Document] from key-value pairs.
///
/// Keys may be identifiers or string literals; values may be literals,
/// parenthesized expressions, arrays, or nested documents.
///
/// # Examples
///
/// ```rust,ignore
/// use flatstore::doc;
///
/// let simple = doc! {
///     name: "Alice",
///     age: 30
/// };
///
/// let base = 100;
/// let nested = doc! {
///     name: "Bob",
///     score: (base * 2),
///     address: {
///         city: "Springfield",
///         zip: "97477"
///     },
///     tags: ["admin", "user"]
/// };
/// ```
#[macro_export]
macro_rules! doc {
    // match an empty document (with braces for symmetry with nesting)
    ({}) => {
        $crate::collection::Document::new()
    };

    // match an empty document
    () => {
        $crate::collection::Document::new()
    };

    // match a document with key value pairs (outer braces)
    ({ $($key:tt : $value:tt),* $(,)? }) => {
        $crate::doc!($($key : $value),*)
    };

    // match a document with key value pairs
    ($($key:tt : $value:tt),* $(,)?) => {
        {
            #[allow(unused_imports)]
            use $crate::doc_value;

            let mut doc = $crate::collection::Document::new();
            $(
                doc.put($crate::collection::normalize(stringify!($key)), $crate::doc_value!($value))
                    .expect(&format!("Failed to put value {} in document", stringify!($value)));
            )*
            doc
        }
    };
}

/// Helper macro to convert values for the `doc!` macro.
/// Handles nested documents, arrays, and expressions.
#[macro_export]
macro_rules! doc_value {
    // match a nested document
    ({ $($key:tt : $value:tt),* $(,)? }) => {
        {
            $crate::common::Value::Document($crate::doc!{ $($key : $value),* })
        }
    };

    // match an array of values
    ([ $($value:tt),* $(,)? ]) => {
        $crate::common::Value::Array(vec![$($crate::doc_value!($value)),*])
    };

    // match an expression (variable, function call, arithmetic in parens, literals)
    ($value:expr) => {
        $crate::common::Value::from($value)
    };
}
