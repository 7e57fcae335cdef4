//! Query filters.
//!
//! Only equality filtering is defined for this store; filters are pure
//! predicates combined with AND semantics by the query pipeline. The
//! equality-only constraint is deliberate and expressed in the type: there
//! is no filter combinator and no relational operator to reach for.

use crate::collection::Document;
use crate::common::Value;

/// Creates a fluent filter builder for the specified field name.
///
/// # Examples
///
/// ```rust,ignore
/// use flatstore::filter::field;
///
/// let by_city = field("city").eq("Portland");
/// let open_now = field("open").eq(true);
/// ```
pub fn field(field_name: &str) -> FluentFilter {
    FluentFilter {
        field_name: field_name.to_string(),
    }
}

/// A fluent builder for constructing an equality filter on a field.
pub struct FluentFilter {
    field_name: String,
}

impl FluentFilter {
    /// Creates a filter that matches documents where the field equals the
    /// specified value.
    #[inline]
    pub fn eq<T: Into<Value>>(self, value: T) -> EqFilter {
        EqFilter::new(self.field_name, value.into())
    }
}

/// An equality predicate on a single document field.
///
/// A document passes iff it has the field and the field's value equals the
/// filter value under [Value] equality (numeric across integer/float
/// variants, strict otherwise with no string/number coercion). A document
/// missing the field never passes, including filters on `Value::Null`.
#[derive(Clone, Debug, PartialEq)]
pub struct EqFilter {
    field_name: String,
    value: Value,
}

impl EqFilter {
    /// Creates a new equality filter.
    pub fn new(field_name: impl Into<String>, value: Value) -> Self {
        EqFilter {
            field_name: field_name.into(),
            value,
        }
    }

    /// The field the filter applies to.
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// The value documents must carry to pass.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Applies the filter to a document.
    pub fn apply(&self, document: &Document) -> bool {
        document
            .get(&self.field_name)
            .map_or(false, |value| value == &self.value)
    }
}
