//! Typed query specification and execution pipeline.
//!
//! A [QuerySpec] is the value a [`crate::collection::CollectionRef`] builds
//! up before a read executes: zero or more AND-ed equality filters, at most
//! one sort key, and an optional result limit. Single-sort-key and
//! AND-only filtering are constraints of the type, not emergent behavior of
//! a method chain.

use crate::collection::Document;
use crate::common::{SortOrder, Value};
use crate::filter::EqFilter;

/// A single-field sort specification.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderSpec {
    field_name: String,
    order: SortOrder,
}

impl OrderSpec {
    /// Creates a new sort specification.
    pub fn new(field_name: impl Into<String>, order: SortOrder) -> Self {
        OrderSpec {
            field_name: field_name.into(),
            order,
        }
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }
}

/// A filtered, ordered, size-bounded read specification for one collection.
///
/// # Limit semantics
///
/// `limit` is an explicit count: `Some(0)` yields an empty result set, and
/// `None` means unbounded. There is no "falsy" special case.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuerySpec {
    filters: Vec<EqFilter>,
    order: Option<OrderSpec>,
    limit: Option<usize>,
}

impl QuerySpec {
    /// Creates an empty specification: no filters, no order, no limit.
    pub fn new() -> Self {
        QuerySpec::default()
    }

    /// Appends an equality filter. Filters combine with AND semantics.
    pub fn add_filter(&mut self, filter: EqFilter) {
        self.filters.push(filter);
    }

    /// Sets the sort specification, replacing any prior one.
    pub fn set_order(&mut self, order: OrderSpec) {
        self.order = Some(order);
    }

    /// Sets the result limit, replacing any prior one.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = Some(limit);
    }

    pub fn filters(&self) -> &[EqFilter] {
        &self.filters
    }

    pub fn order(&self) -> Option<&OrderSpec> {
        self.order.as_ref()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Checks whether a document passes every filter.
    pub fn matches(&self, document: &Document) -> bool {
        self.filters.iter().all(|filter| filter.apply(document))
    }

    /// Executes the filter-sort-truncate pipeline over a loaded collection.
    ///
    /// Documents missing the sort field order as `Value::Null`, which sorts
    /// before every other value. The sort is stable, so ties keep their
    /// on-file order.
    pub fn apply(&self, documents: Vec<Document>) -> Vec<Document> {
        let mut results: Vec<Document> = documents
            .into_iter()
            .filter(|document| self.matches(document))
            .collect();

        if let Some(order) = &self.order {
            let null = Value::Null;
            results.sort_by(|a, b| {
                let va = a.get(order.field_name()).unwrap_or(&null);
                let vb = b.get(order.field_name()).unwrap_or(&null);
                match order.order() {
                    SortOrder::Ascending => va.total_cmp(vb),
                    SortOrder::Descending => va.total_cmp(vb).reverse(),
                }
            });
        }

        if let Some(limit) = self.limit {
            results.truncate(limit);
        }

        results
    }
}
