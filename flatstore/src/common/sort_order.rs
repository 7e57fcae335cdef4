/// Specifies the direction for sorting query results.
///
/// Used with [`crate::collection::CollectionRef::order_by`] to control
/// result ordering. Comparison is the generic relational ordering of
/// [`crate::common::Value`], so sorting is only meaningful for fields that
/// hold a homogeneous, ordered type (numbers, strings).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Sort in ascending order (smallest to largest, A-Z, oldest to newest)
    Ascending,
    /// Sort in descending order (largest to smallest, Z-A, newest to oldest)
    Descending,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Ascending
    }
}
