//! Documents, collection query builders, and document handles.

mod collection_ref;
mod document;
mod document_ref;
pub(crate) mod random_id;
mod snapshot;
mod write_result;

pub use collection_ref::CollectionRef;
pub use document::{normalize, Document};
pub use document_ref::DocumentRef;
pub use snapshot::{DocumentSnapshot, QuerySnapshot};
pub use write_result::WriteOutcome;
