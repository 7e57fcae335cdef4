//! Ordered, non-atomic write batches.

use crate::collection::{Document, DocumentRef, WriteOutcome};
use crate::errors::FlatstoreResult;

/// One queued point mutation of a batch.
enum BatchOperation {
    Set(DocumentRef, Document),
    Update(DocumentRef, Document),
    Delete(DocumentRef),
}

/// Accumulates point mutations and applies them sequentially on commit.
///
/// A batch provides *ordering*, not *atomicity*: each operation runs its
/// own independent reload-mutate-persist cycle, strictly in enqueue order.
/// A failure mid-commit stops the batch with the remaining operations
/// unexecuted and no rollback of the applied ones, and a concurrent reader
/// may observe the file with only a prefix of the batch applied.
///
/// # Examples
///
/// ```rust,ignore
/// let claims = store.collection("claims")?;
/// let subscriptions = store.collection("subscriptions")?;
///
/// let mut batch = store.batch();
/// batch.set(&claims.doc("c1"), claim_doc);
/// batch.set(&subscriptions.doc("s1"), subscription_doc);
/// batch.commit()?;
/// ```
#[derive(Default)]
pub struct WriteBatch {
    operations: Vec<BatchOperation>,
}

impl WriteBatch {
    /// Creates a batch with an empty pending-operation queue.
    pub fn new() -> Self {
        WriteBatch::default()
    }

    /// Queues a full-document write against `reference`.
    pub fn set(&mut self, reference: &DocumentRef, data: Document) {
        self.operations
            .push(BatchOperation::Set(reference.clone(), data));
    }

    /// Queues a shallow merge against `reference`.
    pub fn update(&mut self, reference: &DocumentRef, data: Document) {
        self.operations
            .push(BatchOperation::Update(reference.clone(), data));
    }

    /// Queues a delete against `reference`.
    pub fn delete(&mut self, reference: &DocumentRef) {
        self.operations
            .push(BatchOperation::Delete(reference.clone()));
    }

    /// Number of queued operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Checks whether the batch has no queued operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Applies every queued operation in enqueue order.
    ///
    /// Fail-fast: the first error propagates and the remaining operations
    /// are not executed. Returns the per-operation outcomes of the applied
    /// prefix on success; a `set` always reports `Applied`.
    pub fn commit(self) -> FlatstoreResult<Vec<WriteOutcome>> {
        let mut outcomes = Vec::with_capacity(self.operations.len());

        for operation in self.operations {
            match operation {
                BatchOperation::Set(reference, data) => {
                    reference.set(data)?;
                    outcomes.push(WriteOutcome::Applied);
                }
                BatchOperation::Update(reference, data) => {
                    outcomes.push(reference.update(data)?);
                }
                BatchOperation::Delete(reference) => {
                    outcomes.push(reference.delete()?);
                }
            }
        }

        Ok(outcomes)
    }
}
