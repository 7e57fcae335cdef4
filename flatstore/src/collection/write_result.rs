/// Outcome of a point mutation.
///
/// A mutation targeting a missing document is a deliberate no-op, not an
/// error: the store stays permissive for test fixtures. The outcome is
/// returned so callers can branch on "nothing was there" without parsing
/// log output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The mutation found its target and was persisted.
    Applied,
    /// The target document does not exist; nothing was changed.
    NotFound,
}

impl WriteOutcome {
    /// Checks whether the mutation was applied.
    pub fn is_applied(&self) -> bool {
        matches!(self, WriteOutcome::Applied)
    }

    /// Checks whether the target was missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, WriteOutcome::NotFound)
    }
}
