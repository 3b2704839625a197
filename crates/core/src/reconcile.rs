//! Many-to-many relation reconciliation.
//!
//! Given the ids currently associated with an owner and the ids the caller
//! wants associated, computes the minimal set of junction rows to insert and
//! delete. Ids present on both sides are left alone.

use std::collections::HashSet;

use crate::types::DbId;

/// The changes needed to turn an existing association set into a desired one.
///
/// Both vectors are sorted so that statement order and log output are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationDelta {
    /// Ids in the desired set but not the existing one.
    pub to_add: Vec<DbId>,
    /// Ids in the existing set but not the desired one.
    pub to_remove: Vec<DbId>,
}

impl RelationDelta {
    /// `true` when the existing and desired sets were identical.
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// Compute `to_add = desired - existing` and `to_remove = existing - desired`.
pub fn reconcile(existing: &HashSet<DbId>, desired: &HashSet<DbId>) -> RelationDelta {
    let mut to_add: Vec<DbId> = desired.difference(existing).copied().collect();
    let mut to_remove: Vec<DbId> = existing.difference(desired).copied().collect();
    to_add.sort_unstable();
    to_remove.sort_unstable();
    RelationDelta { to_add, to_remove }
}

/// Convenience wrapper for callers holding id slices (duplicates are ignored).
pub fn reconcile_ids(existing: &[DbId], desired: &[DbId]) -> RelationDelta {
    let existing: HashSet<DbId> = existing.iter().copied().collect();
    let desired: HashSet<DbId> = desired.iter().copied().collect();
    reconcile(&existing, &desired)
}
