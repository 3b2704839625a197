//! Integrity rules for the self-referential genre tree.
//!
//! The tree is stored as a nullable `parent_genre_id` on each genre. These
//! helpers validate a proposed parent before it is written and decide
//! whether a genre may be deleted. They take plain ids so the caller can
//! load the ancestor chain however it likes (the repository uses a
//! recursive CTE).

use crate::error::CoreError;
use crate::types::DbId;

/// Upper bound on ancestor-chain walks. Seed data is three levels deep; the
/// bound only matters if the table already contains a cycle.
pub const MAX_HIERARCHY_DEPTH: i32 = 64;

/// Validate `candidate_parent` as the parent of `genre_id`.
///
/// `genre_id` is `None` while creating (the genre has no id yet, so no cycle
/// is possible). `candidate_ancestors` is the ancestor chain of the candidate
/// parent, nearest first, not including the candidate itself.
///
/// Rejects:
/// - a genre naming itself as parent;
/// - a parent whose ancestor chain already contains the genre (A -> B -> A).
pub fn validate_parent(
    genre_id: Option<DbId>,
    candidate_parent: Option<DbId>,
    candidate_ancestors: &[DbId],
) -> Result<(), CoreError> {
    let (Some(id), Some(parent)) = (genre_id, candidate_parent) else {
        return Ok(());
    };

    if id == parent {
        return Err(CoreError::Validation(
            "A genre cannot be its own parent".to_string(),
        ));
    }

    if candidate_ancestors.contains(&id) {
        return Err(CoreError::Validation(format!(
            "Setting parent {parent} would create a cycle in the genre hierarchy"
        )));
    }

    Ok(())
}

/// Restrict-on-delete: a genre with children must not be removed.
pub fn ensure_deletable(genre_id: DbId, child_count: i64) -> Result<(), CoreError> {
    if child_count > 0 {
        return Err(CoreError::Conflict(format!(
            "Genre {genre_id} has {child_count} sub-genre(s); reassign or delete them first"
        )));
    }
    Ok(())
}
