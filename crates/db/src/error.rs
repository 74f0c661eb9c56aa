use notekeeper_core::entity::EntityKind;
use notekeeper_core::types::DbId;

/// Failures reported by an [`EntityStore`](crate::store::EntityStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A foreign id named in an insert or update does not exist.
    ///
    /// Raised inside the same transaction as the write, so a reference that
    /// passed this check cannot disappear before the write commits.
    #[error("{entity} with ID {id} does not exist")]
    MissingReference { entity: EntityKind, id: DbId },

    /// A delete was refused because other records still point at the row.
    #[error("{entity} with ID {id} is still referenced by {dependents}")]
    StillReferenced {
        entity: EntityKind,
        id: DbId,
        dependents: String,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Render dependent counts as `"2 notes and 1 category"`, skipping zeros.
pub(crate) fn describe_dependents(counts: &[(i64, &str, &str)]) -> String {
    counts
        .iter()
        .filter(|(n, _, _)| *n > 0)
        .map(|(n, singular, plural)| {
            let noun = if *n == 1 { singular } else { plural };
            format!("{n} {noun}")
        })
        .collect::<Vec<_>>()
        .join(" and ")
}
