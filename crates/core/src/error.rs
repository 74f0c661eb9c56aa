use crate::entity::EntityKind;
use crate::types::DbId;

/// Domain-level failures shared by the store, the linker and the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The primary entity addressed by the request does not exist.
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: EntityKind, id: DbId },

    /// A foreign id embedded in a create payload does not exist.
    #[error("{entity} with ID {id} not found")]
    ReferenceNotFound { entity: EntityKind, id: DbId },

    /// A foreign id supplied to re-link an existing entity does not exist.
    #[error("Invalid {} ID", .entity.noun())]
    InvalidReference { entity: EntityKind, id: DbId },

    /// One or more field constraints failed. The payload is the joined message list.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
