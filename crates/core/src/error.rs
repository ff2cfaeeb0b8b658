use crate::types::DbId;

/// Domain error taxonomy.
///
/// "Not found" deliberately covers both genuinely absent entities and
/// entities owned by a different user, so callers cannot distinguish the two.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
