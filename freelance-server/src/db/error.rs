//! Repository-level error kind

/// Any failure in the persistence layer.
///
/// Statement execution, connection acquisition and commit failures all
/// surface as [`DbError::Sqlx`]; the enclosing transaction has already been
/// rolled back by the time a caller sees it.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{resource} has no id")]
    MissingId { resource: &'static str },

    #[error("duplicate {resource}: {detail}")]
    Conflict { resource: &'static str, detail: String },
}

impl DbError {
    /// Translate a unique-constraint violation into [`DbError::Conflict`],
    /// leaving every other error untouched.
    pub(crate) fn conflict_on_unique(resource: &'static str, err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                return Self::Conflict {
                    resource,
                    detail: db_err.message().to_owned(),
                };
            }
        }
        Self::Sqlx(err)
    }
}
