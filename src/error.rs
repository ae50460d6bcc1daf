use sea_orm::DbErr;
use thiserror::Error;

/// Errors returned by [`SessionHandler`](crate::SessionHandler) operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The underlying Sea-ORM query or connection failed.
    #[error("session database error: {0}")]
    Database(#[from] DbErr),

    /// Every generated session id collided with an existing row.
    #[error("could not generate a free session id after {attempts} attempts")]
    IdSpaceExhausted { attempts: usize },
}

/// Convenience alias for session handler results.
pub type Result<T, E = SessionError> = std::result::Result<T, E>;
