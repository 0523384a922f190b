use thiserror::Error;

/// Errors that can occur during test environment setup.
///
/// Wraps failures from the underlying database layer so test helpers can
/// propagate them with `?` instead of panicking during setup.
#[derive(Error, Debug)]
pub enum TestError {
    /// Database connection or schema creation failed.
    #[error("test database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}
