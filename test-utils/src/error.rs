use thiserror::Error;

/// Errors raised while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the in-memory database or creating the schema failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Creating the session store table failed.
    #[error("Failed to prepare session store: {0}")]
    Session(String),
}
