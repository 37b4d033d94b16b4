#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Cannot connect to database: {0}")]
    Connection(#[from] diesel::ConnectionError),
    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("Failed to run migrations: {0}")]
    Migration(String),
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),
    #[error("Invalid fixture: {0}")]
    InvalidFixture(String),
}

impl From<argon2::password_hash::Error> for SeedError {
    fn from(err: argon2::password_hash::Error) -> Self {
        SeedError::PasswordHash(err.to_string())
    }
}
