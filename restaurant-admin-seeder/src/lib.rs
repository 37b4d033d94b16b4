use diesel::{Connection, PgConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::info;

pub mod config;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod report;
pub mod schema;
pub mod seeders;
pub mod store;

pub use error::SeedError;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

pub fn establish_connection(database_url: &str) -> Result<PgConnection, SeedError> {
    Ok(PgConnection::establish(database_url)?)
}

pub fn run_migrations(conn: &mut PgConnection) -> Result<(), SeedError> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| SeedError::Migration(err.to_string()))?;
    info!(count = applied.len(), "applied pending migrations");
    Ok(())
}
