use std::env;

use clap::Parser;
use dotenvy::dotenv;

use crate::SeedError;

/// Populate a restaurant admin database with sample data.
#[derive(Parser, Debug, Default)]
#[command(version)]
pub struct Cli {
    /// Overrides `DATABASE_URL`.
    #[arg(long)]
    pub database_url: Option<String>,

    /// Seed for the random sample data (table orders).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Seed an in-memory store instead of the database.
    #[arg(long)]
    pub dry_run: bool,

    /// Apply pending migrations before seeding.
    #[arg(long)]
    pub migrate: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: Option<String>,
    pub seed: Option<u64>,
    pub dry_run: bool,
    pub migrate: bool,
}

impl Config {
    pub fn load(cli: Cli) -> Self {
        dotenv().ok();
        Self::resolve(cli, env::var("DATABASE_URL").ok())
    }

    pub fn resolve(cli: Cli, env_database_url: Option<String>) -> Self {
        Self {
            database_url: cli.database_url.or(env_database_url),
            seed: cli.seed,
            dry_run: cli.dry_run,
            migrate: cli.migrate,
        }
    }

    pub fn database_url(&self) -> Result<&str, SeedError> {
        self.database_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or_else(|| SeedError::Config("DATABASE_URL must be set".to_string()))
    }
}
