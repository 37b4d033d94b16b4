use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use tracing::info;

use restaurant_admin_seeder::config::{Cli, Config};
use restaurant_admin_seeder::report::{self, SeedReport};
use restaurant_admin_seeder::seeders::{run_all, SeedContext};
use restaurant_admin_seeder::store::{MemoryStore, PgStore};
use restaurant_admin_seeder::{establish_connection, run_migrations, SeedError};

fn run(config: &Config) -> Result<SeedReport, SeedError> {
    let mut ctx = SeedContext::new(Utc::now(), config.seed);

    if config.dry_run {
        info!("dry run against an in-memory store");
        let mut store = MemoryStore::new();
        return run_all(&mut store, &mut ctx);
    }

    let mut conn = establish_connection(config.database_url()?)?;
    if config.migrate {
        run_migrations(&mut conn)?;
    }
    let mut store = PgStore::new(&mut conn);
    run_all(&mut store, &mut ctx)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(Cli::parse());

    println!("{}", report::banner());
    match run(&config) {
        Ok(summary) => {
            println!("\n{summary}");
            println!("{}", report::next_steps(config.dry_run));
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{}", report::troubleshooting(&err));
            ExitCode::FAILURE
        }
    }
}
