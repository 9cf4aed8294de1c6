//! Migration CLI tool for the posts database.

use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt().with_env_filter("info").init();
    tracing::info!("Running posts database migrations");

    cli::run_cli(migration::Migrator).await;
}
