//! Database configuration module.
//!
//! Handles the SeaORM connection and table creation. Tables are generated from
//! the entity definitions with `Schema::create_table_from_entity`, so the schema
//! always matches the Rust structs without hand-written SQL.

use crate::entities::{Category, Transaction};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use std::path::Path;
use tracing::{debug, info, instrument};

const DEFAULT_DATABASE_URL: &str = "sqlite://data/finance_ledger.sqlite?mode=rwc";

/// Gets the database URL from the `DATABASE_URL` environment variable, or the
/// default local `SQLite` file if it is not set.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Extracts the file path from a `sqlite://` URL; `None` for in-memory or other backends.
fn sqlite_file_path(url: &str) -> Option<&str> {
    let path = url.strip_prefix("sqlite://")?;
    let path = path.split('?').next().unwrap_or_default();
    if path.is_empty() || path.contains(":memory:") {
        None
    } else {
        Some(path)
    }
}

/// Establishes a connection to the database named by [`get_database_url`].
///
/// For `SQLite` files the parent directory is created first.
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url();
    debug!("Connecting to database at {}", database_url);

    if let Some(parent) = sqlite_file_path(&database_url)
        .and_then(|path| Path::new(path).parent())
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent)?;
    }

    Database::connect(&database_url).await.map_err(Into::into)
}

/// Creates the categories and transactions tables if they do not exist yet.
#[instrument(skip(db))]
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut category_table = schema.create_table_from_entity(Category);
    category_table.if_not_exists();
    let mut transaction_table = schema.create_table_from_entity(Transaction);
    transaction_table.if_not_exists();

    db.execute(builder.build(&category_table)).await?;
    db.execute(builder.build(&transaction_table)).await?;

    info!("Database tables are ready");
    Ok(())
}
