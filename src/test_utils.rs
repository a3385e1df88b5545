//! Shared test utilities.
//!
//! Helpers for setting up an in-memory database and creating categories and
//! transactions with sensible defaults.

use crate::{
    core::{category, transaction},
    entities,
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Owner of everything created through these helpers.
pub const TEST_USER: &str = "test_user";

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a category owned by [`TEST_USER`].
pub async fn create_test_category(
    db: &DatabaseConnection,
    title: &str,
) -> Result<entities::category::Model> {
    category::create_category(db, TEST_USER.to_string(), title.to_string()).await
}

/// Fixed date used by [`create_test_transaction`].
#[must_use]
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap_or_default()
}

/// Creates a transaction owned by [`TEST_USER`] dated [`test_date`].
pub async fn create_test_transaction(
    db: &DatabaseConnection,
    category_id: Option<i64>,
    amount: f64,
) -> Result<entities::transaction::Model> {
    create_dated_transaction(db, category_id, amount, test_date()).await
}

/// Creates a transaction owned by [`TEST_USER`] on a specific date.
pub async fn create_dated_transaction(
    db: &DatabaseConnection,
    category_id: Option<i64>,
    amount: f64,
    date: NaiveDate,
) -> Result<entities::transaction::Model> {
    transaction::create_transaction(
        db,
        TEST_USER.to_string(),
        category_id,
        amount,
        date,
        "Test transaction".to_string(),
    )
    .await
}

/// Sets up a resolver context for [`TEST_USER`] over a fresh database.
pub async fn setup_test_context() -> Result<crate::resolvers::Context> {
    let db = setup_test_db().await?;
    Ok(crate::resolvers::Context::new(db, TEST_USER.to_string()))
}
