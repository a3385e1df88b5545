//! Category business logic - CRUD plus the category removal workflow.
//!
//! Removing a category touches two tables: the category row itself and every
//! transaction tagged with it. The three removal variants each run as a single
//! database transaction (begin, write, commit; roll back on any failure), so a
//! reader never observes transactions re-tagged to a category that still exists
//! or a category deleted while its transactions are only half migrated.

use crate::{
    core::transaction as transaction_ops,
    entities::{Category, category},
    errors::{Error, Result},
};
use sea_orm::{DatabaseTransaction, QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::{debug, info, instrument, warn};

/// Retrieves all categories owned by a user, ordered alphabetically by title.
pub async fn get_categories_for_user(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<Vec<category::Model>> {
    Category::find()
        .filter(category::Column::UserId.eq(user_id))
        .order_by_asc(category::Column::Title)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a category by its unique ID.
///
/// Generic over the connection so it can run inside an open transaction.
pub async fn get_category_by_id<C>(db: &C, category_id: i64) -> Result<Option<category::Model>>
where
    C: ConnectionTrait,
{
    Category::find_by_id(category_id)
        .one(db)
        .await
        .map_err(Into::into)
}

fn validate_title(title: &str) -> Result<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(Error::validation("Category title cannot be empty"));
    }
    Ok(title.to_string())
}

/// Creates a new category for a user. The title is trimmed and must not be empty.
pub async fn create_category(
    db: &DatabaseConnection,
    user_id: String,
    title: String,
) -> Result<category::Model> {
    let title = validate_title(&title)?;

    let category = category::ActiveModel {
        user_id: Set(user_id),
        title: Set(title),
        ..Default::default()
    };

    let result = category.insert(db).await?;
    debug!("Created category {} ({})", result.id, result.title);
    Ok(result)
}

/// Renames an existing category.
pub async fn update_category(
    db: &DatabaseConnection,
    category_id: i64,
    title: String,
) -> Result<category::Model> {
    let title = validate_title(&title)?;

    let existing = get_category_by_id(db, category_id)
        .await?
        .ok_or_else(|| Error::category_not_found(category_id))?;

    let mut active: category::ActiveModel = existing.into();
    active.title = Set(title);
    active.update(db).await.map_err(Into::into)
}

/// Creates the given categories for a user, skipping titles the user already has.
///
/// Returns only the newly created categories.
#[instrument(skip(db, titles))]
pub async fn seed_default_categories(
    db: &DatabaseConnection,
    user_id: &str,
    titles: &[String],
) -> Result<Vec<category::Model>> {
    let existing: Vec<String> = get_categories_for_user(db, user_id)
        .await?
        .into_iter()
        .map(|c| c.title)
        .collect();

    let mut created = Vec::new();
    for title in titles {
        let trimmed = title.trim();
        if trimmed.is_empty()
            || existing.iter().any(|t| t == trimmed)
            || created.iter().any(|c: &category::Model| c.title == trimmed)
        {
            continue;
        }
        created.push(create_category(db, user_id.to_string(), trimmed.to_string()).await?);
    }

    info!("Seeded {} categories for user {}", created.len(), user_id);
    Ok(created)
}

/// Deletes a category, leaving transactions that reference it untouched.
///
/// Returns `true` iff exactly one category row was deleted.
///
/// # Errors
/// - [`Error::CategoryNotFound`] if the category does not exist
/// - [`Error::TransactionAborted`] if the delete cannot be committed
#[instrument(skip(db))]
pub async fn delete_category(db: &DatabaseConnection, category_id: i64) -> Result<bool> {
    let txn = db.begin().await.map_err(Error::aborted)?;
    let outcome = delete_existing(&txn, category_id).await;
    finish(txn, outcome).await
}

/// Moves every transaction of `category_id` to `replacement_id`, then deletes
/// `category_id`, as one atomic unit.
///
/// Returns `true` iff exactly one category row was deleted; otherwise the
/// re-tagging is rolled back as well.
///
/// # Errors
/// - [`Error::Validation`] if both ids are equal (checked before touching the store)
/// - [`Error::CategoryNotFound`] if either category does not exist
/// - [`Error::TransactionAborted`] if the unit cannot be written or committed
#[instrument(skip(db))]
pub async fn delete_category_replace(
    db: &DatabaseConnection,
    category_id: i64,
    replacement_id: i64,
) -> Result<bool> {
    if category_id == replacement_id {
        return Err(Error::validation(
            "Replacement category must differ from the category being deleted",
        ));
    }

    let txn = db.begin().await.map_err(Error::aborted)?;
    let outcome = reassign_and_delete(&txn, category_id, replacement_id).await;
    finish(txn, outcome).await
}

/// Deletes every transaction of `category_id`, then the category itself, as one
/// atomic unit.
///
/// Returns `true` iff exactly one category row was deleted; otherwise the
/// transaction deletions are rolled back as well.
///
/// # Errors
/// - [`Error::CategoryNotFound`] if the category does not exist
/// - [`Error::TransactionAborted`] if the unit cannot be written or committed
#[instrument(skip(db))]
pub async fn delete_category_with_transactions(
    db: &DatabaseConnection,
    category_id: i64,
) -> Result<bool> {
    let txn = db.begin().await.map_err(Error::aborted)?;
    let outcome = cascade_and_delete(&txn, category_id).await;
    finish(txn, outcome).await
}

async fn require_category(txn: &DatabaseTransaction, category_id: i64) -> Result<()> {
    get_category_by_id(txn, category_id)
        .await
        .map_err(Error::into_aborted)?
        .map(|_| ())
        .ok_or_else(|| Error::category_not_found(category_id))
}

async fn delete_row(txn: &DatabaseTransaction, category_id: i64) -> Result<bool> {
    let result = Category::delete_by_id(category_id)
        .exec(txn)
        .await
        .map_err(Error::aborted)?;
    Ok(result.rows_affected == 1)
}

async fn delete_existing(txn: &DatabaseTransaction, category_id: i64) -> Result<bool> {
    require_category(txn, category_id).await?;
    delete_row(txn, category_id).await
}

async fn reassign_and_delete(
    txn: &DatabaseTransaction,
    category_id: i64,
    replacement_id: i64,
) -> Result<bool> {
    require_category(txn, category_id).await?;
    require_category(txn, replacement_id).await?;

    let moved = transaction_ops::reassign_transactions(txn, category_id, replacement_id)
        .await
        .map_err(Error::into_aborted)?;
    debug!(
        "Moved {} transactions from category {} to {}",
        moved, category_id, replacement_id
    );

    delete_row(txn, category_id).await
}

async fn cascade_and_delete(txn: &DatabaseTransaction, category_id: i64) -> Result<bool> {
    require_category(txn, category_id).await?;

    let removed = transaction_ops::delete_transactions_for_category(txn, category_id)
        .await
        .map_err(Error::into_aborted)?;
    debug!(
        "Deleted {} transactions of category {}",
        removed, category_id
    );

    delete_row(txn, category_id).await
}

/// Commits when the category row was deleted, rolls back otherwise.
async fn finish(txn: DatabaseTransaction, outcome: Result<bool>) -> Result<bool> {
    match outcome {
        Ok(true) => {
            txn.commit().await.map_err(Error::aborted)?;
            info!("Category removal committed");
            Ok(true)
        }
        Ok(false) => {
            txn.rollback().await.map_err(Error::aborted)?;
            warn!("Category row was not deleted, rolled back");
            Ok(false)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                warn!("Rollback failed after {}: {}", err, rollback_err);
            }
            Err(err)
        }
    }
}
