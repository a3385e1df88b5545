//! Transaction business logic - Handles all transaction-related operations.
//!
//! Besides the usual create/read/delete functions this module provides the two
//! bulk operations the category removal workflow runs inside its atomic unit:
//! re-tagging every transaction of a category and deleting them all. Those two
//! are generic over [`ConnectionTrait`] so they accept an open transaction.

use crate::{
    core::category::get_category_by_id,
    entities::{Transaction, transaction},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, prelude::*, sea_query::Expr};

/// Creates a new transaction for a user.
///
/// The amount must be finite and non-zero. When a category is given it must
/// exist.
pub async fn create_transaction(
    db: &DatabaseConnection,
    user_id: String,
    category_id: Option<i64>,
    amount: f64,
    date: NaiveDate,
    description: String,
) -> Result<transaction::Model> {
    if amount == 0.0 || !amount.is_finite() {
        return Err(Error::InvalidAmount { amount });
    }

    if let Some(category_id) = category_id {
        get_category_by_id(db, category_id)
            .await?
            .ok_or_else(|| Error::category_not_found(category_id))?;
    }

    let transaction_model = transaction::ActiveModel {
        user_id: Set(user_id),
        category_id: Set(category_id),
        amount: Set(amount),
        date: Set(date),
        description: Set(description.trim().to_string()),
        ..Default::default()
    };

    transaction_model.insert(db).await.map_err(Into::into)
}

/// Retrieves all transactions of a user, newest first.
pub async fn get_transactions_for_user(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<Vec<transaction::Model>> {
    Transaction::find()
        .filter(transaction::Column::UserId.eq(user_id))
        .order_by_desc(transaction::Column::Date)
        .order_by_desc(transaction::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all transactions tagged with a category.
pub async fn get_transactions_for_category<C>(
    db: &C,
    category_id: i64,
) -> Result<Vec<transaction::Model>>
where
    C: ConnectionTrait,
{
    Transaction::find()
        .filter(transaction::Column::CategoryId.eq(category_id))
        .order_by_asc(transaction::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific transaction by its unique ID.
pub async fn get_transaction_by_id(
    db: &DatabaseConnection,
    transaction_id: i64,
) -> Result<Option<transaction::Model>> {
    Transaction::find_by_id(transaction_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Deletes a single transaction.
pub async fn delete_transaction(db: &DatabaseConnection, transaction_id: i64) -> Result<()> {
    let result = Transaction::delete_by_id(transaction_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::TransactionNotFound {
            id: transaction_id.to_string(),
        });
    }
    Ok(())
}

/// Re-tags every transaction of `from_category` with `to_category`.
///
/// Returns the number of transactions updated.
pub async fn reassign_transactions<C>(db: &C, from_category: i64, to_category: i64) -> Result<u64>
where
    C: ConnectionTrait,
{
    let result = Transaction::update_many()
        .col_expr(transaction::Column::CategoryId, Expr::value(to_category))
        .filter(transaction::Column::CategoryId.eq(from_category))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

/// Deletes every transaction of a category.
///
/// Returns the number of transactions deleted.
pub async fn delete_transactions_for_category<C>(db: &C, category_id: i64) -> Result<u64>
where
    C: ConnectionTrait,
{
    let result = Transaction::delete_many()
        .filter(transaction::Column::CategoryId.eq(category_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}
