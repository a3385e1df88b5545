//! Transaction resolvers.

use super::{Context, parse_id};
use crate::{
    core::transaction as transaction_ops,
    entities::transaction,
    errors::{Error, Result},
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

/// Input for recording a transaction.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInput {
    /// Category to tag the transaction with, if any
    #[serde(default)]
    pub category_id: Option<String>,
    /// Amount (positive for income, negative for spending)
    pub amount: f64,
    /// Day the transaction happened
    pub date: NaiveDate,
    /// Free-form description
    #[serde(default)]
    pub description: String,
}

/// Lists the current user's transactions, newest first.
pub async fn transactions(ctx: &Context) -> Result<Vec<transaction::Model>> {
    transaction_ops::get_transactions_for_user(&ctx.database, &ctx.user_id).await
}

/// Records a transaction for the current user. A category, if given, must be
/// one of the user's own.
pub async fn create_transaction(
    ctx: &Context,
    input: TransactionInput,
) -> Result<transaction::Model> {
    let category_id = match input.category_id.as_deref() {
        Some(raw) => {
            let id = parse_id(raw)?;
            ctx.owned_category(id).await?;
            Some(id)
        }
        None => None,
    };

    let created = transaction_ops::create_transaction(
        &ctx.database,
        ctx.user_id.clone(),
        category_id,
        input.amount,
        input.date,
        input.description,
    )
    .await?;
    info!("Recorded transaction {} for {}", created.id, ctx.user_id);
    Ok(created)
}

/// Deletes one of the current user's transactions.
pub async fn delete_transaction(ctx: &Context, id: &str) -> Result<()> {
    let transaction_id = parse_id(id)?;
    let not_found = || Error::TransactionNotFound { id: id.to_string() };

    transaction_ops::get_transaction_by_id(&ctx.database, transaction_id)
        .await?
        .filter(|t| t.user_id == ctx.user_id)
        .ok_or_else(not_found)?;

    transaction_ops::delete_transaction(&ctx.database, transaction_id).await
}
