//! Expense analytics.
//!
//! Aggregates a user's expenses per category over an optional date range. The
//! result is plain data that the resolver layer serialises as-is.

use crate::{
    entities::{Category, Transaction, category, transaction},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Title used for expenses whose category is missing or was deleted.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Inclusive date bounds; a missing bound leaves that side open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFilter {
    /// First day included
    pub gte: Option<NaiveDate>,
    /// Last day included
    pub lte: Option<NaiveDate>,
}

impl DateFilter {
    fn validate(&self) -> Result<()> {
        match (self.gte, self.lte) {
            (Some(gte), Some(lte)) if gte > lte => Err(Error::validation(format!(
                "Start date {gte} is after end date {lte}"
            ))),
            _ => Ok(()),
        }
    }
}

/// Total spent in one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryExpense {
    /// `None` for uncategorized or orphaned expenses
    pub category_id: Option<i64>,
    /// Category title, or "Uncategorized"
    pub title: String,
    /// Sum of expense amounts as a positive number
    pub total: f64,
}

/// Sums a user's expenses (negative amounts) per category within `filter`,
/// largest total first.
pub async fn analytics_expense(
    db: &DatabaseConnection,
    user_id: &str,
    filter: &DateFilter,
) -> Result<Vec<CategoryExpense>> {
    filter.validate()?;

    let mut query = Transaction::find()
        .filter(transaction::Column::UserId.eq(user_id))
        .filter(transaction::Column::Amount.lt(0.0));
    if let Some(gte) = filter.gte {
        query = query.filter(transaction::Column::Date.gte(gte));
    }
    if let Some(lte) = filter.lte {
        query = query.filter(transaction::Column::Date.lte(lte));
    }
    let expenses = query.all(db).await?;

    let titles: HashMap<i64, String> = Category::find()
        .filter(category::Column::UserId.eq(user_id))
        .all(db)
        .await?
        .into_iter()
        .map(|c| (c.id, c.title))
        .collect();

    Ok(summarize_expenses(&expenses, &titles))
}

/// Groups expenses by category. Ids without a known title count as uncategorized.
#[must_use]
pub fn summarize_expenses(
    expenses: &[transaction::Model],
    titles: &HashMap<i64, String>,
) -> Vec<CategoryExpense> {
    let mut totals: HashMap<Option<i64>, f64> = HashMap::new();
    for expense in expenses.iter().filter(|t| t.amount < 0.0) {
        let key = expense.category_id.filter(|id| titles.contains_key(id));
        *totals.entry(key).or_insert(0.0) += -expense.amount;
    }

    let mut summary: Vec<CategoryExpense> = totals
        .into_iter()
        .map(|(category_id, total)| CategoryExpense {
            category_id,
            title: category_id
                .and_then(|id| titles.get(&id).cloned())
                .unwrap_or_else(|| UNCATEGORIZED.to_string()),
            total,
        })
        .collect();

    summary.sort_by(|a, b| {
        b.total
            .total_cmp(&a.total)
            .then_with(|| a.title.cmp(&b.title))
    });
    summary
}
