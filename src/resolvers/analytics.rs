//! Analytics resolvers.

use super::Context;
use crate::{
    core::analytics::{self, CategoryExpense, DateFilter},
    errors::Result,
};
use serde::Deserialize;

/// Query input: `{ filter: { date: { gte, lte } } }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyticsInput {
    /// Restrictions on which transactions are counted
    #[serde(default)]
    pub filter: AnalyticsFilter,
}

/// Filters accepted by analytics queries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyticsFilter {
    /// Inclusive date range; both bounds optional
    #[serde(default)]
    pub date: DateFilter,
}

/// Expense totals per category for the current user.
pub async fn analytics_expense(
    ctx: &Context,
    input: AnalyticsInput,
) -> Result<Vec<CategoryExpense>> {
    analytics::analytics_expense(&ctx.database, &ctx.user_id, &input.filter.date).await
}
