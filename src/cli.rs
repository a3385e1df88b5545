//! Command-line front end.
//!
//! Each subcommand maps onto one resolver and prints its payload as JSON, so the
//! binary behaves like a scripted client of the resolver layer.

use crate::{
    config,
    errors::Result,
    resolvers::{
        self, AnalyticsInput, CategoryDeleteInput, CategoryInput, Context, TransactionInput,
    },
};
use chrono::NaiveDate;
use clap::Subcommand;
use serde::Serialize;
use std::path::PathBuf;

/// Category subcommands
#[derive(Debug, Subcommand)]
pub enum CategoryCommands {
    /// List your categories
    List,

    /// Create a new category
    Create {
        /// Category title
        title: String,
    },

    /// Rename a category
    Rename {
        /// Category ID
        id: String,
        /// New title
        title: String,
    },

    /// Delete a category
    Delete {
        /// Category ID
        id: String,
        /// Move its transactions to this category first
        #[arg(long, conflicts_with = "with_transactions")]
        replace: Option<String>,
        /// Delete its transactions as well
        #[arg(long)]
        with_transactions: bool,
    },

    /// Create the default categories from config.toml
    Seed {
        /// Path to the configuration file
        #[arg(long, default_value = "config.toml")]
        config: PathBuf,
    },
}

/// Transaction subcommands
#[derive(Debug, Subcommand)]
pub enum TransactionCommands {
    /// List your transactions, newest first
    List,

    /// Record a transaction
    Add {
        /// Amount (negative for an expense)
        #[arg(allow_hyphen_values = true)]
        amount: f64,
        /// Category ID
        #[arg(short, long)]
        category: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// Description
        #[arg(short = 'm', long, default_value = "")]
        description: String,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },
}

/// Analytics subcommands
#[derive(Debug, Subcommand)]
pub enum AnalyticsCommands {
    /// Expense totals per category
    Expense {
        /// First day to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Last day to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(Into::into)
}

/// Runs a category subcommand and returns its JSON output.
pub async fn handle_category_command(ctx: &Context, cmd: CategoryCommands) -> Result<String> {
    match cmd {
        CategoryCommands::List => to_json(&resolvers::category::categories(ctx).await?),
        CategoryCommands::Create { title } => to_json(
            &resolvers::category::create_category(ctx, CategoryInput { title }).await?,
        ),
        CategoryCommands::Rename { id, title } => to_json(
            &resolvers::category::update_category(ctx, &id, CategoryInput { title }).await?,
        ),
        CategoryCommands::Delete {
            id,
            replace,
            with_transactions,
        } => {
            let payload = match (replace, with_transactions) {
                (Some(new_id), _) => {
                    let input = CategoryDeleteInput {
                        id,
                        new_id: Some(new_id),
                    };
                    resolvers::category::delete_category_replace(ctx, input).await?
                }
                (None, true) => {
                    let input = CategoryDeleteInput { id, new_id: None };
                    resolvers::category::delete_category_with_transactions(ctx, input).await?
                }
                (None, false) => {
                    let input = CategoryDeleteInput { id, new_id: None };
                    resolvers::category::delete_category(ctx, input).await?
                }
            };
            to_json(&payload)
        }
        CategoryCommands::Seed { config: path } => {
            let settings = config::categories::load_config(path)?;
            to_json(
                &resolvers::category::seed_categories(ctx, &settings.default_categories).await?,
            )
        }
    }
}

/// Runs a transaction subcommand and returns its JSON output.
pub async fn handle_transaction_command(
    ctx: &Context,
    cmd: TransactionCommands,
) -> Result<String> {
    match cmd {
        TransactionCommands::List => to_json(&resolvers::transaction::transactions(ctx).await?),
        TransactionCommands::Add {
            amount,
            category,
            date,
            description,
        } => {
            let input = TransactionInput {
                category_id: category,
                amount,
                date: date.unwrap_or_else(|| chrono::Local::now().date_naive()),
                description,
            };
            to_json(&resolvers::transaction::create_transaction(ctx, input).await?)
        }
        TransactionCommands::Delete { id } => {
            resolvers::transaction::delete_transaction(ctx, &id).await?;
            to_json(&serde_json::json!({ "id": id, "success": true }))
        }
    }
}

/// Runs an analytics subcommand and returns its JSON output.
pub async fn handle_analytics_command(ctx: &Context, cmd: AnalyticsCommands) -> Result<String> {
    match cmd {
        AnalyticsCommands::Expense { from, to } => {
            let mut input = AnalyticsInput::default();
            input.filter.date.gte = from;
            input.filter.date.lte = to;
            to_json(&resolvers::analytics::analytics_expense(ctx, input).await?)
        }
    }
}
