//! Resolver layer - the request-facing side of the ledger.
//!
//! Resolvers take string ids and input shapes as a GraphQL-style client sends
//! them, check that the requesting user owns what they touch, and call into
//! [`crate::core`]. Payloads are `Serialize` so any transport can return them.

/// Category queries and mutations, including the three removal mutations
pub mod category;
/// Transaction queries and mutations
pub mod transaction;
/// Analytics queries
pub mod analytics;

use crate::{
    core,
    entities::category as category_entity,
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;

/// Per-request state shared by every resolver.
pub struct Context {
    /// Database connection for all operations
    pub database: DatabaseConnection,
    /// Authenticated user making the request
    pub user_id: String,
}

impl Context {
    /// Creates a new request context for an already authenticated user.
    #[must_use]
    pub const fn new(database: DatabaseConnection, user_id: String) -> Self {
        Self { database, user_id }
    }

    /// Loads a category the current user owns. Someone else's category is
    /// reported as not found.
    pub(crate) async fn owned_category(&self, category_id: i64) -> Result<category_entity::Model> {
        core::category::get_category_by_id(&self.database, category_id)
            .await?
            .filter(|c| c.user_id == self.user_id)
            .ok_or_else(|| Error::category_not_found(category_id))
    }
}

/// Parses an id sent by a client.
pub(crate) fn parse_id(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| Error::validation(format!("Invalid id: {raw:?}")))
}

pub use category::{CategoryDeleteInput, CategoryDeletePayload, CategoryInput};
pub use transaction::TransactionInput;
pub use analytics::AnalyticsInput;
