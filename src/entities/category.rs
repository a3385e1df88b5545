//! Category entity - A user-defined label used to classify transactions.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Category database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    /// Unique identifier for the category
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user who owns the category
    pub user_id: String,
    /// Display title (e.g., "Groceries", "Rent")
    pub title: String,
}

// Transactions reference categories by id only. A plain delete is allowed to
// leave those references dangling, so no relation (and no foreign key) is declared.
/// No relations declared
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
