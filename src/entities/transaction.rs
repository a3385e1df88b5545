//! Transaction entity - A single recorded financial event.
//!
//! Each transaction has an owning `user_id`, an optional `category_id`, a signed
//! amount (negative for expenses), a calendar date and a free-form description.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Transaction database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// Unique identifier for the transaction
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user who recorded the transaction
    pub user_id: String,
    /// Category the transaction is tagged with, if any
    pub category_id: Option<i64>,
    /// Transaction amount (positive for income, negative for spending)
    pub amount: f64,
    /// Day the transaction happened
    pub date: Date,
    /// Human-readable description of the transaction
    pub description: String,
}

/// No relations declared
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
