//! Entity module - Contains all SeaORM entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod category;
pub mod transaction;

// Re-export specific types to avoid conflicts
pub use category::{Column as CategoryColumn, Entity as Category, Model as CategoryModel};
pub use transaction::{
    Column as TransactionColumn, Entity as Transaction, Model as TransactionModel,
};
