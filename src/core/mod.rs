//! Core business logic - framework-agnostic category, transaction and analytics
//! operations. Every function takes a SeaORM connection and returns the crate
//! `Result`, so the resolver layer and the CLI stay thin.

/// Expense analytics aggregated per category
pub mod analytics;
/// Category CRUD and the atomic category removal workflow
pub mod category;
/// Transaction CRUD and bulk re-tagging helpers
pub mod transaction;
