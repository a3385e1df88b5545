//! Category resolvers.
//!
//! The three removal mutations share one input shape, `{ id, newId? }`, and one
//! payload, `{ id, success }`, which echoes the requested id back.

use super::{Context, parse_id};
use crate::{
    core::category as category_ops,
    entities::category,
    errors::{Error, Result},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

/// Input for creating or renaming a category.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryInput {
    /// Category title, trimmed before saving
    pub title: String,
}

/// Identifies the category to remove and, for the replace mutation, the
/// category that inherits its transactions.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDeleteInput {
    /// ID of the category to remove
    pub id: String,
    /// ID of the category that takes over the transactions (replace only)
    #[serde(default)]
    pub new_id: Option<String>,
}

/// Result of a removal mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDeletePayload {
    /// The id from the request, echoed back unchanged
    pub id: String,
    /// Whether exactly one category row was deleted
    pub success: bool,
}

/// Lists the current user's categories.
pub async fn categories(ctx: &Context) -> Result<Vec<category::Model>> {
    category_ops::get_categories_for_user(&ctx.database, &ctx.user_id).await
}

/// Creates a category owned by the current user.
pub async fn create_category(ctx: &Context, input: CategoryInput) -> Result<category::Model> {
    category_ops::create_category(&ctx.database, ctx.user_id.clone(), input.title).await
}

/// Renames one of the current user's categories.
pub async fn update_category(
    ctx: &Context,
    id: &str,
    input: CategoryInput,
) -> Result<category::Model> {
    let category_id = parse_id(id)?;
    ctx.owned_category(category_id).await?;
    category_ops::update_category(&ctx.database, category_id, input.title).await
}

/// Creates the given titles for the current user unless they already exist.
pub async fn seed_categories(ctx: &Context, titles: &[String]) -> Result<Vec<category::Model>> {
    category_ops::seed_default_categories(&ctx.database, &ctx.user_id, titles).await
}

/// Deletes a category and leaves its transactions pointing at the removed id.
#[instrument(skip(ctx), fields(user = %ctx.user_id))]
pub async fn delete_category(
    ctx: &Context,
    input: CategoryDeleteInput,
) -> Result<CategoryDeletePayload> {
    let category_id = parse_id(&input.id)?;
    ctx.owned_category(category_id).await?;

    let success = category_ops::delete_category(&ctx.database, category_id)
        .await
        .inspect_err(|e| error!("Failed to delete category {}: {}", category_id, e))?;
    info!("Deleted category {} (success: {})", category_id, success);

    Ok(CategoryDeletePayload {
        id: input.id,
        success,
    })
}

/// Moves the category's transactions to `new_id`, then deletes the category.
#[instrument(skip(ctx), fields(user = %ctx.user_id))]
pub async fn delete_category_replace(
    ctx: &Context,
    input: CategoryDeleteInput,
) -> Result<CategoryDeletePayload> {
    let category_id = parse_id(&input.id)?;
    let replacement_id = input
        .new_id
        .as_deref()
        .ok_or_else(|| Error::validation("A replacement category is required"))
        .and_then(parse_id)?;

    if category_id == replacement_id {
        return Err(Error::validation(
            "Replacement category must differ from the category being deleted",
        ));
    }
    ctx.owned_category(category_id).await?;
    ctx.owned_category(replacement_id).await?;

    let success =
        category_ops::delete_category_replace(&ctx.database, category_id, replacement_id)
            .await
            .inspect_err(|e| {
                error!(
                    "Failed to replace category {} with {}: {}",
                    category_id, replacement_id, e
                );
            })?;
    info!(
        "Replaced category {} with {} (success: {})",
        category_id, replacement_id, success
    );

    Ok(CategoryDeletePayload {
        id: input.id,
        success,
    })
}

/// Deletes the category together with every transaction tagged with it.
#[instrument(skip(ctx), fields(user = %ctx.user_id))]
pub async fn delete_category_with_transactions(
    ctx: &Context,
    input: CategoryDeleteInput,
) -> Result<CategoryDeletePayload> {
    let category_id = parse_id(&input.id)?;
    ctx.owned_category(category_id).await?;

    let success = category_ops::delete_category_with_transactions(&ctx.database, category_id)
        .await
        .inspect_err(|e| {
            error!(
                "Failed to delete category {} with its transactions: {}",
                category_id, e
            );
        })?;
    info!(
        "Deleted category {} with its transactions (success: {})",
        category_id, success
    );

    Ok(CategoryDeletePayload {
        id: input.id,
        success,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::transaction::get_transactions_for_category;
    use crate::test_utils::*;

    fn delete_input(id: i64, new_id: Option<i64>) -> CategoryDeleteInput {
        CategoryDeleteInput {
            id: id.to_string(),
            new_id: new_id.map(|n| n.to_string()),
        }
    }

    #[test]
    fn test_delete_input_deserializes_camel_case() {
        let input: CategoryDeleteInput =
            serde_json::from_str(r#"{"id": "1", "newId": "2"}"#).unwrap();
        assert_eq!(input.id, "1");
        assert_eq!(input.new_id.as_deref(), Some("2"));

        let input: CategoryDeleteInput = serde_json::from_str(r#"{"id": "1"}"#).unwrap();
        assert!(input.new_id.is_none());
    }

    #[tokio::test]
    async fn test_categories_empty() -> Result<()> {
        let ctx = setup_test_context().await?;
        assert!(categories(&ctx).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_create_and_update_category() -> Result<()> {
        let ctx = setup_test_context().await?;
        let created = create_category(
            &ctx,
            CategoryInput {
                title: "New category".to_string(),
            },
        )
        .await?;
        assert_eq!(created.title, "New category");

        let updated = update_category(
            &ctx,
            &created.id.to_string(),
            CategoryInput {
                title: "Updated category".to_string(),
            },
        )
        .await?;
        assert_eq!(updated.title, "Updated category");
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_category_payload_echoes_id() -> Result<()> {
        let ctx = setup_test_context().await?;
        let category = create_test_category(&ctx.database, "New category").await?;

        let payload = delete_category(&ctx, delete_input(category.id, None)).await?;
        assert_eq!(
            payload,
            CategoryDeletePayload {
                id: category.id.to_string(),
                success: true,
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_category_replace_payload() -> Result<()> {
        let ctx = setup_test_context().await?;
        let one = create_test_category(&ctx.database, "New category number one").await?;
        let two = create_test_category(&ctx.database, "New category number two").await?;
        create_test_transaction(&ctx.database, Some(one.id), -10.0).await?;
        create_test_transaction(&ctx.database, Some(one.id), -20.0).await?;

        let payload = delete_category_replace(&ctx, delete_input(one.id, Some(two.id))).await?;
        assert!(payload.success);
        assert_eq!(payload.id, one.id.to_string());
        assert_eq!(
            get_transactions_for_category(&ctx.database, two.id).await?.len(),
            2
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_category_replace_requires_new_id() -> Result<()> {
        let ctx = setup_test_context().await?;
        let one = create_test_category(&ctx.database, "One").await?;

        let result = delete_category_replace(&ctx, delete_input(one.id, None)).await;
        assert!(matches!(result, Err(Error::Validation { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_category_replace_same_id() -> Result<()> {
        let ctx = setup_test_context().await?;
        let one = create_test_category(&ctx.database, "One").await?;

        let result = delete_category_replace(&ctx, delete_input(one.id, Some(one.id))).await;
        assert!(matches!(result, Err(Error::Validation { .. })));
        assert_eq!(categories(&ctx).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_category_with_transactions_payload() -> Result<()> {
        let ctx = setup_test_context().await?;
        let category = create_test_category(&ctx.database, "New category").await?;
        create_test_transaction(&ctx.database, Some(category.id), -10.0).await?;

        let payload =
            delete_category_with_transactions(&ctx, delete_input(category.id, None)).await?;
        assert!(payload.success);
        assert!(
            get_transactions_for_category(&ctx.database, category.id)
                .await?
                .is_empty()
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_cannot_delete_someone_elses_category() -> Result<()> {
        let ctx = setup_test_context().await?;
        let foreign = category_ops::create_category(
            &ctx.database,
            "someone_else".to_string(),
            "Theirs".to_string(),
        )
        .await?;

        let result = delete_category(&ctx, delete_input(foreign.id, None)).await;
        assert!(matches!(result, Err(Error::CategoryNotFound { .. })));
        assert!(
            category_ops::get_category_by_id(&ctx.database, foreign.id)
                .await?
                .is_some()
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_cannot_replace_with_someone_elses_category() -> Result<()> {
        let ctx = setup_test_context().await?;
        let mine = create_test_category(&ctx.database, "Mine").await?;
        let foreign = category_ops::create_category(
            &ctx.database,
            "someone_else".to_string(),
            "Theirs".to_string(),
        )
        .await?;

        let result = delete_category_replace(&ctx, delete_input(mine.id, Some(foreign.id))).await;
        assert!(matches!(result, Err(Error::CategoryNotFound { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_id_is_a_validation_error() -> Result<()> {
        let ctx = setup_test_context().await?;
        let input = CategoryDeleteInput {
            id: "not-a-number".to_string(),
            new_id: None,
        };
        let result = delete_category(&ctx, input).await;
        assert!(matches!(result, Err(Error::Validation { .. })));
        Ok(())
    }
}
