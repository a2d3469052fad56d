//! Wishlists service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        accounts::records::UserUuid,
        products::records::ProductUuid,
        wishlists::{
            errors::WishlistsServiceError, records::WishlistRecord,
            repository::PgWishlistsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgWishlistsService {
    db: Db,
    repository: PgWishlistsRepository,
}

impl PgWishlistsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgWishlistsRepository::new(),
        }
    }
}

#[async_trait]
impl WishlistsService for PgWishlistsService {
    async fn get_wishlist(&self, user: UserUuid) -> Result<WishlistRecord, WishlistsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.get_wishlist_items(&mut tx, user).await?;

        tx.commit().await?;

        Ok(WishlistRecord { user, products })
    }

    #[tracing::instrument(
        name = "wishlists.service.toggle_item",
        skip(self),
        fields(user_uuid = %user, product_uuid = %product),
        err
    )]
    async fn toggle_item(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<bool, WishlistsServiceError> {
        let mut tx = self.db.begin().await?;

        let removed = self
            .repository
            .remove_wishlist_item(&mut tx, user, product)
            .await?;

        let wishlisted = if removed == 0 {
            self.repository
                .add_wishlist_item(&mut tx, user, product)
                .await?;

            true
        } else {
            false
        };

        tx.commit().await?;

        info!(wishlisted, "toggled wishlist item");

        Ok(wishlisted)
    }
}

#[automock]
#[async_trait]
pub trait WishlistsService: Send + Sync {
    /// Retrieve a user's wishlist. A user who never added anything has an empty wishlist.
    async fn get_wishlist(&self, user: UserUuid) -> Result<WishlistRecord, WishlistsServiceError>;

    /// Add the product if absent, remove it if present. Returns whether it is now wishlisted.
    async fn toggle_item(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<bool, WishlistsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::{
        TestContext,
        helpers::{create_product, create_user},
    };

    use super::*;

    #[tokio::test]
    async fn toggle_item_adds_then_removes() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "asha@example.com").await?;
        let phone = create_product(&ctx, "phone", 100_000, None).await?;
        let case = create_product(&ctx, "case", 5_000, None).await?;

        assert!(ctx.wishlists.toggle_item(user, phone.uuid).await?);
        assert!(ctx.wishlists.toggle_item(user, case.uuid).await?);

        let wishlist = ctx.wishlists.get_wishlist(user).await?;

        assert_eq!(wishlist.products, vec![phone.uuid, case.uuid]);

        assert!(!ctx.wishlists.toggle_item(user, phone.uuid).await?);

        let wishlist = ctx.wishlists.get_wishlist(user).await?;

        assert_eq!(wishlist.products, vec![case.uuid]);

        Ok(())
    }

    #[tokio::test]
    async fn get_wishlist_for_new_user_is_empty() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "asha@example.com").await?;

        let wishlist = ctx.wishlists.get_wishlist(user).await?;

        assert_eq!(wishlist.user, user);
        assert!(wishlist.products.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn toggle_item_unknown_product_returns_invalid_reference() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "asha@example.com").await?;

        let result = ctx.wishlists.toggle_item(user, ProductUuid::new()).await;

        assert!(
            matches!(result, Err(WishlistsServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );

        Ok(())
    }
}
