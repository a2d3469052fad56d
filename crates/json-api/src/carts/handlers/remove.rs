//! Remove Cart Item Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{carts::errors::into_status_error, extensions::*};

/// Remove Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RemoveCartItemRequest {
    pub product_id: Uuid,
}

/// Remove Cart Item Handler
///
/// Removing a product that is not in the cart succeeds.
#[endpoint(
    tags("cart"),
    summary = "Remove From Cart",
    responses(
        (status_code = StatusCode::OK, description = "Item removed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    user_id: QueryParam<Uuid, true>,
    json: JsonBody<RemoveCartItemRequest>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let app = depot.app()?;

    app.carts
        .remove_item(
            user_id.into_inner().into(),
            json.into_inner().product_id.into(),
        )
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use serde_json::json;

    use flames_app::domain::{accounts::records::UserUuid, products::records::ProductUuid};

    use crate::test_helpers::TestServices;

    use super::*;

    #[tokio::test]
    async fn test_remove_item_returns_200() {
        let user = UserUuid::new();
        let product = ProductUuid::new();

        let mut services = TestServices::default();

        services
            .carts
            .expect_remove_item()
            .once()
            .withf(move |requested, removed| *requested == user && *removed == product)
            .return_once(|_, _| Ok(()));

        let res = TestClient::post(format!("http://example.com/cart/remove?user_id={user}"))
            .json(&json!({ "product_id": product.into_uuid() }))
            .send(&services.service(Router::with_path("cart/remove").post(handler)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
    }
}
