//! Track Order Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{PathParam, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use flames_app::domain::orders::records::OrderTracking;

use crate::{extensions::*, orders::errors::into_status_error};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TrackingResponse {
    pub status: String,

    /// Calendar date, `YYYY-MM-DD`
    pub estimated_delivery: String,
}

impl From<OrderTracking> for TrackingResponse {
    fn from(tracking: OrderTracking) -> Self {
        TrackingResponse {
            status: tracking.status.to_string(),
            estimated_delivery: tracking.estimated_delivery.to_string(),
        }
    }
}

/// Track Order Handler
///
/// Delivery is estimated five days after `at`, which defaults to now.
#[endpoint(
    tags("orders"),
    summary = "Track Order",
    responses(
        (status_code = StatusCode::OK, description = "Tracking information"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    at: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<TrackingResponse>, StatusError> {
    let app = depot.app()?;
    let point_in_time = at.into_point_in_time()?;

    let tracking = app
        .orders
        .track_order(order.into_inner().into(), point_in_time)
        .await
        .map_err(into_status_error)?;

    Ok(Json(tracking.into()))
}

#[cfg(test)]
mod tests {
    use jiff::{Timestamp, civil::date};
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use flames_app::domain::orders::{
        OrdersServiceError,
        records::{OrderStatus, OrderUuid},
    };

    use crate::test_helpers::TestServices;

    use super::*;

    fn make_service(services: TestServices) -> Service {
        services.service(Router::with_path("orders/track/{order}").get(handler))
    }

    #[tokio::test]
    async fn test_track_returns_estimate() -> TestResult {
        let order = OrderUuid::new();
        let at: Timestamp = "2026-03-30T22:15:00Z".parse()?;

        let mut services = TestServices::default();

        services
            .orders
            .expect_track_order()
            .once()
            .withf(move |requested, point_in_time| *requested == order && *point_in_time == at)
            .return_once(|_, _| {
                Ok(OrderTracking {
                    status: OrderStatus::Paid,
                    estimated_delivery: date(2026, 4, 4),
                })
            });

        let mut res = TestClient::get(format!(
            "http://example.com/orders/track/{order}?at=2026-03-30T22:15:00Z"
        ))
        .send(&make_service(services))
        .await;

        let body: TrackingResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.status, "paid");
        assert_eq!(body.estimated_delivery, "2026-04-04");

        Ok(())
    }

    #[tokio::test]
    async fn test_track_unknown_order_returns_404() {
        let mut services = TestServices::default();

        services
            .orders
            .expect_track_order()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::NotFound));

        let res = TestClient::get(format!(
            "http://example.com/orders/track/{}",
            OrderUuid::new()
        ))
        .send(&make_service(services))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
