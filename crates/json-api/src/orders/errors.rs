//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use flames::prelude::CheckoutError;
use flames_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::Checkout(CheckoutError::ProductNotFound(product)) => {
            StatusError::bad_request()
                .brief("Product not found")
                .detail(format!("product {product} does not exist"))
        }
        OrdersServiceError::Checkout(source) => {
            error!("checkout failed: {source}");

            StatusError::internal_server_error()
        }
        OrdersServiceError::InvalidReference => {
            StatusError::bad_request().brief("Unknown user or product")
        }
        OrdersServiceError::AlreadyExists
        | OrdersServiceError::MissingRequiredData
        | OrdersServiceError::InvalidData => StatusError::bad_request().brief("Invalid order"),
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::Sql(source) => {
            error!("order storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn missing_product_is_a_client_error() {
        let error = into_status_error(OrdersServiceError::Checkout(
            CheckoutError::ProductNotFound("phone".to_string()),
        ));

        assert_eq!(error.code, StatusCode::BAD_REQUEST);
        assert_eq!(error.brief, "Product not found");
    }

    #[test]
    fn arithmetic_failure_is_a_server_error() {
        let error = into_status_error(OrdersServiceError::Checkout(CheckoutError::AmountOverflow));

        assert_eq!(error.code, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
