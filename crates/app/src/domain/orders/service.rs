//! Orders service.

use async_trait::async_trait;
use flames::prelude::{
    Coupon, MAX_LINE_QUANTITY, ProductSnapshot, STORE_CURRENCY, canonical_code, compute_order,
};
use jiff::{Timestamp, ToSpan, tz::TimeZone};
use mockall::automock;
use rustc_hash::FxHashMap;
use tracing::{Span, info};

use crate::{
    database::Db,
    domain::{
        accounts::records::UserUuid,
        coupons::repository::PgCouponsRepository,
        orders::{
            checkout::{order_item, payment_order_id, snapshot},
            data::{NewOrder, PaymentConfirmation},
            errors::OrdersServiceError,
            records::{OrderRecord, OrderStatus, OrderTracking, OrderUuid, PAYMENT_PROVIDER},
            repository::{OrderRow, PgOrdersRepository},
        },
        products::{records::ProductUuid, repository::PgProductsRepository},
    },
};

/// Days between checkout and the quoted delivery date.
pub const DELIVERY_ESTIMATE_DAYS: i64 = 5;

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    orders: PgOrdersRepository,
    products: PgProductsRepository,
    coupons: PgCouponsRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            orders: PgOrdersRepository::new(),
            products: PgProductsRepository::new(),
            coupons: PgCouponsRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    #[tracing::instrument(
        name = "orders.service.create_order",
        skip(self, order),
        fields(
            item_count = order.items.len(),
            has_coupon = order.coupon.is_some(),
            order_uuid = tracing::field::Empty,
            coupon_applied = tracing::field::Empty
        ),
        err
    )]
    async fn create_order(
        &self,
        order: NewOrder,
        point_in_time: Timestamp,
    ) -> Result<OrderRecord, OrdersServiceError> {
        if order
            .items
            .iter()
            .any(|item| item.quantity().get() > MAX_LINE_QUANTITY)
        {
            return Err(OrdersServiceError::InvalidData);
        }

        let mut tx = self.db.begin().await?;

        let references: Vec<ProductUuid> =
            order.items.iter().map(|item| *item.product()).collect();

        let snapshots = self
            .products
            .find_products(&mut tx, &references)
            .await?
            .iter()
            .map(|record| snapshot(record).map(|snapshot| (record.uuid, snapshot)))
            .collect::<Result<FxHashMap<_, _>, _>>()?;

        let coupon = match order.coupon.as_deref() {
            Some(code) => self
                .coupons
                .find_coupon(&mut tx, &canonical_code(code))
                .await?
                .map(|record| record.to_coupon(STORE_CURRENCY, point_in_time))
                .transpose()
                .map_err(|_| OrdersServiceError::InvalidData)?,
            None => None,
        };

        let product_lookup = |reference: &ProductUuid| -> Option<ProductSnapshot<'static, ProductUuid>> {
            snapshots.get(reference).cloned()
        };

        let coupon_lookup = |code: &str| -> Option<Coupon<'static>> {
            coupon.as_ref().filter(|coupon| coupon.code == code).cloned()
        };

        let (total, priced) = compute_order(
            &order.items,
            order.coupon.as_deref(),
            &product_lookup,
            &coupon_lookup,
            STORE_CURRENCY,
        )?;

        let items = priced
            .iter()
            .map(order_item)
            .collect::<Result<Vec<_>, _>>()?;

        let subtotal = u64::try_from(total.subtotal().to_minor_units())
            .map_err(|_| OrdersServiceError::InvalidData)?;

        let amount = u64::try_from(total.amount().to_minor_units())
            .map_err(|_| OrdersServiceError::InvalidData)?;

        let payment_order_id = payment_order_id();

        let mut record = self
            .orders
            .create_order(
                &mut tx,
                OrderRow {
                    uuid: OrderUuid::new(),
                    user: order.user,
                    subtotal,
                    amount,
                    currency: total.currency().iso_alpha_code,
                    address: &order.address,
                    status: OrderStatus::Pending,
                    payment_provider: PAYMENT_PROVIDER,
                    payment_order_id: &payment_order_id,
                    coupon: total.coupon(),
                },
            )
            .await?;

        self.orders
            .create_order_items(&mut tx, record.uuid, &items)
            .await?;

        tx.commit().await?;

        record.items = items;

        let span = Span::current();

        span.record("order_uuid", tracing::field::display(record.uuid));
        span.record("coupon_applied", record.coupon.is_some());

        info!(
            order_uuid = %record.uuid,
            amount = record.amount,
            currency = %record.currency,
            "created order"
        );

        Ok(record)
    }

    #[tracing::instrument(
        name = "orders.service.verify_payment",
        skip(self, confirmation),
        fields(
            order_uuid = %confirmation.order,
            has_signature = confirmation.signature.is_some()
        ),
        err
    )]
    async fn verify_payment(
        &self,
        confirmation: PaymentConfirmation,
    ) -> Result<OrderRecord, OrdersServiceError> {
        if confirmation.payment_id.trim().is_empty() {
            return Err(OrdersServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin().await?;

        let order = self
            .orders
            .mark_order_paid(&mut tx, confirmation.order, confirmation.payment_id.trim())
            .await?;

        tx.commit().await?;

        info!(order_uuid = %order.uuid, "marked order paid");

        Ok(order)
    }

    async fn list_orders(
        &self,
        user: Option<UserUuid>,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.orders.list_orders(&mut tx, user).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self.orders.get_order(&mut tx, order).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn track_order(
        &self,
        order: OrderUuid,
        point_in_time: Timestamp,
    ) -> Result<OrderTracking, OrdersServiceError> {
        let order = self.get_order(order).await?;

        let estimated_delivery = point_in_time
            .to_zoned(TimeZone::UTC)
            .date()
            .checked_add(DELIVERY_ESTIMATE_DAYS.days())
            .map_err(|_| OrdersServiceError::InvalidData)?;

        Ok(OrderTracking {
            status: order.status,
            estimated_delivery,
        })
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Price the items, apply at most one coupon and store a pending order.
    ///
    /// Nothing is stored when any requested product does not exist.
    async fn create_order(
        &self,
        order: NewOrder,
        point_in_time: Timestamp,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Mark an order paid and record the provider's payment id.
    async fn verify_payment(
        &self,
        confirmation: PaymentConfirmation,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Retrieves orders newest first, optionally only one user's.
    async fn list_orders(
        &self,
        user: Option<UserUuid>,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Retrieve a single order.
    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError>;

    /// Order status with a delivery estimate counted from `point_in_time`.
    async fn track_order(
        &self,
        order: OrderUuid,
        point_in_time: Timestamp,
    ) -> Result<OrderTracking, OrdersServiceError>;
}
