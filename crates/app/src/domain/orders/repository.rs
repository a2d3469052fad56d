//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rustc_hash::FxHashMap;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, types::Json};
use uuid::Uuid;

use crate::{
    columns::{encode_amount, encode_count, try_get_amount, try_get_count},
    domain::{
        accounts::records::UserUuid,
        orders::records::{Address, OrderItemRecord, OrderRecord, OrderStatus, OrderUuid},
        products::records::ProductUuid,
    },
};

const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const CREATE_ORDER_ITEM_SQL: &str = include_str!("sql/create_order_item.sql");
const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");
const LIST_ORDERS_SQL: &str = include_str!("sql/list_orders.sql");
const GET_ORDER_ITEMS_SQL: &str = include_str!("sql/get_order_items.sql");
const MARK_ORDER_PAID_SQL: &str = include_str!("sql/mark_order_paid.sql");

/// Columns of an order row to insert.
#[derive(Debug)]
pub(crate) struct OrderRow<'a> {
    pub uuid: OrderUuid,
    pub user: Option<UserUuid>,
    pub subtotal: u64,
    pub amount: u64,
    pub currency: &'a str,
    pub address: &'a Address,
    pub status: OrderStatus,
    pub payment_provider: &'a str,
    pub payment_order_id: &'a str,
    pub coupon: Option<&'a str>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderRow<'_>,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(CREATE_ORDER_SQL)
            .bind(order.uuid.into_uuid())
            .bind(order.user.map(UserUuid::into_uuid))
            .bind(encode_amount(order.subtotal, "subtotal")?)
            .bind(encode_amount(order.amount, "amount")?)
            .bind(order.currency)
            .bind(Json(order.address))
            .bind(order.status.as_str())
            .bind(order.payment_provider)
            .bind(order.payment_order_id)
            .bind(order.coupon)
            .fetch_one(&mut **tx)
            .await
    }

    /// Store order lines, keeping their order.
    pub(crate) async fn create_order_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        items: &[OrderItemRecord],
    ) -> Result<(), sqlx::Error> {
        for (position, item) in items.iter().enumerate() {
            let position = i32::try_from(position)
                .map_err(|e| sqlx::Error::Encode(format!("position: {e}").into()))?;

            query(CREATE_ORDER_ITEM_SQL)
                .bind(order.into_uuid())
                .bind(position)
                .bind(item.product.into_uuid())
                .bind(&item.title)
                .bind(encode_amount(item.unit_price, "unit_price")?)
                .bind(encode_count(item.quantity, "quantity")?)
                .bind(item.image.as_deref())
                .execute(&mut **tx)
                .await?;
        }

        Ok(())
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<OrderRecord, sqlx::Error> {
        let mut record = query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        self.attach_items(tx, std::slice::from_mut(&mut record))
            .await?;

        Ok(record)
    }

    /// Orders newest first, optionally only those placed by `user`.
    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: Option<UserUuid>,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        let mut orders = query_as::<Postgres, OrderRecord>(LIST_ORDERS_SQL)
            .bind(user.map(UserUuid::into_uuid))
            .fetch_all(&mut **tx)
            .await?;

        self.attach_items(tx, &mut orders).await?;

        Ok(orders)
    }

    pub(crate) async fn mark_order_paid(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        payment_id: &str,
    ) -> Result<OrderRecord, sqlx::Error> {
        let mut record = query_as::<Postgres, OrderRecord>(MARK_ORDER_PAID_SQL)
            .bind(order.into_uuid())
            .bind(payment_id)
            .fetch_one(&mut **tx)
            .await?;

        self.attach_items(tx, std::slice::from_mut(&mut record))
            .await?;

        Ok(record)
    }

    async fn attach_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        orders: &mut [OrderRecord],
    ) -> Result<(), sqlx::Error> {
        if orders.is_empty() {
            return Ok(());
        }

        let uuids: Vec<Uuid> = orders.iter().map(|order| order.uuid.into_uuid()).collect();

        let rows = query(GET_ORDER_ITEMS_SQL)
            .bind(uuids)
            .fetch_all(&mut **tx)
            .await?;

        let mut items: FxHashMap<Uuid, Vec<OrderItemRecord>> = FxHashMap::default();

        for row in &rows {
            let order: Uuid = row.try_get("order_uuid")?;

            items
                .entry(order)
                .or_default()
                .push(OrderItemRecord::from_row(row)?);
        }

        for order in orders {
            order.items = items.remove(&order.uuid.into_uuid()).unwrap_or_default();
        }

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            user: row
                .try_get::<Option<Uuid>, _>("user_uuid")?
                .map(UserUuid::from_uuid),
            items: Vec::new(),
            subtotal: try_get_amount(row, "subtotal")?,
            amount: try_get_amount(row, "amount")?,
            currency: row.try_get("currency")?,
            address: row.try_get::<Json<Address>, _>("address")?.0,
            status: status.parse().map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?,
            payment_provider: row.try_get("payment_provider")?,
            payment_order_id: row.try_get("payment_order_id")?,
            payment_id: row.try_get("payment_id")?,
            coupon: row.try_get("coupon_code")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for OrderItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            product: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            title: row.try_get("title")?,
            unit_price: try_get_amount(row, "unit_price")?,
            quantity: try_get_count(row, "quantity")?,
            image: row.try_get("image")?,
        })
    }
}
