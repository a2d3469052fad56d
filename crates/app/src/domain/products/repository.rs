//! Products Repository

use std::collections::BTreeMap;

use flames::STORE_CURRENCY;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{
    FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar,
    types::Json,
};
use uuid::Uuid;

use crate::{
    columns::{encode_amount, encode_count, try_get_amount, try_get_count, try_get_optional_amount},
    domain::products::{
        data::{NewProduct, ProductDetails, ProductFilter, ProductKey},
        records::{ProductImage, ProductRecord, ProductUuid},
    },
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const FIND_PRODUCTS_SQL: &str = include_str!("sql/find_products.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");
const COUNT_PRODUCTS_SQL: &str = include_str!("sql/count_products.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &ProductFilter,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        let min_price = filter
            .min_price
            .map(|price| encode_amount(price, "min_price"))
            .transpose()?;

        let max_price = filter
            .max_price
            .map(|price| encode_amount(price, "max_price"))
            .transpose()?;

        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .bind(filter.query.as_deref())
            .bind(filter.category.as_deref())
            .bind(filter.brand.as_deref())
            .bind(min_price)
            .bind(max_price)
            .bind(filter.featured)
            .bind(i64::from(filter.limit))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        key: &ProductKey,
    ) -> Result<ProductRecord, sqlx::Error> {
        let (uuid, slug) = match key {
            ProductKey::Uuid(uuid) => (Some(uuid.into_uuid()), None),
            ProductKey::Slug(slug) => (None, Some(slug.as_str())),
        };

        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(uuid)
            .bind(slug)
            .fetch_one(&mut **tx)
            .await
    }

    /// Live products among `products`. Unknown or deleted UUIDs are absent from the result.
    pub(crate) async fn find_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        products: &[ProductUuid],
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        let uuids: Vec<Uuid> = products.iter().map(|uuid| uuid.into_uuid()).collect();

        query_as::<Postgres, ProductRecord>(FIND_PRODUCTS_SQL)
            .bind(uuids)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &NewProduct,
    ) -> Result<ProductRecord, sqlx::Error> {
        let details = &product.details;

        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(&details.title)
            .bind(&details.slug)
            .bind(details.description.as_deref())
            .bind(encode_amount(details.price, "price")?)
            .bind(
                details
                    .sale_price
                    .map(|price| encode_amount(price, "sale_price"))
                    .transpose()?,
            )
            .bind(STORE_CURRENCY.iso_alpha_code)
            .bind(&details.category)
            .bind(details.brand.as_deref())
            .bind(details.rating)
            .bind(encode_count(details.rating_count, "rating_count")?)
            .bind(encode_count(details.stock, "stock")?)
            .bind(Json(&details.images))
            .bind(Json(&details.specs))
            .bind(details.featured)
            .bind(details.tags.as_slice())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        details: &ProductDetails,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(UPDATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(&details.title)
            .bind(&details.slug)
            .bind(details.description.as_deref())
            .bind(encode_amount(details.price, "price")?)
            .bind(
                details
                    .sale_price
                    .map(|price| encode_amount(price, "sale_price"))
                    .transpose()?,
            )
            .bind(&details.category)
            .bind(details.brand.as_deref())
            .bind(details.rating)
            .bind(encode_count(details.rating_count, "rating_count")?)
            .bind(encode_count(details.stock, "stock")?)
            .bind(Json(&details.images))
            .bind(Json(&details.specs))
            .bind(details.featured)
            .bind(details.tags.as_slice())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn count_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<i64, sqlx::Error> {
        query_scalar(COUNT_PRODUCTS_SQL).fetch_one(&mut **tx).await
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            title: row.try_get("title")?,
            slug: row.try_get("slug")?,
            description: row.try_get("description")?,
            price: try_get_amount(row, "price")?,
            sale_price: try_get_optional_amount(row, "sale_price")?,
            currency: row.try_get("currency")?,
            category: row.try_get("category")?,
            brand: row.try_get("brand")?,
            rating: row.try_get("rating")?,
            rating_count: try_get_count(row, "rating_count")?,
            stock: try_get_count(row, "stock")?,
            images: row.try_get::<Json<Vec<ProductImage>>, _>("images")?.0,
            specs: row
                .try_get::<Json<BTreeMap<String, String>>, _>("specs")?
                .0,
            featured: row.try_get("featured")?,
            tags: row.try_get("tags")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
