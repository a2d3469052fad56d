//! Column conversions shared by the repositories.
//!
//! Amounts are stored as `BIGINT` minor units and counts as `INTEGER`; both are unsigned in
//! the domain.

use sqlx::{Row, postgres::PgRow};

pub(crate) fn try_get_amount(row: &PgRow, col: &str) -> Result<u64, sqlx::Error> {
    let amount_i64: i64 = row.try_get(col)?;

    u64::try_from(amount_i64).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

pub(crate) fn try_get_optional_amount(row: &PgRow, col: &str) -> Result<Option<u64>, sqlx::Error> {
    let amount_i64: Option<i64> = row.try_get(col)?;

    amount_i64
        .map(u64::try_from)
        .transpose()
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: col.to_string(),
            source: Box::new(e),
        })
}

pub(crate) fn try_get_count(row: &PgRow, col: &str) -> Result<u32, sqlx::Error> {
    let count_i32: i32 = row.try_get(col)?;

    u32::try_from(count_i32).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

pub(crate) fn encode_amount(amount: u64, col: &str) -> Result<i64, sqlx::Error> {
    i64::try_from(amount).map_err(|e| sqlx::Error::Encode(format!("{col}: {e}").into()))
}

pub(crate) fn encode_count(count: u32, col: &str) -> Result<i32, sqlx::Error> {
    i32::try_from(count).map_err(|e| sqlx::Error::Encode(format!("{col}: {e}").into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_amount_rejects_values_above_bigint() {
        assert!(encode_amount(u64::MAX, "price").is_err());
        assert!(matches!(encode_amount(499_900, "price"), Ok(499_900)));
    }

    #[test]
    fn encode_count_rejects_values_above_integer() {
        assert!(encode_count(u32::MAX, "stock").is_err());
        assert!(matches!(encode_count(50, "stock"), Ok(50)));
    }
}
