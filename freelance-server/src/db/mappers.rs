//! Entity mappers: one result row in, one entity out.
//!
//! Every query aliases its columns to snake_case (`freelancer_name`,
//! `order_price`, `qualification_id`, ...), so the mappers stay independent
//! of how the tables spell them.

use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::models::{Freelancer, Order, Qualification};

pub fn map_freelancer(row: &PgRow) -> Result<Freelancer, sqlx::Error> {
    Ok(Freelancer {
        id: Some(row.try_get("id")?),
        name: row.try_get("freelancer_name")?,
        second_name: row.try_get("freelancer_second_name")?,
        email: row.try_get("freelancer_email")?,
        qualifications: Vec::new(),
    })
}

pub fn map_order(row: &PgRow) -> Result<Order, sqlx::Error> {
    Ok(Order {
        id: Some(row.try_get("id")?),
        title: row.try_get("order_title")?,
        description: row.try_get("order_description")?,
        price: row.try_get("order_price")?,
        term: row.try_get("order_term")?,
        qualification_id: row.try_get("qualification_id")?,
        qualification: None,
    })
}

pub fn map_qualification(row: &PgRow) -> Result<Qualification, sqlx::Error> {
    Ok(Qualification {
        id: Some(row.try_get("id")?),
        name: row.try_get("qualification_name")?,
        ..Default::default()
    })
}

/// Map every row, failing on the first row that does not fit.
pub fn map_all<T>(
    rows: &[PgRow],
    map: impl Fn(&PgRow) -> Result<T, sqlx::Error>,
) -> Result<Vec<T>, sqlx::Error> {
    rows.iter().map(map).collect()
}
