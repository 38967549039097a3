//! Order entity

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::Qualification;

/// An order row.
///
/// Every stored order points at exactly one qualification through
/// `qualification_id`. The resolved `qualification` is filled only by a
/// fetch by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub term: NaiveDate,
    pub qualification_id: i64,
    pub qualification: Option<Qualification>,
}
