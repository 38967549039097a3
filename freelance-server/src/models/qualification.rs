//! Qualification entity

use super::{Freelancer, Order};

/// A qualification row.
///
/// `orders` (one-to-many) and `freelancers` (many-to-many) are only
/// populated by a fetch by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Qualification {
    pub id: Option<i64>,
    pub name: String,
    pub orders: Vec<Order>,
    pub freelancers: Vec<Freelancer>,
}

impl Qualification {
    /// A reference to a stored qualification, known only by id.
    pub fn with_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }
}
