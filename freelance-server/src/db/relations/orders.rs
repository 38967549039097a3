//! Orders requiring a qualification.

use sqlx::PgConnection;

use crate::db::mappers::{map_all, map_order};
use crate::db::DbError;
use crate::models::Order;

#[derive(Debug, Clone, Copy, Default)]
pub struct OrderRelationRepo;

impl OrderRelationRepo {
    /// Shallow orders pointing at the qualification.
    pub async fn find_all_by_relation_id(
        &self,
        conn: &mut PgConnection,
        qualification_id: i64,
    ) -> Result<Vec<Order>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT
                o.id AS id,
                o.orderTitle AS order_title,
                o.orderDescription AS order_description,
                o.orderPrice AS order_price,
                o.orderTerm AS order_term,
                o.qualificationId AS qualification_id
            FROM qualif_order o
            WHERE o.qualificationId = $1
            ORDER BY o.id
            "#,
        )
        .bind(qualification_id)
        .fetch_all(&mut *conn)
        .await?;

        Ok(map_all(&rows, map_order)?)
    }
}
