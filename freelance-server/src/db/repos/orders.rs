//! Order repository
//!
//! Orders own their single qualification reference as a column, so writes
//! are single auto-committed statements. Only `find_by_id` spans a
//! transaction, to resolve the qualification on the same connection.

use async_trait::async_trait;
use sqlx::PgConnection;

use super::Repository;
use crate::db::mappers::{map_all, map_order};
use crate::db::relations::QualificationRelationRepo;
use crate::db::tx::finish;
use crate::db::{Database, DbError};
use crate::models::Order;

const RESOURCE: &str = "order";

/// Order repository
#[derive(Debug, Clone)]
pub struct OrderRepo {
    db: Database,
    qualifications: QualificationRelationRepo,
}

impl OrderRepo {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            qualifications: QualificationRelationRepo,
        }
    }

    async fn load(&self, conn: &mut PgConnection, id: i64) -> Result<Option<Order>, DbError> {
        let row = sqlx::query(
            r#"
            SELECT
                o.id AS id,
                o.orderTitle AS order_title,
                o.orderDescription AS order_description,
                o.orderPrice AS order_price,
                o.orderTerm AS order_term,
                o.qualificationId AS qualification_id
            FROM qualif_order o
            WHERE o.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut order = map_order(&row)?;
        order.qualification = self
            .qualifications
            .find_by_relation_id(&mut *conn, order.qualification_id)
            .await?;

        Ok(Some(order))
    }
}

#[async_trait]
impl Repository<Order> for OrderRepo {
    async fn save(&self, mut entity: Order) -> Result<Order, DbError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO qualif_order (orderTitle, orderDescription, orderPrice, orderTerm, qualificationId)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&entity.title)
        .bind(&entity.description)
        .bind(entity.price)
        .bind(entity.term)
        .bind(entity.qualification_id)
        .fetch_one(self.db.pool())
        .await?;

        tracing::debug!(id, qualification_id = entity.qualification_id, "order saved");
        entity.id = Some(id);
        Ok(entity)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, DbError> {
        let mut tx = self.db.begin().await?;
        let outcome = self.load(&mut *tx, id).await;
        finish(tx, outcome).await
    }

    async fn find_all(&self) -> Result<Vec<Order>, DbError> {
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
            ORDER BY o.id
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(map_all(&rows, map_order)?)
    }

    async fn update(&self, entity: &Order) -> Result<(), DbError> {
        let id = entity.id.ok_or(DbError::MissingId { resource: RESOURCE })?;

        let result = sqlx::query(
            r#"
            UPDATE qualif_order
            SET orderTitle = $1, orderDescription = $2, orderPrice = $3,
                orderTerm = $4, qualificationId = $5
            WHERE id = $6
            "#,
        )
        .bind(&entity.title)
        .bind(&entity.description)
        .bind(entity.price)
        .bind(entity.term)
        .bind(entity.qualification_id)
        .bind(id)
        .execute(self.db.pool())
        .await?;

        tracing::debug!(id, rows = result.rows_affected(), "order updated");
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM qualif_order WHERE id = $1")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() != 0)
    }
}
