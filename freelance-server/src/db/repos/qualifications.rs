//! Qualification repository
//!
//! A qualification is the inverse side of both relations: its orders and
//! freelancers are loaded in one transaction by `find_by_id`, but writes
//! only touch the `qualification` row itself.

use async_trait::async_trait;
use sqlx::PgConnection;

use super::Repository;
use crate::db::mappers::{map_all, map_qualification};
use crate::db::relations::{FreelancerRelationRepo, OrderRelationRepo};
use crate::db::tx::finish;
use crate::db::{Database, DbError};
use crate::models::Qualification;

const RESOURCE: &str = "qualification";

/// Qualification repository
#[derive(Debug, Clone)]
pub struct QualificationRepo {
    db: Database,
    orders: OrderRelationRepo,
    freelancers: FreelancerRelationRepo,
}

impl QualificationRepo {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            orders: OrderRelationRepo,
            freelancers: FreelancerRelationRepo,
        }
    }

    async fn load(
        &self,
        conn: &mut PgConnection,
        id: i64,
    ) -> Result<Option<Qualification>, DbError> {
        let row = sqlx::query(
            r#"
            SELECT q.id AS id, q.qualificationName AS qualification_name
            FROM qualification q
            WHERE q.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut qualification = map_qualification(&row)?;
        qualification.orders = self.orders.find_all_by_relation_id(&mut *conn, id).await?;
        qualification.freelancers = self
            .freelancers
            .find_all_by_relation_id(&mut *conn, id)
            .await?;

        Ok(Some(qualification))
    }
}

#[async_trait]
impl Repository<Qualification> for QualificationRepo {
    async fn save(&self, mut entity: Qualification) -> Result<Qualification, DbError> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO qualification (qualificationName) VALUES ($1) RETURNING id",
        )
        .bind(&entity.name)
        .fetch_one(self.db.pool())
        .await?;

        tracing::debug!(id, "qualification saved");
        entity.id = Some(id);
        Ok(entity)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Qualification>, DbError> {
        let mut tx = self.db.begin().await?;
        let outcome = self.load(&mut *tx, id).await;
        finish(tx, outcome).await
    }

    async fn find_all(&self) -> Result<Vec<Qualification>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT q.id AS id, q.qualificationName AS qualification_name
            FROM qualification q
            ORDER BY q.id
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(map_all(&rows, map_qualification)?)
    }

    async fn update(&self, entity: &Qualification) -> Result<(), DbError> {
        let id = entity.id.ok_or(DbError::MissingId { resource: RESOURCE })?;

        sqlx::query("UPDATE qualification SET qualificationName = $1 WHERE id = $2")
            .bind(&entity.name)
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM qualification WHERE id = $1")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() != 0)
    }
}
