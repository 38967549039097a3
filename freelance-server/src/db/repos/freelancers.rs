//! Freelancer repository
//!
//! Owns the `freelancer` table and, through [`QualificationRelationRepo`],
//! the freelancer side of `freelancer_qualification`:
//! - save: insert + link rows in one transaction
//! - update: scalar update + full replace of link rows in one transaction

use async_trait::async_trait;
use sqlx::PgConnection;

use super::{FreelancerRepository, Repository};
use crate::db::mappers::{map_all, map_freelancer};
use crate::db::relations::QualificationRelationRepo;
use crate::db::tx::finish;
use crate::db::{Database, DbError};
use crate::models::Freelancer;

const RESOURCE: &str = "freelancer";

/// Freelancer repository
#[derive(Debug, Clone)]
pub struct FreelancerRepo {
    db: Database,
    qualifications: QualificationRelationRepo,
}

impl FreelancerRepo {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            qualifications: QualificationRelationRepo,
        }
    }

    async fn load(&self, conn: &mut PgConnection, id: i64) -> Result<Option<Freelancer>, DbError> {
        let row = sqlx::query(
            r#"
            SELECT
                fr.id AS id,
                fr.freelancerName AS freelancer_name,
                fr.freelancerSecondName AS freelancer_second_name,
                fr.freelancerEmail AS freelancer_email
            FROM freelancer fr
            WHERE fr.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut freelancer = map_freelancer(&row)?;
        freelancer.qualifications = self
            .qualifications
            .find_all_by_relation_id(&mut *conn, id)
            .await?;

        Ok(Some(freelancer))
    }

    async fn insert(&self, conn: &mut PgConnection, entity: &Freelancer) -> Result<i64, DbError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO freelancer (freelancerName, freelancerSecondName, freelancerEmail)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&entity.name)
        .bind(&entity.second_name)
        .bind(&entity.email)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| DbError::conflict_on_unique(RESOURCE, e))?;

        self.qualifications
            .insert_for_freelancer(&mut *conn, id, &entity.qualification_ids())
            .await?;

        Ok(id)
    }

    async fn rewrite(
        &self,
        conn: &mut PgConnection,
        id: i64,
        entity: &Freelancer,
    ) -> Result<(), DbError> {
        let updated = sqlx::query(
            r#"
            UPDATE freelancer
            SET freelancerName = $1, freelancerSecondName = $2, freelancerEmail = $3
            WHERE id = $4
            "#,
        )
        .bind(&entity.name)
        .bind(&entity.second_name)
        .bind(&entity.email)
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|e| DbError::conflict_on_unique(RESOURCE, e))?
        .rows_affected();

        // Nothing to relink for a row that does not exist
        if updated == 0 {
            tracing::debug!(id, "freelancer update matched no row");
            return Ok(());
        }

        self.qualifications
            .replace_for_freelancer(&mut *conn, id, &entity.qualification_ids())
            .await
    }
}

#[async_trait]
impl Repository<Freelancer> for FreelancerRepo {
    async fn save(&self, mut entity: Freelancer) -> Result<Freelancer, DbError> {
        let mut tx = self.db.begin().await?;
        let outcome = self.insert(&mut *tx, &entity).await;
        let id = finish(tx, outcome).await?;

        tracing::debug!(id, "freelancer saved");
        entity.id = Some(id);
        Ok(entity)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Freelancer>, DbError> {
        let mut tx = self.db.begin().await?;
        let outcome = self.load(&mut *tx, id).await;
        finish(tx, outcome).await
    }

    async fn find_all(&self) -> Result<Vec<Freelancer>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT
                fr.id AS id,
                fr.freelancerName AS freelancer_name,
                fr.freelancerSecondName AS freelancer_second_name,
                fr.freelancerEmail AS freelancer_email
            FROM freelancer fr
            ORDER BY fr.id
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(map_all(&rows, map_freelancer)?)
    }

    async fn update(&self, entity: &Freelancer) -> Result<(), DbError> {
        let id = entity.id.ok_or(DbError::MissingId { resource: RESOURCE })?;

        let mut tx = self.db.begin().await?;
        let outcome = self.rewrite(&mut *tx, id, entity).await;
        finish(tx, outcome).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM freelancer WHERE id = $1")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() != 0)
    }
}

#[async_trait]
impl FreelancerRepository for FreelancerRepo {
    async fn exists_by_email(&self, email: &str) -> Result<bool, DbError> {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM freelancer WHERE freelancerEmail = $1)",
        )
        .bind(email)
        .fetch_one(self.db.pool())
        .await?;

        Ok(exists.0)
    }
}
