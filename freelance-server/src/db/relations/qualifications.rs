//! Qualifications related to an order or a freelancer, and the
//! freelancer/qualification join rows.

use sqlx::PgConnection;

use crate::db::mappers::{map_all, map_qualification};
use crate::db::DbError;
use crate::models::Qualification;

#[derive(Debug, Clone, Copy, Default)]
pub struct QualificationRelationRepo;

impl QualificationRelationRepo {
    /// The qualification an order points at (single-valued side).
    pub async fn find_by_relation_id(
        &self,
        conn: &mut PgConnection,
        qualification_id: i64,
    ) -> Result<Option<Qualification>, DbError> {
        let row = sqlx::query(
            r#"
            SELECT q.id AS id, q.qualificationName AS qualification_name
            FROM qualification q
            WHERE q.id = $1
            "#,
        )
        .bind(qualification_id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(row.as_ref().map(map_qualification).transpose()?)
    }

    /// All qualifications linked to a freelancer. No links, no rows.
    pub async fn find_all_by_relation_id(
        &self,
        conn: &mut PgConnection,
        freelancer_id: i64,
    ) -> Result<Vec<Qualification>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT q.id AS id, q.qualificationName AS qualification_name
            FROM freelancer_qualification fq
            JOIN qualification q ON q.id = fq.qualificationId
            WHERE fq.freelancerId = $1
            ORDER BY q.id
            "#,
        )
        .bind(freelancer_id)
        .fetch_all(&mut *conn)
        .await?;

        Ok(map_all(&rows, map_qualification)?)
    }

    /// Link a freelancer to each of `qualification_ids` in one statement.
    pub async fn insert_for_freelancer(
        &self,
        conn: &mut PgConnection,
        freelancer_id: i64,
        qualification_ids: &[i64],
    ) -> Result<u64, DbError> {
        if qualification_ids.is_empty() {
            return Ok(0);
        }

        let result = sqlx::query(
            r#"
            INSERT INTO freelancer_qualification (freelancerId, qualificationId)
            SELECT $1, UNNEST($2::BIGINT[])
            "#,
        )
        .bind(freelancer_id)
        .bind(qualification_ids)
        .execute(&mut *conn)
        .await?;

        Ok(result.rows_affected())
    }

    /// Remove every link of a freelancer.
    pub async fn delete_for_freelancer(
        &self,
        conn: &mut PgConnection,
        freelancer_id: i64,
    ) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM freelancer_qualification WHERE freelancerId = $1")
            .bind(freelancer_id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected())
    }

    /// Full replace: drop all existing links, then insert the given set.
    ///
    /// Not a diff; unchanged links are deleted and re-inserted.
    pub async fn replace_for_freelancer(
        &self,
        conn: &mut PgConnection,
        freelancer_id: i64,
        qualification_ids: &[i64],
    ) -> Result<(), DbError> {
        let removed = self.delete_for_freelancer(&mut *conn, freelancer_id).await?;
        let inserted = self
            .insert_for_freelancer(&mut *conn, freelancer_id, qualification_ids)
            .await?;

        tracing::debug!(freelancer_id, removed, inserted, "freelancer qualifications replaced");
        Ok(())
    }
}
