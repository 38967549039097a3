//! Freelancers linked to a qualification.

use sqlx::PgConnection;

use crate::db::mappers::{map_all, map_freelancer};
use crate::db::DbError;
use crate::models::Freelancer;

#[derive(Debug, Clone, Copy, Default)]
pub struct FreelancerRelationRepo;

impl FreelancerRelationRepo {
    /// Shallow freelancers holding the qualification. No links, no rows.
    pub async fn find_all_by_relation_id(
        &self,
        conn: &mut PgConnection,
        qualification_id: i64,
    ) -> Result<Vec<Freelancer>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT
                fr.id AS id,
                fr.freelancerName AS freelancer_name,
                fr.freelancerSecondName AS freelancer_second_name,
                fr.freelancerEmail AS freelancer_email
            FROM freelancer_qualification fq
            JOIN freelancer fr ON fr.id = fq.freelancerId
            WHERE fq.qualificationId = $1
            ORDER BY fr.id
            "#,
        )
        .bind(qualification_id)
        .fetch_all(&mut *conn)
        .await?;

        Ok(map_all(&rows, map_freelancer)?)
    }
}
