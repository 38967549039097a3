//! Schema migrations for the freelance exchange tables
//!
//! Idempotent; safe to run on every start.

use super::{Database, DbError};

/// Create all tables and indexes that do not exist yet.
pub async fn run(db: &Database) -> Result<(), DbError> {
    tracing::info!("Running schema migrations...");
    let pool = db.pool();

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS qualification (
            id BIGSERIAL PRIMARY KEY,
            qualificationName VARCHAR(255) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Email uniqueness backs up the service-level pre-check
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS freelancer (
            id BIGSERIAL PRIMARY KEY,
            freelancerName VARCHAR(255) NOT NULL,
            freelancerSecondName VARCHAR(255) NOT NULL DEFAULT '',
            freelancerEmail VARCHAR(255) NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS qualif_order (
            id BIGSERIAL PRIMARY KEY,
            orderTitle VARCHAR(255) NOT NULL,
            orderDescription TEXT NOT NULL DEFAULT '',
            orderPrice NUMERIC NOT NULL,
            orderTerm DATE NOT NULL,
            qualificationId BIGINT NOT NULL REFERENCES qualification(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS freelancer_qualification (
            freelancerId BIGINT NOT NULL REFERENCES freelancer(id) ON DELETE CASCADE,
            qualificationId BIGINT NOT NULL REFERENCES qualification(id) ON DELETE CASCADE,
            PRIMARY KEY (freelancerId, qualificationId)
        )
        "#,
    )
    .execute(pool)
    .await?;

    create_indexes(db).await?;

    tracing::info!("Schema migrations complete");
    Ok(())
}

async fn create_indexes(db: &Database) -> Result<(), DbError> {
    let pool = db.pool();

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_qualif_order_qualification ON qualif_order(qualificationId)",
    )
    .execute(pool)
    .await?;

    // The composite primary key already covers lookups by freelancer
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_freelancer_qualification_qualification \
         ON freelancer_qualification(qualificationId)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
