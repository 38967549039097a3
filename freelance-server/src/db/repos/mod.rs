//! Primary repositories
//!
//! One repository per entity. Each owns the entity's CRUD statements and,
//! for single-entity fetches and multi-table writes, opens a transaction and
//! threads its connection through the relation repositories.
//!
//! - `find_by_id` resolves relations; `find_all` returns shallow rows
//! - multi-statement operations commit together or roll back together
//! - `delete_by_id` is a single statement; the schema cascades link rows

use async_trait::async_trait;

use super::DbError;
use crate::models::Freelancer;

pub mod freelancers;
pub mod orders;
pub mod qualifications;

pub use freelancers::FreelancerRepo;
pub use orders::OrderRepo;
pub use qualifications::QualificationRepo;

/// CRUD contract shared by every primary repository.
#[async_trait]
pub trait Repository<E>: Send + Sync
where
    E: Send + Sync + 'static,
{
    /// Insert the entity and return it with its store-assigned id.
    async fn save(&self, entity: E) -> Result<E, DbError>;

    /// Load one entity with its relations, or `None` if no row matches.
    async fn find_by_id(&self, id: i64) -> Result<Option<E>, DbError>;

    /// Load every row without relations.
    async fn find_all(&self) -> Result<Vec<E>, DbError>;

    /// Overwrite the stored row identified by the entity's id.
    async fn update(&self, entity: &E) -> Result<(), DbError>;

    /// Delete by id, reporting whether a row was removed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, DbError>;
}

/// Freelancer storage, with the lookup backing email uniqueness.
#[async_trait]
pub trait FreelancerRepository: Repository<Freelancer> {
    async fn exists_by_email(&self, email: &str) -> Result<bool, DbError>;
}
