//! Freelancer service

use std::sync::Arc;

use super::dto::{FreelancerDto, FreelancerSimpleDto};
use super::mapper::{freelancer_to_dto, freelancer_to_entity, freelancer_to_simple_dto};
use crate::db::{DbError, FreelancerRepository, Repository};

#[derive(Clone)]
pub struct FreelancerService {
    repo: Arc<dyn FreelancerRepository>,
}

impl FreelancerService {
    pub fn new(repo: Arc<dyn FreelancerRepository>) -> Self {
        Self { repo }
    }

    /// Persist a new freelancer unless the email is already taken.
    ///
    /// A rejected save returns the input unchanged (still without id). The
    /// email check and the insert are separate statements; a concurrent
    /// insert in between is caught by the store's unique constraint and
    /// rejected the same way.
    pub async fn save(&self, dto: FreelancerDto) -> Result<FreelancerDto, DbError> {
        if self.repo.exists_by_email(&dto.freelancer_email).await? {
            tracing::warn!(email = %dto.freelancer_email, "freelancer email already registered");
            return Ok(dto);
        }

        let mut entity = freelancer_to_entity(dto.clone());
        entity.id = None;

        match self.repo.save(entity).await {
            Ok(saved) => Ok(freelancer_to_dto(saved)),
            Err(DbError::Conflict { detail, .. }) => {
                tracing::warn!(email = %dto.freelancer_email, %detail, "concurrent freelancer insert rejected");
                Ok(dto)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<FreelancerDto>, DbError> {
        Ok(self.repo.find_by_id(id).await?.map(freelancer_to_dto))
    }

    pub async fn find_all(&self) -> Result<Vec<FreelancerSimpleDto>, DbError> {
        let freelancers = self.repo.find_all().await?;
        Ok(freelancers.into_iter().map(freelancer_to_simple_dto).collect())
    }

    /// Returns `false` without touching the store when the DTO has no id,
    /// and when the new email belongs to another freelancer.
    pub async fn update(&self, dto: FreelancerDto) -> Result<bool, DbError> {
        if dto.id.is_none() {
            return Ok(false);
        }

        match self.repo.update(&freelancer_to_entity(dto)).await {
            Ok(()) => Ok(true),
            Err(DbError::Conflict { detail, .. }) => {
                tracing::warn!(%detail, "freelancer update rejected");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn delete(&self, id: i64) -> Result<bool, DbError> {
        self.repo.delete_by_id(id).await
    }
}
