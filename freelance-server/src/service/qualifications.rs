//! Qualification service

use std::sync::Arc;

use super::dto::{QualificationDto, QualificationSimpleDto};
use super::mapper::{qualification_to_dto, qualification_to_entity, qualification_to_simple_dto};
use crate::db::{DbError, Repository};
use crate::models::Qualification;

#[derive(Clone)]
pub struct QualificationService {
    repo: Arc<dyn Repository<Qualification>>,
}

impl QualificationService {
    pub fn new(repo: Arc<dyn Repository<Qualification>>) -> Self {
        Self { repo }
    }

    pub async fn save(&self, dto: QualificationDto) -> Result<QualificationDto, DbError> {
        let mut entity = qualification_to_entity(dto);
        entity.id = None;

        let saved = self.repo.save(entity).await?;
        Ok(qualification_to_dto(saved))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<QualificationDto>, DbError> {
        Ok(self.repo.find_by_id(id).await?.map(qualification_to_dto))
    }

    pub async fn find_all(&self) -> Result<Vec<QualificationSimpleDto>, DbError> {
        let qualifications = self.repo.find_all().await?;
        Ok(qualifications
            .into_iter()
            .map(qualification_to_simple_dto)
            .collect())
    }

    pub async fn update(&self, dto: QualificationDto) -> Result<bool, DbError> {
        if dto.id.is_none() {
            return Ok(false);
        }

        self.repo.update(&qualification_to_entity(dto)).await?;
        Ok(true)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, DbError> {
        self.repo.delete_by_id(id).await
    }
}
