//! Order service

use std::sync::Arc;

use super::dto::{OrderDto, OrderSimpleDto};
use super::mapper::{order_to_dto, order_to_entity, order_to_simple_dto};
use crate::db::{DbError, Repository};
use crate::models::Order;

#[derive(Clone)]
pub struct OrderService {
    repo: Arc<dyn Repository<Order>>,
}

impl OrderService {
    pub fn new(repo: Arc<dyn Repository<Order>>) -> Self {
        Self { repo }
    }

    /// Persist a new order. Without a qualification id the input is
    /// returned unchanged, since every stored order needs one.
    pub async fn save(&self, dto: OrderDto) -> Result<OrderDto, DbError> {
        let Some(mut entity) = order_to_entity(dto.clone()) else {
            tracing::warn!(title = %dto.order_title, "order without qualification rejected");
            return Ok(dto);
        };
        entity.id = None;

        let saved = self.repo.save(entity).await?;
        Ok(order_to_dto(saved))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<OrderDto>, DbError> {
        Ok(self.repo.find_by_id(id).await?.map(order_to_dto))
    }

    pub async fn find_all(&self) -> Result<Vec<OrderSimpleDto>, DbError> {
        let orders = self.repo.find_all().await?;
        Ok(orders.into_iter().map(order_to_simple_dto).collect())
    }

    /// Returns `false` without touching the store when the DTO has no id or
    /// no qualification id.
    pub async fn update(&self, dto: OrderDto) -> Result<bool, DbError> {
        if dto.id.is_none() {
            return Ok(false);
        }
        let Some(entity) = order_to_entity(dto) else {
            return Ok(false);
        };

        self.repo.update(&entity).await?;
        Ok(true)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, DbError> {
        self.repo.delete_by_id(id).await
    }
}
