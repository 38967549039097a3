//! Order endpoints

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::{IdQuery, JsonBody};
use crate::service::OrderDto;
use crate::state::AppState;

/// GET /orders?id=<n> - one order with its qualification
/// GET /orders - all orders, shallow
async fn get_orders(
    State(state): State<AppState>,
    IdQuery(id): IdQuery,
) -> Result<Response, ApiError> {
    match id {
        Some(id) => {
            let order = state
                .orders()
                .find_by_id(id)
                .await?
                .ok_or(ApiError::NotFound)?;
            Ok(Json(order).into_response())
        }
        None => {
            let orders = state.orders().find_all().await?;
            if orders.is_empty() {
                return Err(ApiError::NotFound);
            }
            Ok(Json(orders).into_response())
        }
    }
}

/// POST /orders - create an order for a qualification
async fn create_order(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<OrderDto>,
) -> Result<(StatusCode, Json<OrderDto>), ApiError> {
    let saved = state.orders().save(dto).await?;
    if saved.id.is_none() {
        return Err(ApiError::bad_request("order requires a qualification id"));
    }

    Ok((StatusCode::CREATED, Json(saved)))
}

/// PUT /orders
async fn update_order(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<OrderDto>,
) -> Result<StatusCode, ApiError> {
    if state.orders().update(dto).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::bad_request("order id and qualification id are required"))
    }
}

/// DELETE /orders?id=<n>
async fn delete_order(
    State(state): State<AppState>,
    IdQuery(id): IdQuery,
) -> Result<StatusCode, ApiError> {
    let id = id.ok_or_else(|| ApiError::bad_request("id parameter is required"))?;

    if state.orders().delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::bad_request(format!("order {id} not found")))
    }
}

/// Order routes
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/orders",
        get(get_orders)
            .post(create_order)
            .put(update_order)
            .delete(delete_order),
    )
}
