//! Qualification endpoints

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::{IdQuery, JsonBody};
use crate::service::QualificationDto;
use crate::state::AppState;

/// GET /qualifications?id=<n> - one qualification with orders and freelancers
/// GET /qualifications - all qualifications, shallow
async fn get_qualifications(
    State(state): State<AppState>,
    IdQuery(id): IdQuery,
) -> Result<Response, ApiError> {
    match id {
        Some(id) => {
            let qualification = state
                .qualifications()
                .find_by_id(id)
                .await?
                .ok_or(ApiError::NotFound)?;
            Ok(Json(qualification).into_response())
        }
        None => {
            let qualifications = state.qualifications().find_all().await?;
            if qualifications.is_empty() {
                return Err(ApiError::NotFound);
            }
            Ok(Json(qualifications).into_response())
        }
    }
}

/// POST /qualifications
async fn create_qualification(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<QualificationDto>,
) -> Result<(StatusCode, Json<QualificationDto>), ApiError> {
    let saved = state.qualifications().save(dto).await?;
    if saved.id.is_none() {
        return Err(ApiError::bad_request("qualification was not created"));
    }

    Ok((StatusCode::CREATED, Json(saved)))
}

/// PUT /qualifications
async fn update_qualification(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<QualificationDto>,
) -> Result<StatusCode, ApiError> {
    if state.qualifications().update(dto).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::bad_request("qualification id is required"))
    }
}

/// DELETE /qualifications?id=<n>
async fn delete_qualification(
    State(state): State<AppState>,
    IdQuery(id): IdQuery,
) -> Result<StatusCode, ApiError> {
    let id = id.ok_or_else(|| ApiError::bad_request("id parameter is required"))?;

    if state.qualifications().delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::bad_request(format!("qualification {id} not found")))
    }
}

/// Qualification routes
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/qualifications",
        get(get_qualifications)
            .post(create_qualification)
            .put(update_qualification)
            .delete(delete_qualification),
    )
}
