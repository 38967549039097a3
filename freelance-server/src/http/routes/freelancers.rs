//! Freelancer endpoints

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::{IdQuery, JsonBody};
use crate::service::FreelancerDto;
use crate::state::AppState;

/// GET /freelancers?id=<n> - one freelancer with qualifications
/// GET /freelancers - all freelancers, shallow
async fn get_freelancers(
    State(state): State<AppState>,
    IdQuery(id): IdQuery,
) -> Result<Response, ApiError> {
    match id {
        Some(id) => {
            let freelancer = state
                .freelancers()
                .find_by_id(id)
                .await?
                .ok_or(ApiError::NotFound)?;
            Ok(Json(freelancer).into_response())
        }
        None => {
            let freelancers = state.freelancers().find_all().await?;
            if freelancers.is_empty() {
                return Err(ApiError::NotFound);
            }
            Ok(Json(freelancers).into_response())
        }
    }
}

/// POST /freelancers - register a freelancer (unique email)
async fn create_freelancer(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<FreelancerDto>,
) -> Result<(StatusCode, Json<FreelancerDto>), ApiError> {
    let saved = state.freelancers().save(dto).await?;
    if saved.id.is_none() {
        return Err(ApiError::bad_request(format!(
            "freelancer with email '{}' already exists",
            saved.freelancer_email
        )));
    }

    Ok((StatusCode::CREATED, Json(saved)))
}

/// PUT /freelancers - overwrite fields and qualification set
async fn update_freelancer(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<FreelancerDto>,
) -> Result<StatusCode, ApiError> {
    if state.freelancers().update(dto).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::bad_request(
            "freelancer id is required and the email must not belong to another freelancer",
        ))
    }
}

/// DELETE /freelancers?id=<n>
async fn delete_freelancer(
    State(state): State<AppState>,
    IdQuery(id): IdQuery,
) -> Result<StatusCode, ApiError> {
    let id = id.ok_or_else(|| ApiError::bad_request("id parameter is required"))?;

    if state.freelancers().delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::bad_request(format!("freelancer {id} not found")))
    }
}

/// Freelancer routes
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/freelancers",
        get(get_freelancers)
            .post(create_freelancer)
            .put(update_freelancer)
            .delete(delete_freelancer),
    )
}
