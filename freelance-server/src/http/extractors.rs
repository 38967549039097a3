//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::error::ApiError;

#[derive(Deserialize)]
struct IdParams {
    id: Option<String>,
}

/// Optional `?id=<n>` query parameter, parsed as `i64`.
///
/// A present but non-numeric (or empty) value is a 400.
pub struct IdQuery(pub Option<i64>);

impl<S> FromRequestParts<S> for IdQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<IdParams>::try_from_uri(&parts.uri)
            .map_err(|e| ApiError::bad_request(e.body_text()))?;

        let id = params.id.map(|raw| raw.parse::<i64>()).transpose()?;
        Ok(Self(id))
    }
}

/// JSON request body.
///
/// Unparsable JSON is a 400 and a failed body read is a 500. Unlike
/// `axum::Json`, no content-type is required and data errors are not
/// reported as 422.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::Internal {
                message: format!("failed to read request body: {}", e.body_text()),
            })?;

        Ok(Self(serde_json::from_slice(&bytes)?))
    }
}
