use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use common::types::Message;
use models::puppy;
use service::puppy::domain::{CreatePuppy, PuppyChanges};

use crate::{errors::ApiError, metrics, state::AppState};

#[utoipa::path(
    get, path = "/puppies", tag = "puppies",
    responses(
        (status = 200, description = "All puppies", body = [crate::openapi::PuppyDoc]),
        (status = 500, description = "Store error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<puppy::Model>>, ApiError> {
    let result = state.puppies.list().await;
    metrics::observe("list", &result);
    Ok(Json(result?))
}

#[utoipa::path(
    get, path = "/puppies/{id}", tag = "puppies",
    params(("id" = i32, Path, description = "Puppy ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::PuppyDoc),
        (status = 400, description = "Malformed id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<puppy::Model>, ApiError> {
    let Path(id) = id.map_err(|e| metrics::rejected("get", e))?;
    let result = state.puppies.get(id).await;
    metrics::observe("get", &result);
    Ok(Json(result?))
}

#[utoipa::path(
    post, path = "/puppies", tag = "puppies",
    request_body = crate::openapi::CreatePuppyDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::PuppyDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    input: Result<Json<CreatePuppy>, JsonRejection>,
) -> Result<(StatusCode, Json<puppy::Model>), ApiError> {
    let Json(input) = input.map_err(|e| metrics::rejected("create", e))?;
    let result = state.puppies.create(input).await;
    metrics::observe("create", &result);
    Ok((StatusCode::CREATED, Json(result?)))
}

#[utoipa::path(
    put, path = "/puppies/{id}", tag = "puppies",
    params(("id" = i32, Path, description = "Puppy ID")),
    request_body = crate::openapi::UpdatePuppyDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::MessageDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    input: Result<Json<PuppyChanges>, JsonRejection>,
) -> Result<Json<Message>, ApiError> {
    let Path(id) = id.map_err(|e| metrics::rejected("update", e))?;
    let Json(changes) = input.map_err(|e| metrics::rejected("update", e))?;
    let result = state.puppies.update(id, changes).await;
    metrics::observe("update", &result);
    result?;
    Ok(Json(Message::new("Puppy updated")))
}

#[utoipa::path(
    delete, path = "/puppies/{id}", tag = "puppies",
    params(("id" = i32, Path, description = "Puppy ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 400, description = "Malformed id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Message>, ApiError> {
    let Path(id) = id.map_err(|e| metrics::rejected("delete", e))?;
    let result = state.puppies.delete(id).await;
    metrics::observe("delete", &result);
    result?;
    Ok(Json(Message::new("Puppy deleted")))
}
