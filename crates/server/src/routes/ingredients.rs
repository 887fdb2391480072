use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use service::pagination::Page;
use tracing::info;

use models::ingredient::{IngredientCreate, IngredientRead, IngredientUpdate};

use crate::errors::ApiError;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::state::ServerState;

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Number of records to skip
    pub offset: Option<u64>,
    /// Maximum number of records to return; values above 100 are clamped
    pub limit: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct DeleteAck {
    pub ok: bool,
}

#[utoipa::path(
    post, path = "/ingredients/", tag = "ingredients",
    request_body = crate::openapi::IngredientCreateDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::IngredientReadDoc),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    AppJson(input): AppJson<IngredientCreate>,
) -> Result<Json<IngredientRead>, ApiError> {
    let created = state.ingredients.create(input).await?;
    Ok(Json(created.into()))
}

#[utoipa::path(
    get, path = "/ingredients/", tag = "ingredients",
    params(ListQuery),
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::IngredientReadDoc]),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    AppQuery(q): AppQuery<ListQuery>,
) -> Result<Json<Vec<IngredientRead>>, ApiError> {
    let page = Page::new(q.offset, q.limit);
    let rows = state.ingredients.list(page).await?;
    info!(count = rows.len(), offset = page.offset, limit = page.limit, "list ingredients");
    Ok(Json(rows.into_iter().map(IngredientRead::from).collect()))
}

#[utoipa::path(
    get, path = "/ingredients/{id}", tag = "ingredients",
    params(("id" = i32, Path, description = "Ingredient ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::IngredientReadDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<IngredientRead>, ApiError> {
    let found = state.ingredients.get(id).await?;
    Ok(Json(found.into()))
}

#[utoipa::path(
    patch, path = "/ingredients/{id}", tag = "ingredients",
    params(("id" = i32, Path, description = "Ingredient ID")),
    request_body = crate::openapi::IngredientUpdateDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::IngredientReadDoc),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    AppPath(id): AppPath<i32>,
    AppJson(patch): AppJson<IngredientUpdate>,
) -> Result<Json<IngredientRead>, ApiError> {
    let updated = state.ingredients.update(id, patch).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete, path = "/ingredients/{id}", tag = "ingredients",
    params(("id" = i32, Path, description = "Ingredient ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::DeleteAckDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<DeleteAck>, ApiError> {
    state.ingredients.delete(id).await?;
    Ok(Json(DeleteAck { ok: true }))
}
