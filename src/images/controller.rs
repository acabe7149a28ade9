use axum::{
    body::Bytes,
    extract::{Path, State},
    response::Json,
};
use crate::core::controller::{AppState, ServerError};
use crate::images::domain::model::ImageEntity;

pub async fn add_image(
    State(state): State<AppState>,
    body: Bytes) -> Result<Json<ImageEntity>, ServerError> {
    let res = state.images.save_image(&ImageEntity::new(None, body.to_vec())).await?;
    Ok(Json(res))
}

pub async fn find_image_by_id(
    State(state): State<AppState>,
    Path(image_id): Path<i64>) -> Result<Json<ImageEntity>, ServerError> {
    let res = state.images.find_image_by_id(image_id).await?;
    Ok(Json(res))
}
